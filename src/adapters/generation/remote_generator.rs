//! Remote document generator adapter.
//!
//! Implements the DocumentGenerator port by delegating to a chat-style
//! completion client. Builds the fixed academic-author system instruction
//! and a user instruction embedding the same table-of-contents skeleton the
//! template engine produces, then performs exactly one completion call.
//! Failures propagate to the caller; absorbing them is the fallback
//! wrapper's job, not this adapter's.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::catalog::ProjectDescriptor;
use crate::ports::{
    CompletionClient, CompletionRequest, DocumentGenerator, GenerationError, GeneratorInfo,
};

/// System instruction for the remote provider.
const SYSTEM_PROMPT: &str = "\
You are a senior academic writer specializing in Polytechnic and University final year projects.

You write long-form, formal, and well-structured academic documents that strictly follow \
standard project formats used in ND, HND, BSc, and MSc programs.

Your writing must be detailed, professional, and suitable for direct submission.";

/// Remote implementation of DocumentGenerator.
pub struct RemoteDocumentGenerator {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
    temperature: f32,
}

impl RemoteDocumentGenerator {
    /// Creates a remote generator with the given completion client and
    /// sampling parameters. `max_tokens` caps latency and cost per request.
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client,
            max_tokens,
            temperature,
        }
    }

    /// Builds the user instruction embedding project details and the full
    /// table of contents the output must follow.
    fn build_user_prompt(project: &ProjectDescriptor) -> String {
        format!(
            "Generate a complete academic project documentation using the following details:

Title: {title}
Course: {course}
Level: {level}
Institution: {institution}

Project Description:
{description}

Use the following Table of Contents STRICTLY and generate full content under each heading:

**TABLE OF CONTENTS**

**Title Page**
**Certification**
**Dedication**
**Acknowledgement**
**Abstract**
**Table of Contents**
**List of Tables**
**List of Figures**

---

### **CHAPTER ONE: INTRODUCTION**

1.1 Background of the Study
1.2 Statement of the Problem
1.3 Aim and Objectives of the Study
1.4 Research Questions
1.5 Research Hypotheses
1.6 Significance of the Study
1.7 Scope and Delimitation of the Study
1.8 Limitations of the Study
1.9 Definition of Terms

---

### **CHAPTER TWO: REVIEW OF RELATED LITERATURE**

2.1 Introduction
2.2 Conceptual Framework
2.3 Theoretical Framework
2.4 Empirical Review
2.5 Summary of Literature Review

---

### **CHAPTER THREE: RESEARCH METHODOLOGY**

3.1 Introduction
3.2 Research Design
3.3 Area of the Study
3.4 Population of the Study
3.5 Sample Size and Sampling Technique
3.6 Research Instruments
3.7 Validity of the Instrument
3.8 Reliability of the Instrument
3.9 Method of Data Collection
3.10 Method of Data Analysis
3.11 Ethical Considerations

---

### **CHAPTER FOUR: DATA PRESENTATION, ANALYSIS AND DISCUSSION**

4.1 Introduction
4.2 Data Presentation
4.3 Analysis of Research Questions
4.4 Test of Hypotheses
4.5 Discussion of Findings

---

### **CHAPTER FIVE: SUMMARY, CONCLUSION AND RECOMMENDATIONS**

5.1 Summary of Findings
5.2 Conclusion
5.3 Recommendations
5.4 Suggestions for Further Studies

---

**References**

**Appendices**
Appendix A: Questionnaire / Interview Guide
Appendix B: Additional Data


Rules:
- Generate VERY DETAILED content
- Output should be equivalent to NOT LESS THAN 20+ pages
- Use formal academic English
- Include tables where appropriate (clearly labeled)
- Describe diagrams/figures where applicable (e.g. system architecture, workflows)
- Do NOT fabricate references or data
- Maintain proper academic tone and numbering
- Content must be editable (no images, no PDFs)
- Format the output in plain text with clear headings and structure",
            title = project.title(),
            course = project.course_name(),
            level = project.level_or_default(),
            institution = project.institution_name(),
            description = project.description(),
        )
    }
}

#[async_trait]
impl DocumentGenerator for RemoteDocumentGenerator {
    async fn generate(&self, project: &ProjectDescriptor) -> Result<String, GenerationError> {
        let request = CompletionRequest::new(SYSTEM_PROMPT, Self::build_user_prompt(project))
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = self
            .client
            .complete(request)
            .await
            .map_err(|e| GenerationError::provider(e.to_string()))?;

        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }

        Ok(response.content)
    }

    fn generator_info(&self) -> GeneratorInfo {
        GeneratorInfo::new(self.client.client_info().name, false)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
