//! Project descriptor — the catalog entity feeding document generation.
//!
//! The catalog subsystem owns project records; the document core only reads
//! them. Title and description are guaranteed present; category, academic
//! level, and institution may be absent and are defaulted downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ProjectId, ValidationError};

/// Academic level a project is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicLevel {
    /// National Diploma.
    #[serde(rename = "ND")]
    Nd,
    /// Higher National Diploma.
    #[serde(rename = "HND")]
    Hnd,
    /// Bachelor of Science.
    #[serde(rename = "BSc")]
    Bsc,
    /// Master of Science.
    #[serde(rename = "MSc")]
    Msc,
}

impl AcademicLevel {
    /// Returns the canonical short label used in documents and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicLevel::Nd => "ND",
            AcademicLevel::Hnd => "HND",
            AcademicLevel::Bsc => "BSc",
            AcademicLevel::Msc => "MSc",
        }
    }

    /// Diploma-level projects use a descriptive research design; degree-level
    /// projects use a quantitative one.
    pub fn is_diploma(&self) -> bool {
        matches!(self, AcademicLevel::Nd | AcademicLevel::Hnd)
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcademicLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ND" => Ok(AcademicLevel::Nd),
            "HND" => Ok(AcademicLevel::Hnd),
            "BSC" => Ok(AcademicLevel::Bsc),
            "MSC" => Ok(AcademicLevel::Msc),
            _ => Err(ValidationError::invalid_format(
                "level",
                format!("unknown academic level: {}", s),
            )),
        }
    }
}

/// Read-only view of a catalog project, as consumed by document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    id: ProjectId,
    title: String,
    description: String,
    category: Option<String>,
    level: Option<AcademicLevel>,
    institution: Option<String>,
}

impl ProjectDescriptor {
    /// Creates a descriptor, validating that title and description are
    /// present. Optional fields stay optional; generation substitutes
    /// placeholders for them.
    pub fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let description = description.into();

        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }

        Ok(Self {
            id,
            title,
            description,
            category: None,
            level: None,
            institution: None,
        })
    }

    /// Sets the course/category name.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the academic level.
    pub fn with_level(mut self, level: AcademicLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the institution name.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn level(&self) -> Option<AcademicLevel> {
        self.level
    }

    pub fn institution(&self) -> Option<&str> {
        self.institution.as_deref()
    }

    /// Course name with the generation-time default applied.
    pub fn course_name(&self) -> &str {
        self.category.as_deref().unwrap_or("General Studies")
    }

    /// Academic level with the generation-time default applied.
    pub fn level_or_default(&self) -> AcademicLevel {
        self.level.unwrap_or(AcademicLevel::Nd)
    }

    /// Institution name with the generation-time default applied.
    pub fn institution_name(&self) -> &str {
        self.institution.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ProjectDescriptor {
        ProjectDescriptor::new(
            ProjectId::new(),
            "Smart Metering System",
            "Design and implementation of a smart energy meter.",
        )
        .unwrap()
    }

    #[test]
    fn descriptor_requires_title() {
        let result = ProjectDescriptor::new(ProjectId::new(), "  ", "A description");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn descriptor_requires_description() {
        let result = ProjectDescriptor::new(ProjectId::new(), "A title", "");
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let project = descriptor();
        assert!(project.category().is_none());
        assert!(project.level().is_none());
        assert!(project.institution().is_none());
    }

    #[test]
    fn course_name_falls_back_to_general_studies() {
        let project = descriptor();
        assert_eq!(project.course_name(), "General Studies");

        let project = descriptor().with_category("Computer Engineering");
        assert_eq!(project.course_name(), "Computer Engineering");
    }

    #[test]
    fn level_falls_back_to_nd() {
        let project = descriptor();
        assert_eq!(project.level_or_default(), AcademicLevel::Nd);

        let project = descriptor().with_level(AcademicLevel::Msc);
        assert_eq!(project.level_or_default(), AcademicLevel::Msc);
    }

    #[test]
    fn institution_falls_back_to_placeholder() {
        let project = descriptor();
        assert_eq!(project.institution_name(), "N/A");

        let project = descriptor().with_institution("Federal Polytechnic");
        assert_eq!(project.institution_name(), "Federal Polytechnic");
    }

    #[test]
    fn academic_level_parses_case_insensitively() {
        assert_eq!("nd".parse::<AcademicLevel>().unwrap(), AcademicLevel::Nd);
        assert_eq!("HND".parse::<AcademicLevel>().unwrap(), AcademicLevel::Hnd);
        assert_eq!("BSc".parse::<AcademicLevel>().unwrap(), AcademicLevel::Bsc);
        assert_eq!("msc".parse::<AcademicLevel>().unwrap(), AcademicLevel::Msc);
    }

    #[test]
    fn academic_level_rejects_unknown_value() {
        assert!("PhD".parse::<AcademicLevel>().is_err());
    }

    #[test]
    fn academic_level_diploma_classification() {
        assert!(AcademicLevel::Nd.is_diploma());
        assert!(AcademicLevel::Hnd.is_diploma());
        assert!(!AcademicLevel::Bsc.is_diploma());
        assert!(!AcademicLevel::Msc.is_diploma());
    }

    #[test]
    fn academic_level_serializes_to_short_label() {
        assert_eq!(serde_json::to_string(&AcademicLevel::Hnd).unwrap(), "\"HND\"");
        assert_eq!(serde_json::to_string(&AcademicLevel::Bsc).unwrap(), "\"BSc\"");
    }
}
