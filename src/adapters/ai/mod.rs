//! Completion client adapters for the remote generation provider.

mod mock_client;
mod openai_client;

pub use mock_client::{MockCompletionClient, MockError, MockResponse};
pub use openai_client::{OpenAiClient, OpenAiConfig};
