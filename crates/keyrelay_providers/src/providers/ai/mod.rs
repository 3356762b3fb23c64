//! AI and machine-learning service providers.

mod anthropic;
mod cohere;
mod google;
mod huggingface;
mod openai;
mod replicate;

pub use anthropic::AnthropicProvider;
pub use cohere::CohereProvider;
pub use google::GoogleAiProvider;
pub use huggingface::HuggingFaceProvider;
pub use openai::OpenAiProvider;
pub use replicate::ReplicateProvider;
