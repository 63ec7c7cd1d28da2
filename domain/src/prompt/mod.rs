//! Prompt domain
//!
//! Templates for the prompts sent to the generative-text backend.

mod template;

pub use template::PromptTemplate;
