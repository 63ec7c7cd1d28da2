//! Generative-text backend adapters

mod gemini;

pub use gemini::GeminiTextGenerator;
