pub mod analyzer;
pub mod prompt;
pub mod providers;

pub use analyzer::{AnalysisError, DocumentAnalyzer};
