pub mod analysis;

pub use analysis::{AnalysisRequest, AnalysisResponse, DEFAULT_TARGET_LANG};
