pub mod analyze;
pub mod health;

pub use analyze::analyze_document;
pub use health::{health_check, readiness_check};
