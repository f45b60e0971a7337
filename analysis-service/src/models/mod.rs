//! Domain models for the analysis service.

pub mod legal_analysis;

pub use legal_analysis::LegalAnalysis;
