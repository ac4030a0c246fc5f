pub mod analysis;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod types;
pub mod utils;

// Re-export the analysis entry points
pub use analysis::{AlignmentReport, AnalysisError, BaseComposition, SequenceReport};
pub use types::FileKind;
