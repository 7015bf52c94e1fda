//! Input/output operations: CLI surface, error taxonomy, file copying,
//! and progress display

/// Command-line interface and gap-fill orchestration
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Hold-frame copy primitive
pub mod copy;
/// Error types for sequence operations
pub mod error;
/// Copy progress display
pub mod progress;
