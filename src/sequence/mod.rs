//! Frame sequence identification and gap planning
//!
//! This module contains the sequence-related functionality:
//! - Filename grammar for `<base>.<frame>.<suffix>` frame files
//! - Directory scanning and sequence assembly
//! - Gap-range computation and fill planning

/// Frame filename parsing and rendering
pub mod filename;
/// Leading-gap computation and copy planning
pub mod gap;
/// Directory scanning and frame sequence assembly
pub mod scan;

pub use filename::FrameName;
pub use scan::FrameSequence;
