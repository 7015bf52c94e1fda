//! Leading-gap filler for VFX image render sequences
//!
//! Scans a directory for frames named `<base>.<frame>.<suffix>`, finds the
//! first existing frame number, and backfills every missing frame slot
//! between a configured start frame and that first frame by duplicating the
//! first frame's file content as a hold frame.

#![forbid(unsafe_code)]

/// Input/output operations, CLI surface, and error handling
pub mod io;
/// Frame filename grammar, directory scanning, and gap planning
pub mod sequence;

pub use io::error::{Result, SequenceError};
