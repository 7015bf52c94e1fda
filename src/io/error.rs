//! Error types for sequence scanning and gap filling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sequence operations
#[derive(Debug)]
pub enum SequenceError {
    /// Configured directory does not exist, is not a directory, or is
    /// unreadable
    PathNotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// No files in the directory match the configured suffix
    ///
    /// Without at least one existing frame there is no reference frame to
    /// copy and no base name to derive.
    EmptySequence {
        /// Directory that was scanned
        path: PathBuf,
        /// Suffix that nothing matched
        suffix: String,
    },

    /// A filename matched the suffix but not the `<base>.<frame>.<suffix>`
    /// grammar
    MalformedFilename {
        /// Offending filename
        name: String,
        /// What the grammar check rejected
        reason: String,
    },

    /// Two distinct base names were found in one directory
    ///
    /// Mixed sequences make the first-matching-file heuristic arbitrary,
    /// so they are rejected outright.
    MixedSequence {
        /// Base name of the first sorted frame
        expected: String,
        /// Conflicting base name
        found: String,
    },

    /// A frame number's zero-padding disagrees with the sequence's width
    ///
    /// Fixed-width numbers are what make lexicographic filename order
    /// numeric; a stray width would also let one frame number exist under
    /// two spellings.
    PaddingMismatch {
        /// Frame string that broke the fixed-width convention
        found: String,
        /// Pad width inferred from the first sorted frame
        width: usize,
    },

    /// An individual hold-frame copy failed
    ///
    /// Files written before the failure stay on disk; there is no rollback.
    CopyFailed {
        /// Target path of the failed copy
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotFound { path } => {
                write!(f, "Directory '{}' not found or unreadable", path.display())
            }
            Self::EmptySequence { path, suffix } => {
                write!(
                    f,
                    "No '.{suffix}' files found in '{}'; cannot derive a reference frame",
                    path.display()
                )
            }
            Self::MalformedFilename { name, reason } => {
                write!(f, "Filename '{name}' does not fit <base>.<frame>.<suffix>: {reason}")
            }
            Self::MixedSequence { expected, found } => {
                write!(
                    f,
                    "Directory holds more than one sequence: found base name '{found}' alongside '{expected}'"
                )
            }
            Self::PaddingMismatch { found, width } => {
                write!(
                    f,
                    "Frame number '{found}' does not match the sequence's {width}-digit zero-padding"
                )
            }
            Self::CopyFailed { path, source } => {
                write!(f, "Failed to copy hold frame to '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CopyFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sequence results
pub type Result<T> = std::result::Result<T, SequenceError>;
