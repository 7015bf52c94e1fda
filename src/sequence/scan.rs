//! Directory scanning and frame sequence assembly

use crate::io::error::{Result, SequenceError};
use crate::sequence::filename::FrameName;
use std::fs;
use std::path::{Path, PathBuf};

/// An image sequence discovered in a single directory
///
/// Holds the first and last frames of the sorted sequence; the gap filler
/// only ever reads the first frame, and the last frame is reported for the
/// observed range. All frames are validated against the filename grammar
/// and must share one base name during construction.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    directory: PathBuf,
    first: FrameName,
    last: FrameName,
    count: usize,
}

impl FrameSequence {
    /// Scan a directory for frame files matching `suffix`
    ///
    /// Entries are listed non-recursively (subdirectories ignored), filtered
    /// by extension, and sorted lexicographically, which for fixed-width
    /// zero-padded frame numbers is numeric order.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::PathNotFound`] when the directory does not exist,
    ///   is not a directory, or cannot be read
    /// - [`SequenceError::EmptySequence`] when no entry matches the suffix
    /// - [`SequenceError::MalformedFilename`] when a matching entry does not
    ///   fit the `<base>.<frame>.<suffix>` grammar
    /// - [`SequenceError::MixedSequence`] when matching entries carry more
    ///   than one base name
    /// - [`SequenceError::PaddingMismatch`] when frame numbers do not share
    ///   one zero-pad width (lexicographic order is only numeric for
    ///   fixed-width numbers)
    pub fn scan(directory: &Path, suffix: &str) -> Result<Self> {
        let not_found = || SequenceError::PathNotFound {
            path: directory.to_path_buf(),
        };

        if !fs::metadata(directory).is_ok_and(|m| m.is_dir()) {
            return Err(not_found());
        }

        let Ok(entries) = fs::read_dir(directory) else {
            return Err(not_found());
        };

        let mut names = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                return Err(not_found());
            };
            let Ok(file_type) = entry.file_type() else {
                return Err(not_found());
            };
            if file_type.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // Extension is everything after the last dot, compared case-sensitively
            if name.rsplit_once('.').map(|(_, ext)| ext) == Some(suffix) {
                names.push(name);
            }
        }
        names.sort();

        if names.is_empty() {
            return Err(SequenceError::EmptySequence {
                path: directory.to_path_buf(),
                suffix: suffix.to_string(),
            });
        }

        let mut first: Option<FrameName> = None;
        let mut last: Option<FrameName> = None;
        let count = names.len();
        for name in names {
            let frame = FrameName::parse(&name, suffix)?;
            if let Some(ref existing) = first {
                if existing.base() != frame.base() {
                    return Err(SequenceError::MixedSequence {
                        expected: existing.base().to_string(),
                        found: frame.base().to_string(),
                    });
                }
                if existing.pad_width() != frame.pad_width() {
                    return Err(SequenceError::PaddingMismatch {
                        found: frame.frame_str().to_string(),
                        width: existing.pad_width(),
                    });
                }
            } else {
                first = Some(frame.clone());
            }
            last = Some(frame);
        }

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self {
                directory: directory.to_path_buf(),
                first,
                last,
                count,
            }),
            _ => Err(SequenceError::EmptySequence {
                path: directory.to_path_buf(),
                suffix: suffix.to_string(),
            }),
        }
    }

    /// Directory the sequence lives in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Shared base name including the trailing dot
    pub fn base_name(&self) -> &str {
        self.first.base()
    }

    /// Zero-pad width inferred from the first frame
    pub fn pad_width(&self) -> usize {
        self.first.pad_width()
    }

    /// First (lowest-numbered) frame of the sequence
    pub const fn first(&self) -> &FrameName {
        &self.first
    }

    /// Last (highest-numbered) frame of the sequence
    pub const fn last(&self) -> &FrameName {
        &self.last
    }

    /// Number of frames found on disk
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Full path of the first frame, the hold-frame copy source
    pub fn first_frame_path(&self) -> PathBuf {
        self.directory.join(self.first.file_name())
    }
}
