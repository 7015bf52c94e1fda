//! Leading-gap computation and copy planning
//!
//! The gap range is the integer interval `[start_frame, first_existing)`:
//! inclusive of the configured start frame, exclusive of the first frame
//! already on disk. By construction no planned target can collide with an
//! existing frame number, so the fill is purely additive.

use crate::sequence::filename::FrameName;
use crate::sequence::scan::FrameSequence;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// The frame numbers missing below the first existing frame
///
/// Empty when `start_frame >= first_existing`; an empty range is a
/// successful no-op, not an error.
pub const fn gap_range(start_frame: u32, first_existing: u32) -> Range<u32> {
    start_frame..first_existing
}

/// An ordered set of hold-frame copies that would complete a sequence
#[derive(Debug, Clone)]
pub struct FillPlan {
    source: PathBuf,
    targets: Vec<PathBuf>,
}

impl FillPlan {
    /// Plan the copies needed to extend `sequence` down to `start_frame`
    ///
    /// Target filenames reuse the sequence's base name, suffix, and
    /// inferred zero-pad width.
    pub fn new(sequence: &FrameSequence, start_frame: u32, suffix: &str) -> Self {
        let targets = gap_range(start_frame, sequence.first().number())
            .map(|number| {
                sequence.directory().join(FrameName::render(
                    sequence.base_name(),
                    number,
                    sequence.pad_width(),
                    suffix,
                ))
            })
            .collect();

        Self {
            source: sequence.first_frame_path(),
            targets,
        }
    }

    /// Path of the frame whose content is duplicated
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Target paths in ascending frame order
    pub fn targets(&self) -> &[PathBuf] {
        &self.targets
    }

    /// Whether there is anything to copy
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Consume the plan, yielding the target paths
    pub fn into_targets(self) -> Vec<PathBuf> {
        self.targets
    }
}
