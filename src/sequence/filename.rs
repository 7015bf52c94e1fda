//! Frame filename grammar
//!
//! Frame files are named `<base>.<frame>.<suffix>`: the frame number is the
//! second-to-last dot-delimited segment and must be all ASCII digits, the
//! extension is the last segment, and everything before the frame number is
//! the base name (internal dots preserved). Filenames that match the suffix
//! but not this shape are rejected rather than mis-parsed.

use crate::io::error::{Result, SequenceError};

/// A frame filename decomposed into base name, frame number, and suffix
///
/// The frame number is kept in its on-disk string form so the zero-pad
/// width survives parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameName {
    base: String,
    frame: String,
    number: u32,
    suffix: String,
}

impl FrameName {
    /// Parse a filename against the `<base>.<frame>.<suffix>` grammar
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MalformedFilename`] when the filename has
    /// fewer than three dot-delimited segments, an empty base name, a
    /// non-numeric frame segment, or a frame number that exceeds `u32`.
    pub fn parse(name: &str, suffix: &str) -> Result<Self> {
        let malformed = |reason: &str| SequenceError::MalformedFilename {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = name.split('.').collect();
        if segments.len() < 3 {
            return Err(malformed("expected at least <base>.<frame>.<suffix>"));
        }
        if segments.last() != Some(&suffix) {
            return Err(malformed("extension does not match the configured suffix"));
        }

        let base_segments = segments
            .get(..segments.len() - 2)
            .ok_or_else(|| malformed("expected at least <base>.<frame>.<suffix>"))?;
        if base_segments.first().is_none_or(|s| s.is_empty()) {
            return Err(malformed("empty base name"));
        }

        let frame = segments
            .get(segments.len() - 2)
            .copied()
            .ok_or_else(|| malformed("missing frame number segment"))?;
        if frame.is_empty() || !frame.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("frame number segment is not numeric"));
        }
        let Ok(number) = frame.parse::<u32>() else {
            return Err(malformed("frame number out of range"));
        };

        Ok(Self {
            base: format!("{}.", base_segments.join(".")),
            frame: frame.to_string(),
            number,
            suffix: suffix.to_string(),
        })
    }

    /// Render the filename for an arbitrary frame number under a base name
    ///
    /// The number is zero-padded to `pad_width` digits; wider numbers are
    /// emitted unpadded rather than truncated.
    pub fn render(base: &str, number: u32, pad_width: usize, suffix: &str) -> String {
        format!("{base}{number:0pad_width$}.{suffix}")
    }

    /// Base name including the trailing dot, e.g. `shot010.beauty.`
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Frame number as found on disk, zero-padding intact
    pub fn frame_str(&self) -> &str {
        &self.frame
    }

    /// Frame number as an integer
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Zero-pad width observed on disk
    pub fn pad_width(&self) -> usize {
        self.frame.len()
    }

    /// Reconstruct the full filename
    pub fn file_name(&self) -> String {
        format!("{}{}.{}", self.base, self.frame, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::FrameName;
    use crate::io::error::SequenceError;

    #[test]
    fn parses_multi_component_base_name() {
        let name = FrameName::parse("shot010.beauty.0950.exr", "exr").unwrap();
        assert_eq!(name.base(), "shot010.beauty.");
        assert_eq!(name.frame_str(), "0950");
        assert_eq!(name.number(), 950);
        assert_eq!(name.pad_width(), 4);
        assert_eq!(name.file_name(), "shot010.beauty.0950.exr");
    }

    #[test]
    fn renders_target_filename_with_inferred_padding() {
        let rendered = FrameName::render("shot010.beauty.", 940, 4, "exr");
        assert_eq!(rendered, "shot010.beauty.0940.exr");
    }

    #[test]
    fn renders_without_truncating_wide_numbers() {
        let rendered = FrameName::render("shot.", 123_456, 4, "exr");
        assert_eq!(rendered, "shot.123456.exr");
    }

    #[test]
    fn rejects_missing_frame_segment() {
        let err = FrameName::parse("frame.exr", "exr").unwrap_err();
        assert!(matches!(err, SequenceError::MalformedFilename { .. }));
    }

    #[test]
    fn rejects_non_numeric_frame_segment() {
        let err = FrameName::parse("shot010.final.exr", "exr").unwrap_err();
        assert!(matches!(err, SequenceError::MalformedFilename { .. }));
    }

    #[test]
    fn rejects_empty_base_name() {
        let err = FrameName::parse(".0950.exr", "exr").unwrap_err();
        assert!(matches!(err, SequenceError::MalformedFilename { .. }));
    }
}
