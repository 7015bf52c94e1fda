//! Hold-frame copy primitive
//!
//! Copies full byte content plus metadata (permissions and the source's
//! access and modification times) so the placeholder is indistinguishable
//! from the frame it duplicates.

use crate::io::error::{Result, SequenceError};
use std::fs;
use std::path::Path;

/// Duplicate `source` at `target`, carrying over permissions and file times
///
/// # Errors
///
/// Returns [`SequenceError::CopyFailed`] naming the target path when any
/// step of the copy fails. Targets written by earlier calls are untouched.
pub fn copy_hold_frame(source: &Path, target: &Path) -> Result<()> {
    copy_with_metadata(source, target).map_err(|source| SequenceError::CopyFailed {
        path: target.to_path_buf(),
        source,
    })
}

fn copy_with_metadata(source: &Path, target: &Path) -> std::io::Result<()> {
    let metadata = fs::metadata(source)?;
    let mut reader = fs::File::open(source)?;
    let mut writer = fs::File::create(target)?;
    std::io::copy(&mut reader, &mut writer)?;

    let mut times = fs::FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    writer.set_times(times)?;

    // Permissions go last: the handle must stay writable while times are
    // replayed, and a read-only source makes the copy read-only too
    writer.set_permissions(metadata.permissions())
}
