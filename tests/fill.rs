//! Validates end-to-end gap filling: created files, byte identity, no-op
//! reruns, and dry-run behavior

#![allow(clippy::unwrap_used, clippy::panic)]

use seqfill::SequenceError;
use seqfill::io::cli::{Cli, GapFiller};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn frame_path(dir: &Path, number: u32) -> PathBuf {
    dir.join(format!("shot010.beauty.{number:04}.exr"))
}

fn write_frames(dir: &Path, numbers: std::ops::RangeInclusive<u32>) {
    for number in numbers {
        fs::write(frame_path(dir, number), format!("render-{number:04}")).unwrap();
    }
}

fn cli_for(dir: &Path, start_frame: u32) -> Cli {
    Cli {
        directory: dir.to_path_buf(),
        suffix: "exr".to_string(),
        start_frame,
        dry_run: false,
        quiet: true,
    }
}

#[test]
fn fills_leading_gap_with_hold_frames() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=960);

    let report = GapFiller::new(cli_for(dir.path(), 940)).run().unwrap();

    assert_eq!(report.created.len(), 10);
    assert_eq!(report.base_name, "shot010.beauty.");
    assert_eq!(report.lowest, "0950");
    assert_eq!(report.highest, "0960");
    assert_eq!(report.first_frame, frame_path(dir.path(), 950));

    let source_bytes = fs::read(frame_path(dir.path(), 950)).unwrap();
    for number in 940..950 {
        let path = frame_path(dir.path(), number);
        assert!(report.created.contains(&path), "missing {}", path.display());
        assert_eq!(fs::read(&path).unwrap(), source_bytes);
    }
}

#[test]
fn leaves_existing_frames_untouched() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=960);

    GapFiller::new(cli_for(dir.path(), 940)).run().unwrap();

    for number in 950..=960 {
        let bytes = fs::read(frame_path(dir.path(), number)).unwrap();
        assert_eq!(bytes, format!("render-{number:04}").into_bytes());
    }
}

#[test]
fn start_frame_at_or_above_first_existing_is_a_noop() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=960);

    let report = GapFiller::new(cli_for(dir.path(), 950)).run().unwrap();
    assert!(report.created.is_empty());

    let report = GapFiller::new(cli_for(dir.path(), 955)).run().unwrap();
    assert!(report.created.is_empty());

    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 11);
}

#[test]
fn rerun_after_successful_fill_creates_nothing() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=960);

    let first_run = GapFiller::new(cli_for(dir.path(), 940)).run().unwrap();
    assert_eq!(first_run.created.len(), 10);

    // The gap range recomputed against the extended sequence is empty
    let second_run = GapFiller::new(cli_for(dir.path(), 940)).run().unwrap();
    assert!(second_run.created.is_empty());
    assert_eq!(second_run.lowest, "0940");
}

#[test]
fn dry_run_reports_targets_without_writing() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=952);

    let mut cli = cli_for(dir.path(), 945);
    cli.dry_run = true;
    let report = GapFiller::new(cli).run().unwrap();

    assert_eq!(report.created.len(), 5);
    assert!(report.dry_run);
    for number in 945..950 {
        assert!(!frame_path(dir.path(), number).exists());
    }
}

#[test]
fn created_frames_carry_the_source_times_and_permissions() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=960);

    let source = frame_path(dir.path(), 950);
    let mut perms = fs::metadata(&source).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&source, perms).unwrap();
    let source_modified = fs::metadata(&source).unwrap().modified().unwrap();

    GapFiller::new(cli_for(dir.path(), 948)).run().unwrap();

    for number in 948..950 {
        let metadata = fs::metadata(frame_path(dir.path(), number)).unwrap();
        assert_eq!(metadata.modified().unwrap(), source_modified);
        assert!(metadata.permissions().readonly());
    }
}

#[test]
fn copy_failure_names_the_target_and_keeps_earlier_copies() {
    let dir = TempDir::new().unwrap();
    write_frames(dir.path(), 950..=952);

    // A directory squatting on a target path makes that one copy fail;
    // scanning skips it, so the run fails mid-plan
    fs::create_dir(frame_path(dir.path(), 949)).unwrap();

    let err = GapFiller::new(cli_for(dir.path(), 945)).run().unwrap_err();
    match err {
        SequenceError::CopyFailed { path, .. } => {
            assert_eq!(path, frame_path(dir.path(), 949));
        }
        other => panic!("expected CopyFailed, got {other}"),
    }

    // No rollback: copies completed before the failure stay on disk
    let source_bytes = fs::read(frame_path(dir.path(), 950)).unwrap();
    for number in 945..949 {
        assert_eq!(fs::read(frame_path(dir.path(), number)).unwrap(), source_bytes);
    }
}

#[test]
fn created_frames_use_the_inferred_pad_width() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plate.00100.dpx"), b"wide").unwrap();

    let mut cli = cli_for(dir.path(), 98);
    cli.suffix = "dpx".to_string();
    let report = GapFiller::new(cli).run().unwrap();

    assert_eq!(report.created.len(), 2);
    assert!(dir.path().join("plate.00098.dpx").exists());
    assert!(dir.path().join("plate.00099.dpx").exists());
}
