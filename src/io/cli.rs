//! Command-line interface and gap-fill orchestration

use crate::io::configuration::DEFAULT_SUFFIX;
use crate::io::copy::copy_hold_frame;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::sequence::gap::FillPlan;
use crate::sequence::scan::FrameSequence;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seqfill")]
#[command(
    author,
    version,
    about = "Backfill missing leading frames in an image sequence with hold-frame copies"
)]
/// Command-line arguments for the gap-filling tool
pub struct Cli {
    /// Directory containing the frame sequence
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Frame file extension to match, without the leading dot
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Lowest frame number the completed sequence should contain
    #[arg(short = 'f', long)]
    pub start_frame: u32,

    /// Plan and report without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress progress output and the summary report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and the summary report should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of a gap-fill run
#[derive(Debug)]
pub struct FillReport {
    /// Path of the first existing frame, the copy source
    pub first_frame: PathBuf,
    /// Derived base name including the trailing dot
    pub base_name: String,
    /// Lowest existing frame number, zero-padding intact
    pub lowest: String,
    /// Highest existing frame number, zero-padding intact
    pub highest: String,
    /// Paths created by this run (or planned, under `--dry-run`)
    pub created: Vec<PathBuf>,
    /// Whether the run was a dry run
    pub dry_run: bool,
}

impl FillReport {
    /// Print the human-readable summary lines
    ///
    /// Console output is diagnostic only, not a machine-readable contract.
    // Summary output is the point of the tool
    #[allow(clippy::print_stdout)]
    pub fn print(&self) {
        println!("first frame: {}", self.first_frame.display());
        println!("base name:   {}", self.base_name);
        println!("existing:    {} > {}", self.lowest, self.highest);
        let verb = if self.dry_run { "would create" } else { "created" };
        println!("{verb} {} file(s)", self.created.len());
        for path in &self.created {
            println!("  {}", path.display());
        }
    }
}

/// Drives scan, planning, and the copy loop for one directory
pub struct GapFiller {
    cli: Cli,
}

impl GapFiller {
    /// Create a gap filler from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Scan the directory, plan the leading gap, and copy hold frames
    ///
    /// An empty gap (start frame at or above the first existing frame) is a
    /// successful no-op. Under `--dry-run` nothing is written and the report
    /// lists the paths that would have been created.
    ///
    /// # Errors
    ///
    /// Returns scan errors from [`FrameSequence::scan`] and
    /// [`crate::SequenceError::CopyFailed`] when a copy fails. Copies
    /// completed before a failure remain on disk.
    pub fn run(&self) -> Result<FillReport> {
        let sequence = FrameSequence::scan(&self.cli.directory, &self.cli.suffix)?;
        let plan = FillPlan::new(&sequence, self.cli.start_frame, &self.cli.suffix);

        if !self.cli.dry_run && !plan.is_empty() {
            self.execute(&plan)?;
        }

        let report = FillReport {
            first_frame: sequence.first_frame_path(),
            base_name: sequence.base_name().to_string(),
            lowest: sequence.first().frame_str().to_string(),
            highest: sequence.last().frame_str().to_string(),
            created: plan.into_targets(),
            dry_run: self.cli.dry_run,
        };

        if self.cli.should_show_progress() {
            report.print();
        }

        Ok(report)
    }

    fn execute(&self, plan: &FillPlan) -> Result<()> {
        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(plan.targets().len()));

        for target in plan.targets() {
            if let Some(ref pm) = progress {
                pm.start_copy(target);
            }
            copy_hold_frame(plan.source(), target)?;
            if let Some(ref pm) = progress {
                pm.complete_copy();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }
        Ok(())
    }
}
