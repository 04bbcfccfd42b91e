use std::{io::Write, path::PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::dumper::{EntryOutcome, list_entries};
use crate::ext::BestEffortPathExt;

/// Counts of the outcomes produced by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpReport {
    pub dumped: usize,
    pub failed: usize,
}

impl DumpReport {
    pub fn processed(&self) -> usize {
        self.dumped + self.failed
    }

    fn record(&mut self, outcome: &EntryOutcome) {
        if outcome.is_dumped() {
            self.dumped += 1;
        } else {
            self.failed += 1;
        }
    }
}

pub struct DirectoryDumper {
    root: PathBuf,
}

impl DirectoryDumper {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Lists the root once, then reads and renders every entry in listing
    /// order. Only listing and output failures are returned as errors.
    pub async fn run(&self, out: &mut impl Write) -> Result<DumpReport, DumpError> {
        let entries = list_entries(&self.root)?;
        debug!(
            "Dumping {} entries from {}",
            entries.len(),
            self.root.best_effort_path_display()
        );

        let mut report = DumpReport::default();
        for name in entries {
            let outcome = EntryOutcome::read(&self.root, name).await;
            outcome.render(out).context(WriteSnafu)?;
            report.record(&outcome);
        }
        out.flush().context(WriteSnafu)?;

        info!(
            "Processed {} entries: {} dumped, {} failed",
            report.processed(),
            report.dumped,
            report.failed
        );
        Ok(report)
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DumpError {
    #[snafu(display("Failed to list directory {}", path.best_effort_path_display()))]
    ListError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write dump output"))]
    WriteError { source: std::io::Error },
}
