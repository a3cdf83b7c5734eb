use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::FileError;
use crate::utils::{get_run_log_timestamp, remove_if_exists};

/// Append-only text audit trail of one run.
///
/// Every entry is written to disk straight away and mirrored to the `log`
/// facade. Lines starting with `***` are warnings or fatal per-file errors.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    entries: Vec<String>,
}

impl RunLog {
    /// Start a fresh log at `path`, deleting whatever a previous run left there
    pub fn create(path: &Path) -> Result<Self> {
        remove_if_exists(path)
            .with_context(|| format!("Failed to remove previous run log: {}", path.display()))?;
        Ok(RunLog {
            path: path.to_path_buf(),
            entries: Vec::new(),
        })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn append(&mut self, entry: String) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open run log: {}", self.path.display()))?;
        writeln!(file, "{}", entry)
            .with_context(|| format!("Failed to write run log: {}", self.path.display()))?;
        self.entries.push(entry);
        Ok(())
    }

    /// `<file> <timestamp>` marker written before a file is read
    pub fn file_started(&mut self, file_name: &str) -> Result<()> {
        log::info!("Processing {}", file_name);
        self.append(format!("{} {}", file_name, get_run_log_timestamp()))
    }

    pub fn warning(&mut self, message: String) -> Result<()> {
        log::warn!("{}", message);
        self.append(message)
    }

    pub fn fatal(&mut self, error: &FileError) -> Result<()> {
        let entry = error.log_entry();
        log::error!("{}", entry);
        self.append(entry)
    }

    pub fn output_begin(&mut self) -> Result<()> {
        log::info!("Writing summary workbook");
        self.append(format!("Output File Begin: {}", get_run_log_timestamp()))
    }

    pub fn output_end(&mut self) -> Result<()> {
        log::info!("Summary workbook written");
        self.append(format!("Output File End: {}", get_run_log_timestamp()))
    }
}
