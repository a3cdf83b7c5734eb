use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::accumulator::ResultSets;
use crate::classifier::{Classification, classify};
use crate::config::{ReviewConfig, SPREADSHEET_EXTENSION};
use crate::error::FileError;
use crate::run_log::RunLog;
use crate::sheet_reader::read_first_sheet;
use crate::summary_writer::{SheetCount, write_summary_workbook};
use crate::utils::{list_candidate_files, remove_if_exists};

/// A file that matched a vendor template and was classified
#[derive(Debug, Clone)]
pub struct ClassifiedFile {
    pub file_name: String,
    pub vendor: String,
    pub classification: Classification,
}

/// What happened to the files and sheets of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    /// Rows written across all summary sheets. A row in several categories counts once per sheet.
    pub rows_written: usize,
    pub sheet_counts: Vec<SheetCount>,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
}

/// Drives a run: scan the directory, classify every recognized file, write
/// the summary workbook once at the end.
pub struct Reporter {
    config: ReviewConfig,
}

impl Reporter {
    pub fn new(config: ReviewConfig) -> Self {
        Reporter { config }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Per-file problems are logged and the file is skipped. Only failures that
    /// stop the log or the workbook from being written end up as `Err`.
    pub fn run(&self) -> Result<RunSummary> {
        let output_path = self.config.output_path();
        let log_path = self.config.log_path();

        let mut run_log = RunLog::create(&log_path)?;
        remove_if_exists(&output_path).with_context(|| {
            format!("Failed to remove previous output: {}", output_path.display())
        })?;

        let candidates = list_candidate_files(
            &self.config.input_dir,
            SPREADSHEET_EXTENSION,
            &output_path,
        )
        .with_context(|| {
            format!(
                "Failed to list input directory: {}",
                self.config.input_dir.display()
            )
        })?;

        let mut results = ResultSets::new();
        let mut files_processed = 0;
        let mut files_skipped = 0;

        for path in candidates {
            match self.process_file(&path, &mut run_log)? {
                Some(classified) => {
                    results.merge(&classified.vendor, classified.classification);
                    files_processed += 1;
                }
                None => files_skipped += 1,
            }
        }

        run_log.output_begin()?;
        let sheet_counts = write_summary_workbook(&output_path, &self.config.registry, &results)?;
        run_log.output_end()?;

        Ok(RunSummary {
            files_processed,
            files_skipped,
            rows_written: results.total_rows(),
            sheet_counts,
            output_path,
            log_path,
        })
    }

    /// Log, read, detect and classify one file.
    ///
    /// Returns `None` when the file was skipped; the reason is already in the run log.
    pub fn process_file(
        &self,
        path: &Path,
        run_log: &mut RunLog,
    ) -> Result<Option<ClassifiedFile>> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        run_log.file_started(&file_name)?;

        match self.classify_file(path, &file_name) {
            Ok(classified) => {
                for warning in classified.classification.warnings(&file_name) {
                    run_log.warning(warning)?;
                }
                Ok(Some(classified))
            }
            Err(error) => {
                run_log.fatal(&error)?;
                Ok(None)
            }
        }
    }

    /// Read, detect and classify a file without touching the run log
    pub fn classify_file(&self, path: &Path, file_name: &str) -> Result<ClassifiedFile, FileError> {
        let sheet = read_first_sheet(path)?;

        let template = self.config.registry.detect(&sheet.headers).ok_or_else(|| {
            FileError::UnrecognizedFormat {
                file_name: file_name.to_string(),
            }
        })?;

        log::debug!("{} detected as {}", file_name, template.name);

        Ok(ClassifiedFile {
            file_name: file_name.to_string(),
            vendor: template.name.clone(),
            classification: classify(template, &sheet.rows),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{builtin_template, review_row, write_report};

    #[test]
    fn test_classify_file_detects_vendor() {
        let dir = tempfile::tempdir().unwrap();
        let template = builtin_template("EPX");
        let path = dir.path().join("epx.xlsx");
        let rows = vec![review_row(&template, "R", "Revoke", "", "")];
        write_report(&path, &template.headers, &rows).unwrap();

        let reporter = Reporter::new(ReviewConfig::new(dir.path()));
        let classified = reporter.classify_file(&path, "epx.xlsx").unwrap();
        assert_eq!(classified.vendor, "EPX");
        assert_eq!(classified.classification.revoke.len(), 1);
    }

    #[test]
    fn test_process_file_logs_unrecognized_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.xlsx");
        write_report(&path, &["Study", "Reviewer"], &[]).unwrap();

        let reporter = Reporter::new(ReviewConfig::new(dir.path()));
        let mut run_log = RunLog::create(&reporter.config().log_path()).unwrap();
        let outcome = reporter.process_file(&path, &mut run_log).unwrap();

        assert!(outcome.is_none());
        assert_eq!(run_log.entries().len(), 2);
        assert!(run_log.entries()[0].starts_with("other.xlsx "));
        assert_eq!(
            run_log.entries()[1],
            "*** FATAL ERROR *** other.xlsx has unexpected column names. Skipping file."
        );
    }
}
