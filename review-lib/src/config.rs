use std::path::PathBuf;

use crate::vendor::VendorRegistry;
use crate::{DEFAULT_LOG_FILE, DEFAULT_OUTPUT_FILE};

/// Only workbooks with this extension are picked up from the input directory
pub const SPREADSHEET_EXTENSION: &str = ".xlsx";

/// Settings for one review run.
///
/// The summary workbook and run log live inside `input_dir`.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub input_dir: PathBuf,
    pub output_file: String,
    pub log_file: String,
    pub registry: VendorRegistry,
}

impl ReviewConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        ReviewConfig {
            input_dir: input_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            registry: VendorRegistry::default(),
        }
    }

    pub fn with_output_file(mut self, output_file: &str) -> Self {
        self.output_file = output_file.to_string();
        self
    }

    pub fn with_log_file(mut self, log_file: &str) -> Self {
        self.log_file = log_file.to_string();
        self
    }

    pub fn with_registry(mut self, registry: VendorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.input_dir.join(&self.log_file)
    }
}
