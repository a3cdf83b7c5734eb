#![allow(clippy::needless_return)]

mod accumulator;
mod classifier;
mod config;
mod error;
mod reporter;
mod run_log;
mod sheet_reader;
mod summary_writer;
mod vendor;
pub mod utils;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use accumulator::ResultSets;
pub use classifier::{Category, Classification, REVOKE_DECISION, classify};
pub use config::{ReviewConfig, SPREADSHEET_EXTENSION};
pub use error::{FileError, TemplateError};
pub use reporter::{ClassifiedFile, Reporter, RunSummary};
pub use run_log::RunLog;
pub use sheet_reader::{InputRow, SheetData, read_first_sheet, rows_to_sheet_data};
pub use summary_writer::{SheetCount, write_summary_workbook};
pub use vendor::{
    COMMENTS_COLUMN, DOMAIN_COLUMN, NEW_ROLE_COLUMN, REQUIRED_COLUMNS, RETAIN_REVOKE_COLUMN,
    REVIEWER_NAME_COLUMN, VendorRegistry, VendorTemplate,
};

pub const DEFAULT_OUTPUT_FILE: &str = "ARR_Summary.xlsx";
pub const DEFAULT_LOG_FILE: &str = "ErrorLog.txt";
