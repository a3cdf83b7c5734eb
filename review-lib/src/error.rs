use thiserror::Error;

/// Per-file failures. None of these abort a run; the file is skipped and the
/// problem goes to the run log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("{file_name} could not be read: {message}")]
    Unreadable { file_name: String, message: String },

    #[error("{file_name} has unexpected column names")]
    UnrecognizedFormat { file_name: String },
}

impl FileError {
    /// Line written to the run log for this failure
    pub fn log_entry(&self) -> String {
        format!("*** FATAL ERROR *** {}. Skipping file.", self)
    }
}

/// Problems with a vendor template set supplied as configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("No vendor templates were provided")]
    EmptyRegistry,

    #[error("A vendor template has an empty name")]
    EmptyName,

    #[error("Vendor '{vendor}' is defined more than once")]
    DuplicateVendor { vendor: String },

    #[error("Vendor '{vendor}' lists column '{column}' more than once")]
    DuplicateColumn { vendor: String, column: String },

    #[error("Vendor '{vendor}' is missing the required column '{column}'")]
    MissingColumn { vendor: String, column: String },

    #[error("Vendor '{vendor}' produces an invalid worksheet name '{sheet_name}'")]
    InvalidSheetName { vendor: String, sheet_name: String },

    #[error("Could not read vendor templates from {path}: {message}")]
    Read { path: String, message: String },

    #[error("Could not parse vendor templates: {0}")]
    Parse(String),
}
