use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::classifier::Category;
use crate::error::TemplateError;

/// Column dropped from every summary sheet
pub const DOMAIN_COLUMN: &str = "Domain";
pub const REVIEWER_NAME_COLUMN: &str = "Reviewer Name";
pub const RETAIN_REVOKE_COLUMN: &str = "Retain/Revoke";
pub const NEW_ROLE_COLUMN: &str = "New Role";
pub const COMMENTS_COLUMN: &str = "Comments";

/// Columns every vendor template has to carry for classification to work
pub const REQUIRED_COLUMNS: [&str; 5] = [
    DOMAIN_COLUMN,
    REVIEWER_NAME_COLUMN,
    RETAIN_REVOKE_COLUMN,
    NEW_ROLE_COLUMN,
    COMMENTS_COLUMN,
];

/// Excel caps worksheet names at 31 characters
const MAX_SHEET_NAME_LEN: usize = 31;
const INVALID_SHEET_NAME_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

const SIGNANT_HEADERS: [&str; 12] = [
    "Study",
    "Site Name",
    "Site Number",
    "Last Name",
    "First Name",
    "Email",
    "Domain",
    "Role",
    "Reviewer Name",
    "Retain/Revoke",
    "New Role",
    "Comments",
];

const ERT_HEADERS: [&str; 11] = [
    "Study Name",
    "Email Address",
    "Domain",
    "First Name",
    "Last Name",
    "Site",
    "Role",
    "Reviewer Name",
    "Retain/Revoke",
    "New Role",
    "Comments",
];

const EPX_HEADERS: [&str; 12] = [
    "Study Name",
    "System",
    "Email Address",
    "Domain",
    "First Name",
    "Last Name",
    "Site",
    "Role",
    "Reviewer Name",
    "Retain/Revoke",
    "New Role",
    "Comments",
];

/// A reviewing organization and the exact header row its reports carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTemplate {
    pub name: String,
    pub headers: Vec<String>,
}

impl VendorTemplate {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        VendorTemplate {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
        }
    }

    /// Position of `column` in the header row
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// Header names written to the summary sheets (everything but `Domain`)
    pub fn output_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| *h != DOMAIN_COLUMN)
            .collect()
    }

    /// Worksheet name for one category of this vendor, e.g. `New Role-ERT`
    pub fn sheet_name(&self, category: Category) -> String {
        format!("{}-{}", category.label(), self.name)
    }

    fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }

        let mut seen = HashSet::new();
        for header in &self.headers {
            if !seen.insert(header.as_str()) {
                return Err(TemplateError::DuplicateColumn {
                    vendor: self.name.clone(),
                    column: header.clone(),
                });
            }
        }

        for column in REQUIRED_COLUMNS {
            if self.column_index(column).is_none() {
                return Err(TemplateError::MissingColumn {
                    vendor: self.name.clone(),
                    column: column.to_string(),
                });
            }
        }

        for category in Category::ALL {
            let sheet_name = self.sheet_name(category);
            if sheet_name.chars().count() > MAX_SHEET_NAME_LEN
                || sheet_name.contains(&INVALID_SHEET_NAME_CHARS[..])
                || sheet_name.starts_with('\'')
                || sheet_name.ends_with('\'')
            {
                return Err(TemplateError::InvalidSheetName {
                    vendor: self.name.clone(),
                    sheet_name,
                });
            }
        }

        Ok(())
    }
}

/// The set of vendor layouts a run accepts, in detection and output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRegistry {
    templates: Vec<VendorTemplate>,
}

impl Default for VendorRegistry {
    fn default() -> Self {
        VendorRegistry {
            templates: vec![
                VendorTemplate::new("Signant", &SIGNANT_HEADERS),
                VendorTemplate::new("ERT", &ERT_HEADERS),
                VendorTemplate::new("EPX", &EPX_HEADERS),
            ],
        }
    }
}

impl VendorRegistry {
    /// Build a registry, rejecting templates the classifier or writer could not handle
    pub fn new(templates: Vec<VendorTemplate>) -> Result<Self, TemplateError> {
        if templates.is_empty() {
            return Err(TemplateError::EmptyRegistry);
        }

        // Excel compares worksheet names case-insensitively
        let mut names = HashSet::new();
        for template in &templates {
            template.validate()?;
            if !names.insert(template.name.to_lowercase()) {
                return Err(TemplateError::DuplicateVendor {
                    vendor: template.name.clone(),
                });
            }
        }

        Ok(VendorRegistry { templates })
    }

    /// Parse a JSON array of `{"name": ..., "headers": [...]}` objects
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let templates: Vec<VendorTemplate> =
            serde_json::from_str(json).map_err(|e| TemplateError::Parse(e.to_string()))?;
        Self::new(templates)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TemplateError> {
        let json = std::fs::read_to_string(path).map_err(|e| TemplateError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn templates(&self) -> &[VendorTemplate] {
        &self.templates
    }

    /// Find the template whose header row equals `header` exactly.
    ///
    /// Same names, same order, same count. The first registered match wins and
    /// there is no fuzzy fallback.
    pub fn detect<S: AsRef<str>>(&self, header: &[S]) -> Option<&VendorTemplate> {
        self.templates.iter().find(|template| {
            template.headers.len() == header.len()
                && template
                    .headers
                    .iter()
                    .zip(header)
                    .all(|(expected, actual)| expected == actual.as_ref())
        })
    }
}
