use std::collections::HashMap;

use crate::classifier::{Category, Classification};
use crate::sheet_reader::InputRow;

/// Run-wide row collections, one per (vendor, category).
///
/// Rows are kept in append order: file-processing order first, then row
/// order inside each file.
#[derive(Debug, Default, Clone)]
pub struct ResultSets {
    sets: HashMap<(String, Category), Vec<InputRow>>,
}

impl ResultSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the category rows of one classified file
    pub fn merge(&mut self, vendor: &str, classification: Classification) {
        let Classification {
            revoke,
            new_role,
            comment,
            ..
        } = classification;

        self.extend(vendor, Category::Revoke, revoke);
        self.extend(vendor, Category::NewRole, new_role);
        self.extend(vendor, Category::Comment, comment);
    }

    fn extend(&mut self, vendor: &str, category: Category, rows: Vec<InputRow>) {
        if rows.is_empty() {
            return;
        }
        self.sets
            .entry((vendor.to_string(), category))
            .or_default()
            .extend(rows);
    }

    pub fn rows(&self, vendor: &str, category: Category) -> &[InputRow] {
        self.sets
            .get(&(vendor.to_string(), category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_rows(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }
}
