// Test utilities available to both unit and integration tests
// Only compiled when testing

use calamine::{Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;
use std::path::Path;

use crate::vendor::{
    COMMENTS_COLUMN, NEW_ROLE_COLUMN, RETAIN_REVOKE_COLUMN, REVIEWER_NAME_COLUMN, VendorRegistry,
    VendorTemplate,
};

/// Built-in template by vendor name
#[allow(dead_code)]
pub fn builtin_template(vendor: &str) -> VendorTemplate {
    VendorRegistry::default()
        .templates()
        .iter()
        .find(|t| t.name == vendor)
        .cloned()
        .unwrap_or_else(|| panic!("no built-in template named {vendor}"))
}

/// Write a single-sheet workbook with a header row and string cells.
/// Empty strings are left as blank cells.
#[allow(dead_code)]
pub fn write_report<H: AsRef<str>>(
    path: &Path,
    headers: &[H],
    rows: &[Vec<String>],
) -> Result<(), anyhow::Error> {
    write_report_at(path, headers, rows, 0)
}

/// Like `write_report`, but the table starts at column `first_col` instead of A
#[allow(dead_code)]
pub fn write_report_at<H: AsRef<str>>(
    path: &Path,
    headers: &[H],
    rows: &[Vec<String>],
    first_col: u16,
) -> Result<(), anyhow::Error> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, first_col + col as u16, header.as_ref())?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            if !value.is_empty() {
                sheet.write_string(row_index as u32 + 1, first_col + col as u16, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Build a data row for `template`, filling every column with a placeholder
/// and setting the reviewer-facing columns explicitly.
#[allow(dead_code)]
pub fn review_row(
    template: &VendorTemplate,
    reviewer: &str,
    decision: &str,
    new_role: &str,
    comment: &str,
) -> Vec<String> {
    template
        .headers
        .iter()
        .map(|header| match header.as_str() {
            REVIEWER_NAME_COLUMN => reviewer.to_string(),
            RETAIN_REVOKE_COLUMN => decision.to_string(),
            NEW_ROLE_COLUMN => new_role.to_string(),
            COMMENTS_COLUMN => comment.to_string(),
            other => format!("{other} value"),
        })
        .collect()
}

/// Read every row of a worksheet back as text
#[allow(dead_code)]
pub fn read_sheet(path: &Path, sheet_name: &str) -> Result<Vec<Vec<String>>, anyhow::Error> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook.worksheet_range(sheet_name)?;
    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}
