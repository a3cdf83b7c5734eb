use std::path::Path;

// Re-export shared test utilities from src/test_utils.rs
pub use review_lib::test_utils::{
    builtin_template, read_sheet, review_row, write_report, write_report_at,
};

/// Write a report for a built-in vendor with the given (reviewer, decision, new role, comment) rows
#[allow(dead_code)]
pub fn write_vendor_report(dir: &Path, file_name: &str, vendor: &str, rows: &[[&str; 4]]) {
    let template = builtin_template(vendor);
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|[reviewer, decision, new_role, comment]| {
            review_row(&template, reviewer, decision, new_role, comment)
        })
        .collect();
    write_report(&dir.join(file_name), &template.headers, &rows).unwrap();
}

/// Data rows of a summary sheet (header row dropped)
#[allow(dead_code)]
pub fn data_rows(path: &Path, sheet_name: &str) -> Vec<Vec<String>> {
    read_sheet(path, sheet_name).unwrap().into_iter().skip(1).collect()
}

/// Run log lines in file order
#[allow(dead_code)]
pub fn log_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
