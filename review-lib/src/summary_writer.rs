use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, FormatBorder, Workbook, Worksheet};
use std::path::Path;

use crate::accumulator::ResultSets;
use crate::classifier::Category;
use crate::sheet_reader::InputRow;
use crate::vendor::{DOMAIN_COLUMN, VendorRegistry, VendorTemplate};

/// Row count of one written summary sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCount {
    pub sheet_name: String,
    pub rows: usize,
}

fn header_format() -> Format {
    Format::new().set_bold().set_border(FormatBorder::Thin)
}

/// Write the consolidated workbook: one sheet per vendor and category.
///
/// Sheets come in registry order, each vendor contributing Revoke, New Role
/// and Comments sheets. The `Domain` column is left out, there is no index
/// column, the header row is frozen and columns are auto-fitted. Every sheet
/// is written even when it has no rows.
pub fn write_summary_workbook(
    path: &Path,
    registry: &VendorRegistry,
    results: &ResultSets,
) -> Result<Vec<SheetCount>> {
    let mut workbook = Workbook::new();

    // Fixed creation time keeps the file identical across re-runs on the same input
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    let header_format = header_format();
    let mut counts = Vec::new();

    for template in registry.templates() {
        for category in Category::ALL {
            let sheet_name = template.sheet_name(category);
            let rows = results.rows(&template.name, category);

            let sheet = workbook.add_worksheet();
            sheet
                .set_name(&sheet_name)
                .with_context(|| format!("Invalid worksheet name: {}", sheet_name))?;
            write_sheet(sheet, template, rows, &header_format)
                .with_context(|| format!("Failed to write worksheet: {}", sheet_name))?;

            counts.push(SheetCount {
                sheet_name,
                rows: rows.len(),
            });
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Summary workbook saved to: {}", path.display());
    Ok(counts)
}

fn write_sheet(
    sheet: &mut Worksheet,
    template: &VendorTemplate,
    rows: &[InputRow],
    header_format: &Format,
) -> Result<()> {
    // (source position, header name) for every column that makes it to the output
    let columns: Vec<(usize, &str)> = template
        .headers
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_str() != DOMAIN_COLUMN)
        .map(|(index, name)| (index, name.as_str()))
        .collect();

    for (col, (_, name)) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, header_format)?;
    }

    for (row_index, row) in rows.iter().enumerate() {
        let excel_row = row_index as u32 + 1;
        for (col, (source, _)) in columns.iter().enumerate() {
            if let Some(value) = row.value(*source) {
                sheet.write_string(excel_row, col as u16, value)?;
            }
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;
    use calamine::{Reader, Xlsx, open_workbook};

    #[test]
    fn test_empty_results_write_all_sheets_with_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.xlsx");
        let registry = VendorRegistry::default();

        let counts = write_summary_workbook(&path, &registry, &ResultSets::new()).unwrap();
        assert_eq!(counts.len(), 9);
        assert!(counts.iter().all(|c| c.rows == 0));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(
            workbook.sheet_names(),
            vec![
                "Revoke-Signant",
                "New Role-Signant",
                "Comments-Signant",
                "Revoke-ERT",
                "New Role-ERT",
                "Comments-ERT",
                "Revoke-EPX",
                "New Role-EPX",
                "Comments-EPX",
            ]
        );

        let range = workbook.worksheet_range("Revoke-ERT").unwrap();
        assert_eq!(range.height(), 1);
        assert_eq!(range.width(), 10);
    }

    #[test]
    fn test_domain_column_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.xlsx");
        let registry = VendorRegistry::default();
        let ert = &registry.templates()[1];

        let row = InputRow::new(
            ert.headers
                .iter()
                .map(|h| Some(format!("{} value", h)))
                .collect(),
        );
        let mut results = ResultSets::new();
        results.merge(
            "ERT",
            Classification {
                comment: vec![row],
                ..Default::default()
            },
        );

        write_summary_workbook(&path, &registry, &results).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Comments-ERT").unwrap();
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect();

        assert_eq!(rows.len(), 2);
        assert!(!rows[0].contains(&"Domain".to_string()));
        assert!(!rows[1].contains(&"Domain value".to_string()));
        assert_eq!(rows[0][0], "Study Name");
        assert_eq!(rows[1][0], "Study Name value");
        assert_eq!(rows[1][2], "First Name value");
    }
}
