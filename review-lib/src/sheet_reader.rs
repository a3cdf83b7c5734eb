use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

use crate::error::FileError;
use crate::utils::{cell_to_text, header_cell_text};

/// One data row, cell values aligned with the header row. `None` marks a
/// missing value (empty after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputRow {
    pub values: Vec<Option<String>>,
}

impl InputRow {
    pub fn new(values: Vec<Option<String>>) -> Self {
        InputRow { values }
    }

    /// Value at a header position, `None` when missing or out of range
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Header row plus data rows of the first worksheet in a workbook
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    pub headers: Vec<String>,
    pub rows: Vec<InputRow>,
}

/// Read the first worksheet of an `.xlsx` file.
///
/// The first row is the header and is kept verbatim. Every other cell is read
/// as trimmed text. Rows with no values at all are dropped. Columns are counted
/// from column A, so blank leading columns stay part of the header.
pub fn read_first_sheet(path: &Path) -> Result<SheetData, FileError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let unreadable = |message: String| FileError::Unreadable {
        file_name: file_name.clone(),
        message,
    };

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| unreadable(format!("{e}")))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(unreadable(format!("{e}"))),
        None => return Err(unreadable("the workbook has no worksheets".to_string())),
    };

    // calamine ranges start at the first used cell, not at A1
    let leading_columns = range.start().map_or(0, |(_, col)| col as usize);
    if leading_columns == 0 {
        return Ok(rows_to_sheet_data(range.rows()));
    }

    let padded = pad_leading_columns(range.rows(), leading_columns);
    return Ok(rows_to_sheet_data(padded.iter().map(Vec::as_slice)));
}

/// Prefix every row with `count` empty cells
pub fn pad_leading_columns<'a, I>(rows: I, count: usize) -> Vec<Vec<Data>>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    rows.into_iter()
        .map(|row| {
            let mut cells = vec![Data::Empty; count];
            cells.extend_from_slice(row);
            cells
        })
        .collect()
}

/// Split raw rows into header and data rows
pub fn rows_to_sheet_data<'a, I>(rows: I) -> SheetData
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(header_cell_text).collect(),
        None => return SheetData::default(),
    };

    let parsed_rows = rows
        .map(|row| {
            let mut values: Vec<Option<String>> = row.iter().map(cell_to_text).collect();
            values.resize(headers.len().max(values.len()), None);
            InputRow::new(values)
        })
        .filter(|row| !row.is_empty())
        .collect();

    SheetData {
        headers,
        rows: parsed_rows,
    }
}
