use calamine::Data;

use crate::utils::excel_serial_to_datetime;

/// Trim a cell value, treating blank text as a missing value
pub fn clean_cell_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Render a header cell verbatim. Header names are compared exactly,
/// so no trimming or normalization happens here.
pub fn header_cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        other => cell_to_text(other).unwrap_or_default(),
    }
}

/// Read any cell as text, the way a string-typed data frame load would see it.
///
/// Error cells and blank text come back as `None`.
pub fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => clean_cell_text(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.is_nan() || f.is_infinite() {
                None
            } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                Some((*f as i64).to_string())
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => excel_serial_to_datetime(dt.as_f64())
            .map(|parsed| parsed.format("%Y-%m-%d %H:%M:%S").to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => clean_cell_text(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cell_text_trims() {
        assert_eq!(clean_cell_text("  Revoke \t"), Some("Revoke".to_string()));
    }

    #[test]
    fn test_clean_cell_text_blank_is_missing() {
        assert_eq!(clean_cell_text(""), None);
        assert_eq!(clean_cell_text("   \n "), None);
    }

    #[test]
    fn test_cell_to_text_numbers() {
        assert_eq!(cell_to_text(&Data::Float(101.0)), Some("101".to_string()));
        assert_eq!(cell_to_text(&Data::Float(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_to_text(&Data::Int(42)), Some("42".to_string()));
    }

    #[test]
    fn test_cell_to_text_missing_values() {
        assert_eq!(cell_to_text(&Data::Empty), None);
        assert_eq!(cell_to_text(&Data::String("  ".to_string())), None);
        assert_eq!(
            cell_to_text(&Data::Error(calamine::CellErrorType::NA)),
            None
        );
    }

    #[test]
    fn test_header_cell_text_is_verbatim() {
        let cell = Data::String(" Domain ".to_string());
        assert_eq!(header_cell_text(&cell), " Domain ");
    }
}
