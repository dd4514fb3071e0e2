use crate::domain::model::{CellValue, Table};
use crate::domain::ports::SheetSource;
use crate::utils::error::{PrepError, Result};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Reader};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extensions calamine can open.
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads workbooks from disk with calamine.
#[derive(Debug, Clone)]
pub struct CalamineSource {
    base_path: PathBuf,
}

impl CalamineSource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for CalamineSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SheetSource for CalamineSource {
    fn read_first_sheet(&self, path: &Path) -> Result<Table> {
        let full_path = self.base_path.join(path);

        if let Err(e) = std::fs::metadata(&full_path) {
            if e.kind() == ErrorKind::NotFound {
                return Err(PrepError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Err(e.into());
        }

        let mut workbook = open_workbook_auto(&full_path)?;
        let sheet_names = workbook.sheet_names();
        tracing::debug!("Workbook {} has sheets {:?}", full_path.display(), sheet_names);

        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => {
                return Err(PrepError::NoWorksheet {
                    path: path.to_path_buf(),
                })
            }
        };

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(header_row) => header_row.iter().map(header_text).collect(),
            None => Vec::new(),
        };
        let data_rows: Vec<Vec<CellValue>> = rows
            .map(|row| row.iter().map(cell_value).collect())
            .collect();

        tracing::debug!(
            "Loaded {} columns and {} rows from first sheet",
            headers.len(),
            data_rows.len()
        );

        Ok(Table::new(headers, data_rows))
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

pub(crate) fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Number((*i).into()),
        Data::Float(f) => CellValue::from_f64(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => date_time_value(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

/// Dates become epoch milliseconds, durations plain milliseconds.
fn date_time_value(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        return dt
            .as_duration()
            .map(|d| CellValue::Number(d.num_milliseconds().into()))
            .unwrap_or(CellValue::Null);
    }

    match dt.as_datetime() {
        Some(naive) => CellValue::Number(epoch_millis(naive).into()),
        None => CellValue::from_f64(dt.as_f64()),
    }
}

fn epoch_millis(naive: chrono::NaiveDateTime) -> i64 {
    naive.and_utc().timestamp_millis()
}
