use crate::core::{Pipeline, SheetSource, Storage, Table};
use crate::utils::error::{ErrorCategory, PrepError, Result};
use crate::utils::json::to_pretty_json;
use std::path::{Path, PathBuf};

pub const CONVERTED_JSON_INDENT: usize = 4;

/// Spreadsheet → JSON array of row objects, with embedded JSON unpacked.
pub struct SpreadsheetPipeline<R: SheetSource, S: Storage> {
    source: R,
    storage: S,
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
}

impl ConvertReport {
    pub fn success_message(&self) -> String {
        format!(
            "✅ Successfully converted '{}' to '{}'",
            self.input.display(),
            self.output.display()
        )
    }
}

/// Message printed when a conversion of `input` fails.
pub fn failure_message(err: &PrepError, input: &Path) -> String {
    match err.category() {
        ErrorCategory::MissingInput => {
            format!("❌ Error: The file '{}' was not found.", input.display())
        }
        _ => format!("❌ An unexpected error occurred: {}", err),
    }
}

impl<R: SheetSource, S: Storage> SpreadsheetPipeline<R, S> {
    pub fn new(source: R, storage: S, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            storage,
            input: input.into(),
            output: output.into(),
        }
    }
}

impl<R: SheetSource, S: Storage> Pipeline for SpreadsheetPipeline<R, S> {
    type Extracted = Table;
    type Transformed = Table;
    type Report = ConvertReport;

    fn name(&self) -> &'static str {
        "spreadsheet-to-json"
    }

    fn extract(&self) -> Result<Table> {
        tracing::debug!("Reading first worksheet of {}", self.input.display());
        self.source.read_first_sheet(&self.input)
    }

    fn transform(&self, data: Table) -> Result<Table> {
        Ok(data.normalize_cells())
    }

    fn load(&self, result: Table) -> Result<ConvertReport> {
        let json = to_pretty_json(&result, CONVERTED_JSON_INDENT)?;
        self.storage.write_file(&self.output, &json)?;

        Ok(ConvertReport {
            input: self.input.clone(),
            output: self.output.clone(),
            rows: result.row_count(),
        })
    }
}
