use crate::domain::model::Table;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// Loads the first worksheet of a workbook.
pub trait SheetSource {
    fn read_first_sheet(&self, path: &Path) -> Result<Table>;
}

pub trait Pipeline {
    type Extracted;
    type Transformed;
    type Report;

    fn name(&self) -> &'static str;
    fn extract(&self) -> Result<Self::Extracted>;
    fn transform(&self, data: Self::Extracted) -> Result<Self::Transformed>;
    fn load(&self, result: Self::Transformed) -> Result<Self::Report>;
}
