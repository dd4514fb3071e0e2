pub mod convert;
pub mod etl;
pub mod reindex;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{CellValue, Item, ItemIndex, Table};
pub use crate::domain::ports::{Pipeline, SheetSource, Storage};
pub use crate::utils::error::Result;
