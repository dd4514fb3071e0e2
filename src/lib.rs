pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{CalamineSource, LocalStorage};
pub use crate::core::{convert::SpreadsheetPipeline, etl::EtlEngine, reindex::ReindexPipeline};
pub use utils::error::{PrepError, Result};
