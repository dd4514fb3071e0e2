// Adapters layer: concrete implementations of the domain ports.

pub mod local;
pub mod spreadsheet;

pub use local::LocalStorage;
pub use spreadsheet::CalamineSource;
