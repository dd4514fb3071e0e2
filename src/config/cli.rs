use crate::adapters::spreadsheet::SPREADSHEET_EXTENSIONS;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SPREADSHEET: &str = "Items.xlsx";
pub const DEFAULT_ITEMS_JSON: &str = "Items.json";

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Spreadsheet to read; only the first worksheet is used
    #[arg(default_value = DEFAULT_SPREADSHEET)]
    pub input: PathBuf,

    /// JSON file to write (overwritten)
    #[arg(default_value = DEFAULT_ITEMS_JSON)]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for ConvertArgs {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, SPREADSHEET_EXTENSIONS)?;
        validate_path("output", &self.output)
    }
}

#[derive(Debug, Clone, Args)]
#[command(after_help = "Unless exactly two paths are given, both input and output default to \
Items.json, so the file is rewritten in place.")]
pub struct ReindexArgs {
    /// INPUT and OUTPUT paths; any other count falls back to Items.json for both
    #[arg(value_name = "PATHS", num_args = 0..)]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ReindexArgs {
    /// Returns `(input, output)`.
    pub fn resolve(&self) -> (PathBuf, PathBuf) {
        match self.paths.as_slice() {
            [input, output] => (input.clone(), output.clone()),
            others => {
                if !others.is_empty() {
                    tracing::warn!(
                        "Expected 0 or 2 paths but got {}; using {} for input and output",
                        others.len(),
                        DEFAULT_ITEMS_JSON
                    );
                }
                (
                    PathBuf::from(DEFAULT_ITEMS_JSON),
                    PathBuf::from(DEFAULT_ITEMS_JSON),
                )
            }
        }
    }
}

impl Validate for ReindexArgs {
    fn validate(&self) -> Result<()> {
        if let [input, output] = self.paths.as_slice() {
            validate_path("input", input)?;
            validate_path("output", output)?;
        }
        Ok(())
    }
}

/// Standalone spreadsheet converter.
#[derive(Debug, Parser)]
#[command(name = "excel_to_json")]
#[command(about = "Convert the first worksheet of a spreadsheet into a JSON array, unpacking embedded JSON cells")]
pub struct ConvertCli {
    #[command(flatten)]
    pub args: ConvertArgs,
}

/// Standalone item reindexer.
#[derive(Debug, Parser)]
#[command(name = "items_by_id")]
#[command(about = "Re-key a JSON array of items into an object keyed by each item's id")]
pub struct ReindexCli {
    #[command(flatten)]
    pub args: ReindexArgs,
}

#[derive(Debug, Parser)]
#[command(name = "item-prep")]
#[command(about = "Prepare the item dataset: spreadsheet to JSON, and JSON array to id map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a spreadsheet into a JSON array of row objects
    Convert(ConvertArgs),
    /// Re-key a JSON array of items by id
    Reindex(ReindexArgs),
}
