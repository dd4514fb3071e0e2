use crate::core::{Item, ItemIndex, Pipeline, Storage};
use crate::domain::model::id_key;
use crate::utils::error::{ErrorCategory, PrepError, Result};
use crate::utils::json::to_pretty_json;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub const REINDEXED_JSON_INDENT: usize = 2;

/// JSON array of items → JSON object keyed by each item's `id`.
pub struct ReindexPipeline<S: Storage> {
    storage: S,
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reindexed {
    pub index: ItemIndex,
    /// Display names of items dropped for lacking an id.
    pub skipped: Vec<String>,
    /// Number of inserts that replaced an item with the same id.
    pub overwritten: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReindexReport {
    pub output: PathBuf,
    pub restructured: usize,
    pub skipped: Vec<String>,
    pub overwritten: usize,
}

impl ReindexReport {
    pub fn warning_lines(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|name| format!("Warning: Item without id found: {}", name))
            .collect()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Successfully restructured {} items", self.restructured),
            format!("Output written to: {}", self.output.display()),
        ]
    }
}

/// Message printed when reindexing `input` fails.
pub fn failure_message(err: &PrepError, input: &Path) -> String {
    match (err.category(), err) {
        (ErrorCategory::MissingInput, _) => format!("Error: File '{}' not found", input.display()),
        (_, PrepError::InvalidJson { .. }) => format!("Error: Invalid JSON in '{}'", input.display()),
        _ => format!("Error: {}", err),
    }
}

/// Re-keys `items` by id. Items without a truthy id are skipped; a later
/// duplicate id replaces the earlier item in place.
pub fn reindex_items(items: Vec<Item>) -> Result<Reindexed> {
    let mut result = Reindexed::default();

    for (index, item) in items.into_iter().enumerate() {
        let key = match item.truthy_id() {
            Some(id) => id_key(id).ok_or_else(|| PrepError::UnsupportedId {
                index,
                id: id.clone(),
            })?,
            None => {
                let name = item.display_name();
                tracing::warn!("Item without id found: {}", name);
                result.skipped.push(name);
                continue;
            }
        };

        if result.index.insert(key.clone(), item) {
            tracing::debug!("Duplicate id '{}' replaced an earlier item", key);
            result.overwritten += 1;
        }
    }

    Ok(result)
}

impl<S: Storage> ReindexPipeline<S> {
    pub fn new(storage: S, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            input: input.into(),
            output: output.into(),
        }
    }
}

impl<S: Storage> Pipeline for ReindexPipeline<S> {
    type Extracted = Vec<Item>;
    type Transformed = Reindexed;
    type Report = ReindexReport;

    fn name(&self) -> &'static str {
        "array-to-map"
    }

    fn extract(&self) -> Result<Vec<Item>> {
        let bytes = self.storage.read_file(&self.input)?;
        let document: Value =
            serde_json::from_slice(&bytes).map_err(|source| PrepError::InvalidJson {
                path: self.input.clone(),
                source,
            })?;

        let elements = match document {
            Value::Array(elements) => elements,
            other => {
                return Err(PrepError::NotAnArray {
                    path: self.input.clone(),
                    found: json_kind(&other),
                })
            }
        };

        tracing::debug!("Read {} items from {}", elements.len(), self.input.display());

        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(fields) => Ok(Item(fields)),
                _ => Err(PrepError::NotAnObject { index }),
            })
            .collect()
    }

    fn transform(&self, data: Vec<Item>) -> Result<Reindexed> {
        reindex_items(data)
    }

    fn load(&self, result: Reindexed) -> Result<ReindexReport> {
        let json = to_pretty_json(&result.index, REINDEXED_JSON_INDENT)?;
        self.storage.write_file(&self.output, &json)?;

        Ok(ReindexReport {
            output: self.output.clone(),
            restructured: result.index.len(),
            skipped: result.skipped,
            overwritten: result.overwritten,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
