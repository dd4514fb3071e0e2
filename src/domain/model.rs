use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

/// A single spreadsheet cell after loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

impl CellValue {
    /// Interprets `text` as JSON. Anything that does not parse stays a string.
    pub fn parse_embedded(text: &str) -> CellValue {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => CellValue::from(value),
            Err(_) => CellValue::String(text.to_string()),
        }
    }

    /// Unpacks embedded JSON in string cells; other variants pass through.
    pub fn normalize(self) -> CellValue {
        match self {
            CellValue::String(text) => CellValue::parse_embedded(&text),
            other => other,
        }
    }

    /// Integral floats become integers, non-finite floats become `Null`.
    pub fn from_f64(number: f64) -> CellValue {
        const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

        if number.fract() == 0.0 && number.abs() < EXACT_LIMIT {
            return CellValue::Number(Number::from(number as i64));
        }
        Number::from_f64(number)
            .map(CellValue::Number)
            .unwrap_or(CellValue::Null)
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => CellValue::Number(n),
            Value::String(s) => CellValue::String(s),
            Value::Array(items) => CellValue::Array(items),
            Value::Object(fields) => CellValue::Object(fields),
        }
    }
}

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Null => Value::Null,
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Number(n) => Value::Number(n),
            CellValue::String(s) => Value::String(s),
            CellValue::Array(items) => Value::Array(items),
            CellValue::Object(fields) => Value::Object(fields),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Number(n) => n.serialize(serializer),
            CellValue::String(s) => serializer.serialize_str(s),
            CellValue::Array(items) => items.serialize(serializer),
            CellValue::Object(fields) => fields.serialize(serializer),
        }
    }
}

/// First worksheet of a workbook: a header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Builds a table from raw header texts, making every column name unique.
    pub fn new(raw_headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            headers: unique_headers(raw_headers),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn normalize_cells(self) -> Table {
        let rows = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(CellValue::normalize).collect())
            .collect();
        Table {
            headers: self.headers,
            rows,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = RowRecord<'_>> {
        self.rows.iter().map(move |cells| RowRecord {
            headers: &self.headers,
            cells,
        })
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

/// One data row viewed as a header → cell object.
pub struct RowRecord<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (index, header) in self.headers.iter().enumerate() {
            // short rows are padded with null
            match self.cells.get(index) {
                Some(cell) => map.serialize_entry(header, cell)?,
                None => map.serialize_entry(header, &CellValue::Null)?,
            }
        }
        map.end()
    }
}

fn unique_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(raw.len());

    for (index, header) in raw.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", index)
        } else {
            header
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        seen.push(candidate);
    }

    seen
}

/// A single record of the item array.
#[derive(Debug, Clone, PartialEq)]
pub struct Item(pub Map<String, Value>);

impl Item {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Label used in warnings: the `Name` field, or "Unknown" when it is absent.
    pub fn display_name(&self) -> String {
        match self.0.get("Name") {
            Some(Value::String(name)) => name.clone(),
            None => "Unknown".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// The `id` value when it counts as set; absent and falsy ids yield `None`.
    pub fn truthy_id(&self) -> Option<&Value> {
        self.id().filter(|id| is_truthy(id))
    }
}

/// Items re-keyed by id, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemIndex(pub Map<String, Value>);

impl ItemIndex {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Inserts `item` under `key`; returns true when an earlier item was replaced.
    pub fn insert(&mut self, key: String, item: Item) -> bool {
        self.0.insert(key, Value::Object(item.0)).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl Serialize for ItemIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Map key for an id. Arrays and objects have no key form.
pub fn id_key(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
