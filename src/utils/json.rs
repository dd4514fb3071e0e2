use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-prints `value` with `indent` spaces per level. No trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_indent_width() {
        let value = json!({"a": [1]});

        let two = String::from_utf8(to_pretty_json(&value, 2).unwrap()).unwrap();
        assert_eq!(two, "{\n  \"a\": [\n    1\n  ]\n}");

        let four = String::from_utf8(to_pretty_json(&value, 4).unwrap()).unwrap();
        assert_eq!(four, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let out = to_pretty_json(&json!(["épée"]), 2).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("épée"));
    }
}
