use crate::utils::error::{PrepError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let text = path.to_string_lossy();

    if text.trim().is_empty() {
        return Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if text.contains('\0') {
        return Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    path: &Path,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(PrepError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", Path::new("Items.json")).is_ok());
        assert!(validate_path("input", Path::new("")).is_err());
        assert!(validate_path("input", Path::new("  ")).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["xlsx", "ods"];
        assert!(validate_file_extension("input", Path::new("Items.xlsx"), &allowed).is_ok());
        assert!(validate_file_extension("input", Path::new("ITEMS.XLSX"), &allowed).is_ok());
        assert!(validate_file_extension("input", Path::new("data/items.ods"), &allowed).is_ok());
        assert!(validate_file_extension("input", Path::new("Items.csv"), &allowed).is_err());
        assert!(validate_file_extension("input", Path::new("Items"), &allowed).is_err());
    }
}
