use crate::core::Storage;
use crate::utils::error::{PrepError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for pipeline tests.
#[derive(Default)]
pub(crate) struct MockStorage {
    pub files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MockStorage {
    pub fn with_file(path: &str, data: &str) -> Self {
        let storage = Self::default();
        storage
            .files
            .borrow_mut()
            .insert(PathBuf::from(path), data.as_bytes().to_vec());
        storage
    }
}

impl Storage for MockStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| PrepError::FileNotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}
