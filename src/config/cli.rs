use crate::core::Storage;
use crate::utils::error::{ManifestError, Result};
use std::fs;
use std::io::ErrorKind;

/// Filesystem-backed storage. Paths are used as given; parent directories are never created.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ManifestError::NotFound {
                path: path.to_string(),
            },
            _ => ManifestError::Read {
                path: path.to_string(),
                source: e,
            },
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        // 單次寫入，存在則截斷
        fs::write(path, data)?;
        Ok(())
    }
}
