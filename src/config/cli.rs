use crate::domain::ports::Storage;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.base_path)
    }

    async fn write_file(&self, name: &str, data: &[u8]) -> io::Result<()> {
        fs::write(self.base_path.join(name), data)
    }
}
