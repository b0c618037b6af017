use domain::ports::{FileStore, PortError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// [`FileStore`] over the real filesystem
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        fs::read(path).map_err(|e| PortError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        fs::write(path, contents).map_err(|e| PortError::io(path, e))
    }

    fn append(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(contents))
            .map_err(|e| PortError::io(path, e))
    }

    fn create_dir(&self, path: &Path) -> Result<(), PortError> {
        fs::create_dir(path).map_err(|e| PortError::io(path, e))
    }

    fn remove_all(&self, path: &Path) -> Result<(), PortError> {
        let metadata = fs::symlink_metadata(path).map_err(|e| PortError::io(path, e))?;
        let result = if metadata.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| PortError::io(path, e))
    }
}
