use std::path::Path;

use super::PortError;

/// Filesystem capability used by the provisioner
pub trait FileStore: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> Result<Vec<u8>, PortError>;

    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            PortError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })
    }

    /// Create or truncate `path` with `contents`
    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PortError>;

    /// Append to `path`, creating it when missing
    fn append(&self, path: &Path, contents: &[u8]) -> Result<(), PortError>;

    /// Create a single directory; the parent must exist
    fn create_dir(&self, path: &Path) -> Result<(), PortError>;

    /// Recursively delete a file or directory tree
    fn remove_all(&self, path: &Path) -> Result<(), PortError>;

    fn copy(&self, from: &Path, to: &Path) -> Result<(), PortError> {
        let contents = self.read(from)?;
        self.write(to, &contents)
    }
}
