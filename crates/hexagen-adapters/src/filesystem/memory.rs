//! In-memory filesystem adapter for dry runs and testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use hexagen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::HexagenResult,
};

/// One mutating call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOperation {
    CreateDir(PathBuf),
    WriteFile(PathBuf),
    RemoveFile(PathBuf),
}

/// In-memory filesystem.
///
/// Clones share state, so a handle kept by the caller sees everything written
/// through the handle given to the driver.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    journal: Vec<FsOperation>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Mutating calls in order. Creating an existing directory is not
    /// journaled.
    pub fn journal(&self) -> Vec<FsOperation> {
        self.read()
            .map(|inner| inner.journal.clone())
            .unwrap_or_default()
    }

    fn read(&self) -> HexagenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> HexagenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> HexagenResult<()> {
        let mut inner = self.write()?;
        if inner.directories.contains(path) {
            return Ok(());
        }

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.journal.push(FsOperation::CreateDir(path.to_path_buf()));

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HexagenResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.journal.push(FsOperation::WriteFile(path.to_path_buf()));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> HexagenResult<()> {
        let mut inner = self.write()?;
        if inner.files.remove(path).is_some() {
            inner.journal.push(FsOperation::RemoveFile(path.to_path_buf()));
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn poisoned() -> hexagen_core::error::HexagenError {
    ApplicationError::LockPoisoned {
        resource: "memory filesystem",
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/Demo/Demo.Domain")).unwrap();

        assert!(fs.exists(Path::new("out")));
        assert!(fs.exists(Path::new("out/Demo")));
        assert_eq!(
            fs.journal(),
            [FsOperation::CreateDir(PathBuf::from("out/Demo/Demo.Domain"))]
        );
    }

    #[test]
    fn existing_directory_is_not_journaled_twice() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.create_dir_all(Path::new("out")).unwrap();
        assert_eq!(fs.journal().len(), 1);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/a.cs"), "x").is_err());

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a.cs"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("out/a.cs")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a.cs"), "x").unwrap();

        assert_eq!(handle.list_files(), [PathBuf::from("out/a.cs")]);
        handle.remove_file(Path::new("out/a.cs")).unwrap();
        handle.remove_file(Path::new("out/a.cs")).unwrap();
        assert!(!fs.exists(Path::new("out/a.cs")));
        assert_eq!(
            fs.journal().last(),
            Some(&FsOperation::RemoveFile(PathBuf::from("out/a.cs")))
        );
    }
}
