//! Reading and writing whole files through an injected byte store.
//!
//! [`FileManager`] owns no I/O of its own. [`FsStore`] backs it with the real
//! filesystem in the drivers, and [`MemoryStore`] keeps everything in a map so
//! the same logic runs under test without touching disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::error::{Result, SolidError};

pub trait ByteStore {
    fn get(&self, path: &Path) -> Result<Vec<u8>>;
    fn put(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}

impl<S: ByteStore + ?Sized> ByteStore for &S {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        (**self).get(path)
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        (**self).put(path, bytes)
    }
}

/// Creates or truncates files with the platform's default permissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl ByteStore for FsStore {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = fs::read(path).map_err(|err| SolidError::read(path, err))?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(|err| SolidError::write(path, err))?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), bytes.into());
        self
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }
}

impl ByteStore for MemoryStore {
    fn get(&self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| {
                SolidError::read(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "file not found"),
                )
            })
    }

    fn put(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FileManager<S = FsStore> {
    store: S,
}

impl FileManager {
    pub fn new() -> Self {
        Self { store: FsStore }
    }
}

impl<S: ByteStore> FileManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        self.store.get(path.as_ref())
    }

    pub fn write_file(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
        self.store.put(path.as_ref(), data)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_round_trip() {
        let manager = FileManager::with_store(MemoryStore::new());
        manager.write_file("notes.txt", b"hello").unwrap();
        assert_eq!(manager.read_file("notes.txt").unwrap(), b"hello");
    }

    #[test]
    fn test_memory_missing_file_is_read_error() {
        let manager = FileManager::with_store(MemoryStore::new());
        let err = manager.read_file("missing.txt").unwrap_err();
        match err {
            SolidError::Read { path, source } => {
                assert_eq!(path, PathBuf::from("missing.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_memory_write_overwrites() {
        let store = MemoryStore::new().with_file("data.bin", vec![1u8, 2, 3]);
        let manager = FileManager::with_store(store);
        manager.write_file("data.bin", &[9]).unwrap();
        assert_eq!(manager.read_file("data.bin").unwrap(), vec![9]);
        assert!(manager.store().contains(Path::new("data.bin")));
    }

    #[test]
    fn test_fs_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let manager = FileManager::new();

        manager.write_file(&path, "Пример данных".as_bytes()).unwrap();
        assert_eq!(manager.read_file(&path).unwrap(), "Пример данных".as_bytes());
    }

    #[test]
    fn test_fs_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let manager = FileManager::new();

        manager.write_file(&path, b"a much longer first version").unwrap();
        manager.write_file(&path, b"short").unwrap();
        assert_eq!(manager.read_file(&path).unwrap(), b"short");
    }

    #[test]
    fn test_fs_missing_file() {
        let dir = tempdir().unwrap();
        let result = FileManager::new().read_file(dir.path().join("example.txt"));
        assert!(matches!(result, Err(SolidError::Read { .. })));
    }

    #[test]
    fn test_fs_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("output.txt");
        let result = FileManager::new().write_file(&path, b"data");
        assert!(matches!(result, Err(SolidError::Write { .. })));
    }

    proptest! {
        #[test]
        fn test_memory_store_returns_bytes_written(
            name in "[a-z]{1,12}",
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let manager = FileManager::with_store(MemoryStore::new());
            manager.write_file(&name, &bytes).unwrap();
            prop_assert_eq!(manager.read_file(&name).unwrap(), bytes);
        }

        #[test]
        fn test_fs_store_returns_bytes_written(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let dir = tempdir().unwrap();
            let path = dir.path().join("blob.bin");
            let manager = FileManager::new();
            manager.write_file(&path, &bytes).unwrap();
            prop_assert_eq!(manager.read_file(&path).unwrap(), bytes);
        }
    }
}
