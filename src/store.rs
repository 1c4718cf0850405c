//! Backing store for the hosts document.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::config::{resolve_hosts_file, Config};
use crate::error::{HostyError, Result};

/// Whole-document read and write; the only two operations hosty performs.
pub trait HostsStore {
    fn read(&self) -> Result<String>;
    fn write(&self, content: &str) -> Result<()>;
}

/// Store backed by a file on disk, with advisory locks around each access.
#[derive(Debug, Clone)]
pub struct FileHostsStore {
    path: PathBuf,
}

impl FileHostsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_err(&self, source: std::io::Error) -> HostyError {
        HostyError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_err(&self, source: std::io::Error) -> HostyError {
        HostyError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl HostsStore for FileHostsStore {
    fn read(&self) -> Result<String> {
        let mut file = fs::File::open(&self.path).map_err(|e| self.read_err(e))?;
        FileExt::lock_shared(&file).map_err(|e| self.read_err(e))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| self.read_err(e))?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "read hosts file");
        Ok(content)
    }

    fn write(&self, content: &str) -> Result<()> {
        // Truncate only once the lock is held.
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.write_err(e))?;
        FileExt::lock_exclusive(&file).map_err(|e| self.write_err(e))?;
        file.set_len(0).map_err(|e| self.write_err(e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| self.write_err(e))?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "wrote hosts file");
        Ok(())
    }
}

/// File store for the configured hosts path.
pub fn default_store(config: &Config) -> FileHostsStore {
    FileHostsStore::new(resolve_hosts_file(config))
}
