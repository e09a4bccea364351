//! Provides the file system based storage implementation.

use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::storage;
use crate::storage::Storage;
use crate::Config;

/// The storage implementation that uses the file system.
///
/// A key is a file name relative to `base_dir`.
#[derive(Debug, Clone)]
pub struct FsStorage {
    base_dir: PathBuf,
    config: Config,
}

impl FsStorage {
    pub fn new(base_dir: PathBuf) -> Self {
        Self::with_config(base_dir, Config::default())
    }

    pub fn with_config(base_dir: PathBuf, config: Config) -> Self {
        Self { base_dir, config }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }
}

impl Storage for FsStorage {
    fn reader(&mut self, key: &str) -> Result<storage::BoxReader, io::Error> {
        let path = self.base_dir.join(key);

        let f = fs::OpenOptions::new().read(true).open(&path)?;
        let f = io::BufReader::with_capacity(self.config.read_buffer_size(), f);

        Ok(Box::new(f))
    }

    fn writer(&mut self, key: &str) -> Result<storage::BoxWriter, io::Error> {
        let target_path = self.base_dir.join(key);

        let w = FsWriter::new(target_path)?.with_sync(self.config.sync_on_commit());
        Ok(Box::new(w))
    }
}

/// The writer implementation that uses the file system.
///
/// This writer writes data to a temporary file and then moves it to the target file.
/// This ensures that the target file is always in a consistent state.
///
/// Every writer has its own temporary file next to the target, so concurrent
/// writers of one key never share bytes: the last one to commit wins.
/// The temporary file is removed if the writer is dropped without a successful commit.
#[derive(Debug)]
pub struct FsWriter {
    /// The temp file being written, `None` once it is flushed.
    file: Option<io::BufWriter<NamedTempFile>>,

    /// The flushed temp file waiting to replace the target.
    flushed: Option<NamedTempFile>,

    sync: bool,
    synced: bool,
    committed: bool,
    target_path: PathBuf,
}

impl FsWriter {
    /// Create a new writer with a unique temp file in the directory of `target_path`.
    pub fn new(target_path: PathBuf) -> Result<Self, io::Error> {
        let dir = target_path.parent().unwrap_or_else(|| Path::new(""));
        fs::create_dir_all(dir)?;

        let prefix = match target_path.file_name() {
            Some(name) => format!(".{}.", name.to_string_lossy()),
            None => ".".to_string(),
        };

        let f = tempfile::Builder::new().prefix(&prefix).suffix(".tmp").tempfile_in(dir)?;

        // Buffering is done by the accessor, only smooth out tiny writes here.
        let file = io::BufWriter::with_capacity(4 * 1024, f);

        Ok(Self {
            file: Some(file),
            flushed: None,
            sync: true,
            synced: false,
            committed: false,
            target_path,
        })
    }

    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Path of the temp file, until it is committed.
    pub fn temp_path(&self) -> Option<&Path> {
        match (&self.file, &self.flushed) {
            (Some(w), _) => Some(w.get_ref().path()),
            (None, Some(f)) => Some(f.path()),
            (None, None) => None,
        }
    }

    fn file_mut(&mut self) -> Result<&mut io::BufWriter<NamedTempFile>, io::Error> {
        self.file.as_mut().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("write after commit: {}", self.target_path.display()),
            )
        })
    }
}

impl Write for FsWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.file_mut()?.write(buf)
    }
    fn flush(&mut self) -> Result<(), io::Error> {
        self.file_mut()?.flush()
    }
}

impl storage::Writer for FsWriter {
    fn commit(&mut self) -> Result<(), io::Error> {
        if self.committed {
            return Ok(());
        }

        // Each step puts its state back on failure so that commit() can be retried.
        if let Some(w) = self.file.take() {
            match w.into_inner() {
                Ok(f) => self.flushed = Some(f),
                Err(e) => {
                    let (err, w) = e.into_parts();
                    self.file = Some(w);
                    return Err(err);
                }
            }
        }

        let Some(f) = self.flushed.take() else {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("no temp file to commit: {}", self.target_path.display()),
            ));
        };

        if self.sync && !self.synced {
            if let Err(err) = f.as_file().sync_all() {
                self.flushed = Some(f);
                return Err(err);
            }
            self.synced = true;
        }

        if let Err(e) = f.persist(&self.target_path) {
            self.flushed = Some(e.file);
            return Err(e.error);
        }
        self.committed = true;

        Ok(())
    }
}
