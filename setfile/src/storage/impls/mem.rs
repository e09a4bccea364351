//! In-memory storage, mainly for tests.
//!
//! Clones of a [`MemStorage`] share the same files, so a test can keep one
//! clone to inspect what an accessor committed through another.
//! Faults can be injected to exercise the error paths of the accessor.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::io;
use std::io::BufRead;
use std::io::Read;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::storage;
use crate::storage::Storage;

/// An operation of the medium that can be made to fail.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, PartialOrd, Ord)]
pub enum Fault {
    /// `Storage::reader()` and `Storage::writer()` fail.
    Open,
    /// Reading from an opened reader fails.
    Read,
    /// `Write::write()` on an opened writer fails.
    Write,
    /// `Writer::commit()` fails.
    Commit,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<String, Vec<u8>>,
    faults: BTreeSet<Fault>,
    commits: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the committed content of `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner().files.get(key).cloned()
    }

    /// Replace the committed content of `key` without going through a writer.
    pub fn put(&self, key: &str, data: impl Into<Vec<u8>>) {
        self.inner().files.insert(key.to_string(), data.into());
    }

    /// Number of successful commits so far, on any key.
    pub fn commits(&self) -> u64 {
        self.inner().commits
    }

    /// Make every subsequent `fault` operation fail until it is cleared.
    pub fn inject(&self, fault: Fault) {
        self.inner().faults.insert(fault);
    }

    pub fn clear(&self, fault: Fault) {
        self.inner().faults.remove(&fault);
    }

    pub fn clear_all(&self) {
        self.inner().faults.clear();
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(&self, fault: Fault) -> Result<(), io::Error> {
        if self.inner().faults.contains(&fault) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("injected fault: {:?}", fault),
            ));
        }
        Ok(())
    }
}

impl Storage for MemStorage {
    fn reader(&mut self, key: &str) -> Result<storage::BoxReader, io::Error> {
        self.check(Fault::Open)?;

        let data = self.get(key).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such key: {}", key))
        })?;

        Ok(Box::new(MemReader {
            data: io::Cursor::new(data),
            storage: self.clone(),
        }))
    }

    fn writer(&mut self, key: &str) -> Result<storage::BoxWriter, io::Error> {
        self.check(Fault::Open)?;

        Ok(Box::new(MemWriter {
            key: key.to_string(),
            buf: Vec::new(),
            committed: false,
            storage: self.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct MemReader {
    data: io::Cursor<Vec<u8>>,
    storage: MemStorage,
}

impl Read for MemReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.storage.check(Fault::Read)?;
        self.data.read(buf)
    }
}

impl BufRead for MemReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.storage.check(Fault::Read)?;
        self.data.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.data.consume(amt)
    }
}

/// Collects the written bytes and installs them under its key on commit.
#[derive(Debug)]
pub struct MemWriter {
    key: String,
    buf: Vec<u8>,
    committed: bool,
    storage: MemStorage,
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.committed {
            return Err(io::Error::new(io::ErrorKind::Other, "write after commit"));
        }
        self.storage.check(Fault::Write)?;
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl storage::Writer for MemWriter {
    fn commit(&mut self) -> Result<(), io::Error> {
        if self.committed {
            return Ok(());
        }
        self.storage.check(Fault::Commit)?;

        let mut inner = self.storage.inner();
        inner.files.insert(self.key.clone(), std::mem::take(&mut self.buf));
        inner.commits += 1;
        drop(inner);

        self.committed = true;
        Ok(())
    }
}
