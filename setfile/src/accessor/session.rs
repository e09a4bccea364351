use std::fmt;
use std::io;
use std::io::BufRead;

use crate::io_util::drain_into;
use crate::storage::BoxReader;
use crate::storage::BoxWriter;
use crate::storage::Storage;
use crate::OpenState;
use crate::ReadStatus;

/// The per-mode state of an accessor.
///
/// Buffered bytes only exist inside a [`WriteSession`] and the read cursor
/// only inside a [`ReadSession`], so neither can outlive its mode.
#[derive(Debug)]
pub(crate) enum Session {
    Closed,
    Read(ReadSession),
    Write(WriteSession),
}

impl Session {
    pub(crate) fn state(&self) -> OpenState {
        match self {
            Session::Closed => OpenState::Closed,
            Session::Read(_) => OpenState::OpenForRead,
            Session::Write(_) => OpenState::OpenForWrite,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ReadSession {
    /// `None` if nothing was ever committed: reads as an empty file.
    reader: Option<BoxReader>,
    position: u64,
}

impl ReadSession {
    pub(crate) fn new(reader: Option<BoxReader>) -> Self {
        Self { reader, position: 0 }
    }

    pub(crate) fn position(&self) -> u64 {
        self.position
    }

    pub(crate) fn read_byte(&mut self) -> Result<Option<u8>, io::Error> {
        let Some(r) = self.reader.as_mut() else {
            return Ok(None);
        };

        let first = loop {
            match r.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        };

        if first.is_some() {
            r.consume(1);
            self.position += 1;
        }
        Ok(first)
    }

    /// Append bytes up to and including the next `\n` to `buf`.
    pub(crate) fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<ReadStatus, io::Error> {
        let Some(r) = self.reader.as_mut() else {
            return Ok(ReadStatus::EndOfFile);
        };

        let n = r.read_until(b'\n', buf)?;
        self.position += n as u64;

        // `buf` may already end with a `\n` from the caller, only look at what was read.
        if n > 0 && buf.last() == Some(&b'\n') {
            Ok(ReadStatus::Success)
        } else {
            Ok(ReadStatus::EndOfFile)
        }
    }
}

/// Buffers written bytes and hands them to a medium writer in batches.
///
/// The medium writer is opened on the first flush, so that a session that
/// only buffers never touches the medium before it is closed.
pub(crate) struct WriteSession {
    pending: Vec<u8>,
    writer: Option<BoxWriter>,

    /// Bytes accepted by the medium writer so far.
    flushed: u64,
}

impl fmt::Debug for WriteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteSession")
            .field("pending", &self.pending.len())
            .field("writer", &self.writer)
            .field("flushed", &self.flushed)
            .finish()
    }
}

impl WriteSession {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
            writer: None,
            flushed: 0,
        }
    }

    pub(crate) fn pending(&self) -> &[u8] {
        &self.pending
    }

    pub(crate) fn flushed(&self) -> u64 {
        self.flushed
    }

    pub(crate) fn append(&mut self, data: &[u8]) {
        self.pending.extend_from_slice(data);
    }

    /// Hand all pending bytes to the medium writer of `key`, opening it if needed.
    ///
    /// On error the bytes the writer did not accept stay pending.
    pub(crate) fn flush<S: Storage>(&mut self, storage: &mut S, key: &str) -> Result<(), io::Error> {
        let mut w = match self.writer.take() {
            Some(w) => w,
            None => storage.writer(key)?,
        };

        let before = self.pending.len();
        let res = drain_into(w.as_mut(), &mut self.pending);
        self.flushed += (before - self.pending.len()) as u64;
        self.writer = Some(w);

        res.map(|_| ())
    }

    /// Flush and commit everything written in this session.
    ///
    /// It can be called again after an error, to retry with whatever is left.
    pub(crate) fn finish<S: Storage>(&mut self, storage: &mut S, key: &str) -> Result<(), io::Error> {
        self.flush(storage, key)?;

        if let Some(w) = self.writer.as_mut() {
            w.commit()?;
        }
        Ok(())
    }
}
