use std::io;

use crate::accessor::session::ReadSession;
use crate::accessor::session::Session;
use crate::accessor::session::WriteSession;
use crate::num::format_bytes;
use crate::storage::Storage;
use crate::Config;
use crate::Error;
use crate::OpenState;
use crate::ReadStatus;
use crate::SettingsFile;

/// A [`SettingsFile`] stored under `key` in a [`Storage`].
///
/// Writes are collected in memory and handed to the storage once
/// [`Config::write_buffer_size`] bytes are pending, and when the file is
/// closed. Dropping an accessor that is still open for writing force-closes it.
#[derive(Debug)]
pub struct SettingsAccessor<S>
where S: Storage
{
    storage: S,
    config: Config,
    key: String,
    session: Session,
}

impl<S> SettingsAccessor<S>
where S: Storage
{
    pub fn new(storage: S, config: Config, key: impl ToString) -> Self {
        Self {
            storage,
            config,
            key: key.to_string(),
            session: Session::Closed,
        }
    }

    /// The key addressing the file in the storage.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Number of bytes read so far, if open for reading.
    pub fn position(&self) -> Option<u64> {
        match &self.session {
            Session::Read(r) => Some(r.position()),
            _ => None,
        }
    }

    /// Number of written bytes not yet handed to the storage.
    pub fn pending_len(&self) -> usize {
        match &self.session {
            Session::Write(w) => w.pending().len(),
            _ => 0,
        }
    }

    fn check_closed(&self, op: &'static str) -> Result<(), Error> {
        let state = self.open_state();
        if state.is_open() {
            return Err(Error::invalid_state(op, state));
        }
        Ok(())
    }

    fn read_session(&mut self, op: &'static str) -> Result<&mut ReadSession, Error> {
        let state = self.open_state();
        match &mut self.session {
            Session::Read(r) => Ok(r),
            _ => Err(Error::invalid_state(op, state)),
        }
    }
}

impl<S> SettingsFile for SettingsAccessor<S>
where S: Storage
{
    fn open_for_read(&mut self) -> Result<(), Error> {
        self.check_closed("open for read")?;

        let reader = match self.storage.reader(&self.key) {
            Ok(r) => Some(r),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("settings file {}: not found, reads as empty", self.key);
                None
            }
            Err(e) => return Err(e.into()),
        };

        self.session = Session::Read(ReadSession::new(reader));
        log::debug!("settings file {}: opened for read", self.key);
        Ok(())
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let r = self.read_session("read")?;
        Ok(r.read_byte()?)
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<ReadStatus, Error> {
        let r = self.read_session("read line")?;
        Ok(r.read_line(buf)?)
    }

    fn open_for_write(&mut self) -> Result<(), Error> {
        self.check_closed("open for write")?;

        let capacity = self.config.write_buffer_size();
        self.session = Session::Write(WriteSession::new(capacity));
        log::debug!("settings file {}: opened for write", self.key);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        let state = self.open_state();
        let threshold = self.config.write_buffer_size();

        let Session::Write(w) = &mut self.session else {
            return Err(Error::invalid_state("write", state));
        };

        w.append(data);

        if !w.pending().is_empty() && w.pending().len() >= threshold {
            let n = w.pending().len() as u64;
            w.flush(&mut self.storage, &self.key)?;
            log::debug!("settings file {}: flushed {}", self.key, format_bytes(n));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), Error> {
        let state = self.open_state();

        match &mut self.session {
            Session::Closed => return Err(Error::invalid_state("close", state)),
            Session::Read(_) => {}
            Session::Write(w) => {
                if let Err(e) = w.finish(&mut self.storage, &self.key) {
                    log::warn!(
                        "settings file {}: close failed, stays open for write with {} pending: {}",
                        self.key,
                        format_bytes(w.pending().len() as u64),
                        e
                    );
                    return Err(e.into());
                }
                log::debug!("settings file {}: committed {}", self.key, format_bytes(w.flushed()));
            }
        }

        self.session = Session::Closed;
        log::debug!("settings file {}: closed", self.key);
        Ok(())
    }

    fn force_close(&mut self) {
        match std::mem::replace(&mut self.session, Session::Closed) {
            Session::Closed => {}
            Session::Read(_) => {
                log::debug!("settings file {}: force closed", self.key);
            }
            Session::Write(mut w) => match w.finish(&mut self.storage, &self.key) {
                Ok(()) => {
                    log::debug!(
                        "settings file {}: committed {}, force closed",
                        self.key,
                        format_bytes(w.flushed())
                    );
                }
                Err(e) => {
                    log::error!(
                        "settings file {}: force close failed, write session discarded with {} pending: {}",
                        self.key,
                        format_bytes(w.pending().len() as u64),
                        e
                    );
                }
            },
        }
    }

    fn open_state(&self) -> OpenState {
        self.session.state()
    }
}

impl<S> Drop for SettingsAccessor<S>
where S: Storage
{
    fn drop(&mut self) {
        self.force_close();
    }
}
