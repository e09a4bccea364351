mod session;
mod settings_accessor;


pub use settings_accessor::SettingsAccessor;

use crate::Error;
use crate::OpenState;
use crate::ReadStatus;

/// Access to one settings file, opened either for reading or for writing.
///
/// A settings file is `Closed` until it is opened with
/// [`open_for_read()`](Self::open_for_read) or
/// [`open_for_write()`](Self::open_for_write), and can only be opened in one
/// mode at a time. An operation that does not match the current mode fails
/// with [`Error::InvalidState`] and changes nothing.
///
/// Writes may be buffered. Written bytes are durable at the latest when
/// [`close()`](Self::close) returns `Ok`, when [`force_close()`](Self::force_close)
/// returns, or when the implementation is dropped. An implementation is free
/// to make them durable earlier.
pub trait SettingsFile {
    /// Open the file for reading, from its first byte.
    ///
    /// A file that was never written reads as an empty file.
    fn open_for_read(&mut self) -> Result<(), Error>;

    /// Read one byte. Returns `Ok(None)` at the end of the file.
    fn read_byte(&mut self) -> Result<Option<u8>, Error>;

    /// Read a line, including its trailing `\n`, and append it to `buf`.
    ///
    /// If the end of the file is reached first, the remaining bytes are
    /// appended and [`ReadStatus::EndOfFile`] is returned.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<ReadStatus, Error>;

    /// Open the file for writing. What is written replaces the content of the file.
    fn open_for_write(&mut self) -> Result<(), Error>;

    fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write(&[byte])
    }

    /// Write a slice of bytes.
    ///
    /// `Ok` means the bytes are accepted, not that they are durable.
    /// On [`Error::Io`] the bytes are still kept for a later flush and must not
    /// be written again.
    fn write(&mut self, data: &[u8]) -> Result<(), Error>;

    /// Close the file, flushing buffered writes first.
    ///
    /// If the flush fails, the file stays open for writing and nothing buffered
    /// is dropped, so that `close()` can be retried.
    fn close(&mut self) -> Result<(), Error>;

    /// Flush buffered writes and close the file, whatever state it is in.
    ///
    /// Errors can not be returned and are logged instead.
    fn force_close(&mut self);

    fn open_state(&self) -> OpenState;
}
