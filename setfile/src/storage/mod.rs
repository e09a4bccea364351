//! Storage API to adapt to different storage mediums.
//!
//! A [`Storage`] addresses settings files by key and hands out a reader or a
//! writer for one of them. It knows nothing about open modes or buffering,
//! that is the job of [`SettingsAccessor`](crate::SettingsAccessor).

pub mod impls;

use std::fmt::Debug;
use std::io;
use std::io::BufRead;
use std::io::Write;

pub type BoxReader = Box<dyn Reader + Send>;
pub type BoxWriter = Box<dyn Writer + Send>;

/// The type of the reader.
///
/// It is the implementation's duty to provide a `BufRead` implementation.
/// Usually using `BufReader` to wrap the reader would be the best choice.
pub trait Reader
where Self: BufRead + Send + Debug + 'static
{
}

impl<T: BufRead + Send + Debug + 'static> Reader for T {}

/// Represents a writer that replaces the content of one settings file.
///
/// Bytes accepted by `Write::write` belong to the medium from then on, but
/// they do not have to be visible to a reader until [`commit()`](Self::commit)
/// returns `Ok`. Until then the previously committed content must stay
/// readable.
pub trait Writer
where Self: Write + Send + Debug + 'static
{
    /// Make all accepted bytes durable and visible under the writer's key.
    ///
    /// A failed commit must be retryable: calling `commit()` again after an
    /// error either finishes the job or returns another error, it never
    /// reports success with data missing. Once it has returned `Ok`, further
    /// calls are no-ops returning `Ok`.
    ///
    /// This method cannot consume `self` (e.g., `fn commit(self)`), because `self` requires
    /// `Sized`. As a result, `Box<dyn Writer>::commit()` cannot be used.
    fn commit(&mut self) -> Result<(), io::Error>;
}

/// This trait defines the behavior required to read and write settings files on a medium.
pub trait Storage
where Self: Debug + Clone + Send + 'static
{
    /// Get a reader to read the committed data of the given key.
    ///
    /// Returns an error of kind [`io::ErrorKind::NotFound`] if nothing was
    /// ever committed under `key`.
    fn reader(&mut self, key: &str) -> Result<BoxReader, io::Error>;

    /// Get a writer whose committed output replaces the data of the given key.
    fn writer(&mut self, key: &str) -> Result<BoxWriter, io::Error>;
}
