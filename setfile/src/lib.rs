//! `setfile` gives a settings layer uniform access to one settings file,
//! whatever medium it is stored on.
//!
//! A file is opened either for reading or for writing, read byte by byte or
//! line by line, written with buffering, and closed. Buffered writes are
//! durable at the latest when the file is closed, force-closed or dropped.
//!
//! ```
//! use setfile::storage::impls::mem::MemStorage;
//! use setfile::{Config, OpenState, ReadStatus, SettingsAccessor, SettingsFile};
//!
//! # fn main() -> Result<(), setfile::Error> {
//! let storage = MemStorage::new();
//! let mut f = SettingsAccessor::new(storage.clone(), Config::default(), "app.conf");
//!
//! f.open_for_write()?;
//! f.write(b"volume=3\n")?;
//! f.write(b"muted=false")?;
//! f.close()?;
//!
//! f.open_for_read()?;
//! assert_eq!(f.open_state(), OpenState::OpenForRead);
//!
//! let mut line = Vec::new();
//! assert_eq!(f.read_line(&mut line)?, ReadStatus::Success);
//! assert_eq!(line, b"volume=3\n");
//!
//! // The last line has no trailing newline
//! line.clear();
//! assert_eq!(f.read_line(&mut line)?, ReadStatus::EndOfFile);
//! assert_eq!(line, b"muted=false");
//!
//! // Writing is not allowed while open for read
//! assert!(f.write(b"x").unwrap_err().is_invalid_state());
//! f.close()?;
//! # Ok(())
//! # }
//! ```

mod accessor;
mod config;
pub mod dump;
mod error;
pub(crate) mod io_util;
pub mod num;
mod open_state;
mod read_status;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use accessor::SettingsAccessor;
pub use accessor::SettingsFile;
pub use config::Config;
pub use error::Error;
pub use open_state::OpenState;
pub use read_status::ReadStatus;
