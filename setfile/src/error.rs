use std::io;

use crate::OpenState;

/// Error returned by the operations of a [`SettingsFile`](crate::SettingsFile).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operation is not allowed in the current open state.
    ///
    /// Nothing was changed, neither the accessor nor the medium.
    #[error("can not {op} when {state}")]
    InvalidState { op: &'static str, state: OpenState },

    /// The underlying medium failed.
    #[error("settings file I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn invalid_state(op: &'static str, state: OpenState) -> Self {
        Error::InvalidState { op, state }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::InvalidState { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(e) => e,
            Error::InvalidState { .. } => io::Error::new(io::ErrorKind::Other, e.to_string()),
        }
    }
}
