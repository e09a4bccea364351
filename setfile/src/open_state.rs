use std::fmt;

/// The access mode a settings file is currently opened in.
#[derive(Debug)]
#[derive(Default)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum OpenState {
    #[default]
    Closed,
    OpenForRead,
    OpenForWrite,
}

impl OpenState {
    pub fn is_open(&self) -> bool {
        *self != OpenState::Closed
    }
}

impl fmt::Display for OpenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
