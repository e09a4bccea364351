#[derive(Default)]
#[derive(Debug)]
#[derive(Clone)]
#[derive(PartialEq, Eq)]
pub struct Config {
    /// Max bytes buffered in a write session before they are handed to the medium.
    ///
    /// `0` hands every write to the medium at once.
    pub write_buffer_size: Option<usize>,

    /// Size of the buffer of a file system reader.
    pub read_buffer_size: Option<usize>,

    /// Whether to fsync a file before it replaces the committed one.
    pub sync_on_commit: Option<bool>,
}

impl Config {
    const DEFAULT_WRITE_BUFFER_SIZE: usize = 4 * 1024;
    const DEFAULT_READ_BUFFER_SIZE: usize = 8 * 1024;

    pub fn with_write_buffer_size(mut self, size: usize) -> Self {
        self.write_buffer_size = Some(size);
        self
    }

    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = Some(size);
        self
    }

    pub fn with_sync_on_commit(mut self, sync: bool) -> Self {
        self.sync_on_commit = Some(sync);
        self
    }

    /// Flush on every write instead of batching.
    pub fn unbuffered(self) -> Self {
        self.with_write_buffer_size(0)
    }

    pub fn write_buffer_size(&self) -> usize {
        self.write_buffer_size.unwrap_or(Self::DEFAULT_WRITE_BUFFER_SIZE)
    }

    pub fn read_buffer_size(&self) -> usize {
        // A zero sized BufReader can never fill.
        self.read_buffer_size.unwrap_or(Self::DEFAULT_READ_BUFFER_SIZE).max(1)
    }

    /// Return true if a commit fsyncs. Default is true.
    pub fn sync_on_commit(&self) -> bool {
        self.sync_on_commit.unwrap_or(true)
    }
}
