/// How a [`read_line()`](crate::SettingsFile::read_line) call ended.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum ReadStatus {
    /// A complete line, including the trailing `\n`, was read.
    Success,

    /// The end of the file was reached before a `\n`.
    ///
    /// Whatever was read before it is still delivered, possibly nothing.
    EndOfFile,
}
