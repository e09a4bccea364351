#![allow(dead_code)]

use crate::ReadStatus;
use crate::SettingsFile;

/// Create a byte vector
pub(crate) fn bb(x: impl ToString) -> Vec<u8> {
    x.to_string().into_bytes()
}

/// Read all lines of an opened file, until `EndOfFile`.
///
/// Each line is returned with the status its `read_line()` returned.
pub(crate) fn read_lines(f: &mut impl SettingsFile) -> anyhow::Result<Vec<(String, ReadStatus)>> {
    let mut lines = vec![];
    loop {
        let mut buf = vec![];
        let status = f.read_line(&mut buf)?;
        lines.push((String::from_utf8(buf)?, status));

        if status == ReadStatus::EndOfFile {
            return Ok(lines);
        }
    }
}

/// Open for write, write `data`, and close.
pub(crate) fn write_all(f: &mut impl SettingsFile, data: impl AsRef<[u8]>) -> anyhow::Result<()> {
    f.open_for_write()?;
    f.write(data.as_ref())?;
    f.close()?;
    Ok(())
}
