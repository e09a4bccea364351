//! Print the content of a settings file with line numbers.

use std::io::Write;

use crate::Error;
use crate::ReadStatus;
use crate::SettingsFile;

/// What a dump has gone through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpStat {
    /// Number of non-empty lines, including a last line without `\n`.
    pub lines: u64,

    /// Number of bytes read from the file.
    pub bytes: u64,
}

/// Open `f` for read, write every line to `out` prefixed with its 1-based number, and close it.
///
/// A last line without a trailing `\n` gets one in the output.
/// `f` is left closed even if writing to `out` fails.
pub fn dump_lines<F>(f: &mut F, mut out: impl Write) -> Result<DumpStat, Error>
where F: SettingsFile + ?Sized {
    f.open_for_read()?;

    let res = write_lines(f, &mut out);

    match res {
        Ok(stat) => {
            f.close()?;
            Ok(stat)
        }
        Err(e) => {
            f.force_close();
            Err(e)
        }
    }
}

fn write_lines<F>(f: &mut F, out: &mut impl Write) -> Result<DumpStat, Error>
where F: SettingsFile + ?Sized {
    let mut stat = DumpStat::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let status = f.read_line(&mut line)?;
        stat.bytes += line.len() as u64;

        if !line.is_empty() {
            stat.lines += 1;
            write!(out, "{:>6}: ", stat.lines)?;
            out.write_all(&line)?;
        }

        if status == ReadStatus::EndOfFile {
            if line.last().is_some_and(|b| *b != b'\n') {
                writeln!(out)?;
            }
            break;
        }
    }

    out.flush()?;
    Ok(stat)
}
