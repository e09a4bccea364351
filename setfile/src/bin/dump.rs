use std::io;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use setfile::dump::dump_lines;
use setfile::num::format_bytes;
use setfile::storage::impls::fs::FsStorage;
use setfile::Config;
use setfile::SettingsAccessor;
use setfile::SettingsFile;
use simplelog::ColorChoice;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;

#[derive(Clone, Debug, PartialEq, Eq, clap::Parser)]
#[clap(about = "dump a settings file line by line, or replace it with stdin", author)]
pub struct Args {
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Replace the content of the file with stdin instead of dumping it.
    #[arg(long)]
    write: bool,

    /// Do not fsync before the new content replaces the file.
    #[arg(long)]
    no_sync: bool,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<(), io::Error> {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", e);
    }

    // split path into dir and file
    let dir = args.path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
    let file = args.path.file_name().and_then(|f| f.to_str()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid settings file path: {}", args.path.display()),
        )
    })?;

    let config = Config::default().with_sync_on_commit(!args.no_sync);
    let storage = FsStorage::with_config(dir, config.clone());
    let mut f = SettingsAccessor::new(storage, config, file);

    if args.write {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;

        f.open_for_write()?;
        f.write(&data)?;
        f.close()?;

        eprintln!("wrote {}", format_bytes(data.len() as u64));
        return Ok(());
    }

    let stat = dump_lines(&mut f, io::stdout().lock())?;

    eprintln!("{} lines, {}", stat.lines, format_bytes(stat.bytes));
    Ok(())
}
