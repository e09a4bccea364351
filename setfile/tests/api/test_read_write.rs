use libtest_mimic::Trial;
use pretty_assertions::assert_eq;
use setfile::storage::Storage;
use setfile::ReadStatus;
use setfile::SettingsFile;

use crate::context::TestContext;
use crate::trials;
use crate::utils::bb;
use crate::utils::line;
use crate::utils::read_all;
use crate::utils::NewContext;

pub(crate) fn tests<S: Storage>(new_ctx: impl NewContext<S>, trials: &mut Vec<Trial>) {
    trials.extend(trials!(
        new_ctx,
        test_lines_round_trip,
        test_partial_last_line,
        test_read_bytes,
        test_read_missing_file,
        test_rewrite_replaces,
        test_keys_are_independent
    ));
}

fn test_lines_round_trip<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("app.conf");

    f.open_for_write()?;
    f.write(b"a\nb\n")?;
    f.close()?;

    f.open_for_read()?;
    assert_eq!(line(&mut f)?, ("a\n".to_string(), ReadStatus::Success));
    assert_eq!(line(&mut f)?, ("b\n".to_string(), ReadStatus::Success));
    assert_eq!(f.read_byte()?, None);
    assert_eq!(line(&mut f)?, ("".to_string(), ReadStatus::EndOfFile));
    f.close()?;
    Ok(())
}

fn test_partial_last_line<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("app.conf");

    f.open_for_write()?;
    f.write(b"a\nb")?;
    f.close()?;

    f.open_for_read()?;
    assert_eq!(line(&mut f)?, ("a\n".to_string(), ReadStatus::Success));
    assert_eq!(line(&mut f)?, ("b".to_string(), ReadStatus::EndOfFile));
    f.close()?;
    Ok(())
}

fn test_read_bytes<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("app.conf");

    f.open_for_write()?;
    for b in b"k=v\n" {
        f.write_byte(*b)?;
    }
    f.close()?;

    f.open_for_read()?;
    assert_eq!(f.read_byte()?, Some(b'k'));
    assert_eq!(f.position(), Some(1));

    // Mixed byte and line reads share one cursor
    assert_eq!(line(&mut f)?, ("=v\n".to_string(), ReadStatus::Success));
    assert_eq!(f.position(), Some(4));

    assert_eq!(f.read_byte()?, None);
    assert_eq!(f.read_byte()?, None);
    assert_eq!(f.position(), Some(4));
    f.close()?;
    assert_eq!(f.position(), None);
    Ok(())
}

fn test_read_missing_file<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("never-written.conf");

    f.open_for_read()?;
    assert_eq!(f.read_byte()?, None);
    assert_eq!(line(&mut f)?, ("".to_string(), ReadStatus::EndOfFile));
    f.close()?;
    Ok(())
}

fn test_rewrite_replaces<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("app.conf");

    f.open_for_write()?;
    f.write(b"a=1\nb=2\nc=3\n")?;
    f.close()?;

    f.open_for_write()?;
    f.write(b"d=4\n")?;
    f.close()?;
    assert_eq!(read_all(&mut f)?, bb("d=4\n"));

    f.open_for_write()?;
    f.close()?;
    assert_eq!(read_all(&mut f)?, bb(""));
    Ok(())
}

fn test_keys_are_independent<S: Storage>(ctx: TestContext<S>) -> anyhow::Result<()> {
    let mut f = ctx.accessor("a.conf");
    let mut g = ctx.accessor("b.conf");

    f.open_for_write()?;
    g.open_for_write()?;
    f.write(b"a\n")?;
    g.write(b"b\n")?;
    f.close()?;
    g.close()?;

    assert_eq!(read_all(&mut f)?, bb("a\n"));
    assert_eq!(read_all(&mut g)?, bb("b\n"));
    Ok(())
}
