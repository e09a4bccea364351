use libtest_mimic::Arguments;
use libtest_mimic::Trial;
use setfile::storage::Storage;
use setfile::Config;

use crate::context::TestContext;
use crate::utils::NewContext;
use crate::utils::CONTEXT_INFO;

pub mod utils;

pub mod test_read_write;

fn main() -> anyhow::Result<()> {
    let args = Arguments::from_args();

    let mut tests = Vec::new();

    collect_trials(&mut tests, "fs", || TestContext::new_fs(Config::default()));

    // A tiny buffer makes every session flush early
    collect_trials(&mut tests, "fs-unbuffered", || {
        TestContext::new_fs(Config::default().with_write_buffer_size(1))
    });

    collect_trials(&mut tests, "mem", || TestContext::new_mem(Config::default()));

    let conclusion = libtest_mimic::run(&args, tests);

    conclusion.exit()
}

fn collect_trials<S>(tests: &mut Vec<Trial>, ctx_name: &'static str, new_ctx: impl NewContext<S>)
where S: Storage {
    CONTEXT_INFO.with_borrow_mut(|name| {
        *name = ctx_name;
    });

    test_state_machine::tests(new_ctx.clone(), tests);
    test_read_write::tests(new_ctx.clone(), tests);
    test_durability::tests(new_ctx.clone(), tests);
    test_dump::tests(new_ctx.clone(), tests);
}
