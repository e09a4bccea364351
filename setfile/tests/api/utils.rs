use std::cell::RefCell;

use libtest_mimic::Failed;
use libtest_mimic::Trial;
use setfile::storage::Storage;
use setfile::ReadStatus;
use setfile::SettingsFile;

use crate::context::TestContext;

/// Create a byte vector
pub(crate) fn bb(x: impl ToString) -> Vec<u8> {
    x.to_string().into_bytes()
}

/// Read one line into a new buffer.
pub(crate) fn line(f: &mut impl SettingsFile) -> anyhow::Result<(String, ReadStatus)> {
    let mut buf = Vec::new();
    let status = f.read_line(&mut buf)?;
    Ok((String::from_utf8(buf)?, status))
}

/// Open for read, read everything and close.
pub(crate) fn read_all(f: &mut impl SettingsFile) -> anyhow::Result<Vec<u8>> {
    f.open_for_read()?;

    let mut data = Vec::new();
    while let Some(b) = f.read_byte()? {
        data.push(b);
    }

    f.close()?;
    Ok(data)
}

pub trait NewContext<S>
where
    S: Storage,
    Self: Fn() -> anyhow::Result<TestContext<S>> + Send + Clone + 'static,
{
}

impl<S, T> NewContext<S> for T
where
    S: Storage,
    T: Fn() -> anyhow::Result<TestContext<S>> + Send + Clone + 'static,
{
}

thread_local! {
    /// Define a thread-local variable to store the context info.
    ///
    /// It stores the name of the storage backend.
    /// This context info is used to build the name of the test case.
    pub(crate) static CONTEXT_INFO: RefCell<&'static str> = const { RefCell::new("") };
}

fn get_trial_name(case_name: &str) -> String {
    let ctx_info = CONTEXT_INFO.with_borrow_mut(|name| *name);
    format!("api::{case_name}/ctx:{ctx_info}")
}

/// Build a Trial instance that runs a test with a new test context.
pub fn build_trial<S, F>(name: &str, new_ctx: impl NewContext<S>, f: F) -> Trial
where
    S: Storage,
    F: FnOnce(TestContext<S>) -> anyhow::Result<()> + Send + 'static,
{
    Trial::test(get_trial_name(name), move || {
        let ctx = new_ctx().map_err(|err| Failed::from(err.to_string()))?;

        f(ctx).map_err(|err| Failed::from(err.to_string()))?;
        Ok(())
    })
}

/// Build a list of Trial instances, one for each test function.
#[macro_export]
macro_rules! trials {
    ($new_ctx:ident, $($test:ident),*) => {
        vec![$(
            $crate::utils::build_trial(stringify!($test), $new_ctx.clone(), $test),
        )*]
    };
}
