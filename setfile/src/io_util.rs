use std::io;
use std::io::Write;

/// Hand the bytes of `pending` to `w`, removing from `pending` exactly what `w` accepted.
///
/// On error, the bytes that `w` did not accept are still in `pending`, in order.
/// A writer that accepts nothing is reported as [`io::ErrorKind::WriteZero`].
pub(crate) fn drain_into<W: Write + ?Sized>(w: &mut W, pending: &mut Vec<u8>) -> Result<usize, io::Error> {
    let mut accepted = 0;

    let res = loop {
        if accepted == pending.len() {
            break Ok(());
        }

        match w.write(&pending[accepted..]) {
            Ok(0) => {
                break Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "medium accepted no bytes",
                ));
            }
            Ok(n) => accepted += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => break Err(e),
        }
    };

    pending.drain(..accepted);
    res.map(|_| accepted)
}
