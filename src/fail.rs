use crate::tag::Severity;
use std::io::{self, Write};

#[cold]
#[inline(never)]
pub fn write_failed(severity: Severity, err: &io::Error) {
    // stderr itself may be the channel that failed, so this is best-effort
    let _ = writeln!(
        io::stderr(),
        "concol: writing to the `{}` channel failed: {}",
        severity,
        err
    );
}
