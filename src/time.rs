//! Timestamps for line prefixes.
//!
//! Any [`FormatTime`] can stamp lines. [`LocalClock`] is the default; `()`
//! writes no timestamp at all, which keeps output deterministic in tests.
use chrono::Local;
use std::fmt;
use tracing_subscriber::fmt::format::Writer;
pub use tracing_subscriber::fmt::time::FormatTime;

/// Writes the local wall-clock time as `HH:MM:SS.mmm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Formats the current time with `timer` into a `String`.
pub(crate) fn stamp<T: FormatTime + ?Sized>(timer: &T) -> String {
    let mut buf = String::with_capacity(12);
    if timer.format_time(&mut Writer::new(&mut buf)).is_err() {
        buf.clear();
    }
    buf
}
