#![allow(dead_code)]

use concol::{ConCol, ConColBuilder, Registry, Severity};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A `MakeWriter` that records everything written to it.
#[derive(Clone, Default)]
pub struct Capture {
    buf: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

pub struct CaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Returns the captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        text.lines().map(str::to_string).collect()
    }

    /// Returns how many writers were handed out.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.writes.fetch_add(1, Ordering::SeqCst);
        CaptureWriter {
            buf: self.buf.clone(),
        }
    }
}

/// One capture per channel.
#[derive(Clone, Default)]
pub struct Channels {
    pub log: Capture,
    pub info: Capture,
    pub warn: Capture,
    pub error: Capture,
}

impl Channels {
    pub fn get(&self, severity: Severity) -> &Capture {
        match severity {
            Severity::Log => &self.log,
            Severity::Info => &self.info,
            Severity::Warn => &self.warn,
            Severity::Error => &self.error,
        }
    }

    pub fn total_writes(&self) -> usize {
        Severity::ALL.iter().map(|s| self.get(*s).writes()).sum()
    }
}

/// Wires every channel of `builder` to a capture, with plain text and no
/// timestamp.
pub fn captured(builder: ConColBuilder) -> (ConCol, Channels) {
    let channels = Channels::default();
    let concol = builder
        .ansi(false)
        .timer(())
        .writer(Severity::Log, channels.log.clone())
        .writer(Severity::Info, channels.info.clone())
        .writer(Severity::Warn, channels.warn.clone())
        .writer(Severity::Error, channels.error.clone())
        .build();
    (concol, channels)
}

/// A builder registered with a fresh registry, isolated from other tests.
pub fn isolated(label: &str) -> (ConColBuilder, Arc<Registry>) {
    let registry = Arc::new(Registry::new());
    (ConCol::builder(label).registry(registry.clone()), registry)
}

/// Formats a metric body the way the renderer aligns it.
pub fn metric(tag: &str, name: &str, value: &str, unit: &str) -> String {
    format!(
        "{}{:>name_width$}:{:>10}{}",
        tag,
        name,
        value,
        unit,
        name_width = 34 - tag.len()
    )
}
