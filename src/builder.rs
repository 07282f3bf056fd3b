//! Configure a [`ConCol`] by chaining methods.
//!
//! [`ConCol::new`] covers the common case of a label, a color and an
//! optional cutoff. [`ConColBuilder`] additionally controls styling, the
//! clock, the label registry, and where each channel is written.
//!
//! # Examples
//!
//! Writing every channel to stderr, without escape sequences or timestamps:
//! ```
//! use concol::{ConCol, Color};
//!
//! let app = ConCol::builder("  worker  ")
//!     .color(Color::Magenta)
//!     .cutoff(2)
//!     .ansi(false)
//!     .timer(())
//!     .writers(std::io::stderr)
//!     .build();
//!
//! assert_eq!(app.label(), "worker");
//! app.info_at(1, "started");
//! ```
//!
//! Keeping a group of instances aligned independently of the rest of the
//! process:
//! ```
//! use concol::{ConCol, Registry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new());
//! let a = ConCol::builder("a").registry(registry.clone()).build();
//! let b = ConCol::builder("bbbb").registry(registry.clone()).build();
//! assert_eq!(a.registry().width(), 4);
//! # drop(b);
//! ```
use crate::color::Color;
use crate::logger::{ConCol, Cutoff};
use crate::printer::{Pretty, Printer};
use crate::registry::Registry;
use crate::tag::Severity;
use crate::time::{FormatTime, LocalClock};
use std::fmt;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

/// A type for configuring [`ConCol`]s.
///
/// See the [module level documentation](self) for examples.
pub struct ConColBuilder {
    label: String,
    color: Color,
    cutoff: Cutoff,
    ansi: bool,
    registry: Option<Arc<Registry>>,
    timer: Box<dyn FormatTime + Send + Sync>,
    printer: Printer,
}

impl ConColBuilder {
    pub(crate) fn new(label: String) -> Self {
        ConColBuilder {
            label,
            color: Color::default(),
            cutoff: Cutoff::default(),
            ansi: true,
            registry: None,
            timer: Box::new(LocalClock),
            printer: Printer::new(),
        }
    }

    /// Sets the base color for label, text and metric names.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the highest level that is written.
    ///
    /// Accepts a `u32`, an `Option<u32>` or a [`Cutoff`]; `None` means every
    /// level is written.
    pub fn cutoff(mut self, cutoff: impl Into<Cutoff>) -> Self {
        self.cutoff = cutoff.into();
        self
    }

    /// Enables or disables ANSI styling. Enabled by default.
    ///
    /// When enabled, the [`colored`] crate still has the final say, and will
    /// leave output plain when `NO_COLOR` is set or stdout isn't a terminal.
    /// That check looks at stdout only, so the `warn` and `error` channels
    /// are styled by whether stdout is a terminal, even though they write to
    /// stderr. Use `CLICOLOR_FORCE`, `colored::control::set_override`, or
    /// `ansi(false)` when the two streams are redirected differently.
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Sets the clock used to stamp lines. Use `()` for no timestamp.
    pub fn timer<T>(mut self, timer: T) -> Self
    where
        T: FormatTime + Send + Sync + 'static,
    {
        self.timer = Box::new(timer);
        self
    }

    /// Registers with `registry` instead of the global [`Registry`].
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the writer for one severity's channel.
    pub fn writer<W>(mut self, severity: Severity, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.printer = self.printer.writer(severity, make_writer);
        self
    }

    /// Sets the same writer for every channel.
    pub fn writers<W>(mut self, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
    {
        self.printer = self.printer.writers(make_writer);
        self
    }

    /// Applies a writer that is suitable for test environments.
    pub fn with_test_writer(self) -> Self {
        self.printer(Printer::test())
    }

    /// Sets every channel at once from a configured [`Printer`].
    pub fn printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Builds the [`ConCol`], trimming the label and registering its width.
    pub fn build(self) -> ConCol {
        let label = self.label.trim().to_string();
        let registry = self.registry.unwrap_or_else(Registry::global);
        registry.observe(label.chars().count());

        ConCol {
            pretty: Pretty::new(label, self.color, self.ansi),
            cutoff: self.cutoff,
            registry,
            timer: self.timer,
            printer: self.printer,
        }
    }
}

impl fmt::Debug for ConColBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConColBuilder")
            .field("label", &self.label)
            .field("color", &self.color)
            .field("cutoff", &self.cutoff)
            .field("ansi", &self.ansi)
            .finish_non_exhaustive()
    }
}
