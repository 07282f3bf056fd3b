use crate::builder::ConColBuilder;
use crate::color::Color;
use crate::message::Message;
use crate::normalize;
use crate::printer::{Pretty, Printer};
use crate::registry::Registry;
use crate::tag::Severity;
use crate::time::{self, FormatTime};
use std::fmt;
use std::sync::Arc;

/// The highest message level an instance will write.
///
/// Messages are written when their level is less than or equal to the
/// cutoff. `Max(0)` writes only level-0 messages; it is not the same as
/// having no cutoff.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Cutoff {
    Unbounded,
    Max(u32),
}

impl Cutoff {
    /// Returns `true` if a message at `level` passes the cutoff.
    pub const fn allows(&self, level: u32) -> bool {
        match self {
            Cutoff::Unbounded => true,
            Cutoff::Max(max) => level <= *max,
        }
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Cutoff::Unbounded
    }
}

impl From<Option<u32>> for Cutoff {
    fn from(max: Option<u32>) -> Self {
        max.map_or(Cutoff::Unbounded, Cutoff::Max)
    }
}

impl From<u32> for Cutoff {
    fn from(max: u32) -> Self {
        Cutoff::Max(max)
    }
}

/// A labelled, colored console logger.
///
/// Each call to a severity method filters on level, normalizes the message
/// into lines, renders them and writes them, before returning.
///
/// # Examples
///
/// ```
/// use concol::{ConCol, Color};
///
/// let app = ConCol::new("App One", Color::Cyan, None);
/// app.log("output a single string");
/// app.log(());
/// app.info("output a string\nwith any number of\ncarriage returns");
/// app.warn("output warning");
/// app.error("output error");
///
/// let quiet = ConCol::new("App Three", None, 3);
/// quiet.info_at(2, "written");
/// quiet.info_at(5, "dropped");
/// ```
pub struct ConCol {
    pub(crate) pretty: Pretty,
    pub(crate) cutoff: Cutoff,
    pub(crate) registry: Arc<Registry>,
    pub(crate) timer: Box<dyn FormatTime + Send + Sync>,
    pub(crate) printer: Printer,
}

impl ConCol {
    /// Returns a [`ConCol`] writing to the standard streams, registered with
    /// the global [`Registry`].
    ///
    /// The label is trimmed. A missing color means white, and a missing
    /// cutoff means every level is written.
    pub fn new(
        label: impl Into<String>,
        color: impl Into<Option<Color>>,
        cutoff: impl Into<Option<u32>>,
    ) -> Self {
        let cutoff: Option<u32> = cutoff.into();
        let mut builder = ConCol::builder(label).cutoff(cutoff);
        if let Some(color) = color.into() {
            builder = builder.color(color);
        }
        builder.build()
    }

    /// Returns a [`ConColBuilder`] for configuring an instance.
    pub fn builder(label: impl Into<String>) -> ConColBuilder {
        ConColBuilder::new(label.into())
    }

    pub fn label(&self) -> &str {
        self.pretty.label()
    }

    pub fn color(&self) -> Color {
        self.pretty.color()
    }

    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Returns `true` if a message at `level` would be written.
    pub fn enabled(&self, level: u32) -> bool {
        self.cutoff.allows(level)
    }

    /// Writes a level-0 message, untagged, to the `log` channel.
    pub fn log(&self, message: impl Into<Message>) {
        self.emit(Severity::Log, 0, message)
    }

    /// Writes a message at `level`, untagged, to the `log` channel.
    pub fn log_at(&self, level: u32, message: impl Into<Message>) {
        self.emit(Severity::Log, level, message)
    }

    /// Writes a level-0 message, untagged, to the `info` channel.
    pub fn info(&self, message: impl Into<Message>) {
        self.emit(Severity::Info, 0, message)
    }

    /// Writes a message at `level`, untagged, to the `info` channel.
    pub fn info_at(&self, level: u32, message: impl Into<Message>) {
        self.emit(Severity::Info, level, message)
    }

    /// Writes a level-0 message, tagged ` WARN: `, to the `warn` channel.
    pub fn warn(&self, message: impl Into<Message>) {
        self.emit(Severity::Warn, 0, message)
    }

    /// Writes a message at `level`, tagged ` WARN: `, to the `warn` channel.
    pub fn warn_at(&self, level: u32, message: impl Into<Message>) {
        self.emit(Severity::Warn, level, message)
    }

    /// Writes a level-0 message, tagged `ERROR: `, to the `error` channel.
    pub fn error(&self, message: impl Into<Message>) {
        self.emit(Severity::Error, 0, message)
    }

    /// Writes a message at `level`, tagged `ERROR: `, to the `error` channel.
    pub fn error_at(&self, level: u32, message: impl Into<Message>) {
        self.emit(Severity::Error, level, message)
    }

    /// Renders and writes a message with any severity.
    ///
    /// Nothing happens, not even converting `message`, if `level` is above
    /// the cutoff.
    pub fn emit(&self, severity: Severity, level: u32, message: impl Into<Message>) {
        if !self.enabled(level) {
            return;
        }

        let lines = self.render_message(severity, message.into());
        self.printer.write_lines(severity, &lines);
    }

    /// Returns the lines a call would write, without writing them.
    ///
    /// The result is empty if `level` is above the cutoff.
    ///
    /// ```
    /// use concol::{ConCol, Severity};
    ///
    /// let app = ConCol::builder("render-doc").ansi(false).timer(()).build();
    /// let lines = app.render(Severity::Warn, 0, "a\nb");
    /// assert_eq!(lines.len(), 2);
    /// assert!(lines.iter().all(|line| line.contains(" WARN: ")));
    /// ```
    pub fn render(
        &self,
        severity: Severity,
        level: u32,
        message: impl Into<Message>,
    ) -> Vec<String> {
        if !self.enabled(level) {
            return Vec::new();
        }

        self.render_message(severity, message.into())
    }

    fn render_message(&self, severity: Severity, message: Message) -> Vec<String> {
        let lines = normalize::normalize(message);
        let timestamp = time::stamp(&*self.timer);

        self.pretty.render(
            lines.iter(),
            severity.tag(),
            &timestamp,
            self.registry.width(),
        )
    }
}

impl fmt::Debug for ConCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConCol")
            .field("label", &self.label())
            .field("color", &self.color())
            .field("cutoff", &self.cutoff)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
