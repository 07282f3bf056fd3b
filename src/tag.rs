//! Severities and the tags that mark them.
//!
//! Each severity method on [`ConCol`] corresponds to a [`Severity`], which in
//! turn picks the output channel and an optional [`Tag`] prefixed to every
//! line the call produces.
//!
//! ```log
//! 10:42:07.118 [App Two]                   errors in module:         0 found
//! 10:42:07.118 [App Two]  WARN:            errors in module:         0 found
//! 10:42:07.118 [App Two] ERROR:            errors in module:         0 found
//! ```
//!
//! Both tags are seven characters wide, so metric columns line up no matter
//! which severity wrote them.
//!
//! [`ConCol`]: crate::ConCol
use crate::color::Color;
use std::fmt;
use tracing::Level;

/// The severity of a message, one per output channel.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Log,
    Info,
    Warn,
    Error,
}

/// A styled marker prefixed to each line of a warning or error.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tag {
    text: &'static str,
    color: Color,
}

impl Tag {
    /// The tag prefixed to warnings.
    pub const WARN: Tag = Tag::new(" WARN: ", Color::BrightYellow);

    /// The tag prefixed to errors.
    pub const ERROR: Tag = Tag::new("ERROR: ", Color::BrightRed);

    /// Returns a `Tag` with the given text and color.
    pub const fn new(text: &'static str, color: Color) -> Self {
        Tag { text, color }
    }

    /// Returns the text of the tag, including its padding.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    /// Returns the color the tag is painted with.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the display width of the tag.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl Severity {
    /// Every severity, in channel order.
    pub const ALL: [Severity; 4] = [
        Severity::Log,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Returns the tag for this severity, if it has one.
    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Severity::Log | Severity::Info => None,
            Severity::Warn => Some(Tag::WARN),
            Severity::Error => Some(Tag::ERROR),
        }
    }

    /// Returns the name of the severity method.
    pub const fn name(&self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    pub(crate) const fn index(&self) -> usize {
        match self {
            Severity::Log => 0,
            Severity::Info => 1,
            Severity::Warn => 2,
            Severity::Error => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            _ => Severity::Log,
        }
    }
}
