//! Classify a [`Message`] into an ordered list of renderable [`Line`]s.
//!
//! The rules, in order:
//! 1. Text is split on `'\n'`, one line per fragment. Text never becomes a
//!    metric, even if a fragment looks like a number.
//! 2. A sequence of two or three elements whose second element is numeric is
//!    read as one `name, value, unit` metric rather than as separate lines.
//! 3. Every other element stands on its own: non-empty tuples become metric
//!    lines, and everything else is written as text, one line per `'\n'`.
//!
//! ```
//! use concol::normalize::{normalize, Line};
//! use concol::message;
//!
//! let lines = normalize(message!["totals", ("lines", 1234.7, " loc")]);
//! assert_eq!(lines[0], Line::Text("totals".to_string()));
//! assert_eq!(
//!     lines[1],
//!     Line::Metric {
//!         name: "lines".to_string(),
//!         value: "1,235".to_string(),
//!         unit: " loc".to_string(),
//!     }
//! );
//! ```
use crate::message::{Element, Message, Scalar};
use crate::{cfg_not_smallvec, cfg_smallvec, number};

cfg_smallvec! {
    /// The normalized lines of one message.
    pub type Lines = smallvec::SmallVec<[Line; 4]>;
}

cfg_not_smallvec! {
    /// The normalized lines of one message.
    pub type Lines = Vec<Line>;
}

/// One renderable output line, before styling and prefixing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// A metric row. `value` is already formatted for display.
    Metric {
        name: String,
        value: String,
        unit: String,
    },
}

/// Normalizes a message into lines, preserving input order.
///
/// A blank message produces one empty text line. An empty sequence produces
/// no lines at all.
pub fn normalize(message: Message) -> Lines {
    let mut lines = Lines::new();

    match message {
        Message::Text(text) => push_text(&text, &mut lines),
        Message::Seq(elements) if is_single_metric(&elements) => {
            let parts = elements.into_iter().map(Element::into_scalar).collect();
            push_tuple(parts, &mut lines);
        }
        Message::Seq(elements) => {
            for element in elements {
                match element {
                    Element::Tuple(parts) if !parts.is_empty() => push_tuple(parts, &mut lines),
                    other => push_text(&other.to_string(), &mut lines),
                }
            }
        }
    }

    lines
}

fn is_single_metric(elements: &[Element]) -> bool {
    matches!(elements.len(), 2 | 3) && elements[1].as_number().is_some()
}

fn push_text(text: &str, lines: &mut Lines) {
    lines.extend(text.split('\n').map(|line| Line::Text(line.to_string())));
}

fn push_tuple(parts: Vec<Scalar>, lines: &mut Lines) {
    let mut parts = parts.into_iter();

    let name = parts.next().map(|name| name.to_string()).unwrap_or_default();
    let value = match parts.next() {
        Some(value) => match value.as_number() {
            Some(n) => number::group(n),
            None if value.is_empty() => String::new(),
            None => value.to_string(),
        },
        None => String::new(),
    };
    let unit = parts.next().map(|unit| unit.to_string()).unwrap_or_default();

    lines.push(Line::Metric { name, value, unit });
}
