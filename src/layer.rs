//! Route [`tracing`] events through a [`ConCol`].
//!
//! [`ConColLayer`] is a [`Layer`] that writes every event it sees with a
//! [`ConCol`] instance. The event's level picks the severity method, its
//! `message` becomes a text line, and every other field becomes a metric line.
//!
//! # Examples
//!
//! ```
//! use concol::{ConCol, ConColLayer, Color};
//! use tracing_subscriber::layer::SubscriberExt;
//! use tracing_subscriber::Registry;
//!
//! let layer = ConColLayer::new(ConCol::new("server", Color::Blue, None));
//! let subscriber = Registry::default().with(layer);
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(requests = 1234, latency_ms = 18.5, "served");
//!     tracing::warn!("disk almost full");
//! });
//! ```
//! ```log
//! 10:42:07.118 [server] served
//! 10:42:07.118 [server]                           requests:     1,234
//! 10:42:07.118 [server]                         latency_ms:        19
//! 10:42:07.118 [server]  WARN: disk almost full
//! ```
//!
//! [`Layer`]: tracing_subscriber::layer::Layer
use crate::logger::ConCol;
use crate::message::{Element, Message, Scalar};
use crate::tag::Severity;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// A [`Layer`] that writes events with a [`ConCol`].
///
/// See the [module level documentation](self) for details.
pub struct ConColLayer {
    concol: ConCol,
    levels: fn(&Level) -> u32,
}

/// The default mapping from [`Level`] to message level: `ERROR`, `WARN` and
/// `INFO` are level 0, `DEBUG` is 1, `TRACE` is 2.
pub fn default_levels(level: &Level) -> u32 {
    if *level == Level::TRACE {
        2
    } else if *level == Level::DEBUG {
        1
    } else {
        0
    }
}

impl ConColLayer {
    /// Returns a [`ConColLayer`] writing with `concol`.
    pub fn new(concol: ConCol) -> Self {
        ConColLayer {
            concol,
            levels: default_levels,
        }
    }

    /// Sets how [`Level`]s map to the message levels checked against the
    /// instance's cutoff.
    pub fn with_levels(mut self, levels: fn(&Level) -> u32) -> Self {
        self.levels = levels;
        self
    }

    pub fn concol(&self) -> &ConCol {
        &self.concol
    }
}

impl fmt::Debug for ConColLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConColLayer")
            .field("concol", &self.concol)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for ConColLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let message_level = (self.levels)(&level);

        if !self.concol.enabled(message_level) {
            return;
        }

        let mut visitor = Visitor {
            message: None,
            fields: Vec::new(),
        };
        event.record(&mut visitor);

        self.concol
            .emit(Severity::from(level), message_level, visitor.into_message());
    }
}

struct Visitor {
    message: Option<String>,
    fields: Vec<Element>,
}

impl Visitor {
    fn push(&mut self, field: &Field, value: Scalar) {
        self.fields
            .push(Element::Tuple(vec![Scalar::from(field.name()), value]));
    }

    fn into_message(self) -> Message {
        let mut elements = Vec::with_capacity(self.fields.len() + 1);
        if let Some(message) = self.message {
            elements.push(Element::Text(message));
        }
        elements.extend(self.fields);

        if elements.is_empty() {
            Message::blank()
        } else {
            Message::Seq(elements)
        }
    }
}

impl Visit for Visitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Scalar::Number(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Scalar::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Scalar::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(value.to_string()),
            _ => self.push(field, Scalar::from(value)),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let value = format!("{:?}", value);
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(value),
            _ => self.push(field, Scalar::Text(value)),
        }
    }
}
