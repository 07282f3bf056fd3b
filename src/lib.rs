//! Timestamped, colorized, column-aligned console logging.
//!
//! # Overview
//!
//! A [`ConCol`] writes log lines for one named part of a program. Every line
//! carries a timestamp and the instance's label, padded so that the labels of
//! all instances line up:
//! ```log
//! 10:42:07.118 [App One  ] output a single string
//! 10:42:07.118 [App One  ]  WARN: output warning
//! 10:42:07.170 [App Two  ]                               code:       180 lines
//! 10:42:07.221 [App Three] ERROR: error 1
//! ```
//!
//! Messages come in several shapes, all accepted by the same four severity
//! methods, [`log`], [`info`], [`warn`] and [`error`]:
//! * text, with one output line per `'\n'`
//! * sequences of strings
//! * `name, value, unit` metrics, rendered as aligned rows with numbers
//!   grouped in thousands
//! * a mix of text and metrics, see [`message!`]
//!
//! Each instance has a level cutoff. Calls made with a level above it are
//! dropped before any formatting happens.
//!
//! # Getting started
//!
//! ```
//! use concol::{message, ConCol, Color};
//!
//! let app = ConCol::new("App One", Color::Cyan, None);
//! app.log("output a single string");
//! app.log(());
//! app.info(vec!["array string\nwith carriage returns", "and elements"]);
//!
//! let stats = ConCol::new("App Two", Color::Green, None);
//! stats.log(("modules required", 0));
//! stats.log(("code", 180, " lines"));
//! stats.log(message!["\noutput the fibonacci sequence", ("first", 1), ("second", 1)]);
//! stats.warn(vec![("errors in module", 0, " found")]);
//! stats.error("error 1\nerror 2");
//!
//! let quiet = ConCol::new("App Three", Color::White, 3);
//! quiet.info_at(3, "level3");
//! quiet.info_at(4, "level4 is never written");
//! ```
//!
//! # Alignment across instances
//!
//! Instances register their label width with a shared [`Registry`]. Label
//! prefixes are padded to the widest label registered *so far*, so creating an
//! instance with a longer label widens the output of every instance from then
//! on. Lines already written are not affected.
//!
//! # Using with `tracing`
//!
//! [`ConColLayer`] is a [`tracing_subscriber`] layer that writes [`tracing`]
//! events with a [`ConCol`]. See the [`layer` module documentation][mod@layer].
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `smallvec`: Keeps the normalized lines of short messages on the stack.
//!
//! [`log`]: ConCol::log
//! [`info`]: ConCol::info
//! [`warn`]: ConCol::warn
//! [`error`]: ConCol::error

pub mod builder;
pub mod color;
pub mod layer;
pub mod message;
pub mod normalize;
pub mod number;
pub mod printer;
pub mod registry;
pub mod tag;
pub mod time;
#[doc(hidden)]
#[macro_use]
mod cfg;
#[macro_use]
mod macros;
mod fail;
mod logger;

pub mod prelude;

pub use crate::builder::ConColBuilder;
pub use crate::color::{Color, ParseColorError};
pub use crate::layer::ConColLayer;
pub use crate::logger::{ConCol, Cutoff};
pub use crate::message::{Element, Message, Metric, Scalar};
pub use crate::registry::Registry;
pub use crate::tag::{Severity, Tag};
