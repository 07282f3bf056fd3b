//! The module re-exports the types most callers need.

pub use crate::message;
pub use crate::{Color, ConCol, ConColLayer, Cutoff, Message, Metric, Severity};
