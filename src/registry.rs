//! Shared label-width tracking.
//!
//! Every [`ConCol`] registers its label width with a [`Registry`] when it is
//! built. Label prefixes are padded to the registry's width *at render time*,
//! so lines written before a longer-named instance existed will be narrower
//! than lines written after it. Widths only ever grow.
//!
//! ```
//! use concol::{ConCol, Registry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(Registry::new());
//! let short = ConCol::builder("api").registry(registry.clone()).build();
//! assert_eq!(registry.width(), 3);
//!
//! let _long = ConCol::builder("scheduler").registry(registry.clone()).build();
//! assert_eq!(registry.width(), 9);
//! # drop(short);
//! ```
//!
//! [`ConCol`]: crate::ConCol
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Tracks the widest application label seen by the instances sharing it.
#[derive(Debug, Default)]
pub struct Registry {
    width: AtomicUsize,
}

impl Registry {
    /// Returns a new, empty [`Registry`].
    pub const fn new() -> Self {
        Registry {
            width: AtomicUsize::new(0),
        }
    }

    /// Returns the process-wide registry.
    ///
    /// Instances built without an explicit registry share this one.
    pub fn global() -> Arc<Registry> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(Registry::new())).clone()
    }

    /// Records a label width, widening the registry if needed.
    ///
    /// Returns the width after the update.
    pub fn observe(&self, width: usize) -> usize {
        self.width.fetch_max(width, Ordering::AcqRel).max(width)
    }

    /// Returns the current label width.
    pub fn width(&self) -> usize {
        self.width.load(Ordering::Acquire)
    }
}
