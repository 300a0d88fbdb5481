//! Namespace-scoped debug logging
//!
//! Emitters tag diagnostic lines with a hierarchical namespace such as
//! `mongo:connection`; a single process-wide glob pattern decides at
//! runtime which namespaces actually produce output. Patterns take the
//! form `"*,-foo,bar:*"`: comma-separated tokens, `*` matching any
//! substring, and a leading `-` marking an exclusion that overrides any
//! inclusion.
//!
//! The initial pattern is read from the `DEBUG` environment variable on
//! first use, and output goes to standard error unless replaced with
//! [`set_writer`].

#![deny(rust_2018_idioms)]
#![warn(missing_docs)]

pub mod emitter;
pub mod error;
pub mod format;
pub mod pattern;
pub mod state;

pub use emitter::Emitter;
pub use error::{DebugError, Result};
pub use pattern::{Matcher, PatternSet};
pub use state::{disable, enable, is_enabled, set_writer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Emit a printf-style message through an [`Emitter`].
///
/// Usage: `emit!(dbg, "connected to {} in {}ms", host, elapsed)`
///
/// Arguments are only formatted when the emitter's namespace is
/// currently enabled.
#[macro_export]
macro_rules! emit {
    ($emitter:expr, $($arg:tt)*) => {
        $emitter.emit(::core::format_args!($($arg)*))
    };
}
