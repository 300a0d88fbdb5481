//! Per-namespace debug emitters

use crate::format::{humanize_nanos, pick_color, timestamp};
use crate::state;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// A handle that writes debug lines for one namespace.
///
/// Creation assigns a display color and seeds both elapsed-time
/// references to the creation instant. An emitter may be invoked from
/// multiple threads; racing invocations can skew the reported deltas
/// but never corrupt state.
pub struct Emitter {
    name: String,
    color: &'static str,
    created: Instant,
    last_global: AtomicU64,
    last_local: AtomicU64,
}

impl Emitter {
    /// Create an emitter bound to `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: pick_color(),
            created: Instant::now(),
            last_global: AtomicU64::new(0),
            last_local: AtomicU64::new(0),
        }
    }

    /// The namespace this emitter is bound to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one debug line if this namespace is currently enabled.
    ///
    /// The disabled path does no allocation and no formatting. Writes
    /// are best-effort; sink errors are dropped. Never panics on a
    /// malformed message, since formatting went through `format_args!`
    /// at the call site.
    pub fn emit(&self, args: fmt::Arguments<'_>) {
        state::with_enabled_sink(&self.name, |sink| {
            let now = self.nanos_since_creation();
            let global = now.saturating_sub(self.last_global.load(Ordering::Relaxed));
            let local = now.saturating_sub(self.last_local.load(Ordering::Relaxed));

            let _ = writeln!(
                sink,
                "{} {:<6} \x1b[{}m{:<6} \x1b[{}m{}\x1b[0m - {}",
                timestamp(),
                humanize_nanos(global),
                self.color,
                humanize_nanos(local),
                self.color,
                self.name,
                args
            );

            let after = self.nanos_since_creation();
            self.last_global.store(after, Ordering::Relaxed);
            self.last_local.store(after, Ordering::Relaxed);
        });
    }

    // Monotonic nanoseconds relative to this emitter's creation
    fn nanos_since_creation(&self) -> u64 {
        self.created.elapsed().as_nanos() as u64
    }
}
