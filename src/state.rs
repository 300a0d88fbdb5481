//! Process-wide logging state shared by every emitter

use crate::pattern::PatternSet;
use once_cell::sync::Lazy;
use std::env;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Environment variable consulted for the initial pattern
pub const ENV_VAR: &str = "DEBUG";

struct Inner {
    patterns: Option<PatternSet>,
    sink: Box<dyn Write + Send>,
}

struct State {
    enabled: AtomicBool,
    inner: Mutex<Inner>,
}

static STATE: Lazy<State> = Lazy::new(|| {
    let mut patterns = None;
    let mut enabled = false;

    // A non-empty DEBUG variable seeds the state as if enable() had
    // been called once at startup.
    if let Ok(pattern) = env::var(ENV_VAR) {
        if !pattern.is_empty() {
            patterns = Some(compile(&pattern));
            enabled = true;
        }
    }

    State {
        enabled: AtomicBool::new(enabled),
        inner: Mutex::new(Inner {
            patterns,
            sink: Box::new(io::stderr()),
        }),
    }
});

// regex::escape inside PatternSet::compile guarantees a valid source
fn compile(pattern: &str) -> PatternSet {
    PatternSet::compile(pattern).expect("escaped pattern always compiles")
}

/// Enable emitters whose namespace matches `pattern`.
///
/// Patterns take a glob-like form: `*` enables everything,
/// `mongo:connection` a single namespace, `mongo:*` a subtree. Multiple
/// tokens combine with commas, and a leading `-` excludes a token, with
/// exclusions overriding inclusions. Calling again replaces the
/// installed matchers as a pair. Thread-safe.
pub fn enable(pattern: &str) {
    let compiled = compile(pattern);

    let mut inner = STATE.inner.lock().unwrap();
    inner.patterns = Some(compiled);
    STATE.enabled.store(true, Ordering::Release);

    debug!("debug pattern enabled: {}", pattern);
}

/// Disable all emitters.
///
/// Installed matchers are left in place but are not consulted while
/// disabled. Thread-safe.
pub fn disable() {
    let _inner = STATE.inner.lock().unwrap();
    STATE.enabled.store(false, Ordering::Release);

    debug!("debug output disabled");
}

/// Whether debug output is globally enabled
pub fn is_enabled() -> bool {
    STATE.enabled.load(Ordering::Acquire)
}

/// Replace the output sink. The default sink is standard error.
pub fn set_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    let mut inner = STATE.inner.lock().unwrap();
    inner.sink = Box::new(writer);
}

/// Run `f` against the sink if `name` is currently enabled.
///
/// The disabled path is a single atomic load. Matcher consultation and
/// the sink write happen under one lock acquisition, so a concurrent
/// `enable` can never be observed half-applied.
pub(crate) fn with_enabled_sink<F>(name: &str, f: F)
where
    F: FnOnce(&mut dyn Write),
{
    if !STATE.enabled.load(Ordering::Acquire) {
        return;
    }

    let mut guard = STATE.inner.lock().unwrap();
    let inner = &mut *guard;

    let allowed = match &inner.patterns {
        Some(patterns) => patterns.allows(name),
        None => false,
    };

    if allowed {
        f(&mut *inner.sink);
    }
}
