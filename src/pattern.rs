//! Glob pattern compilation and namespace matching

use crate::error::{DebugError, Result};
use regex::Regex;

/// Split a raw debug pattern into include and exclude glob sets.
///
/// Tokens are comma-separated; a token with a leading `-` is an
/// exclusion and has the prefix stripped. Each side is re-joined with
/// `,`, preserving the original relative order. Colons pass through
/// verbatim, so hierarchical names like `mongo:connection` keep their
/// structure.
pub fn split_pattern(pattern: &str) -> (String, String) {
    let mut includes: Vec<&str> = Vec::new();
    let mut excludes: Vec<&str> = Vec::new();

    for token in pattern.split(',') {
        match token.strip_prefix('-') {
            Some(stripped) => excludes.push(stripped),
            None => includes.push(token),
        }
    }

    (includes.join(","), excludes.join(","))
}

/// Convert an escaped glob set into an anchored regex source.
///
/// Expects wildcards in escaped form (`\*`), as produced by
/// [`regex::escape`]; every other metacharacter in the input is already
/// literal. `\*` becomes a lazy `.*?`, commas become alternation, and
/// the whole source is anchored at both ends. An empty set yields
/// `^()$`, which matches only the empty string.
pub fn pattern_to_regex(glob_set: &str) -> String {
    let source = glob_set.replace(r"\*", ".*?").replace(',', "|");
    format!("^({})$", source)
}

/// A compiled case-sensitive whole-string matcher over namespace names
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a matcher from an escaped glob set
    pub fn compile(glob_set: &str) -> Result<Self> {
        let regex = Regex::new(&pattern_to_regex(glob_set))
            .map_err(|e| DebugError::Pattern(e.to_string()))?;

        Ok(Self { regex })
    }

    /// Check whether `name` is matched in full
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// The include and exclude matchers compiled from one debug pattern
#[derive(Debug, Clone)]
pub struct PatternSet {
    includes: Matcher,
    excludes: Matcher,
}

impl PatternSet {
    /// Compile a raw pattern into an include/exclude matcher pair.
    ///
    /// Each glob set is regex-escaped before compilation, so every
    /// metacharacter except `*` matches literally.
    pub fn compile(pattern: &str) -> Result<Self> {
        let (includes, excludes) = split_pattern(pattern);

        Ok(Self {
            includes: Matcher::compile(&regex::escape(&includes))?,
            excludes: Matcher::compile(&regex::escape(&excludes))?,
        })
    }

    /// Check whether a namespace should emit.
    ///
    /// Exclusions take precedence over inclusions; with no include
    /// tokens nothing matches.
    pub fn allows(&self, name: &str) -> bool {
        if self.excludes.is_match(name) {
            return false;
        }

        self.includes.is_match(name)
    }
}
