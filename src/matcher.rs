//! Regular-language membership testing.
//!
//! Wraps the external regex evaluator behind a small [`Pattern`] type so the
//! rest of the engine never touches engine-specific APIs. The evaluator must
//! support lookahead and lookbehind assertions: three catalog patterns
//! (`senha`, `q2a`, `q2g`) are not expressible without them, which rules out
//! a pure-DFA engine.

use fancy_regex::Regex;

/// A compiled regular-language pattern plus its original source text.
///
/// Membership is full-string: every catalog pattern carries its own `^`/`$`
/// anchors, and the source text is compiled verbatim so behavior stays
/// bit-exact with the catalog table.
///
/// # Examples
///
/// ```rust
/// use regra::matcher::Pattern;
/// let p = Pattern::compile(r"^\d{3}-\d{2}$").unwrap();
/// assert!(p.matches("123-45").unwrap());
/// assert!(!p.matches("123-456").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    compiled: Regex,
}

impl Pattern {
    /// Compiles a pattern, returning the engine's error on malformed input.
    /// Callers attach the owning field id when wrapping the error.
    pub fn compile(source: &str) -> Result<Self, fancy_regex::Error> {
        let compiled = Regex::new(source)?;
        Ok(Self {
            source: source.to_string(),
            compiled,
        })
    }

    /// The original pattern text, exactly as it appears in the catalog.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Decides whether `value` belongs to the pattern's language.
    ///
    /// Deterministic and side-effect free. The `Err` case is an engine
    /// runtime limit, not a non-match; it never fires for the shipped
    /// catalog on realistic input lengths.
    pub fn matches(&self, value: &str) -> Result<bool, fancy_regex::Error> {
        self.compiled.is_match(value)
    }
}
