use regex::Regex;

/// Decides whether a pattern string is acceptable to the log collector.
///
/// Called once for every regex-shaped field, whatever else is wrong with
/// that field. `Err` carries the reason shown to the user.
pub trait RegexCheck {
    fn check(&self, pattern: &str) -> Result<(), String>;
}

/// Accepts every pattern. The collector's regex dialect is not the `regex`
/// crate's, so this is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl RegexCheck for AcceptAll {
    fn check(&self, _pattern: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Opt-in check that compiles non-empty patterns with the `regex` crate.
///
/// Stricter than the collector: look-around and backreferences are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompiledRegexCheck;

impl RegexCheck for CompiledRegexCheck {
    fn check(&self, pattern: &str) -> Result<(), String> {
        if pattern.is_empty() {
            return Ok(());
        }
        // Collector expressions are commonly written as /.../
        let body = pattern
            .strip_prefix('/')
            .and_then(|p| p.strip_suffix('/'))
            .unwrap_or(pattern);
        Regex::new(body).map(|_| ()).map_err(|e| e.to_string())
    }
}
