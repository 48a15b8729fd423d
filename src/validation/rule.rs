use regex::Regex;

use crate::model::non_blank_lines;
use crate::HubError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// What a rule checks. Parameters live on the variant.
#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Non-empty after trimming
    Required,
    /// At least `n` characters after trimming
    MinLength(usize),
    /// At most `n` characters after trimming
    MaxLength(usize),
    /// Trimmed value matches the expression
    Pattern(Regex),
    /// Trimmed value starts with `http://` or `https://` followed by a
    /// character other than a newline
    UrlScheme,
    /// At least `n` non-blank lines
    MinLines(usize),
}

/// A rule kind paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: String,
}

impl Rule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Required, message)
    }

    pub fn min_len(n: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MinLength(n), message)
    }

    pub fn max_len(n: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MaxLength(n), message)
    }

    /// Compile `pattern` into a rule. Fails on an invalid expression.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, HubError> {
        Ok(Self::new(RuleKind::Pattern(Regex::new(pattern)?), message))
    }

    pub fn email(message: impl Into<String>) -> Result<Self, HubError> {
        Self::pattern(EMAIL_PATTERN, message)
    }

    pub fn url(message: impl Into<String>) -> Self {
        Self::new(RuleKind::UrlScheme, message)
    }

    pub fn min_lines(n: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MinLines(n), message)
    }

    pub fn passes(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match &self.kind {
            RuleKind::Required => !trimmed.is_empty(),
            RuleKind::MinLength(n) => trimmed.chars().count() >= *n,
            RuleKind::MaxLength(n) => trimmed.chars().count() <= *n,
            RuleKind::Pattern(re) => re.is_match(trimmed),
            RuleKind::UrlScheme => has_http_scheme(trimmed),
            RuleKind::MinLines(n) => non_blank_lines(value).count() >= *n,
        }
    }

    /// The failure message, or `None` when the value passes.
    pub fn check(&self, value: &str) -> Option<&str> {
        if self.passes(value) {
            None
        } else {
            Some(&self.message)
        }
    }
}

fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| {
            value
                .strip_prefix(scheme)
                .is_some_and(|rest| rest.starts_with(|c: char| c != '\n'))
        })
}
