//! Tag validation.
//!
//! Tags are embedded in URLs without any encoding, so they are restricted to a
//! URL-safe alphabet. The webinar bot only understands a fixed vocabulary of
//! tags, which is checked instead of the pattern.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormError, Result};

static TAG_RE: LazyLock<Regex> = lazy_regex!(r"^[A-Za-z0-9_-]+$", "tag pattern must compile");

static WHITESPACE_RE: LazyLock<Regex> = lazy_regex!(r"\s+", "whitespace pattern must compile");

/// Tags accepted by the webinar bot.
pub const WEBINAR_TAGS: &[&str] = &[
    "tgmain",
    "tgpartners",
    "email",
    "wa",
    "ytmain",
    "igmain",
    "website",
];

/// How a link family checks its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Any tag made of `[A-Za-z0-9_-]`.
    Pattern,
    /// One of a fixed list of tags.
    OneOf(&'static [&'static str]),
}

impl TagRule {
    /// Check a tag against this rule.
    ///
    /// # Errors
    /// Returns [`FormError::MissingTag`] for a blank tag and
    /// [`FormError::InvalidTag`] or [`FormError::TagNotAllowed`] when the rule
    /// rejects it.
    pub fn check(self, tag: &str) -> Result<()> {
        if tag.trim().is_empty() {
            return Err(FormError::MissingTag);
        }
        match self {
            Self::Pattern if is_valid_tag(tag) => Ok(()),
            Self::Pattern => Err(FormError::InvalidTag(tag.to_string())),
            Self::OneOf(allowed) if allowed.iter().any(|a| *a == tag) => Ok(()),
            Self::OneOf(allowed) => Err(FormError::TagNotAllowed {
                tag: tag.to_string(),
                allowed: allowed.join(", "),
            }),
        }
    }
}

/// Whether `tag` only uses characters that are safe to embed unencoded.
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_RE.is_match(tag)
}

/// Replace every run of whitespace with a single hyphen.
///
/// ```
/// assert_eq!(utmlink::hyphenate("Scale  AI"), "Scale-AI");
/// ```
#[must_use]
pub fn hyphenate(name: &str) -> String {
    WHITESPACE_RE.replace_all(name, "-").into_owned()
}
