//! Macros shared by the validation helpers.

/// Build a `LazyLock<Regex>` static that panics with `$msg` if the pattern
/// is malformed.
///
/// The caller must have `LazyLock` and `Regex` in scope.
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static TAG: LazyLock<Regex> = utmlink::lazy_regex!(r"^[a-z]+$", "lowercase tag");
/// assert!(TAG.is_match("tgmain"));
/// assert!(!TAG.is_match("tg main"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
