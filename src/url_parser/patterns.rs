use once_cell::sync::Lazy;
use regex::Regex;

/// `scheme://` at the very start of the input.
pub static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://").unwrap()
});

// The patterns below run on the input with any leading `scheme://` removed.

/// Leading run of hostname labels, terminated by a delimiter or the end.
pub static HOST_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*)(?:[:/?#]|$)",
    )
    .unwrap()
});

/// Digits after the `:` that follows the host position.
pub static PORT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^/?#:@]*:([0-9]{1,5})(?:[/?#]|$)").unwrap()
});

/// Everything from the first `/` up to, but excluding, `?` or `#`.
pub static PATH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^/?#]*(/[^?#]*)").unwrap()
});

/// Content after `#`, up to `?` or `&`.
pub static REF_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([^?&]+)").unwrap()
});

/// Content after `?`, up to `#`.
pub static QUERY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\?([^#]+)").unwrap()
});
