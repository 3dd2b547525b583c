use tracing::trace;
use url::Host;

use crate::url_part::UrlPart;

use super::parser::ParsedUrl;
use super::patterns::{
    HOST_REGEX, PATH_REGEX, PORT_REGEX, QUERY_REGEX, REF_REGEX, SCHEME_REGEX,
};

/// A part value as it appears in the input, before any decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPart<'a> {
    pub value: &'a str,
    /// True for a port that was inferred from the scheme rather than written
    /// in the input. Inferred values do not occur in the input text.
    pub inferred: bool,
}

impl<'a> RawPart<'a> {
    fn explicit(value: &'a str) -> Self {
        Self { value, inferred: false }
    }

    fn inferred(value: &'static str) -> Self {
        Self { value, inferred: true }
    }
}

/// Default port for a scheme, shared by the strict and malformed extractors.
pub fn infer_port(scheme: &str) -> Option<&'static str> {
    if scheme.eq_ignore_ascii_case("http") {
        Some("80")
    } else if scheme.eq_ignore_ascii_case("https") {
        Some("443")
    } else {
        None
    }
}

/// Whether a host is an IPv4 or bracketed IPv6 literal.
pub fn is_ip_literal(host: &str) -> bool {
    matches!(Host::parse(host), Ok(Host::Ipv4(_) | Host::Ipv6(_)))
}

/// Extract a part from a strictly parsed URL.
pub fn extract_part<'a>(url: &ParsedUrl<'a>, part: UrlPart) -> Option<RawPart<'a>> {
    match part {
        UrlPart::Protocol => Some(RawPart::explicit(url.scheme)),
        UrlPart::Host => url.host.map(RawPart::explicit),
        UrlPart::Port => match url.port {
            Some(port) => Some(RawPart::explicit(port)),
            None => infer_port(url.scheme).map(RawPart::inferred),
        },
        UrlPart::Path => url.path.map(RawPart::explicit),
        UrlPart::Ref => url.fragment.map(RawPart::explicit),
        UrlPart::Query => url.query.map(RawPart::explicit),
        UrlPart::Whole => Some(RawPart::explicit(url.input)),
    }
}

/// Best-effort extraction from a string that may not be a well-formed URL.
///
/// Returns `None` whenever the corresponding pattern does not match or
/// captures nothing.
pub fn extract_malformed_part(input: &str, part: UrlPart) -> Option<RawPart<'_>> {
    let scheme = SCHEME_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    // host, port and path are anchored right after the scheme, if any
    let rest = match scheme {
        Some(scheme) => &input[scheme.len() + "://".len()..],
        None => input,
    };

    let found = match part {
        UrlPart::Protocol => scheme.map(RawPart::explicit),
        UrlPart::Host => capture(&HOST_REGEX, rest).map(RawPart::explicit),
        UrlPart::Port => match capture(&PORT_REGEX, rest) {
            Some(port) => Some(RawPart::explicit(port)),
            None => scheme.and_then(infer_port).map(RawPart::inferred),
        },
        UrlPart::Path => capture(&PATH_REGEX, rest).map(RawPart::explicit),
        UrlPart::Ref => capture(&REF_REGEX, input).map(RawPart::explicit),
        UrlPart::Query => capture(&QUERY_REGEX, input).map(RawPart::explicit),
        UrlPart::Whole => Some(RawPart::explicit(input)),
    };
    let found = found.filter(|raw| !raw.value.is_empty());
    trace!("Malformed extraction of {} from {:?}: {:?}", part, input, found);
    found
}

/// Extract a part from any string, strictly when it is a well-formed URL and
/// by best effort otherwise.
pub fn get_part(source: &str, part: UrlPart) -> Option<String> {
    let raw = match ParsedUrl::parse(source) {
        Ok(url) => extract_part(&url, part),
        Err(_) => extract_malformed_part(source, part),
    };
    raw.map(|raw| raw.value.to_string())
}

fn capture<'a>(regex: &regex::Regex, haystack: &'a str) -> Option<&'a str> {
    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
