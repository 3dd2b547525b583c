use thiserror::Error;
use tracing::{instrument, trace};
use url::Url;

use super::patterns::SCHEME_REGEX;

/// Why a string was not accepted as a well-formed URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The input does not start with `scheme://`.
    #[error("expected a scheme followed by '://'")]
    MissingAuthority,

    /// A tab or newline inside the URL.
    #[error("unexpected whitespace at index {0}")]
    EmbeddedWhitespace(usize),

    /// The `url` crate rejected the input.
    #[error("{0}")]
    Invalid(#[from] url::ParseError),
}

/// A well-formed URL split into raw component slices of the original input.
///
/// Nothing here is normalized or decoded: every field borrows the exact text
/// the caller supplied, so the slices can be searched for in that input to
/// recover offsets. Empty components are reported as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    /// The URL without surrounding whitespace.
    pub input: &'a str,
    pub scheme: &'a str,
    pub host: Option<&'a str>,
    /// The port as written, if the URL spells one out.
    pub port: Option<&'a str>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> ParsedUrl<'a> {
    /// Strictly parses a URL string into raw component slices
    ///
    /// Leading and trailing spaces and control characters are ignored, so
    /// `input` on the result is the trimmed URL. A tab or newline anywhere
    /// inside the URL is rejected rather than silently dropped. The URL must
    /// have the hierarchical `scheme://authority` shape and be accepted by the
    /// `url` crate; a bare `scheme://` is accepted as a partial URL that has
    /// nothing but a scheme.
    ///
    /// # Arguments
    /// * `input` - The string to parse, exactly as the caller received it
    ///
    /// # Returns
    /// * `Result<ParsedUrl, ParseFailure>` - Components borrowed from `input`,
    ///   or the reason the string is not a well-formed URL
    #[instrument(level = "trace", skip_all, fields(input = %input))]
    pub fn parse(input: &'a str) -> Result<Self, ParseFailure> {
        let input = input.trim_matches(|c: char| c <= ' ');
        if let Some(index) = input.find(|c: char| matches!(c, '\t' | '\n' | '\r')) {
            return Err(ParseFailure::EmbeddedWhitespace(index));
        }

        let scheme = SCHEME_REGEX
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(ParseFailure::MissingAuthority)?;
        let rest = &input[scheme.len() + "://".len()..];

        match Url::parse(input) {
            Ok(url) => trace!("Validated URL with scheme {}", url.scheme()),
            Err(url::ParseError::EmptyHost) if rest.is_empty() => {
                trace!("Accepting partial URL {}", input);
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Self::split(input, scheme, rest))
    }

    fn split(input: &'a str, scheme: &'a str, rest: &'a str) -> Self {
        let authority_end = rest
            .find(|c: char| matches!(c, '/' | '?' | '#' | '\\'))
            .unwrap_or(rest.len());
        let authority = &rest[..authority_end];
        let host_port = authority
            .rfind('@')
            .map_or(authority, |at| &authority[at + 1..]);
        let (host, port) = split_host_port(host_port);

        let tail = &rest[authority_end..];
        let path_end = tail
            .find(|c: char| matches!(c, '?' | '#'))
            .unwrap_or(tail.len());
        let path = &tail[..path_end];
        let after_path = &tail[path_end..];

        let (query, fragment) = if let Some(query) = after_path.strip_prefix('?') {
            match query.find('#') {
                Some(hash) => (Some(&query[..hash]), Some(&query[hash + 1..])),
                None => (Some(query), None),
            }
        } else {
            (None, after_path.strip_prefix('#'))
        };

        ParsedUrl {
            input,
            scheme,
            host: non_empty(Some(host)),
            port: non_empty(port),
            path: non_empty(Some(path)),
            query: non_empty(query),
            fragment: non_empty(fragment),
        }
    }
}

fn split_host_port(host_port: &str) -> (&str, Option<&str>) {
    if host_port.starts_with('[') {
        // IPv6 literal, keep the brackets as part of the host
        return match host_port.find(']') {
            Some(close) => (
                &host_port[..=close],
                host_port[close + 1..].strip_prefix(':'),
            ),
            None => (host_port, None),
        };
    }
    match host_port.rfind(':') {
        Some(colon) => (&host_port[..colon], Some(&host_port[colon + 1..])),
        None => (host_port, None),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let input = "http://www.foo.bar.com:9200/index_name/type_name/_search.html?foo=bar&baz=bat#tag";
        let parsed = ParsedUrl::parse(input).unwrap();

        assert_eq!(parsed.scheme, "http");
        assert_eq!(parsed.host, Some("www.foo.bar.com"));
        assert_eq!(parsed.port, Some("9200"));
        assert_eq!(parsed.path, Some("/index_name/type_name/_search.html"));
        assert_eq!(parsed.query, Some("foo=bar&baz=bat"));
        assert_eq!(parsed.fragment, Some("tag"));
    }

    #[test]
    fn test_parse_keeps_raw_text() {
        let parsed = ParsedUrl::parse("HTTP://Foo.COM:80").unwrap();
        assert_eq!(parsed.scheme, "HTTP");
        assert_eq!(parsed.host, Some("Foo.COM"));
        // the url crate drops default ports, the raw split does not
        assert_eq!(parsed.port, Some("80"));
        assert_eq!(parsed.path, None);
    }

    #[test]
    fn test_fragment_before_query_belongs_to_fragment() {
        let parsed = ParsedUrl::parse("http://foo.bar.com/baz/bat.html#whee?bob=loblaw").unwrap();
        assert_eq!(parsed.path, Some("/baz/bat.html"));
        assert_eq!(parsed.query, None);
        assert_eq!(parsed.fragment, Some("whee?bob=loblaw"));
    }

    #[test]
    fn test_userinfo_and_ipv6() {
        let parsed = ParsedUrl::parse("https://user:pw@[::1]:8443/x").unwrap();
        assert_eq!(parsed.host, Some("[::1]"));
        assert_eq!(parsed.port, Some("8443"));
        assert_eq!(parsed.path, Some("/x"));
    }

    #[test]
    fn test_partial_url() {
        let parsed = ParsedUrl::parse("http://").unwrap();
        assert_eq!(parsed.scheme, "http");
        assert_eq!(parsed.host, None);
        assert_eq!(parsed.path, None);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let parsed = ParsedUrl::parse(" http://foo.com/x \n").unwrap();
        assert_eq!(parsed.input, "http://foo.com/x");
        assert_eq!(parsed.host, Some("foo.com"));
        assert_eq!(parsed.path, Some("/x"));

        let parsed = ParsedUrl::parse("http://foo.com ").unwrap();
        assert_eq!(parsed.host, Some("foo.com"));
    }

    #[test]
    fn test_rejects_embedded_whitespace() {
        assert_eq!(
            ParsedUrl::parse("http://foo.\tcom/x").unwrap_err(),
            ParseFailure::EmbeddedWhitespace(11)
        );
        assert!(ParsedUrl::parse("http://foo.com/a\nb").is_err());
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(
            ParsedUrl::parse("://foo.com").unwrap_err(),
            ParseFailure::MissingAuthority
        );
        assert_eq!(
            ParsedUrl::parse("foo.bar.com:444/baz").unwrap_err(),
            ParseFailure::MissingAuthority
        );
        assert!(matches!(
            ParsedUrl::parse("http://:::::::/baz"),
            Err(ParseFailure::Invalid(_))
        ));
    }
}
