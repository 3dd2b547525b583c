//! Hierarchical expansion of a single part value.
//!
//! Every function returns byte ranges into the value it was given, so callers
//! can slice the raw text, decode each piece separately and shift the ranges
//! by the part's position in the input.

use std::ops::Range;

/// Suffixes of `value` starting after each `delimiter`, longest first.
///
/// `www.foo.com` yields `www.foo.com`, `foo.com` and `com`. Every range ends
/// at the end of `value`.
pub fn reverse_hierarchy(value: &str, delimiter: char) -> Vec<Range<usize>> {
    let end = value.len();
    std::iter::once(0)
        .chain(value.match_indices(delimiter).map(|(i, d)| i + d.len()))
        .filter(|&start| start < end)
        .map(|start| start..end)
        .collect()
}

/// Prefixes of `value` ending before each `delimiter`, shortest first.
///
/// `/a/b/c` yields `/a`, `/a/b` and `/a/b/c`. A delimiter at index 0 does not
/// end a prefix, so `/` alone yields just `/`.
pub fn forward_hierarchy(value: &str, delimiter: char) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let ends = value
        .match_indices(delimiter)
        .map(|(i, _)| i)
        .filter(|&i| i > 0)
        .chain(std::iter::once(value.len()));
    for end in ends {
        if end == 0 || ranges.last().is_some_and(|last| last.end == end) {
            continue;
        }
        ranges.push(0..end);
    }
    ranges
}

/// Non-empty segments of `value` between `delimiter`s.
pub fn split_segments(value: &str, delimiter: char) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (i, d) in value.match_indices(delimiter) {
        if i > start {
            ranges.push(start..i);
        }
        start = i + d.len();
    }
    if start < value.len() {
        ranges.push(start..value.len());
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices<'a>(value: &'a str, ranges: &[Range<usize>]) -> Vec<&'a str> {
        ranges.iter().map(|r| &value[r.clone()]).collect()
    }

    #[test]
    fn test_reverse_hierarchy() {
        let host = "www.foo.bar.com";
        let ranges = reverse_hierarchy(host, '.');
        assert_eq!(
            slices(host, &ranges),
            vec!["www.foo.bar.com", "foo.bar.com", "bar.com", "com"]
        );
        assert_eq!(ranges[1], 4..15);
    }

    #[test]
    fn test_reverse_hierarchy_skips_empty_suffix() {
        assert_eq!(slices("foo.", &reverse_hierarchy("foo.", '.')), vec!["foo."]);
        assert_eq!(slices("localhost", &reverse_hierarchy("localhost", '.')), vec!["localhost"]);
        assert!(reverse_hierarchy("", '.').is_empty());
    }

    #[test]
    fn test_forward_hierarchy() {
        let path = "/index_name/type_name/_search.html";
        assert_eq!(
            slices(path, &forward_hierarchy(path, '/')),
            vec!["/index_name", "/index_name/type_name", path]
        );
    }

    #[test]
    fn test_forward_hierarchy_edges() {
        assert_eq!(slices("/", &forward_hierarchy("/", '/')), vec!["/"]);
        assert_eq!(slices("/a/", &forward_hierarchy("/a/", '/')), vec!["/a", "/a/"]);
        assert!(forward_hierarchy("", '/').is_empty());
    }

    #[test]
    fn test_split_segments() {
        let query = "foo=bar&&baz=bat&";
        assert_eq!(
            slices(query, &split_segments(query, '&')),
            vec!["foo=bar", "baz=bat"]
        );
        assert!(split_segments("&", '&').is_empty());
    }
}
