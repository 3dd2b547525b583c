use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, UrlTokenError};

/// A named component of a URL.
///
/// Ordering between parts is NOT the declaration order of the enum: it comes
/// from [`UrlPart::precedence`], which pins the order tokens are emitted in when
/// several parts are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPart {
    Protocol,
    Host,
    Port,
    Path,
    Ref,
    Query,
    Whole,
}

/// Canonical emission order. Multi-part output ordering is a contract with
/// existing indexes, so it is spelled out here rather than derived.
const PRECEDENCE_TABLE: [UrlPart; 7] = [
    UrlPart::Protocol,
    UrlPart::Host,
    UrlPart::Port,
    UrlPart::Path,
    UrlPart::Ref,
    UrlPart::Query,
    UrlPart::Whole,
];

impl UrlPart {
    /// Every part, in precedence order.
    pub const ALL: [UrlPart; 7] = PRECEDENCE_TABLE;

    /// Position of this part in the canonical order, starting at 1.
    pub fn precedence(self) -> u8 {
        match self {
            UrlPart::Protocol => 1,
            UrlPart::Host => 2,
            UrlPart::Port => 3,
            UrlPart::Path => 4,
            UrlPart::Ref => 5,
            UrlPart::Query => 6,
            UrlPart::Whole => 7,
        }
    }

    /// Lowercase name, also used as the token type label.
    pub fn name(self) -> &'static str {
        match self {
            UrlPart::Protocol => "protocol",
            UrlPart::Host => "host",
            UrlPart::Port => "port",
            UrlPart::Path => "path",
            UrlPart::Ref => "ref",
            UrlPart::Query => "query",
            UrlPart::Whole => "whole",
        }
    }

    /// Look up a part by name, ignoring ASCII case. Only exact names match.
    pub fn from_name(name: &str) -> Result<Self> {
        PRECEDENCE_TABLE
            .iter()
            .copied()
            .find(|part| part.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UrlTokenError::UnrecognizedPart(name.to_string()))
    }

    /// Sort the given parts into precedence order and drop duplicates.
    pub fn canonicalize<I>(parts: I) -> Vec<UrlPart>
    where
        I: IntoIterator<Item = UrlPart>,
    {
        let mut parts: Vec<UrlPart> = parts.into_iter().collect();
        parts.sort();
        parts.dedup();
        parts
    }
}

impl PartialOrd for UrlPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrlPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UrlPart {
    type Err = UrlTokenError;

    fn from_str(s: &str) -> Result<Self> {
        UrlPart::from_name(s)
    }
}
