use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::url_part::UrlPart;

/// Part requested when settings name none.
pub const DEFAULT_PART: &str = "whole";

/// Settings value that selects every part.
pub const ALL_PARTS: &str = "all";

/// Immutable tokenizer configuration.
///
/// Built once through [`TokenizerConfig::builder`] and shared read-only by
/// every tokenization that uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Requested parts in precedence order. Empty means all parts.
    parts: Vec<UrlPart>,
    url_decode: bool,
    tokenize_host: bool,
    tokenize_path: bool,
    tokenize_query: bool,
    allow_malformed: bool,
    tokenize_malformed: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            parts: Vec::new(),
            url_decode: false,
            tokenize_host: true,
            tokenize_path: true,
            tokenize_query: true,
            allow_malformed: false,
            tokenize_malformed: false,
        }
    }
}

impl TokenizerConfig {
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::default()
    }

    /// Start a builder from this configuration.
    pub fn to_builder(&self) -> TokenizerConfigBuilder {
        TokenizerConfigBuilder {
            config: self.clone(),
        }
    }

    /// Explicitly requested parts, canonicalized. Empty in all-parts mode.
    pub fn parts(&self) -> &[UrlPart] {
        &self.parts
    }

    /// True when no part was requested and every part is tokenized.
    pub fn all_parts(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn url_decode(&self) -> bool {
        self.url_decode
    }

    pub fn tokenize_host(&self) -> bool {
        self.tokenize_host
    }

    pub fn tokenize_path(&self) -> bool {
        self.tokenize_path
    }

    pub fn tokenize_query(&self) -> bool {
        self.tokenize_query
    }

    pub fn allow_malformed(&self) -> bool {
        self.allow_malformed
    }

    pub fn tokenize_malformed(&self) -> bool {
        self.tokenize_malformed
    }
}

/// Builder for [`TokenizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Add one part to the requested set.
    pub fn part(mut self, part: UrlPart) -> Self {
        self.config.parts.push(part);
        self
    }

    /// Replace the requested set. An empty set selects all parts.
    pub fn parts<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = UrlPart>,
    {
        self.config.parts = parts.into_iter().collect();
        self
    }

    /// Request every part.
    pub fn all_parts(mut self) -> Self {
        self.config.parts.clear();
        self
    }

    pub fn url_decode(mut self, url_decode: bool) -> Self {
        self.config.url_decode = url_decode;
        self
    }

    pub fn tokenize_host(mut self, tokenize_host: bool) -> Self {
        self.config.tokenize_host = tokenize_host;
        self
    }

    pub fn tokenize_path(mut self, tokenize_path: bool) -> Self {
        self.config.tokenize_path = tokenize_path;
        self
    }

    pub fn tokenize_query(mut self, tokenize_query: bool) -> Self {
        self.config.tokenize_query = tokenize_query;
        self
    }

    pub fn allow_malformed(mut self, allow_malformed: bool) -> Self {
        self.config.allow_malformed = allow_malformed;
        self
    }

    pub fn tokenize_malformed(mut self, tokenize_malformed: bool) -> Self {
        self.config.tokenize_malformed = tokenize_malformed;
        self
    }

    pub fn build(mut self) -> TokenizerConfig {
        self.config.parts = UrlPart::canonicalize(self.config.parts);
        self.config
    }
}

/// One part name or a list of them, as found in raw settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartSetting {
    One(String),
    Many(Vec<String>),
}

impl PartSetting {
    fn names(&self) -> &[String] {
        match self {
            PartSetting::One(name) => std::slice::from_ref(name),
            PartSetting::Many(names) => names,
        }
    }
}

impl Default for PartSetting {
    fn default() -> Self {
        PartSetting::One(DEFAULT_PART.to_string())
    }
}

/// Raw key-value options for the tokenizer and the token filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerSettings {
    /// Part names to tokenize, or `all`.
    #[serde(alias = "parts")]
    pub part: PartSetting,
    pub url_decode: bool,
    pub tokenize_host: bool,
    pub tokenize_path: bool,
    pub tokenize_query: bool,
    pub allow_malformed: bool,
    pub tokenize_malformed: bool,
    /// Token filter only: never drop upstream values that yield no tokens.
    pub passthrough: bool,
}

impl Default for TokenizerSettings {
    fn default() -> Self {
        Self {
            part: PartSetting::default(),
            url_decode: false,
            tokenize_host: true,
            tokenize_path: true,
            tokenize_query: true,
            allow_malformed: false,
            tokenize_malformed: false,
            passthrough: false,
        }
    }
}

impl TokenizerSettings {
    /// Validate the settings and build a tokenizer configuration.
    pub fn to_config(&self) -> Result<TokenizerConfig> {
        let mut parts = Vec::new();
        for name in self.part.names() {
            if name.eq_ignore_ascii_case(ALL_PARTS) {
                parts.clear();
                break;
            }
            parts.push(UrlPart::from_name(name)?);
        }

        Ok(TokenizerConfig::builder()
            .parts(parts)
            .url_decode(self.url_decode)
            .tokenize_host(self.tokenize_host)
            .tokenize_path(self.tokenize_path)
            .tokenize_query(self.tokenize_query)
            .allow_malformed(self.allow_malformed)
            .tokenize_malformed(self.tokenize_malformed)
            .build())
    }
}
