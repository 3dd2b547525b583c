use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::error::{Result, UrlTokenError};
use crate::url_parser::{
    extract_malformed_part, extract_part, is_ip_literal, percent_decode, ParsedUrl, RawPart,
};
use crate::url_part::UrlPart;
use crate::utils::{char_offset, find_or_zero};

use super::config::TokenizerConfig;
use super::hierarchy::{forward_hierarchy, reverse_hierarchy, split_segments};
use super::stream::TokenStream;
use super::token::Token;

/// Tokenize `input` once with `config`.
pub fn tokenize(input: &str, config: &TokenizerConfig) -> Result<Vec<Token>> {
    UrlTokenizer::new(config.clone()).tokenize(input)
}

/// Splits URL strings into labeled, offset-tagged tokens.
///
/// The configuration is shared read-only, so clones of a tokenizer are cheap
/// and can run on different threads.
#[derive(Debug, Clone, Default)]
pub struct UrlTokenizer {
    config: Arc<TokenizerConfig>,
}

impl UrlTokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self::shared(Arc::new(config))
    }

    pub fn shared(config: Arc<TokenizerConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Lazy token sequence over `input`.
    pub fn stream(&self, input: impl Into<String>) -> TokenStream {
        let mut stream = TokenStream::new(self.clone());
        stream.set_input(input);
        stream
    }

    /// Tokenizes one URL string into labeled, offset-tagged tokens
    ///
    /// Well-formed URLs are split strictly and every requested part is
    /// expanded (host suffixes, path prefixes, query segments). Anything else
    /// either fails or, when malformed input is allowed, falls back to the
    /// whole string or to pattern-based recovery of the requested parts.
    /// Offsets are character indices into `input` and always locate the raw,
    /// undecoded text.
    ///
    /// # Arguments
    /// * `input` - The string to tokenize; empty input yields no tokens
    ///
    /// # Returns
    /// * `Result<Vec<Token>>` - Tokens in emission order without duplicates,
    ///   or `MalformedInput` / `Decode` when the configuration is strict
    #[instrument(level = "debug", skip_all, fields(input = %input))]
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut sink = TokenSink::new(input);
        match ParsedUrl::parse(input) {
            Ok(url) => self.tokenize_url(&url, &mut sink)?,
            Err(failure) => {
                if !self.config.allow_malformed() {
                    return Err(UrlTokenError::MalformedInput {
                        input: input.to_string(),
                        reason: failure.to_string(),
                    });
                }
                debug!("Falling back to malformed tokenization of {:?}: {}", input, failure);
                self.tokenize_malformed(input, &mut sink)?;
            }
        }

        Ok(sink.into_tokens())
    }

    fn tokenize_url(&self, url: &ParsedUrl<'_>, sink: &mut TokenSink<'_>) -> Result<()> {
        // trailing whitespace trimmed by the parser is not part of the fragment
        sink.url_end = sink.input.trim_end_matches(|c: char| c <= ' ').len();
        let parts: &[UrlPart] = if self.config.all_parts() {
            &UrlPart::ALL
        } else {
            self.config.parts()
        };

        for &part in parts {
            if let Some(raw) = extract_part(url, part) {
                self.tokenize_part(part, raw, sink)?;
            }
        }

        if self.config.all_parts() {
            add_composite_tokens(url, sink);
        }
        Ok(())
    }

    fn tokenize_malformed(&self, input: &str, sink: &mut TokenSink<'_>) -> Result<()> {
        if !self.config.tokenize_malformed() || self.config.all_parts() {
            sink.push(input, UrlPart::Whole, 0..input.len());
            return Ok(());
        }

        for &part in self.config.parts() {
            if part == UrlPart::Whole {
                continue;
            }
            if let Some(raw) = extract_malformed_part(input, part) {
                self.tokenize_part(part, raw, sink)?;
            }
        }

        // the whole string only stands in when nothing more specific was found
        if sink.is_empty() && self.config.parts().contains(&UrlPart::Whole) {
            sink.push(input, UrlPart::Whole, 0..input.len());
        }
        Ok(())
    }

    /// Emit the tokens of one extracted part.
    fn tokenize_part(&self, part: UrlPart, raw: RawPart<'_>, sink: &mut TokenSink<'_>) -> Result<()> {
        let input = sink.input;
        let value = raw.value;

        if raw.inferred {
            // an inferred port does not occur in the input
            sink.push(value, part, 0..0);
            return Ok(());
        }

        let start = match part {
            UrlPart::Port => input.find(&format!(":{}", value)).map_or(0, |i| i + 1),
            UrlPart::Ref => input.find(&format!("#{}", value)).map_or(0, |i| i + 1),
            _ => find_or_zero(input, value),
        };

        let pieces = match part {
            UrlPart::Host if self.config.tokenize_host() && !is_ip_literal(value) => {
                reverse_hierarchy(value, '.')
            }
            UrlPart::Path if self.config.tokenize_path() => forward_hierarchy(value, '/'),
            UrlPart::Query if self.config.tokenize_query() => split_segments(value, '&'),
            _ => vec![0..value.len()],
        };

        let decode = self.config.url_decode() && self.check_decodable(value)?;
        for piece in pieces {
            let text = &value[piece.clone()];
            let span = if part == UrlPart::Ref {
                // the fragment is taken to run to the end of the input
                start..sink.url_end
            } else {
                start + piece.start..start + piece.end
            };

            if decode {
                let decoded = percent_decode(text).map_or_else(|_| text.to_string(), |d| d.into_owned());
                sink.push(decoded, part, span);
            } else {
                sink.push(text, part, span);
            }
        }
        Ok(())
    }

    /// Whether `value` can be decoded, or the error to raise when it cannot.
    fn check_decodable(&self, value: &str) -> Result<bool> {
        match percent_decode(value) {
            Ok(_) => Ok(true),
            Err(failure) if self.config.allow_malformed() => {
                debug!("Keeping undecodable value {:?}: {}", value, failure);
                Ok(false)
            }
            Err(failure) => Err(UrlTokenError::Decode {
                value: value.to_string(),
                reason: failure.to_string(),
            }),
        }
    }
}

/// `host:port` and `scheme://host` tokens, emitted only in all-parts mode.
fn add_composite_tokens(url: &ParsedUrl<'_>, sink: &mut TokenSink<'_>) {
    let (Some(host), Some(port)) = (url.host, extract_part(url, UrlPart::Port)) else {
        return;
    };
    let input = sink.input;

    let host_port = format!("{}:{}", host, port.value);
    let span = if port.inferred {
        0..0
    } else {
        locate(input, &host_port)
    };
    sink.push(host_port, UrlPart::Whole, span);

    let scheme_host = format!("{}://{}", url.scheme, host);
    let span = locate(input, &scheme_host);
    sink.push(scheme_host, UrlPart::Whole, span);
}

fn locate(input: &str, needle: &str) -> Range<usize> {
    input.find(needle).map_or(0..0, |i| i..i + needle.len())
}

/// Collects tokens for one input, converting byte spans to character
/// offsets and dropping exact duplicates.
struct TokenSink<'a> {
    input: &'a str,
    /// Where a fragment is taken to end.
    url_end: usize,
    tokens: Vec<Token>,
    seen: HashSet<Token>,
}

impl<'a> TokenSink<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            url_end: input.len(),
            tokens: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, text: impl Into<String>, part: UrlPart, span: Range<usize>) {
        let start = char_offset(self.input, span.start);
        let end = char_offset(self.input, span.end);
        let token = Token::new(text, part, start, end);
        if self.seen.insert(token.clone()) {
            trace!("Emitting {}", token);
            self.tokens.push(token);
        }
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
