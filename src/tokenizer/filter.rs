use std::vec;

use tracing::debug;

use crate::error::Result;

use super::config::TokenizerConfig;
use super::engine::UrlTokenizer;
use super::token::Token;

/// Re-tokenizes each value of an upstream sequence as a URL.
///
/// Without passthrough an upstream value that produces no tokens, empty
/// values included, ends the output. With passthrough it is skipped and the
/// filter moves on to the next value, and malformed values are always
/// tolerated.
pub struct UrlTokenFilter<I> {
    upstream: I,
    tokenizer: UrlTokenizer,
    passthrough: bool,
    pending: vec::IntoIter<Token>,
    done: bool,
}

impl<I> UrlTokenFilter<I> {
    pub fn new(upstream: I, config: &TokenizerConfig, passthrough: bool) -> Self {
        let config = config
            .to_builder()
            .allow_malformed(config.allow_malformed() || passthrough)
            .build();
        Self {
            upstream,
            tokenizer: UrlTokenizer::new(config),
            passthrough,
            pending: Vec::new().into_iter(),
            done: false,
        }
    }

    pub fn passthrough(&self) -> bool {
        self.passthrough
    }

    pub fn config(&self) -> &TokenizerConfig {
        self.tokenizer.config()
    }
}

impl<I, S> Iterator for UrlTokenFilter<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }

            let Some(value) = self.upstream.next() else {
                self.done = true;
                return None;
            };
            let value = value.as_ref();

            // an empty value yields no tokens, like any other value without a part
            match self.tokenizer.tokenize(value) {
                Ok(tokens) if tokens.is_empty() => {
                    if !self.passthrough {
                        debug!("No tokens for upstream value {:?}, stopping", value);
                        self.done = true;
                        return None;
                    }
                }
                Ok(tokens) => self.pending = tokens.into_iter(),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
