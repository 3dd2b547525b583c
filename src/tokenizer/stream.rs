use std::vec;

use crate::error::Result;

use super::engine::UrlTokenizer;
use super::token::Token;

enum State {
    /// Nothing tokenized yet for the current input.
    Pending,
    Active(vec::IntoIter<Token>),
    Finished,
}

/// Pull-based token sequence over one input at a time.
///
/// The input is tokenized on the first pull. An error is yielded once and
/// ends the sequence. [`TokenStream::reset`] starts the current input over,
/// [`TokenStream::set_input`] moves on to a new one; the configuration of the
/// underlying tokenizer is kept either way.
pub struct TokenStream {
    tokenizer: UrlTokenizer,
    input: Option<String>,
    state: State,
}

impl TokenStream {
    pub fn new(tokenizer: UrlTokenizer) -> Self {
        Self {
            tokenizer,
            input: None,
            state: State::Pending,
        }
    }

    pub fn tokenizer(&self) -> &UrlTokenizer {
        &self.tokenizer
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Replace the input and discard any sequence in progress.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = Some(input.into());
        self.reset();
    }

    /// Discard any sequence in progress; the next pull tokenizes the current
    /// input from the start.
    pub fn reset(&mut self) {
        self.state = State::Pending;
    }
}

impl Iterator for TokenStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                State::Pending => {
                    let Some(input) = self.input.as_deref() else {
                        self.state = State::Finished;
                        return None;
                    };
                    match self.tokenizer.tokenize(input) {
                        Ok(tokens) => self.state = State::Active(tokens.into_iter()),
                        Err(e) => {
                            self.state = State::Finished;
                            return Some(Err(e));
                        }
                    }
                }
                State::Active(tokens) => {
                    let token = tokens.next();
                    if token.is_none() {
                        self.state = State::Finished;
                    }
                    return token.map(Ok);
                }
                State::Finished => return None,
            }
        }
    }
}
