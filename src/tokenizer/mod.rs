//! URL tokenization: configuration, the engine and its streaming adapters.

pub mod config;
pub mod engine;
pub mod filter;
pub mod hierarchy;
pub mod stream;
pub mod token;

pub use config::{PartSetting, TokenizerConfig, TokenizerConfigBuilder, TokenizerSettings};
pub use engine::{tokenize, UrlTokenizer};
pub use filter::UrlTokenFilter;
pub use stream::TokenStream;
pub use token::Token;
