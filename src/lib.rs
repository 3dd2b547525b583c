//! Split URL strings into labeled, offset-tagged tokens for search indexing.
//!
//! ```
//! use url_tokenizer::{TokenizerConfig, UrlPart, UrlTokenizer};
//!
//! let config = TokenizerConfig::builder().part(UrlPart::Host).build();
//! let tokens = UrlTokenizer::new(config).tokenize("http://www.foo.com/bar").unwrap();
//!
//! let hosts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(hosts, vec!["www.foo.com", "foo.com", "com"]);
//! assert_eq!((tokens[0].start(), tokens[0].end()), (7, 18));
//! ```

pub mod error;
pub mod tokenizer;
pub mod url_parser;
pub mod url_part;
pub mod utils;

pub use error::{Result, UrlTokenError};
pub use tokenizer::{
    tokenize, PartSetting, Token, TokenStream, TokenizerConfig, TokenizerConfigBuilder,
    TokenizerSettings, UrlTokenFilter, UrlTokenizer,
};
pub use url_parser::{extract_malformed_part, extract_part, get_part, infer_port, ParsedUrl, RawPart};
pub use url_part::UrlPart;
