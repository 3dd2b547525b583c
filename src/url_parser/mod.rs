//! Extraction of raw URL parts.
//!
//! Two strategies share one contract: [`ParsedUrl`] splits a well-formed URL
//! strictly, and [`extract_malformed_part`] recovers parts from arbitrary
//! strings with anchored regular expressions.

pub mod decoder;
pub mod extractor;
pub mod parser;
mod patterns;


pub use decoder::{percent_decode, DecodeFailure};
pub use extractor::{
    extract_malformed_part, extract_part, get_part, infer_port, is_ip_literal, RawPart,
};
pub use parser::{ParseFailure, ParsedUrl};
