//! Curl command translation
//!
//! Parses a shell-quoted curl invocation into a structured request
//! description and re-emits it as Python `requests` code.
//!
//! The pipeline runs in three stages: ANSI-C quote normalization
//! ([`quoting`]), shell word splitting ([`tokenizer`]) and a left-to-right
//! flag scan ([`scan`]) producing a [`RequestSpec`]. [`python`] renders
//! the result. Every stage is pure; the whole translation is safe to call
//! concurrently.
//!
//! # Example
//!
//! ```
//! let code = toolbench::curl::translate(
//!     "curl -H 'Accept: application/json' https://api.example.com/users",
//! )
//! .unwrap();
//! assert!(code.starts_with("import requests"));
//! ```

pub mod python;
pub mod quoting;
pub mod scan;
pub mod tokenizer;

use thiserror::Error;

pub use scan::RequestSpec;

/// Errors from curl command translation
///
/// Both variants are fully recoverable and local to a single call;
/// malformed individual flags never error, they are dropped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Input does not start with `curl` after trimming
    #[error("Need curl command")]
    NotCurl,

    /// Tokenization failed (unterminated quote and similar)
    #[error("{0}")]
    Parse(String),
}

/// Translate a raw curl command line into Python `requests` code.
pub fn translate(raw: &str) -> Result<String, TranslateError> {
    let cmd = raw.trim();
    if !cmd.starts_with("curl") {
        return Err(TranslateError::NotCurl);
    }

    let normalized = quoting::normalize_ansi_c(cmd);
    let tokens = tokenizer::split_words(&normalized)?;
    let spec = scan::scan_tokens(&tokens);
    Ok(python::render(&spec))
}
