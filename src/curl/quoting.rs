//! ANSI-C quote normalization
//!
//! The shell tokenizer does not understand `$'...'` quoting, so those
//! segments are rewritten into plain double-quoted strings before
//! tokenization.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Shortest run of (escaped char | non-quote char) up to the next
// unescaped single quote.
static ANSI_C_QUOTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$'((?:\\.|[^'])*)'").expect("hard-coded regex"));

/// Rewrite every `$'...'` segment into a double-quoted string.
///
/// `\'` becomes a literal apostrophe and any `"` inside is escaped, so
/// the tokenizer sees a well-formed double-quoted word.
pub fn normalize_ansi_c(cmd: &str) -> String {
    ANSI_C_QUOTE
        .replace_all(cmd, |caps: &Captures| {
            let inner = caps[1].replace("\\'", "'").replace('"', "\\\"");
            format!("\"{}\"", inner)
        })
        .into_owned()
}
