//! Shell word splitting
//!
//! POSIX-like tokenization: single quotes suppress all escape
//! processing, double-quoted and bare text honor backslash escapes,
//! unquoted whitespace separates words. Quoted empty strings survive as
//! empty tokens.

use super::TranslateError;

/// Split a command line into words honoring shell quoting rules.
pub fn split_words(cmd: &str) -> Result<Vec<String>, TranslateError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // Set once a quote opens, so `''` still yields an (empty) token.
    let mut has_token = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escape_next = false;

    for c in cmd.chars() {
        if escape_next {
            current.push(c);
            has_token = true;
            escape_next = false;
            continue;
        }

        match c {
            '\\' if !in_single_quote => {
                escape_next = true;
            }
            '\'' if !in_double_quote => {
                in_single_quote = !in_single_quote;
                has_token = true;
            }
            '"' if !in_single_quote => {
                in_double_quote = !in_double_quote;
                has_token = true;
            }
            ' ' | '\t' | '\n' if !in_single_quote && !in_double_quote => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            _ => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_single_quote || in_double_quote {
        return Err(TranslateError::Parse("No closing quotation".to_string()));
    }
    if escape_next {
        return Err(TranslateError::Parse("No escaped character".to_string()));
    }

    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}
