//! Flag scan over tokenized curl arguments
//!
//! A single left-to-right pass with an enumerated flag table. Later
//! assignments overwrite earlier ones; in particular whichever of `-d`
//! and `-X` appears last determines the final method. Malformed
//! sub-values (header without a colon, cookie pair without `=`) are
//! dropped silently rather than reported.

use indexmap::IndexMap;

/// Structured description of the HTTP request a curl command makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// First URL-like token; empty when none was found
    pub url: String,
    /// Uppercased method, `GET` unless a flag changed it
    pub method: String,
    /// Header names as given, insertion order preserved
    pub headers: IndexMap<String, String>,
    pub cookies: IndexMap<String, String>,
    /// Raw body; the last data flag wins
    pub body: Option<String>,
}

impl Default for RequestSpec {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "GET".to_string(),
            headers: IndexMap::new(),
            cookies: IndexMap::new(),
            body: None,
        }
    }
}

/// Recognized flags; every alias maps to one of these kinds.
/// All of them consume a following value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagKind {
    Header,
    Cookie,
    Data,
    Method,
}

fn flag_kind(token: &str) -> Option<FlagKind> {
    match token {
        "-H" | "--header" => Some(FlagKind::Header),
        "-b" | "--cookie" => Some(FlagKind::Cookie),
        "-d" | "--data" | "--data-raw" => Some(FlagKind::Data),
        "-X" | "--request" => Some(FlagKind::Method),
        _ => None,
    }
}

/// Scan tokens left to right, skipping the leading `curl` token.
pub fn scan_tokens(tokens: &[String]) -> RequestSpec {
    let mut spec = RequestSpec::default();
    let mut i = 1;

    while i < tokens.len() {
        let token = &tokens[i];

        if let Some(kind) = flag_kind(token) {
            // A value-taking flag in final position consumes nothing
            // and is ignored outright.
            if i + 1 < tokens.len() {
                apply_flag(&mut spec, kind, &tokens[i + 1]);
                i += 1;
            }
        } else if token.starts_with("http") && spec.url.is_empty() {
            spec.url = token.clone();
        }

        i += 1;
    }

    spec
}

fn apply_flag(spec: &mut RequestSpec, kind: FlagKind, value: &str) {
    match kind {
        FlagKind::Header => {
            if let Some((name, val)) = value.split_once(':') {
                spec.headers
                    .insert(name.trim().to_string(), val.trim().to_string());
            }
        }
        FlagKind::Cookie => {
            for piece in value.split(';') {
                if let Some((name, val)) = piece.split_once('=') {
                    spec.cookies
                        .insert(name.trim().to_string(), val.trim().to_string());
                }
            }
        }
        FlagKind::Data => {
            spec.body = Some(value.to_string());
            spec.method = "POST".to_string();
        }
        FlagKind::Method => {
            spec.method = value.to_uppercase();
        }
    }
}
