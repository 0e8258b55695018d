//! Text encoding conversions
//!
//! Base64, URL percent-encoding and Python-style unicode escapes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Supported conversion modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    Base64Encode,
    Base64Decode,
    UrlEncode,
    UrlDecode,
    UnicodeEscape,
    UnicodeUnescape,
}

impl EncodingMode {
    pub fn from_str(mode: &str) -> Option<Self> {
        match mode {
            "base64_enc" => Some(Self::Base64Encode),
            "base64_dec" => Some(Self::Base64Decode),
            "url_enc" => Some(Self::UrlEncode),
            "url_dec" => Some(Self::UrlDecode),
            "uni_enc" => Some(Self::UnicodeEscape),
            "uni_dec" => Some(Self::UnicodeUnescape),
            _ => None,
        }
    }
}

/// Apply a conversion mode to the input text.
pub fn convert(mode: EncodingMode, input: &str) -> Result<String, String> {
    match mode {
        EncodingMode::Base64Encode => Ok(BASE64.encode(input.as_bytes())),
        EncodingMode::Base64Decode => {
            let bytes = BASE64
                .decode(input.trim())
                .map_err(|e| format!("base64: {}", e))?;
            String::from_utf8(bytes).map_err(|e| format!("utf-8: {}", e))
        }
        EncodingMode::UrlEncode => Ok(urlencoding::encode(input).into_owned()),
        EncodingMode::UrlDecode => urlencoding::decode(input)
            .map(|s| s.into_owned())
            .map_err(|e| format!("url decode: {}", e)),
        EncodingMode::UnicodeEscape => Ok(unicode_escape(input)),
        EncodingMode::UnicodeUnescape => unicode_unescape(input),
    }
}

fn unicode_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || (c as u32) == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32))
            }
            c if c.is_ascii() => out.push(c),
            c if (c as u32) <= 0xff => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) <= 0xffff => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out
}

fn unicode_unescape(s: &str) -> Result<String, String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('0') => out.push('\0'),
            Some('x') => out.push(take_hex(&mut chars, 2)?),
            Some('u') => out.push(take_hex(&mut chars, 4)?),
            Some('U') => out.push(take_hex(&mut chars, 8)?),
            // Unknown escapes pass through untouched, like Python's
            // lenient unicode_escape codec.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => return Err("trailing backslash".to_string()),
        }
    }
    Ok(out)
}

fn take_hex(chars: &mut std::str::Chars<'_>, len: usize) -> Result<char, String> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.chars().count() != len {
        return Err("truncated escape".to_string());
    }
    let code = u32::from_str_radix(&digits, 16).map_err(|e| format!("bad escape: {}", e))?;
    char::from_u32(code).ok_or_else(|| format!("invalid code point {:#x}", code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let enc = convert(EncodingMode::Base64Encode, "hello world").unwrap();
        assert_eq!(enc, "aGVsbG8gd29ybGQ=");
        assert_eq!(convert(EncodingMode::Base64Decode, &enc).unwrap(), "hello world");
    }

    #[test]
    fn test_base64_decode_garbage() {
        assert!(convert(EncodingMode::Base64Decode, "@@@").is_err());
    }

    #[test]
    fn test_url_encoding() {
        assert_eq!(convert(EncodingMode::UrlEncode, "a b&c").unwrap(), "a%20b%26c");
        assert_eq!(convert(EncodingMode::UrlDecode, "a%20b%26c").unwrap(), "a b&c");
    }

    #[test]
    fn test_unicode_escape_ascii_untouched() {
        assert_eq!(convert(EncodingMode::UnicodeEscape, "plain").unwrap(), "plain");
    }

    #[test]
    fn test_unicode_escape_non_ascii() {
        assert_eq!(convert(EncodingMode::UnicodeEscape, "héllo\n").unwrap(), "h\\xe9llo\\n");
        assert_eq!(convert(EncodingMode::UnicodeEscape, "中").unwrap(), "\\u4e2d");
        assert_eq!(convert(EncodingMode::UnicodeEscape, "🦀").unwrap(), "\\U0001f980");
    }

    #[test]
    fn test_unicode_unescape() {
        assert_eq!(convert(EncodingMode::UnicodeUnescape, "h\\xe9llo\\n").unwrap(), "héllo\n");
        assert_eq!(convert(EncodingMode::UnicodeUnescape, "\\u4e2d").unwrap(), "中");
        assert_eq!(convert(EncodingMode::UnicodeUnescape, "\\U0001f980").unwrap(), "🦀");
    }

    #[test]
    fn test_unicode_unescape_unknown_escape_passes_through() {
        assert_eq!(convert(EncodingMode::UnicodeUnescape, "a\\qb").unwrap(), "a\\qb");
    }

    #[test]
    fn test_unicode_unescape_truncated() {
        assert!(convert(EncodingMode::UnicodeUnescape, "\\u12").is_err());
        assert!(convert(EncodingMode::UnicodeUnescape, "oops\\").is_err());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(EncodingMode::from_str("base64_enc"), Some(EncodingMode::Base64Encode));
        assert_eq!(EncodingMode::from_str("uni_dec"), Some(EncodingMode::UnicodeUnescape));
        assert_eq!(EncodingMode::from_str("rot13"), None);
    }
}
