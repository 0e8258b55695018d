//! JSON reformatting

use crate::json::{load_json_preserve_order, to_pretty_four};

/// Reformat JSON text with four-space indentation, preserving key order.
pub fn format_json(input: &str) -> Result<String, String> {
    let value = load_json_preserve_order(input.trim())?;
    Ok(to_pretty_four(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformat_object() {
        let out = format_json(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(out, "{\n    \"b\": 2,\n    \"a\": 1\n}");
    }

    #[test]
    fn test_scalar_is_valid_json() {
        assert_eq!(format_json(" 42 ").unwrap(), "42");
    }

    #[test]
    fn test_invalid_input() {
        assert!(format_json("{'python': 'dict'}").is_err());
    }
}
