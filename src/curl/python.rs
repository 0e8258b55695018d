//! Python `requests` code emission
//!
//! Sections are emitted in a fixed order, each only when its data is
//! non-empty: imports, `url`, `headers`, `cookies`, `data`, the call
//! expression and a final print. The body is pretty-printed as a JSON
//! literal when it parses, otherwise quoted verbatim.

use indexmap::IndexMap;

use super::scan::RequestSpec;
use crate::json::to_pretty_four;

/// Render a request description as a Python `requests` script.
pub fn render(spec: &RequestSpec) -> String {
    let mut code = String::from("import requests\n\n");
    code.push_str(&format!("url = \"{}\"\n\n", spec.url));

    if !spec.headers.is_empty() {
        code.push_str(&format!("headers = {}\n\n", map_literal(&spec.headers)));
    }
    if !spec.cookies.is_empty() {
        code.push_str(&format!("cookies = {}\n\n", map_literal(&spec.cookies)));
    }

    // Python truthiness: an empty data string produces no section (the
    // POST it forced still stands).
    let body = spec.body.as_deref().filter(|b| !b.is_empty());
    if let Some(body) = body {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => code.push_str(&format!("data = {}\n\n", to_pretty_four(&value))),
            Err(_) => code.push_str(&format!("data = '{}'\n\n", body)),
        }
    }

    let mut call_args = vec!["url=url"];
    if !spec.headers.is_empty() {
        call_args.push("headers=headers");
    }
    if !spec.cookies.is_empty() {
        call_args.push("cookies=cookies");
    }
    if body.is_some() {
        // Branch on the final method, not on which flag set it.
        if spec.method == "POST" {
            call_args.push("data=data");
        } else {
            call_args.push("params=data");
        }
    }

    code.push_str(&format!(
        "response = requests.{}({})\n",
        spec.method.to_lowercase(),
        call_args.join(", ")
    ));
    code.push_str("print(response.text)");
    code
}

fn map_literal(map: &IndexMap<String, String>) -> String {
    let object: serde_json::Map<String, serde_json::Value> = map
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
        .collect();
    to_pretty_four(&serde_json::Value::Object(object))
}
