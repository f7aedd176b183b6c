use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Parse a request body based on Content-Type header.
/// Bodies labelled neither JSON nor form (or not labelled at all) are tried
/// as JSON first, then as form-urlencoded.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, ValidationError> {
    match content_type.map(media_type).as_deref() {
        Some("application/json") => serde_json::from_slice(body)
            .map_err(|e| ValidationError::new("body", format!("Invalid JSON: {e}"))),
        Some("application/x-www-form-urlencoded") => parse_form_urlencoded(body),
        _ => serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| {
                ValidationError::new("body", format!("Unable to parse body: {}", e.message))
            }),
    }
}

/// `Application/JSON; charset=utf-8` -> `application/json`
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, ValidationError> {
    let body_str = std::str::from_utf8(body)
        .map_err(|e| ValidationError::new("body", format!("Invalid UTF-8: {e}")))?;

    // Repeated keys: last one wins.
    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}
