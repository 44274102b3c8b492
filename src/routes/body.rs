use actix_web::{http::header, web, HttpRequest};
use serde_json::{Map, Number, Value};

use crate::error::ApiError;

/// Interpret a request body as JSON
///
/// Only `application/json` bodies are parsed; any other content type, and an
/// empty body, read as `{}`. A parsed body must be an object or an array.
/// Object keys keep the order the client sent them in, and numbers too large
/// for an `f64` read as `null` instead of failing the request.
pub fn json_body(
    req: &HttpRequest,
    payload: Result<web::Bytes, actix_web::Error>,
) -> Result<Value, ApiError> {
    if !is_json_request(req) {
        return Ok(Value::Object(Map::new()));
    }

    let bytes = payload.map_err(|e| ApiError::Payload(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let mut value = match serde_json::from_slice::<Value>(&bytes)? {
        value @ (Value::Object(_) | Value::Array(_)) => value,
        _ => return Err(ApiError::NonCompositeBody),
    };
    normalize_numbers(&mut value);
    Ok(value)
}

// Numbers arrive as their literal text; re-encode them as integers or finite
// floats, with anything out of range becoming null.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Number(number) => {
            let normalized = canonical_number(number);
            *value = normalized;
        }
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        _ => {}
    }
}

fn canonical_number(number: &Number) -> Value {
    if let Some(int) = number.as_i64() {
        Value::from(int)
    } else if let Some(uint) = number.as_u64() {
        Value::from(uint)
    } else {
        number
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn is_json_request(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
