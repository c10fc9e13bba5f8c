//! The shorthand config-string grammar for inline attribute authoring.
//!
//! A payload with no `:` is a single scalar. Anything else is a sequence of
//! newline-delimited `key: value` pairs whose values are scalar-parsed:
//!
//! ```text
//! speed: 4
//! axis: x
//! loop: true
//! ```

use graft_traits::Input;
use serde_json::{Map, Number, Value};

use crate::value::ValueParseError;

pub(crate) fn parse(input: &str) -> Result<Input, ValueParseError> {
    if !input.contains(':') {
        return Ok(parse_scalar(input.trim()));
    }

    let mut map = Map::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            return Err(ValueParseError::Config(format!(
                "expected `key: value`, got `{line}`"
            )));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ValueParseError::Config(format!(
                "missing key before `:` in `{line}`"
            )));
        }
        map.insert(key.to_string(), parse_scalar(value.trim()));
    }

    Ok(Value::Object(map))
}

fn parse_scalar(text: &str) -> Value {
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(int) = text.parse::<i64>() {
                Value::Number(int.into())
            } else if let Some(float) = text.parse::<f64>().ok().and_then(Number::from_f64) {
                Value::Number(float)
            } else {
                Value::String(text.to_string())
            }
        }
    }
}
