//! Option resolution for component implementations.
//!
//! The engine passes a component's parsed [`Input`] through untouched; this
//! helper is for the component side, merging the instance's explicit input
//! over a matching preset over the definition's defaults.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::Input;

/// Merge `defaults`, a matching preset from `presets`, and the explicit
/// `input` into one options object (later sources win, shallow merge).
///
/// Preset selection: a string input naming a preset selects it and is
/// recorded under `$preset`; a string input naming no preset is recorded
/// under `value`; an object input selects a preset via its `$preset` key.
pub fn resolve_options(
    defaults: &Value,
    presets: &FxHashMap<String, Value>,
    input: &Input,
) -> Value {
    let mut options = Map::new();
    let mut preset: Option<&Value> = None;

    match input {
        Value::Object(map) => {
            options = map.clone();
            if let Some(Value::String(name)) = map.get("$preset") {
                preset = presets.get(name);
            }
        }
        Value::String(text) => {
            if let Some(found) = presets.get(text) {
                preset = Some(found);
                options.insert("$preset".to_string(), Value::String(text.clone()));
            } else {
                options.insert("value".to_string(), Value::String(text.clone()));
            }
        }
        Value::Null => {}
        other => {
            options.insert("value".to_string(), other.clone());
        }
    }

    let mut merged = Map::new();
    extend(&mut merged, defaults);
    if let Some(preset) = preset {
        extend(&mut merged, preset);
    }
    for (key, value) in options {
        merged.insert(key, value);
    }

    Value::Object(merged)
}

fn extend(target: &mut Map<String, Value>, source: &Value) {
    if let Value::Object(map) = source {
        for (key, value) in map {
            target.insert(key.clone(), value.clone());
        }
    }
}
