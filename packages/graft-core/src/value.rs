use graft_traits::Input;

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum ValueParseError {
    /// The payload started with `{` but is not valid strict object syntax.
    #[error("malformed object value: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is not valid shorthand config syntax.
    #[error("malformed config value: {0}")]
    Config(String),
}

/// Parse a declaration's raw attribute payload into a typed [`Input`].
///
/// An empty payload means "no explicit input" (`Input::Null`). A payload
/// starting with `{` is parsed as a strict object literal and fails loudly
/// on malformed syntax. Anything else goes through the permissive shorthand
/// config grammar intended for inline attribute authoring.
pub fn parse_value(raw: &str) -> Result<Input, ValueParseError> {
    if raw.is_empty() {
        return Ok(Input::Null);
    }
    if raw.starts_with('{') {
        return Ok(serde_json::from_str(raw)?);
    }
    config::parse(raw)
}
