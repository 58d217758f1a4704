//! JSON persistence for widget state.
//!
//! The persisted document is the wire contract for interop with other
//! implementations; field names and shapes are fixed:
//!
//! ```json
//! {
//!   "fontSize": 16,
//!   "lines": [
//!     "plain text",
//!     { "url": "see foo.com" },
//!     { "time": 1715342400000, "s": { "user": "bob", "s": { "url": "hi" } } }
//!   ],
//!   "scroll": -1000.0,
//!   "id": "chat",
//!   "defaultFontSize": 16,
//!   "showSizeControls": true
//! }
//! ```
//!
//! Lines use a compact tagged form: a bare JSON string is a literal `Text`
//! line; objects are matched structurally in a fixed order (`url`, then
//! `user`+`s`, then `time`+`s`, then — custom-aware codec only — `custom`).
//! First match wins. `input` and the render hooks are deliberately not part
//! of the document: the buffer is transient and the hooks are behavior, not
//! data.
//!
//! Round-trip law: for any line tree without `Custom` (or, under the
//! custom-aware pair, any tree at all), decoding an encoding yields the
//! original value.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{TimeZone, Utc};
use serde_json::{Map, Value, json};

use crate::line::LineSpec;
use crate::state::Settings;

// ============================================================================
// Line encoding
// ============================================================================

/// Encodes one line in the default (non-custom) form.
///
/// Encoding a `Custom` line this way is a caller contract violation: the
/// output gets a visible placeholder object instead of the payload, so a
/// line list still encodes end to end rather than aborting partway.
pub fn encode_line<S>(spec: &LineSpec<S>) -> Value {
    encode_line_value(spec, None)
}

/// Encodes one line, delegating `Custom` payloads to `encode_state`.
pub fn encode_line_with<S, F>(spec: &LineSpec<S>, encode_state: &F) -> Value
where
    F: Fn(&S) -> Value,
{
    encode_line_value(spec, Some(encode_state as &dyn Fn(&S) -> Value))
}

fn encode_line_value<S>(spec: &LineSpec<S>, encode_state: Option<&dyn Fn(&S) -> Value>) -> Value {
    match spec {
        LineSpec::Text(text) => Value::String(text.clone()),
        LineSpec::Url(text) => json!({ "url": text }),
        LineSpec::User { user, inner } => json!({
            "user": user,
            "s": encode_line_value(inner, encode_state),
        }),
        LineSpec::Time { time, inner } => json!({
            "time": time.timestamp_millis(),
            "s": encode_line_value(inner, encode_state),
        }),
        LineSpec::Custom(state) => match encode_state {
            Some(encode_state) => json!({ "custom": encode_state(state) }),
            None => {
                tracing::warn!("custom line encoded without a custom encoder");
                json!({ "error": "custom line encoded without a custom encoder" })
            }
        },
    }
}

// ============================================================================
// Line decoding
// ============================================================================

/// Decodes one line in the default (non-custom) form.
pub fn decode_line<S>(value: &Value) -> Result<LineSpec<S>> {
    decode_line_value(value, None)
}

/// Decodes one line, delegating `{"custom": ...}` payloads to
/// `decode_state`.
pub fn decode_line_with<S, F>(value: &Value, decode_state: &F) -> Result<LineSpec<S>>
where
    F: Fn(&Value) -> Result<S>,
{
    decode_line_value(value, Some(decode_state as &dyn Fn(&Value) -> Result<S>))
}

fn decode_line_value<S>(
    value: &Value,
    decode_state: Option<&dyn Fn(&Value) -> Result<S>>,
) -> Result<LineSpec<S>> {
    if let Value::String(text) = value {
        return Ok(LineSpec::Text(text.clone()));
    }

    if let Some(object) = value.as_object() {
        if let Some(url) = object.get("url").and_then(Value::as_str) {
            return Ok(LineSpec::Url(url.to_string()));
        }

        if let (Some(user), Some(inner)) = (object.get("user").and_then(Value::as_str), object.get("s"))
        {
            let inner = decode_line_value(inner, decode_state)
                .with_context(|| format!("inside line attributed to {user:?}"))?;
            return Ok(LineSpec::User {
                user: user.to_string(),
                inner: Box::new(inner),
            });
        }

        if let (Some(millis), Some(inner)) =
            (object.get("time").and_then(Value::as_i64), object.get("s"))
        {
            let time = Utc
                .timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| anyhow!("timestamp out of range: {millis}"))?;
            let inner = decode_line_value(inner, decode_state)
                .context("inside timestamped line")?;
            return Ok(LineSpec::Time {
                time,
                inner: Box::new(inner),
            });
        }

        if let (Some(custom), Some(decode_state)) = (object.get("custom"), decode_state) {
            let state = decode_state(custom).context("invalid custom line payload")?;
            return Ok(LineSpec::Custom(state));
        }
    }

    bail!("no chat line variant matches: {value}")
}

// ============================================================================
// Settings encoding
// ============================================================================

/// Encodes the persistable fields of `settings` as a JSON document.
pub fn encode_settings<S>(settings: &Settings<S>) -> String {
    let lines = settings.lines.iter().map(encode_line).collect();
    settings_document(settings, lines).to_string()
}

/// Like [`encode_settings`], delegating `Custom` payloads to `encode_state`.
pub fn encode_settings_with<S, F>(settings: &Settings<S>, encode_state: &F) -> String
where
    F: Fn(&S) -> Value,
{
    let lines = settings
        .lines
        .iter()
        .map(|line| encode_line_with(line, encode_state))
        .collect();
    settings_document(settings, lines).to_string()
}

fn settings_document<S>(settings: &Settings<S>, lines: Vec<Value>) -> Value {
    json!({
        "fontSize": settings.font_size,
        "lines": lines,
        "scroll": settings.scroll,
        "id": settings.widget_id,
        "defaultFontSize": settings.default_font_size,
        "showSizeControls": settings.show_size_controls,
    })
}

// ============================================================================
// Settings decoding
// ============================================================================

/// Decodes a persisted settings document.
///
/// The restored value has an empty input buffer and no render hooks: both
/// are transient and never persisted. Malformed input yields a descriptive
/// error naming what failed; it never panics.
pub fn decode_settings<S>(json: &str) -> Result<Settings<S>> {
    decode_settings_value(json, None)
}

/// Like [`decode_settings`], delegating `{"custom": ...}` line payloads to
/// `decode_state`.
pub fn decode_settings_with<S, F>(json: &str, decode_state: &F) -> Result<Settings<S>>
where
    F: Fn(&Value) -> Result<S>,
{
    decode_settings_value(json, Some(decode_state as &dyn Fn(&Value) -> Result<S>))
}

fn decode_settings_value<S>(
    json: &str,
    decode_state: Option<&dyn Fn(&Value) -> Result<S>>,
) -> Result<Settings<S>> {
    let value: Value = serde_json::from_str(json).context("malformed settings JSON")?;
    let object = value
        .as_object()
        .ok_or_else(|| anyhow!("settings document is not an object: {value}"))?;

    let lines = require(object, "lines")?
        .as_array()
        .ok_or_else(|| anyhow!("\"lines\" is not an array"))?
        .iter()
        .map(|line| decode_line_value(line, decode_state))
        .collect::<Result<Vec<_>>>()?;

    Ok(Settings {
        font_size: int_field(object, "fontSize")?,
        default_font_size: int_field(object, "defaultFontSize")?,
        lines,
        input: String::new(),
        scroll: require(object, "scroll")?
            .as_f64()
            .ok_or_else(|| anyhow!("\"scroll\" is not a number"))?,
        show_size_controls: require(object, "showSizeControls")?
            .as_bool()
            .ok_or_else(|| anyhow!("\"showSizeControls\" is not a boolean"))?,
        widget_id: require(object, "id")?
            .as_str()
            .ok_or_else(|| anyhow!("\"id\" is not a string"))?
            .to_string(),
        custom_renderers: None,
    })
}

fn require<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| anyhow!("settings document is missing \"{key}\""))
}

fn int_field(object: &Map<String, Value>, key: &str) -> Result<i32> {
    let value = require(object, key)?
        .as_i64()
        .ok_or_else(|| anyhow!("\"{key}\" is not an integer"))?;
    Ok(value as i32)
}
