//! Purpose: Serialize a finished `Value` to JSON text.
//! Exports: `to_string`.
//! Role: Writer half of the text codec boundary.
//! Invariants: Compact output equals `serde_json::to_string`; pretty equals `to_string_pretty`.
use serde_json::Value;

use crate::api::TextStyle;

pub(crate) fn to_string(value: &Value, style: TextStyle) -> Result<String, serde_json::Error> {
    match style {
        TextStyle::Compact => serde_json::to_string(value),
        TextStyle::Pretty => serde_json::to_string_pretty(value),
    }
}
