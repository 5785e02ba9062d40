//! Purpose: Sequence generic serde mapping with the optional per-type JSON hooks.
//! Exports: decode/encode entry points for values, text, and bytes.
//! Role: Conversion orchestrator; the only caller of the hook dispatch helpers.
//! Invariants: Hooks run only after the generic phase succeeded, never on failure paths.
//! Invariants: The import hook sees the original full object, not a remainder.
//! Invariants: Export hook output is final and unvalidated; only the mapper can fail encode.
//! Invariants: Stateless and re-entrant; nothing is retained between calls.
#![allow(clippy::result_large_err)]

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::options::EncodeOptions;
use crate::core::error::{Error, ErrorKind};
use crate::core::hooks::{JsonHooks, call_export_if_present, call_import_if_present};
use crate::json::{parse, write};

pub type ConvertResult<T> = Result<T, Error>;

/// Populates `out` from a JSON object, then runs the import hook if `T` has one.
///
/// `out` is only replaced once generic mapping succeeds; on error it is left as it was.
pub fn decode_from_value<T>(value: &Value, out: &mut T) -> ConvertResult<()>
where
    T: DeserializeOwned + JsonHooks,
{
    *out = from_value(value)?;
    Ok(())
}

pub fn from_value<T>(value: &Value) -> ConvertResult<T>
where
    T: DeserializeOwned + JsonHooks,
{
    if !value.is_object() {
        return Err(fail::<T>(
            Error::new(ErrorKind::InvalidInput)
                .with_message(format!("expected a JSON object, found {}", value_kind(value))),
        ));
    }

    let mut mapped = match T::deserialize(value) {
        Ok(mapped) => mapped,
        Err(err) => {
            return Err(fail::<T>(
                Error::new(ErrorKind::Mapping)
                    .with_message(format!("generic mapping failed: {err}"))
                    .with_source(err),
            ));
        }
    };

    if call_import_if_present(&mut mapped, value) {
        tracing::trace!(target_type = type_name::<T>(), "import hook applied");
    }
    Ok(mapped)
}

/// Maps `input` to a JSON object and passes it through the export hook if `T` has one.
pub fn encode_to_value<T>(input: &T) -> ConvertResult<Value>
where
    T: Serialize + JsonHooks,
{
    let value = match serde_json::to_value(input) {
        Ok(value) => value,
        Err(err) => {
            return Err(fail::<T>(
                Error::new(ErrorKind::Mapping)
                    .with_message(format!("generic mapping failed: {err}"))
                    .with_source(err),
            ));
        }
    };
    if !value.is_object() {
        return Err(fail::<T>(Error::new(ErrorKind::Mapping).with_message(
            format!("generic mapping produced {}, not an object", value_kind(&value)),
        )));
    }

    if T::EXPORT.is_some() {
        tracing::trace!(target_type = type_name::<T>(), "export hook applied");
    }
    Ok(call_export_if_present(input, value))
}

pub fn decode_from_text<T>(text: &str, out: &mut T) -> ConvertResult<()>
where
    T: DeserializeOwned + JsonHooks,
{
    *out = from_str(text)?;
    Ok(())
}

pub fn from_str<T>(text: &str) -> ConvertResult<T>
where
    T: DeserializeOwned + JsonHooks,
{
    let value = parse::from_str::<Value>(text).map_err(parse_failure::<T>)?;
    from_value(&value)
}

pub fn decode_from_slice<T>(bytes: &[u8], out: &mut T) -> ConvertResult<()>
where
    T: DeserializeOwned + JsonHooks,
{
    *out = from_slice(bytes)?;
    Ok(())
}

pub fn from_slice<T>(bytes: &[u8]) -> ConvertResult<T>
where
    T: DeserializeOwned + JsonHooks,
{
    let value = parse::from_slice::<Value>(bytes).map_err(parse_failure::<T>)?;
    from_value(&value)
}

pub fn encode_to_text<T>(input: &T) -> ConvertResult<String>
where
    T: Serialize + JsonHooks,
{
    encode_to_text_with(input, &EncodeOptions::default())
}

pub fn encode_to_text_with<T>(input: &T, options: &EncodeOptions) -> ConvertResult<String>
where
    T: Serialize + JsonHooks,
{
    let value = encode_to_value(input)?;
    write::to_string(&value, options.style).map_err(|err| {
        fail::<T>(
            Error::new(ErrorKind::Write)
                .with_message("failed to write JSON text")
                .with_source(err),
        )
    })
}

fn parse_failure<T>(err: serde_json::Error) -> Error {
    let hint = parse::hint_for_error(&err, type_name::<T>());
    fail::<T>(
        Error::new(ErrorKind::InvalidInput)
            .with_message("failed to parse JSON text")
            .with_hint(hint)
            .with_source(err),
    )
}

fn fail<T>(err: Error) -> Error {
    let err = err.with_type(type_name::<T>());
    tracing::debug!(
        kind = ?err.kind(),
        target_type = type_name::<T>(),
        error = %err,
        "json conversion failed"
    );
    err
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_from_value, encode_to_text_with, from_value, value_kind};
    use crate::api::{EncodeOptions, ErrorKind};
    use serde::{Deserialize, Serialize};
    use serde_json::{Value, json};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }
    crate::json_hooks!(Point);

    #[test]
    fn value_kind_names_every_variant() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&json!(true)), "a boolean");
        assert_eq!(value_kind(&json!(1.5)), "a number");
        assert_eq!(value_kind(&json!("s")), "a string");
        assert_eq!(value_kind(&json!([])), "an array");
        assert_eq!(value_kind(&json!({})), "an object");
    }

    #[test]
    fn failed_decode_keeps_previous_struct() {
        let mut point = Point { x: 4, y: 5 };
        let err = decode_from_value(&json!({"x": "four"}), &mut point).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Mapping);
        assert_eq!(point, Point { x: 4, y: 5 });
    }

    #[test]
    fn errors_carry_target_type() {
        let err = from_value::<Point>(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.type_name().unwrap_or_default().ends_with("Point"));
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn pretty_option_changes_layout_only() {
        let point = Point { x: 1, y: 2 };
        let text = encode_to_text_with(&point, &EncodeOptions::pretty()).expect("encode");
        assert_eq!(text, "{\n  \"x\": 1,\n  \"y\": 2\n}");
        let reparsed: Value = serde_json::from_str(&text).expect("reparse");
        assert_eq!(reparsed, json!({"x": 1, "y": 2}));
    }
}
