//! Purpose: Define the stable public Rust API boundary for jsonhooks.
//! Exports: Conversion entry points, options, hook traits, and error types.
//! Role: Public, additive-only surface; hides the internal text codec module.
//! Invariants: This module is the only public path to the conversion orchestrator.
//! Invariants: Internal modules remain private and are not directly exposed.

mod convert;
mod options;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::hooks::{Capabilities, ExportHook, ImportHook, JsonHooks};
pub use crate::json::parse::ParseFailureCategory;
pub use convert::{
    ConvertResult, decode_from_slice, decode_from_text, decode_from_value, encode_to_text,
    encode_to_text_with, encode_to_value, from_slice, from_str, from_value,
};
pub use options::{EncodeOptions, TextStyle};
pub use serde_json::Value;
