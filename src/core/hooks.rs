//! Purpose: Static capability detection for optional per-type JSON hooks.
//! Exports: `JsonHooks`, `ImportHook`, `ExportHook`, `Capabilities`, dispatch helpers.
//! Role: Decides at compile time whether a type patches JSON after generic mapping.
//! Invariants: Types without hooks pay nothing; the capability check is a `const` expression.
//! Invariants: Hook signatures are fixed, so incompatible same-named members never dispatch.
//! Notes: Hooks have no error channel. Import hooks must absorb bad dynamic data themselves
//! and export hooks must always hand back a usable value.

use serde_json::Value;

/// Runs after generic decoding with the full original JSON object.
pub type ImportHook<T> = fn(&mut T, &Value);

/// Runs after generic encoding; returns the value that becomes the final output.
pub type ExportHook<T> = fn(&T, Value) -> Value;

/// Optional import/export hooks for a convertible type.
///
/// Both hooks default to `None`, so opting out is an empty impl (or
/// `json_hooks!(MyType);`). A type opts in by setting the constant to a
/// function with the matching signature:
///
/// ```
/// use jsonhooks::api::{JsonHooks, ImportHook, Value};
///
/// #[derive(serde::Deserialize)]
/// struct Event {
///     kind: String,
///     #[serde(skip)]
///     payload: Option<Value>,
/// }
///
/// impl Event {
///     fn read_payload(&mut self, json: &Value) {
///         self.payload = json.get("payload").cloned();
///     }
/// }
///
/// impl JsonHooks for Event {
///     const IMPORT: Option<ImportHook<Self>> = Some(Event::read_payload);
/// }
/// ```
pub trait JsonHooks: Sized {
    const IMPORT: Option<ImportHook<Self>> = None;
    const EXPORT: Option<ExportHook<Self>> = None;
}

/// Compile-time hook flags for one type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    pub import: bool,
    pub export: bool,
}

impl Capabilities {
    pub const fn of<T: JsonHooks>() -> Self {
        Self {
            import: has_import_hook::<T>(),
            export: has_export_hook::<T>(),
        }
    }

    pub const fn is_plain(self) -> bool {
        !self.import && !self.export
    }
}

pub const fn has_import_hook<T: JsonHooks>() -> bool {
    T::IMPORT.is_some()
}

pub const fn has_export_hook<T: JsonHooks>() -> bool {
    T::EXPORT.is_some()
}

/// Returns whether a hook ran.
#[inline]
pub fn call_import_if_present<T: JsonHooks>(target: &mut T, json: &Value) -> bool {
    match T::IMPORT {
        Some(hook) => {
            hook(target, json);
            true
        }
        None => false,
    }
}

#[inline]
pub fn call_export_if_present<T: JsonHooks>(source: &T, json: Value) -> Value {
    match T::EXPORT {
        Some(hook) => hook(source, json),
        None => json,
    }
}

/// Implements [`JsonHooks`](crate::core::hooks::JsonHooks) for a type.
///
/// ```
/// use jsonhooks::json_hooks;
/// use serde_json::Value;
///
/// struct Plain;
/// json_hooks!(Plain);
///
/// struct Tagged { tags: Vec<String> }
/// impl Tagged {
///     fn write_tags(&self, mut json: Value) -> Value {
///         json["tags"] = Value::from(self.tags.clone());
///         json
///     }
/// }
/// json_hooks!(Tagged, export: Tagged::write_tags);
/// ```
///
/// Each hook must coerce to [`ImportHook`](crate::core::hooks::ImportHook) or
/// [`ExportHook`](crate::core::hooks::ExportHook); anything else fails to compile.
#[macro_export]
macro_rules! json_hooks {
    ($ty:ty $(,)?) => {
        impl $crate::core::hooks::JsonHooks for $ty {}
    };
    ($ty:ty, import: $import:expr $(,)?) => {
        impl $crate::core::hooks::JsonHooks for $ty {
            const IMPORT: ::core::option::Option<$crate::core::hooks::ImportHook<Self>> =
                ::core::option::Option::Some($import);
        }
    };
    ($ty:ty, export: $export:expr $(,)?) => {
        impl $crate::core::hooks::JsonHooks for $ty {
            const EXPORT: ::core::option::Option<$crate::core::hooks::ExportHook<Self>> =
                ::core::option::Option::Some($export);
        }
    };
    ($ty:ty, import: $import:expr, export: $export:expr $(,)?) => {
        impl $crate::core::hooks::JsonHooks for $ty {
            const IMPORT: ::core::option::Option<$crate::core::hooks::ImportHook<Self>> =
                ::core::option::Option::Some($import);
            const EXPORT: ::core::option::Option<$crate::core::hooks::ExportHook<Self>> =
                ::core::option::Option::Some($export);
        }
    };
}
