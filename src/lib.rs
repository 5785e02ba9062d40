//! Purpose: Serde struct/JSON conversion with optional per-type post-processing hooks.
//! Exports: `api` (conversion entry points), `core` (hooks, errors), `json_hooks!`.
//! Role: Library crate; types opt into import/export hooks without a required interface body.
//! Invariants: Generic serde mapping always runs first; hooks only patch its result.
//! Invariants: Hook presence is decided at compile time; absent hooks cost nothing.
pub mod api;
pub mod core;
mod json;
