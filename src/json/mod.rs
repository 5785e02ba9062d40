//! Purpose: Internal JSON text boundary shared by every conversion entry point.
//! Exports: `parse` (text/bytes to `Value`) and `write` (`Value` to text).
//! Role: Single seam for the text codec so the orchestrator never calls serde_json text APIs directly.
//! Invariants: Helpers are pure and deterministic (no hidden global state).

pub(crate) mod parse;
pub(crate) mod write;
