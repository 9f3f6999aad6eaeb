//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;

pub use filesystem::RecordingFileSystem;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::recorder::CassetteRecorder;

fn to_json<T: Serialize>(value: &T) -> Value {
    // Inputs and outputs here are strings, bools and paths.
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: Value,
    output: Value,
) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(e) => log::warn!("dropping {port}::{method} interaction, recorder poisoned: {e}"),
    }
}

/// Record an interaction with a plain (non-Result) return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    push(recorder, port, method, to_json(input), to_json(output));
}

/// Record a `Result` as `{"ok": value}` or `{"err": message}`.
///
/// The shape matches what the replaying adapters read back.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => json!({ "ok": to_json(v) }),
        Err(e) => json!({ "err": e.to_string() }),
    };
    push(recorder, port, method, to_json(input), output);
}
