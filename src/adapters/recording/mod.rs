//! Recording adapters that capture interactions to a cassette.

pub mod clock;
pub mod page;

pub use clock::RecordingClock;
pub use page::RecordingPage;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Recorder shared by every adapter of one session.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Record a call whose input and output serialize directly.
fn record_interaction<I, O>(recorder: &SharedRecorder, port: &str, method: &str, input: &I, output: &O)
where
    I: Serialize,
    O: Serialize,
{
    let input = serde_json::to_value(input).unwrap_or_else(|e| failed_value(&e));
    let output = serde_json::to_value(output).unwrap_or_else(|e| failed_value(&e));
    push(recorder, port, method, input, output);
}

/// Record a fallible call as `{"Ok": value}` or `{"Err": message}`.
fn record_result<I, T, E>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    I: Serialize,
    T: Serialize,
    E: std::fmt::Display,
{
    let input = serde_json::to_value(input).unwrap_or_else(|e| failed_value(&e));
    let output = match result {
        Ok(v) => serde_json::json!({ "Ok": serde_json::to_value(v).unwrap_or_else(|e| failed_value(&e)) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };
    push(recorder, port, method, input, output);
}

fn failed_value(err: &serde_json::Error) -> serde_json::Value {
    tracing::warn!(error = %err, "cassette value could not be serialized");
    serde_json::Value::Null
}

fn push(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(_) => tracing::warn!(port, method, "recorder lock poisoned, interaction dropped"),
    }
}
