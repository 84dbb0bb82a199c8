// src/main.rs
//
// Local one-shot invoke:
//
// - reads an event document from the file named by the first argument
//   (or uses `{}` when none is given),
// - invokes the health handler once,
// - prints the response record as pretty JSON on stdout.

use std::fs;

use serde_json::Value;

use baseline::{HealthResponder, InvocationContext, InvocationHandler};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "baseline=warn".to_string()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let event = match std::env::args().nth(1) {
        Some(path) => read_event(&path)?,
        None => Value::Object(Default::default()),
    };

    let context = InvocationContext {
        function_name: Some("baseline-health".to_string()),
        ..InvocationContext::default()
    };

    let response = HealthResponder::new().handle(&event, &context);
    tracing::debug!(status_code = response.status_code, "local invocation complete");

    let out = serde_json::to_string_pretty(&response)
        .map_err(|e| format!("failed to encode response: {e}"))?;
    println!("{out}");

    Ok(())
}

fn read_event(path: &str) -> Result<Value, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("failed to read event {path}: {e}"))?;
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&raw).map_err(|e| format!("event {path} is not valid JSON: {e}"))
}
