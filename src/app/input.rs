//! Record input loading.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Reads records from a JSON file, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Fails if the file cannot be read or does not hold records in one of the
/// shapes accepted by [`parse_records`].
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?
    };
    parse_records(&text).with_context(|| format!("Invalid records in {}", path.display()))
}

/// Parses a JSON array of records, or an API envelope `{"data": [...]}`.
///
/// Blank input and `null` mean no records.
pub fn parse_records(text: &str) -> Result<Vec<Value>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(text).context("Input is not valid JSON")?;
    match value {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            Some(Value::Null) => Ok(Vec::new()),
            Some(other) => bail!("\"data\" must be an array of records, found {}", kind_of(&other)),
            None => bail!("expected an array of records or an object with a \"data\" array"),
        },
        other => bail!("expected an array of records, found {}", kind_of(&other)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
