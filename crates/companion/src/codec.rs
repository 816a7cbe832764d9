use face_core::{FaceError, Result};
use serde_json::{Map, Number};
use tracing::debug;

use crate::dict::{Dictionary, Value};

/// Decode one wire line into a [`Dictionary`].
///
/// The wire format is a JSON object whose keys are stringified integer ids,
/// e.g. `{"0":-3,"1":"Snow","2":57}`. Entries with a non-integer key or a
/// value that is neither an integer nor a string are skipped, not rejected;
/// only a line that fails to parse as a JSON object at all is an error.
pub fn decode_line(line: &str) -> Result<Dictionary> {
    let object: Map<String, serde_json::Value> = serde_json::from_str(line)
        .map_err(|e| FaceError::Companion(format!("malformed message: {e}")))?;

    let mut dict = Dictionary::new();
    for (raw_key, value) in object {
        let Ok(key) = raw_key.parse::<u32>() else {
            debug!("Skipping non-integer message key '{raw_key}'");
            continue;
        };

        match value {
            serde_json::Value::Number(n) => match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(v) => dict.insert_int(key, v),
                None => debug!("Skipping out-of-range integer for key {key}"),
            },
            serde_json::Value::String(s) => dict.insert_text(key, s),
            other => debug!("Skipping unsupported value {other} for key {key}"),
        }
    }

    Ok(dict)
}

/// Encode a [`Dictionary`] as one wire line (no trailing newline).
pub fn encode_line(dict: &Dictionary) -> String {
    let mut object = Map::new();
    for (key, value) in dict.iter() {
        let json = match value {
            Value::Int(v) => serde_json::Value::Number(Number::from(*v)),
            Value::Text(v) => serde_json::Value::String(v.clone()),
        };
        object.insert(key.to_string(), json);
    }
    serde_json::Value::Object(object).to_string()
}
