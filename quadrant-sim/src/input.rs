//! Companion messages typed on stdin
//!
//! Each line is a JSON object mapping companion key names to integers,
//! booleans or strings, for example
//! `{"TEMPERATUREC": 21, "TEMPERATUREF": 70, "CONDITIONS": "Clouds"}`.

use anyhow::{anyhow, bail, Context};
use quadrant_protocol::{DictError, DictionaryBuilder, MessageKey, MAX_TUPLES};
use serde_json::{Map, Value};

/// Largest encoded message accepted from stdin
const MAX_MESSAGE_SIZE: usize = 512;

/// Encode one input line as a companion dictionary
pub fn encode_line(line: &str) -> anyhow::Result<Vec<u8>> {
    let fields: Map<String, Value> =
        serde_json::from_str(line).context("Expected a JSON object")?;
    if fields.len() > MAX_TUPLES {
        bail!("At most {} fields per message", MAX_TUPLES);
    }

    let mut buf = [0u8; MAX_MESSAGE_SIZE];
    let mut builder = DictionaryBuilder::new(&mut buf).map_err(dict_error)?;
    for (name, value) in &fields {
        let key = MessageKey::from_name(name)
            .ok_or_else(|| anyhow!("Unknown key `{}`", name))?
            .id();
        let pushed = match value {
            Value::Bool(flag) => builder.push_int(key, i32::from(*flag)),
            Value::Number(n) => {
                let n = n
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| anyhow!("`{}` is not a 32-bit integer", name))?;
                builder.push_int(key, n)
            }
            Value::String(s) => builder.push_cstring(key, s),
            other => bail!("Unsupported value for `{}`: {}", name, other),
        };
        pushed.map_err(dict_error)?;
    }
    Ok(builder.finish().to_vec())
}

fn dict_error(e: DictError) -> anyhow::Error {
    anyhow!("Encoding failed: {:?}", e)
}
