use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use slicer_types::CubesError;

/// Serialize a document indented by four spaces, with a trailing newline.
pub fn to_json_pretty(value: &Value) -> Result<String, CubesError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|e| CubesError::Model(format!("unable to serialize model: {e}")))?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| CubesError::Model(format!("unable to serialize model: {e}")))
}
