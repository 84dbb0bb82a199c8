//! JSON text serialization with spaced separators.
//!
//! `serde_json::to_string` emits the compact form (`{"a":1,"b":2}`). Callers
//! of the health endpoint have historically received the spaced form
//! (`{"a": 1, "b": 2}`), so bodies are written through [`SpacedFormatter`]
//! to keep the bytes stable.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Single-line formatter that writes `", "` between elements and `": "`
/// between keys and values.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serializes `value` to a JSON string using [`SpacedFormatter`].
pub fn to_spaced_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spaces_object_separators() {
        let s = to_spaced_string(&json!({"status": "ok"})).unwrap();
        assert_eq!(s, r#"{"status": "ok"}"#);
    }

    #[test]
    fn spaces_nested_arrays_and_objects() {
        let value = json!({"a": [1, 2, 3], "b": {"c": null, "d": true}});
        let s = to_spaced_string(&value).unwrap();
        assert_eq!(s, r#"{"a": [1, 2, 3], "b": {"c": null, "d": true}}"#);
    }

    #[test]
    fn empty_containers_have_no_padding() {
        assert_eq!(to_spaced_string(&json!({})).unwrap(), "{}");
        assert_eq!(to_spaced_string(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn output_parses_back_to_same_value() {
        let value = json!({"message": "quoted \"text\"", "n": 1.5});
        let s = to_spaced_string(&value).unwrap();
        let back: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(back, value);
    }
}
