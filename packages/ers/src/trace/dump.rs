//! Deterministic, depth-limited rendering of trace values

use serde_json::Value;
use std::fmt::{self, Write};

const MAX_DEPTH: usize = 2;
const INDENT: &str = "  ";

/// Render each value on its own line
pub(super) fn dump_values(values: &[Value]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    write_values(&mut out, values).ok();
    out
}

fn write_values(out: &mut String, values: &[Value]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_value(out, value, 0)?;
    }
    Ok(())
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Null => out.write_str("(null) null"),
        Value::Bool(b) => write!(out, "(bool) {b}"),
        Value::Number(n) => write!(out, "(number) {n}"),
        Value::String(s) => write_str(out, s),
        Value::Array(items) => {
            write!(out, "(array) (len={}) ", items.len())?;
            write_container(out, depth, items.len(), |out, i| {
                write_value(out, &items[i], depth + 1)
            })
        }
        Value::Object(map) => {
            write!(out, "(object) (len={}) ", map.len())?;
            // serde_json keeps keys sorted unless `preserve_order` is enabled
            let entries: Vec<(&String, &Value)> = map.iter().collect();
            write_container(out, depth, entries.len(), |out, i| {
                let (key, value) = entries[i];
                write_str(out, key)?;
                out.write_str(": ")?;
                write_value(out, value, depth + 1)
            })
        }
    }
}

fn write_str(out: &mut String, s: &str) -> fmt::Result {
    write!(out, "(string) (len={}) {s:?}", s.len())
}

fn write_container<F>(out: &mut String, depth: usize, len: usize, mut item: F) -> fmt::Result
where
    F: FnMut(&mut String, usize) -> fmt::Result,
{
    if len == 0 {
        return out.write_str("{}");
    }
    out.write_str("{\n")?;
    if depth >= MAX_DEPTH {
        push_indent(out, depth + 1);
        out.write_str("<max depth reached>\n")?;
    } else {
        for i in 0..len {
            push_indent(out, depth + 1);
            item(out, i)?;
            if i + 1 < len {
                out.push(',');
            }
            out.push('\n');
        }
    }
    push_indent(out, depth);
    out.write_char('}')
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_render_with_type_tags() {
        let out = dump_values(&[json!(null), json!(true), json!(42), json!("abc")]);
        assert_eq!(
            out,
            "(null) null\n(bool) true\n(number) 42\n(string) (len=3) \"abc\""
        );
    }

    #[test]
    fn test_containers_are_indented() {
        let out = dump_values(&[json!({"b": [1, 2], "a": "x"})]);
        let expected = "(object) (len=2) {\n  (string) (len=1) \"a\": (string) (len=1) \"x\",\n  (string) (len=1) \"b\": (array) (len=2) {\n    (number) 1,\n    (number) 2\n  }\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_depth_is_limited() {
        let out = dump_values(&[json!([[["deep"]]])]);
        let expected = "(array) (len=1) {\n  (array) (len=1) {\n    (array) (len=1) {\n      <max depth reached>\n    }\n  }\n}";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(dump_values(&[json!([])]), "(array) (len=0) {}");
        assert_eq!(dump_values(&[json!({})]), "(object) (len=0) {}");
    }
}
