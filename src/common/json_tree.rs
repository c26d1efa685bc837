// Appiattimento di un valore JSON in righe indentate, usato per mostrare la traza
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub text: String,
}

/// Flattens `value` into one line per object member / array item.
///
/// Containers get a header with their size and their children follow at
/// `depth + 1`. A scalar root becomes a single line.
pub fn flatten(value: &Value) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    match value {
        Value::Object(_) | Value::Array(_) => push_children(value, 0, &mut lines),
        scalar => lines.push(TreeLine { depth: 0, text: scalar.to_string() }),
    }
    lines
}

/// Mirrors what counts as "present" for the trace section: null, false, zero,
/// empty strings and empty containers are not shown.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn push_children(value: &Value, depth: usize, lines: &mut Vec<TreeLine>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                push_entry(&format!("\"{}\"", key), child, depth, lines);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                push_entry(&idx.to_string(), child, depth, lines);
            }
        }
        _ => {}
    }
}

fn push_entry(key: &str, value: &Value, depth: usize, lines: &mut Vec<TreeLine>) {
    let text = match value {
        Value::Object(map) if map.is_empty() => format!("{}: {{}}", key),
        Value::Array(items) if items.is_empty() => format!("{}: []", key),
        Value::Object(map) => format!("{}: {{…}} ({})", key, map.len()),
        Value::Array(items) => format!("{}: […] ({})", key, items.len()),
        scalar => format!("{}: {}", key, scalar),
    };
    lines.push(TreeLine { depth, text });
    push_children(value, depth + 1, lines);
}
