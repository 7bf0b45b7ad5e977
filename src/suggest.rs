use serde_json::Value;

use crate::path::is_addressable_key;

/// Every dotted path reachable from `root` by descending through mappings.
///
/// Pre-order, keys in document order. Lists and scalars are emitted but not
/// descended into. Keys the path grammar cannot spell are skipped along with
/// everything below them, so each emitted path resolves with `path::evaluate`.
/// Traversal uses an explicit stack; nesting depth is unbounded.
pub fn index(root: &Value) -> Vec<String> {
    index_with_anchor(root, false)
}

/// Same as [`index`], optionally prefixing every path with the `$.` root anchor.
pub fn index_with_anchor(root: &Value, anchor: bool) -> Vec<String> {
    let mut out = Vec::new();
    let Value::Object(map) = root else {
        return out;
    };

    let prefix = if anchor { "$" } else { "" };
    let mut stack: Vec<(String, &Value)> = Vec::new();
    push_children(&mut stack, prefix, map);

    while let Some((path, value)) = stack.pop() {
        if let Value::Object(children) = value {
            push_children(&mut stack, &path, children);
        }
        out.push(path);
    }

    tracing::trace!(count = out.len(), "indexed suggestions");
    out
}

// Reversed so the first key is popped first
fn push_children<'a>(
    stack: &mut Vec<(String, &'a Value)>,
    parent: &str,
    map: &'a serde_json::Map<String, Value>,
) {
    for (key, value) in map.iter().rev() {
        if !is_addressable_key(key) {
            continue;
        }
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };
        stack.push((path, value));
    }
}

/// Candidates starting with `prefix`, in index order.
pub fn matching<'a>(suggestions: &'a [String], prefix: &'a str) -> impl Iterator<Item = &'a str> {
    suggestions
        .iter()
        .map(String::as_str)
        .filter(move |s| s.starts_with(prefix))
}
