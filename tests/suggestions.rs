use json_path_console::{evaluate, suggest};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

#[test]
fn documented_ordering() {
    let doc = json!({"a": {"x": 1}, "b": {"y": 2}});
    assert_eq!(suggest::index(&doc), vec!["a", "a.x", "b", "b.y"]);
}

#[test]
fn stable_across_calls() {
    let doc: Value = serde_json::from_str(r#"{"q": {"z": 1, "a": 2}, "p": [1, {"k": 0}]}"#).unwrap();
    let first = suggest::index(&doc);
    assert_eq!(first, vec!["q", "q.z", "q.a", "p"]);
    assert_eq!(suggest::index(&doc), first);
}

#[test]
fn every_suggestion_resolves() {
    let doc = json!({
        "user": {"name": "ada", "tags": ["x"], "address": {"city": null}},
        "count": 3,
        "weird.key": {"hidden": true}
    });
    for path in suggest::index_with_anchor(&doc, false)
        .into_iter()
        .chain(suggest::index_with_anchor(&doc, true))
    {
        assert!(
            matches!(evaluate(Some(&doc), &path), Ok(Some(_))),
            "{path} did not resolve"
        );
    }
}

fn nested(depth: usize) -> Value {
    let mut value = json!(0);
    for _ in 0..depth {
        let mut map = Map::new();
        map.insert("k".to_string(), value);
        value = Value::Object(map);
    }
    value
}

#[test]
fn deep_documents_do_not_exhaust_the_stack() {
    let depth = 2_000;
    let doc = nested(depth);
    let paths = suggest::index(&doc);
    assert_eq!(paths.len(), depth);

    let deepest = paths.last().unwrap();
    assert_eq!(deepest.split('.').count(), depth);
    assert_eq!(evaluate(Some(&doc), deepest).unwrap(), Some(&json!(0)));
}
