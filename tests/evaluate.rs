use json_path_console::{evaluate, QueryError};
use serde_json::json;

#[test]
fn nested_key() {
    let doc = json!({"a": {"b": 1}});
    assert_eq!(evaluate(Some(&doc), "a.b").unwrap(), Some(&json!(1)));
}

#[test]
fn missing_key_is_absent_not_error() {
    let doc = json!({"a": {"b": 1}});
    assert_eq!(evaluate(Some(&doc), "a.c").unwrap(), None);
}

#[test]
fn keyed_index() {
    let doc = json!({"a": [10, 20, 30]});
    assert_eq!(evaluate(Some(&doc), "a[1]").unwrap(), Some(&json!(20)));
    assert_eq!(evaluate(Some(&doc), "$.a[0]").unwrap(), Some(&json!(10)));
}

#[test]
fn index_out_of_range_is_error() {
    let doc = json!({"a": [10, 20, 30]});
    assert_eq!(
        evaluate(Some(&doc), "a[5]"),
        Err(QueryError::IndexOutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn keying_a_non_mapping_is_error() {
    let doc = json!({"a": 1});
    let err = evaluate(Some(&doc), "a.b").unwrap_err();
    assert_eq!(
        err,
        QueryError::NotAMapping {
            key: "b".into(),
            found: "number"
        }
    );
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "cannot read key `b` of number");
}

#[test]
fn identity_paths() {
    let doc = json!({"a": [1, {"b": null}]});
    assert_eq!(evaluate(Some(&doc), "").unwrap(), Some(&doc));
    assert_eq!(evaluate(Some(&doc), "$").unwrap(), Some(&doc));
}

#[test]
fn null_values_are_found_not_absent() {
    let doc = json!({"a": null});
    assert_eq!(evaluate(Some(&doc), "a").unwrap(), Some(&json!(null)));
}

#[test]
fn malformed_paths_are_syntax_errors() {
    let doc = json!({"a": {"b": [1]}});
    for path in ["a..b", ".a", "a.", "a.b[-1]", "a.b[x]", "a.b[]", "a.b[0", "a.b[0]c", "$..a"] {
        let err = evaluate(Some(&doc), path).unwrap_err();
        assert!(err.is_syntax(), "{path:?} gave {err:?}");
    }
}

#[test]
fn whitespace_is_part_of_the_key() {
    let doc = json!({"a": 1, " a": 2});
    assert_eq!(evaluate(Some(&doc), " a").unwrap(), Some(&json!(2)));
    assert_eq!(evaluate(Some(&doc), "a ").unwrap(), None);
}

#[test]
fn walks_into_list_elements() {
    let doc = json!({"store": {"books": [{"title": "Dune"}, {"title": "Emma"}]}});
    assert_eq!(
        evaluate(Some(&doc), "$.store.books[1].title").unwrap(),
        Some(&json!("Emma"))
    );
}

#[test]
fn index_on_scalar_is_error() {
    let doc = json!({"a": "text"});
    assert_eq!(
        evaluate(Some(&doc), "a[0]"),
        Err(QueryError::NotAList { index: 0, found: "string" })
    );
}
