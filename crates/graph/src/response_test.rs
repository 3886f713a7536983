use serde_json::json;

use super::*;

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_null() {
    assert_eq!(ResponseShape::classify(Value::Null, Envelope::Standard), ResponseShape::Null);
}

#[test]
fn classify_bare_list() {
    assert_eq!(
        ResponseShape::classify(json!([1, 2]), Envelope::Standard),
        ResponseShape::List(vec![json!(1), json!(2)])
    );
}

#[test]
fn classify_result_wrapper_takes_precedence_over_error() {
    let shape = ResponseShape::classify(json!({ "result": 7, "error": "x" }), Envelope::Standard);
    assert_eq!(shape, ResponseShape::Wrapped(json!(7)));
}

#[test]
fn classify_single_envelope_puts_error_before_result() {
    let raw = json!({ "result": 7, "error": "x" });
    let ResponseShape::ErrorTagged(obj) = ResponseShape::classify(raw, Envelope::Single) else {
        panic!("expected ErrorTagged");
    };
    assert_eq!(obj.get("result"), Some(&json!(7)));
    assert_eq!(
        ResponseShape::classify(json!({ "result": 7 }), Envelope::Single),
        ResponseShape::Wrapped(json!(7))
    );
}

#[test]
fn classify_error_keeps_whole_object() {
    let shape = ResponseShape::classify(json!({ "success": false, "error": "boom" }), Envelope::Standard);
    let ResponseShape::ErrorTagged(obj) = shape else {
        panic!("expected ErrorTagged");
    };
    assert_eq!(obj.get("success"), Some(&json!(false)));
    assert_eq!(obj.get("error"), Some(&json!("boom")));
}

#[test]
fn classify_blocks_only_recognised_for_search() {
    let raw = json!({ "blocks": [], "result": [1] });
    assert_eq!(
        ResponseShape::classify(raw.clone(), Envelope::Search),
        ResponseShape::BlocksWrapped(json!([]))
    );
    assert_eq!(
        ResponseShape::classify(raw, Envelope::Standard),
        ResponseShape::Wrapped(json!([1]))
    );
}

#[test]
fn classify_plain_object_is_raw() {
    let raw = json!({ "name": "Inbox", "journal?": false });
    assert_eq!(ResponseShape::classify(raw.clone(), Envelope::Standard), ResponseShape::Raw(raw));
}

#[test]
fn classify_scalar_is_raw() {
    assert_eq!(ResponseShape::classify(json!(true), Envelope::Standard), ResponseShape::Raw(json!(true)));
}

// =============================================================================
// into_list
// =============================================================================

#[test]
fn list_passes_bare_list_through() {
    let pages = json!([{ "name": "a" }, { "name": "b" }]);
    assert_eq!(Value::Array(into_list(pages.clone())), pages);
}

#[test]
fn list_unwraps_result() {
    assert_eq!(into_list(json!({ "result": [{ "id": 1 }] })), vec![json!({ "id": 1 })]);
}

#[test]
fn list_result_that_is_not_a_list_is_empty() {
    assert!(into_list(json!({ "result": null })).is_empty());
    assert!(into_list(json!({ "result": { "id": 1 } })).is_empty());
}

// Failures are absorbed into "no results" for list reads.
#[test]
fn list_absorbs_remote_error() {
    assert!(into_list(json!({ "error": "MethodNotExist" })).is_empty());
}

#[test]
fn list_absorbs_transport_sentinel() {
    assert!(into_list(json!({ "success": false, "error": "connection refused" })).is_empty());
}

#[test]
fn list_of_null_or_plain_object_is_empty() {
    assert!(into_list(Value::Null).is_empty());
    assert!(into_list(json!({ "name": "x" })).is_empty());
}

// =============================================================================
// into_search_results
// =============================================================================

#[test]
fn search_unwraps_blocks() {
    assert_eq!(into_search_results(json!({ "blocks": [{ "id": 1 }] })), vec![json!({ "id": 1 })]);
}

#[test]
fn search_blocks_beat_result() {
    let raw = json!({ "blocks": [{ "id": 1 }], "result": [{ "id": 2 }] });
    assert_eq!(into_search_results(raw), vec![json!({ "id": 1 })]);
}

#[test]
fn search_unwraps_result_and_bare_list() {
    assert_eq!(into_search_results(json!({ "result": [1] })), vec![json!(1)]);
    assert_eq!(into_search_results(json!([2])), vec![json!(2)]);
}

#[test]
fn search_absorbs_null_and_errors() {
    assert!(into_search_results(Value::Null).is_empty());
    assert!(into_search_results(json!({ "error": "bad query" })).is_empty());
    assert!(into_search_results(json!({ "pages": [] })).is_empty());
}

// =============================================================================
// into_single
// =============================================================================

#[test]
fn single_null_is_not_found() {
    assert_eq!(into_single(Value::Null), None);
}

// Errors are coerced to absence, not surfaced.
#[test]
fn single_error_is_not_found() {
    assert_eq!(into_single(json!({ "error": "not found" })), None);
    assert_eq!(into_single(json!({ "success": false, "error": "401 Unauthorized" })), None);
}

#[test]
fn single_error_beats_result() {
    let raw = json!({ "result": { "uuid": "b" }, "error": "Block not found" });
    assert_eq!(into_single(raw), None);
}

#[test]
fn single_wrapped_and_direct_forms_agree() {
    let page = json!({ "id": 42, "name": "inbox" });
    assert_eq!(into_single(json!({ "result": page.clone() })), Some(page.clone()));
    assert_eq!(into_single(page.clone()), Some(page));
}

#[test]
fn single_wrapped_null_is_not_found() {
    assert_eq!(into_single(json!({ "result": null })), None);
}

// =============================================================================
// into_opaque
// =============================================================================

#[test]
fn opaque_unwraps_result() {
    assert_eq!(into_opaque(json!({ "result": { "uuid": "u" } })), json!({ "uuid": "u" }));
    assert_eq!(into_opaque(json!({ "result": null })), Value::Null);
}

#[test]
fn opaque_surfaces_errors_unchanged() {
    let sentinel = json!({ "success": false, "error": "connection refused" });
    assert_eq!(into_opaque(sentinel.clone()), sentinel);
    let remote = json!({ "error": "Page not exists" });
    assert_eq!(into_opaque(remote.clone()), remote);
}

#[test]
fn opaque_returns_other_shapes_unchanged() {
    assert_eq!(into_opaque(Value::Null), Value::Null);
    assert_eq!(into_opaque(json!([1])), json!([1]));
    assert_eq!(into_opaque(json!({ "uuid": "u" })), json!({ "uuid": "u" }));
    assert_eq!(into_opaque(json!({ "blocks": [] })), json!({ "blocks": [] }));
}

// =============================================================================
// into_properties
// =============================================================================

#[test]
fn properties_unwrap_result_map() {
    let props = into_properties(json!({ "result": { "status": "done" } }));
    assert_eq!(props.get("status"), Some(&json!("done")));
}

#[test]
fn properties_accept_bare_map() {
    let props = into_properties(json!({ "status": "todo" }));
    assert_eq!(props.get("status"), Some(&json!("todo")));
}

#[test]
fn properties_default_to_empty_map() {
    assert!(into_properties(Value::Null).is_empty());
    assert!(into_properties(json!([1, 2])).is_empty());
    assert!(into_properties(json!({ "result": null })).is_empty());
}
