//! Integration tests for serde support.
//!
//! Lists serialize as sequences, results as externally tagged enums and
//! slots as plain enums.

#![cfg(feature = "serde")]

use fpinrs::control::{CauseKind, Result};
use fpinrs::list;
use fpinrs::persistent::SinglyLinkedList;
use fpinrs::traverse::Slot;
use rstest::rstest;

// =============================================================================
// SinglyLinkedList
// =============================================================================

#[rstest]
fn test_list_serializes_as_sequence() {
    let json = serde_json::to_string(&list![1, 2, 3]).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[rstest]
fn test_list_json_roundtrip() {
    let list: SinglyLinkedList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: SinglyLinkedList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_nil_roundtrip() {
    let restored: SinglyLinkedList<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_list_rejects_non_sequence() {
    let error = serde_json::from_str::<SinglyLinkedList<i32>>("{}").unwrap_err();
    assert!(error.to_string().contains("a sequence"));
}

// =============================================================================
// Result
// =============================================================================

#[rstest]
#[case(Result::success(5), r#"{"Success":5}"#)]
#[case(Result::failure("oops"), r#"{"Failure":{"kind":"Runtime","message":"oops"}}"#)]
#[case(Result::empty(), r#""Empty""#)]
fn test_result_serialized_form(#[case] result: Result<i32>, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&result).unwrap(), json);
}

#[rstest]
#[case(Result::success(5))]
#[case(Result::failure_with(CauseKind::Value, "bad"))]
#[case(Result::empty())]
fn test_result_json_roundtrip(#[case] result: Result<i32>) {
    let json = serde_json::to_string(&result).unwrap();
    let restored: Result<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}

#[rstest]
fn test_result_of_list_roundtrip() {
    let result = Result::success(list!["a".to_string(), "b".to_string()]);
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"Success":["a","b"]}"#);
    let restored: Result<SinglyLinkedList<String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);
}

// =============================================================================
// Slot
// =============================================================================

#[rstest]
fn test_slots_roundtrip() {
    let slots = list![Slot::Filled(1), Slot::Vacant];
    let json = serde_json::to_string(&slots).unwrap();
    assert_eq!(json, r#"[{"Filled":1},"Vacant"]"#);
    let restored: SinglyLinkedList<Slot<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, slots);
}
