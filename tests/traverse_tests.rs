//! Integration tests for traverse, sequence and flatten_result.

use std::cell::Cell;

use fpinrs::prelude::*;
use rstest::rstest;

fn parse(text: &&str) -> Result<i32> {
    Result::of(text.parse::<i32>().ok())
}

// =============================================================================
// traverse
// =============================================================================

#[rstest]
fn test_traverse_all_success() {
    let parsed = traverse(&list!["1", "2", "3"], parse);
    assert_eq!(parsed, Result::success(list![1, 2, 3]));
}

#[rstest]
fn test_traverse_nil_is_success_of_nil() {
    let none: SinglyLinkedList<&str> = list![];
    assert_eq!(traverse(&none, parse), Result::success(list![]));
}

#[rstest]
fn test_traverse_returns_first_failure() {
    let parsed = list!["1", "x", "y"].traverse(|text| match text.parse::<i32>() {
        Ok(value) => Result::success(value),
        Err(_) => Result::failure(format!("cannot parse {text}")),
    });
    assert_eq!(parsed.failure_value().unwrap().message(), "cannot parse x");
}

#[rstest]
fn test_traverse_does_not_call_step_after_failure() {
    let calls = Cell::new(0);
    let result = list![1, 2, 3, 4, 5].traverse(|x| {
        calls.set(calls.get() + 1);
        if *x == 2 {
            Result::failure("stop")
        } else {
            Result::success(*x)
        }
    });
    assert!(result.is_failure());
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_traverse_empty_step_becomes_missing_failure() {
    let result = list![1, 2].traverse(|x| {
        if *x == 1 {
            Result::<i32>::empty()
        } else {
            Result::success(*x)
        }
    });
    let cause = result.failure_value().unwrap();
    assert_eq!(cause.kind(), CauseKind::Missing);
    assert_eq!(cause.message(), "empty result at position 0");
}

#[rstest]
fn test_traverse_preserves_order_of_outputs() {
    let labelled = list![3, 1, 2].traverse(|x| Result::success(format!("#{x}")));
    assert_eq!(labelled.to_string(), "Result([#3, #1, #2, NIL])");
}

// =============================================================================
// sequence
// =============================================================================

#[rstest]
fn test_sequence_all_success() {
    let results = list![Result::success(1), Result::success(2)];
    assert_eq!(sequence(&results), Result::success(list![1, 2]));
}

#[rstest]
fn test_sequence_first_failure_wins() {
    let results = list![
        Result::success(1),
        Result::failure("first"),
        Result::failure("second")
    ];
    assert_eq!(
        results.sequence().failure_value().unwrap().message(),
        "first"
    );
}

#[rstest]
fn test_sequence_with_empty_fails() {
    let results = list![Result::success(1), Result::empty()];
    let cause = results.sequence().failure_value().cloned().unwrap();
    assert_eq!(cause.kind(), CauseKind::Missing);
}

#[rstest]
fn test_sequence_leaves_input_untouched() {
    let results = list![Result::success(1), Result::failure("oops")];
    let _ = results.sequence();
    assert_eq!(results.length(), 2);
    assert!(results.head().unwrap().is_success());
}

// =============================================================================
// flatten_result
// =============================================================================

#[rstest]
fn test_flatten_result_renders_vacant_slots() {
    let results = list![Result::success(1), Result::failure("oops"), Result::success(3)];
    assert_eq!(flatten_result(&results).to_string(), "[1, [NIL], 3, NIL]");
}

#[rstest]
fn test_flatten_result_of_nil_is_nil() {
    let results: SinglyLinkedList<Result<i32>> = list![];
    assert!(results.flatten_result().is_empty());
}

#[rstest]
fn test_flatten_result_slots() {
    let results = list![Result::empty(), Result::success("a")];
    let slots = results.flatten_result();
    assert_eq!(slots.to_vec(), vec![Slot::Vacant, Slot::Filled("a")]);
    assert_eq!(
        slots.iter().filter(|slot| slot.is_filled()).count(),
        1
    );
}
