//! Integration tests for the precondition facade.
//!
//! Covers every call shape: aggregate, single condition, predicate +
//! describer, precomputed boolean, value-less message/supplier, and the
//! format-argument forms, plus the scalar condition constructors.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use affirm_check::preconditions::*;
use affirm_check::{
    condition, condition_d, condition_i, condition_l, Condition, ContractError, ContractKind,
    FatalFault, Fault,
};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn below_23() -> Condition<i32> {
    condition_i(|x| *x < 23, |x| format!("Value {x} must be < 23"))
}

fn above_23() -> Condition<i32> {
    condition_i(|x| *x > 23, |x| format!("Value {x} must be > 23"))
}

fn equals_23() -> Condition<i32> {
    condition_i(|x| *x == 23, |x| format!("Value {x} must be == 23"))
}

/// A condition that counts how often its predicate and describer run.
fn counted(
    holds: bool,
    predicate_calls: &Arc<AtomicUsize>,
    describer_calls: &Arc<AtomicUsize>,
) -> Condition<i32> {
    let p = Arc::clone(predicate_calls);
    let d = Arc::clone(describer_calls);
    condition_i(
        move |_| {
            p.fetch_add(1, Ordering::SeqCst);
            holds
        },
        move |x| {
            d.fetch_add(1, Ordering::SeqCst);
            format!("counted {x}")
        },
    )
}

fn violation(err: &ContractError) -> (&str, usize) {
    let v = err.violation().expect("expected a contract violation");
    assert_eq!(v.kind(), ContractKind::Precondition);
    (v.message(), v.count())
}

// ---------------------------------------------------------------------------
// Aggregate form
// ---------------------------------------------------------------------------

#[test]
fn all_conditions_hold_returns_value() {
    let calls = Arc::new(AtomicUsize::new(0));
    let described = Arc::new(AtomicUsize::new(0));
    let conditions = [
        counted(true, &calls, &described),
        counted(true, &calls, &described),
    ];

    assert_eq!(check_preconditions(22, &conditions).unwrap(), 22);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(described.load(Ordering::SeqCst), 0);
}

#[test]
fn both_failing_counts_two() {
    let err = check_preconditions(23, &[above_23(), below_23()]).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 2);
    assert_eq!(
        message,
        "Precondition violation.\n  Received: 23\n  Violated conditions: \n    [0]: Value 23 must be > 23\n    [1]: Value 23 must be < 23\n"
    );
}

#[test]
fn last_failing_reports_only_last_index() {
    let err = check_preconditions(23, &[equals_23(), below_23()]).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(!message.contains("[0]"));
    assert!(message.contains("    [1]: Value 23 must be < 23\n"));
}

#[test]
fn first_failing_reports_only_first_index() {
    let err = check_preconditions(23, &[below_23(), equals_23()]).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("    [0]: Value 23 must be < 23\n"));
    assert!(!message.contains("[1]"));
}

#[test]
fn every_predicate_runs_once_after_failures() {
    let calls = Arc::new(AtomicUsize::new(0));
    let described = Arc::new(AtomicUsize::new(0));
    let conditions = [
        counted(false, &calls, &described),
        counted(true, &calls, &described),
        counted(false, &calls, &described),
        counted(true, &calls, &described),
    ];

    let err = check_preconditions(1, &conditions).unwrap_err();
    assert_eq!(err.count(), Some(2));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(described.load(Ordering::SeqCst), 2);
}

#[test]
fn describer_error_is_reported_as_violation() {
    let c = condition_i(
        |x| *x < 23,
        |_| "nope".parse::<i32>().map(|n| n.to_string()),
    );
    let err = check_preconditions(23, &[c]).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("Fault raised whilst evaluating describer:"));
    assert!(message.contains("ParseIntError"));
    assert!(message.contains("invalid digit found in string"));
}

#[test]
fn predicate_error_skips_describer() {
    let described = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&described);
    let c = condition_i(
        |_| Err::<bool, _>(Fault::recoverable("IllegalState", "OUCH")),
        move |x| {
            seen.fetch_add(1, Ordering::SeqCst);
            format!("Value {x} must be < 23")
        },
    );

    let err = check_preconditions(23, &[c]).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("Fault raised whilst evaluating predicate:"));
    assert!(message.contains("Type: IllegalState"));
    assert!(message.contains("Message: OUCH"));
    assert_eq!(described.load(Ordering::SeqCst), 0);
}

#[test]
fn fatal_predicate_fault_propagates_as_is() {
    let later = Arc::new(AtomicUsize::new(0));
    let described = Arc::new(AtomicUsize::new(0));
    let conditions = [
        below_23(),
        condition_i(
            |_| Err::<bool, _>(FatalFault::new("OutOfMemory", "OUCH")),
            |_| "unused",
        ),
        counted(true, &later, &described),
    ];

    let err = check_preconditions(23, &conditions).unwrap_err();
    assert_eq!(err, ContractError::Fatal(FatalFault::new("OutOfMemory", "OUCH")));
    assert!(err.violation().is_none());
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[test]
fn fatal_describer_fault_propagates_as_is() {
    let c = condition_i(
        |x| *x < 23,
        |_| Err::<String, _>(Fault::fatal("StackExhausted", "OUCH")),
    );
    let err = check_preconditions(23, &[c]).unwrap_err();
    assert_eq!(
        err.fatal(),
        Some(&FatalFault::new("StackExhausted", "OUCH"))
    );
}

// ---------------------------------------------------------------------------
// Single-condition forms
// ---------------------------------------------------------------------------

#[test]
fn single_condition_passes_and_fails() {
    assert_eq!(check_precondition(22, &below_23()).unwrap(), 22);

    let err = check_precondition(23, &below_23()).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("    [0]: Value 23 must be < 23\n"));
}

#[test]
fn predicate_and_describer_form() {
    let value = check_precondition_with(22, |x| *x < 23, |x| format!("{x} too big")).unwrap();
    assert_eq!(value, 22);

    let err = check_precondition_with(23, |x| *x < 23, |x| format!("{x} too big")).unwrap_err();
    assert_eq!(err.count(), Some(1));
}

#[test]
fn predicate_error_in_with_form() {
    let described = AtomicUsize::new(0);
    let err = check_precondition_with(
        "x",
        |s| s.parse::<i32>().map(|n| n > 0),
        |_| {
            described.fetch_add(1, Ordering::SeqCst);
            "must be a positive number"
        },
    )
    .unwrap_err();

    let (message, _) = violation(&err);
    assert!(message.contains("evaluating predicate"));
    assert!(message.contains("Received: \"x\""));
    assert_eq!(described.load(Ordering::SeqCst), 0);
}

#[test]
fn precomputed_true_never_describes() {
    let described = AtomicUsize::new(0);
    let value = check_precondition_bool(23, true, |_| {
        described.fetch_add(1, Ordering::SeqCst);
        "unused"
    })
    .unwrap();
    assert_eq!(value, 23);
    assert_eq!(described.load(Ordering::SeqCst), 0);
}

#[test]
fn precomputed_false_describes_once() {
    let err = check_precondition_bool(23, false, |x| format!("Value {x} rejected")).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("[0]: Value 23 rejected"));
}

// ---------------------------------------------------------------------------
// Value-less forms
// ---------------------------------------------------------------------------

#[test]
fn message_form() {
    assert!(check_precondition_message(true, "unused").is_ok());

    let err = check_precondition_message(false, "Value must be positive").unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert_eq!(
        message,
        "Precondition violation.\n  Received: <unspecified>\n  Violated conditions: \n    [0]: Value must be positive\n"
    );
}

#[test]
fn supplier_form() {
    let supplied = AtomicUsize::new(0);
    assert!(check_precondition_supplied(true, || {
        supplied.fetch_add(1, Ordering::SeqCst);
        "unused"
    })
    .is_ok());
    assert_eq!(supplied.load(Ordering::SeqCst), 0);

    let err = check_precondition_supplied(false, || "supplied message".to_string()).unwrap_err();
    assert!(violation(&err).0.contains("[0]: supplied message"));
}

#[test]
fn supplier_error_becomes_message() {
    let err = check_precondition_supplied(false, || {
        Err::<String, _>(Fault::recoverable("Boom", "OUCH"))
    })
    .unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("evaluating describer"));
}

// ---------------------------------------------------------------------------
// Format-argument forms
// ---------------------------------------------------------------------------

#[test]
fn template_forms() {
    assert_eq!(check_precondition_v(22, true, format_args!("{}", 1)).unwrap(), 22);

    let err = check_precondition_v(23, false, format_args!("Value {} must be < {}", 23, 23))
        .unwrap_err();
    assert!(violation(&err).0.contains("[0]: Value 23 must be < 23"));

    assert!(check_precondition_message_v(true, format_args!("unused")).is_ok());
    let err = check_precondition_message_v(false, format_args!("{} != {}", 1, 2)).unwrap_err();
    let (message, _) = violation(&err);
    assert!(message.contains("Received: <unspecified>"));
    assert!(message.contains("[0]: 1 != 2"));
}

struct BrokenDisplay;

impl fmt::Display for BrokenDisplay {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn template_is_not_formatted_on_success() {
    assert!(check_precondition_message_v(true, format_args!("{}", BrokenDisplay)).is_ok());
}

#[test]
#[should_panic]
fn template_formatting_fault_propagates_directly() {
    let _ = check_precondition_message_v(false, format_args!("{}", BrokenDisplay));
}

// ---------------------------------------------------------------------------
// Scalar conditions
// ---------------------------------------------------------------------------

#[test]
fn long_conditions() {
    let conditions = [
        condition_l(|x| *x > 0, |x| format!("{x} must be positive")),
        condition_l(|x| *x < i64::MAX, |x| format!("{x} must be below max")),
    ];
    assert_eq!(check_preconditions(5_i64, &conditions).unwrap(), 5);

    let err = check_preconditions(i64::MAX, &conditions).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains(&format!("Received: {}", i64::MAX)));
}

#[test]
fn double_conditions() {
    let conditions = [
        condition_d(|x| x.is_finite(), |x| format!("{x} must be finite")),
        condition_d(|x| *x >= 0.0, |x| format!("{x} must be >= 0")),
    ];
    assert_eq!(check_preconditions(2.5, &conditions).unwrap(), 2.5);

    let err = check_preconditions(-23.0, &conditions).unwrap_err();
    let (message, count) = violation(&err);
    assert_eq!(count, 1);
    assert!(message.contains("Received: -23.0\n"));
    assert!(message.contains("[1]: -23 must be >= 0"));
}

#[test]
fn scalar_and_generic_paths_agree() {
    let scalar = check_preconditions(23, &[above_23(), below_23()]).unwrap_err();
    let generic = check_preconditions(
        23,
        &[
            condition(|x: &i32| *x > 23, |x: &i32| format!("Value {x} must be > 23")),
            condition(|x: &i32| *x < 23, |x: &i32| format!("Value {x} must be < 23")),
        ],
    )
    .unwrap_err();
    assert_eq!(scalar, generic);
}
