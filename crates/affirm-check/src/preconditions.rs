//! Precondition checks, made on entry to a routine.
//!
//! Every function returns the checked value unchanged on success, so checks
//! can sit inline in argument or assignment position:
//!
//! ```
//! use affirm_check::preconditions::check_precondition_with;
//!
//! fn reciprocal(x: f64) -> Result<f64, affirm_check::ContractError> {
//!     let x = check_precondition_with(x, |x| *x != 0.0, |x| format!("{x} must be non-zero"))?;
//!     Ok(1.0 / x)
//! }
//!
//! assert_eq!(reciprocal(4.0).unwrap(), 0.25);
//! assert!(reciprocal(0.0).is_err());
//! ```

use std::fmt;

use crate::contracts::check::Checker;
use crate::contracts::condition::{Condition, DescriberOutput, PredicateOutput};
use crate::contracts::ContractError;

const CHECKER: Checker = Checker::precondition();

/// Evaluates all `conditions` against `value`.
pub fn check_preconditions<T: fmt::Debug>(
    value: T,
    conditions: &[Condition<T>],
) -> Result<T, ContractError> {
    CHECKER.check_all(value, conditions)
}

/// Evaluates one condition against `value`.
pub fn check_precondition<T: fmt::Debug>(
    value: T,
    condition: &Condition<T>,
) -> Result<T, ContractError> {
    CHECKER.check(value, condition)
}

/// Evaluates `predicate` against `value`, describing a failure with
/// `describer`.
pub fn check_precondition_with<T, P, R, D, S>(
    value: T,
    predicate: P,
    describer: D,
) -> Result<T, ContractError>
where
    T: fmt::Debug,
    P: FnOnce(&T) -> R,
    R: PredicateOutput,
    D: FnOnce(&T) -> S,
    S: DescriberOutput,
{
    CHECKER.check_with(value, predicate, describer)
}

/// Checks an already evaluated `condition` for `value`.
pub fn check_precondition_bool<T, D, S>(
    value: T,
    condition: bool,
    describer: D,
) -> Result<T, ContractError>
where
    T: fmt::Debug,
    D: FnOnce(&T) -> S,
    S: DescriberOutput,
{
    CHECKER.check_bool(value, condition, describer)
}

/// Checks `condition` with no associated value.
pub fn check_precondition_message(condition: bool, message: &str) -> Result<(), ContractError> {
    CHECKER.check_message(condition, message)
}

/// Checks `condition` with no associated value; `message` runs only on
/// failure.
pub fn check_precondition_supplied<F, S>(condition: bool, message: F) -> Result<(), ContractError>
where
    F: FnOnce() -> S,
    S: DescriberOutput,
{
    CHECKER.check_supplied(condition, message)
}

/// Checks `condition` for `value`, formatting `args` as the message on
/// failure.
pub fn check_precondition_v<T: fmt::Debug>(
    value: T,
    condition: bool,
    args: fmt::Arguments<'_>,
) -> Result<T, ContractError> {
    CHECKER.check_v(value, condition, args)
}

/// Checks `condition` with no associated value, formatting `args` as the
/// message on failure.
pub fn check_precondition_message_v(
    condition: bool,
    args: fmt::Arguments<'_>,
) -> Result<(), ContractError> {
    CHECKER.check_message_v(condition, args)
}
