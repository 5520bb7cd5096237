//! Invariant checks for internal consistency points.
//!
//! Same call shapes as [`preconditions`](crate::preconditions); failures are
//! reported as [`ContractKind::Invariant`](crate::ContractKind::Invariant).

use std::fmt;

use crate::contracts::check::Checker;
use crate::contracts::condition::{Condition, DescriberOutput, PredicateOutput};
use crate::contracts::ContractError;

const CHECKER: Checker = Checker::invariant();

/// Evaluates all `conditions` against `value`.
pub fn check_invariants<T: fmt::Debug>(
    value: T,
    conditions: &[Condition<T>],
) -> Result<T, ContractError> {
    CHECKER.check_all(value, conditions)
}

/// Evaluates one condition against `value`.
pub fn check_invariant<T: fmt::Debug>(
    value: T,
    condition: &Condition<T>,
) -> Result<T, ContractError> {
    CHECKER.check(value, condition)
}

pub fn check_invariant_with<T, P, R, D, S>(
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

pub fn check_invariant_bool<T, D, S>(
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

pub fn check_invariant_message(condition: bool, message: &str) -> Result<(), ContractError> {
    CHECKER.check_message(condition, message)
}

pub fn check_invariant_supplied<F, S>(condition: bool, message: F) -> Result<(), ContractError>
where
    F: FnOnce() -> S,
    S: DescriberOutput,
{
    CHECKER.check_supplied(condition, message)
}

/// Formats `args` into the violation message when `condition` is false.
pub fn check_invariant_v<T: fmt::Debug>(
    value: T,
    condition: bool,
    args: fmt::Arguments<'_>,
) -> Result<T, ContractError> {
    CHECKER.check_v(value, condition, args)
}

pub fn check_invariant_message_v(
    condition: bool,
    args: fmt::Arguments<'_>,
) -> Result<(), ContractError> {
    CHECKER.check_message_v(condition, args)
}
