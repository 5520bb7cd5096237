//! The contract-checking engine.
//!
//! [`Checker`] implements every call shape once, parameterised by the
//! [`ContractKind`] it reports. The precondition, postcondition and invariant
//! facades are thin wrappers over a const `Checker` of their kind.

use std::fmt;

use crate::config::CheckConfig;

use super::condition::{Condition, DescriberOutput, PredicateOutput};
use super::invoke::{describe, supply, test_predicate, Verdict};
use super::report::{self, Unspecified};
use super::violations::{self, Violations};
use super::{ContractError, ContractKind};

/// Evaluates conditions and reports failures as one kind of contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checker {
    kind: ContractKind,
    config: CheckConfig,
}

impl Checker {
    pub const fn new(kind: ContractKind) -> Self {
        Self {
            kind,
            config: CheckConfig::DEFAULT,
        }
    }

    pub const fn precondition() -> Self {
        Self::new(ContractKind::Precondition)
    }

    pub const fn postcondition() -> Self {
        Self::new(ContractKind::Postcondition)
    }

    pub const fn invariant() -> Self {
        Self::new(ContractKind::Invariant)
    }

    pub const fn with_config(self, config: CheckConfig) -> Self {
        Self {
            kind: self.kind,
            config,
        }
    }

    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Evaluates every condition against `value`. Returns `value` if all
    /// hold, otherwise one violation listing each failed condition.
    pub fn check_all<T: fmt::Debug>(
        &self,
        value: T,
        conditions: &[Condition<T>],
    ) -> Result<T, ContractError> {
        match violations::collect(&value, conditions, &self.config)? {
            None => Ok(value),
            Some(found) => Err(self.fail(&value, &found)),
        }
    }

    /// Evaluates a single condition.
    pub fn check<T: fmt::Debug>(
        &self,
        value: T,
        condition: &Condition<T>,
    ) -> Result<T, ContractError> {
        self.check_with(
            value,
            |v: &T| (condition.predicate())(v),
            |v: &T| (condition.describer())(v),
        )
    }

    /// Evaluates `predicate`; on failure `describer` supplies the message.
    /// A predicate fault is reported without calling the describer.
    pub fn check_with<T, P, R, D, S>(
        &self,
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
        match test_predicate(|v| predicate(v).into_verdict(), &value, &self.config)? {
            Verdict::Holds => Ok(value),
            Verdict::Fails => self.check_bool(value, false, describer),
            Verdict::Faulted(text) => Err(self.fail(&value, &Violations::single(text))),
        }
    }

    /// Checks a condition the caller has already evaluated.
    ///
    /// `describer` is only called when `condition` is false.
    pub fn check_bool<T, D, S>(
        &self,
        value: T,
        condition: bool,
        describer: D,
    ) -> Result<T, ContractError>
    where
        T: fmt::Debug,
        D: FnOnce(&T) -> S,
        S: DescriberOutput,
    {
        if condition {
            return Ok(value);
        }
        let message = describe(|v| describer(v).into_description(), &value, &self.config)?;
        Err(self.fail(&value, &Violations::single(message)))
    }

    /// Value-less check with a fixed message.
    pub fn check_message(&self, condition: bool, message: &str) -> Result<(), ContractError> {
        if condition {
            return Ok(());
        }
        Err(self.fail(&Unspecified, &Violations::single(message.to_string())))
    }

    /// Value-less check whose message is produced by `supplier` on failure.
    pub fn check_supplied<F, S>(&self, condition: bool, supplier: F) -> Result<(), ContractError>
    where
        F: FnOnce() -> S,
        S: DescriberOutput,
    {
        if condition {
            return Ok(());
        }
        let message = supply(|| supplier().into_description(), &self.config)?;
        Err(self.fail(&Unspecified, &Violations::single(message)))
    }

    /// Checks a precomputed condition; on failure the message is formatted
    /// from `args`.
    ///
    /// Formatting is not guarded: a `Display` impl that returns an error
    /// makes formatting panic, and that panic reaches the caller directly.
    pub fn check_v<T: fmt::Debug>(
        &self,
        value: T,
        condition: bool,
        args: fmt::Arguments<'_>,
    ) -> Result<T, ContractError> {
        if condition {
            return Ok(value);
        }
        Err(self.fail(&value, &Violations::single(args.to_string())))
    }

    /// Value-less form of [`Checker::check_v`].
    pub fn check_message_v(
        &self,
        condition: bool,
        args: fmt::Arguments<'_>,
    ) -> Result<(), ContractError> {
        self.check_v(Unspecified, condition, args).map(drop)
    }

    fn fail(&self, received: &dyn fmt::Debug, violations: &Violations) -> ContractError {
        ContractError::Violation(report::build(self.kind, received, violations, &self.config))
    }
}
