//! Contract types for runtime precondition, postcondition and invariant checks.
//!
//! Conditions are evaluated by the [`check::Checker`] engine. Every condition
//! is evaluated, failures are gathered into a [`violations::Violations`] set,
//! and a non-empty set becomes one [`ContractViolation`] with a formatted
//! report.

pub mod check;
pub mod condition;
pub mod fault;
pub mod invoke;
pub mod report;
pub mod violations;

use std::fmt;

use serde::{Deserialize, Serialize};

use self::fault::FatalFault;

/// The kind of contract that was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// A precondition checked on entry to a routine.
    Precondition,
    /// A postcondition checked on exit from a routine.
    Postcondition,
    /// An internal consistency check.
    Invariant,
}

impl ContractKind {
    /// Category name used as the report header.
    pub fn label(self) -> &'static str {
        match self {
            ContractKind::Precondition => "Precondition",
            ContractKind::Postcondition => "Postcondition",
            ContractKind::Invariant => "Invariant",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A structured contract violation report.
///
/// Built once, when a check finds at least one failing condition. The
/// message lists every violated condition index with its description; the
/// count is the number of conditions that failed, never the number checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ContractViolation {
    kind: ContractKind,
    message: String,
    count: usize,
}

impl ContractViolation {
    pub(crate) fn new(kind: ContractKind, message: String, count: usize) -> Self {
        debug_assert!(count >= 1, "a violation report needs at least one failure");
        Self {
            kind,
            message,
            count,
        }
    }

    /// What kind of contract was violated.
    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    /// The full multi-line report.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of conditions that failed.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Error returned by every check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// One or more conditions failed.
    #[error(transparent)]
    Violation(#[from] ContractViolation),

    /// A callback raised a fatal fault. No report was built and any
    /// remaining conditions were skipped.
    #[error("fatal fault raised by contract callback: {0}")]
    Fatal(FatalFault),
}

impl From<FatalFault> for ContractError {
    fn from(fault: FatalFault) -> Self {
        ContractError::Fatal(fault)
    }
}

impl ContractError {
    pub fn violation(&self) -> Option<&ContractViolation> {
        match self {
            ContractError::Violation(v) => Some(v),
            ContractError::Fatal(_) => None,
        }
    }

    pub fn fatal(&self) -> Option<&FatalFault> {
        match self {
            ContractError::Fatal(f) => Some(f),
            ContractError::Violation(_) => None,
        }
    }

    pub fn kind(&self) -> Option<ContractKind> {
        self.violation().map(ContractViolation::kind)
    }

    pub fn count(&self) -> Option<usize> {
        self.violation().map(ContractViolation::count)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ContractError::Fatal(_))
    }
}
