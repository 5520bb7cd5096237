//! Violation report formatting.
//!
//! ```text
//! Precondition violation.
//!   Received: 23
//!   Violated conditions:
//!     [1]: Value 23 must be < 23
//! ```

use std::fmt::{self, Write as _};

use crate::config::CheckConfig;

use super::violations::Violations;
use super::{ContractKind, ContractViolation};

/// Stands in for the received value in value-less checks.
pub struct Unspecified;

impl fmt::Debug for Unspecified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<unspecified>")
    }
}

/// Formats the report for `violations` and wraps it in a [`ContractViolation`].
pub fn build(
    kind: ContractKind,
    received: &dyn fmt::Debug,
    violations: &Violations,
    config: &CheckConfig,
) -> ContractViolation {
    let sep = config.line_separator.as_str();
    let mut message = String::with_capacity(128);

    // Writing into a String cannot fail.
    let _ = write!(
        message,
        "{kind} violation.{sep}  Received: {received:?}{sep}  Violated conditions: {sep}"
    );
    for (index, text) in violations.iter() {
        let _ = write!(message, "    [{index}]: {text}{sep}");
    }

    tracing::debug!(kind = %kind, count = violations.count(), "contract violated");

    ContractViolation::new(kind, message, violations.count())
}
