//! Design-by-contract runtime assertions.
//!
//! A check takes a value plus one or more [`Condition`]s, evaluates every
//! condition (never short-circuiting), and either hands the value back
//! unchanged or returns a single [`ContractViolation`] describing each
//! condition that failed.
//!
//! The [`preconditions`], [`postconditions`] and [`invariants`] modules are
//! thin facades over one engine, [`Checker`], which is parameterised by the
//! [`ContractKind`] it reports.
//!
//! ```
//! use affirm_check::preconditions::check_preconditions;
//! use affirm_check::Condition;
//!
//! let conditions = [
//!     Condition::new(|x: &i32| *x > 0, |x: &i32| format!("{x} must be positive")),
//!     Condition::new(|x: &i32| *x < 100, |x: &i32| format!("{x} must be < 100")),
//! ];
//!
//! assert_eq!(check_preconditions(42, &conditions).unwrap(), 42);
//!
//! let err = check_preconditions(-1, &conditions).unwrap_err();
//! assert_eq!(err.count(), Some(1));
//! ```

pub mod config;
pub mod contracts;
pub mod invariants;
pub mod postconditions;
pub mod preconditions;

// Re-export commonly used types
pub use config::{CheckConfig, LineSeparator};
pub use contracts::check::Checker;
pub use contracts::condition::{
    condition, condition_d, condition_i, condition_l, Condition, DescriberOutput,
    DoubleCondition, IntCondition, LongCondition, PredicateOutput,
};
pub use contracts::fault::{FatalFault, Fault, RecoverableFault};
pub use contracts::violations::Violations;
pub use contracts::{ContractError, ContractKind, ContractViolation};
