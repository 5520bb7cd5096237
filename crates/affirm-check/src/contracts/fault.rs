//! Faults raised by predicate and describer callbacks.
//!
//! A callback signals trouble by returning `Err(Fault)`. Faults come in two
//! tiers:
//! - [`Fault::Recoverable`]: converted to diagnostic text and reported as a
//!   violation like any failing condition.
//! - [`Fault::Fatal`]: handed straight back to the caller of the check as
//!   [`ContractError::Fatal`](super::ContractError::Fatal). Nothing is
//!   aggregated and no further conditions run.
//!
//! Any `std::error::Error` converts into a recoverable fault, so `?` works
//! inside fallible callbacks. [`Fault`] and [`FatalFault`] do not implement
//! `std::error::Error`; that keeps `?` from ever turning a fatal fault into a
//! recoverable one.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

/// An error returned by a contract callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    Recoverable(RecoverableFault),
    Fatal(FatalFault),
}

impl Fault {
    /// A recoverable fault with an explicit type name and message.
    pub fn recoverable(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Fault::Recoverable(RecoverableFault::new(type_name, message))
    }

    /// A fatal fault with an explicit kind and message.
    pub fn fatal(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Fault::Fatal(FatalFault::new(kind, message))
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Fault::Fatal(_))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Recoverable(r) => fmt::Display::fmt(r, f),
            Fault::Fatal(x) => fmt::Display::fmt(x, f),
        }
    }
}

impl<E> From<E> for Fault
where
    E: Error + 'static,
{
    fn from(err: E) -> Self {
        Fault::Recoverable(RecoverableFault::from_error(&err))
    }
}

impl From<FatalFault> for Fault {
    fn from(fault: FatalFault) -> Self {
        Fault::Fatal(fault)
    }
}

impl From<RecoverableFault> for Fault {
    fn from(fault: RecoverableFault) -> Self {
        Fault::Recoverable(fault)
    }
}

/// An ordinary callback failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverableFault {
    type_name: String,
    message: String,
    trace: Vec<String>,
}

impl RecoverableFault {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            trace: capture_backtrace(),
        }
    }

    /// Captures the error's type name, message, `source()` chain and, when
    /// `RUST_BACKTRACE` enables it, a backtrace.
    pub fn from_error<E: Error + 'static>(err: &E) -> Self {
        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        trace.extend(capture_backtrace());

        Self {
            type_name: std::any::type_name::<E>().to_string(),
            message: err.to_string(),
            trace,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace lines: the cause chain first, then backtrace frames.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
}

impl fmt::Display for RecoverableFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name, self.message)
    }
}

fn capture_backtrace() -> Vec<String> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => backtrace
            .to_string()
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// An unrecoverable fault, such as resource exhaustion detected by a
/// callback. Propagated unchanged through every layer of a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FatalFault {
    kind: String,
    message: String,
}

impl FatalFault {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FatalFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
