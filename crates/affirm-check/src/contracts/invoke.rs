//! Safe invocation of user callbacks.
//!
//! Every predicate, describer and message supplier runs through [`invoke`],
//! which sorts the outcome into success, a recoverable fault (rendered as
//! diagnostic text) or a fatal fault (returned as `Err`, to be propagated
//! with `?` past every layer above).
//!
//! Panics are not caught here; a panicking callback unwinds through the
//! engine untouched.

use std::fmt::Write as _;

use crate::config::CheckConfig;

use super::fault::{FatalFault, Fault, RecoverableFault};

/// Which kind of callback is being invoked. Names the callback in fault
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Predicate,
    Describer,
}

impl Callback {
    pub fn label(self) -> &'static str {
        match self {
            Callback::Predicate => "predicate",
            Callback::Describer => "describer",
        }
    }
}

/// Outcome of a callback that did not raise a fatal fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation<R> {
    /// The callback returned normally.
    Returned(R),
    /// The callback raised a recoverable fault; holds its diagnostic text.
    Faulted(String),
}

/// Outcome of testing a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Holds,
    Fails,
    /// The predicate faulted recoverably. The describer must not be invoked;
    /// the diagnostic text is the violation message.
    Faulted(String),
}

/// Runs `call` exactly once and classifies the result.
pub fn invoke<R>(
    callback: Callback,
    call: impl FnOnce() -> Result<R, Fault>,
    config: &CheckConfig,
) -> Result<Invocation<R>, FatalFault> {
    match call() {
        Ok(value) => Ok(Invocation::Returned(value)),
        Err(Fault::Recoverable(fault)) => {
            tracing::debug!(
                callback = callback.label(),
                fault = %fault,
                "recoverable fault raised by contract callback"
            );
            Ok(Invocation::Faulted(diagnostic(callback, &fault, config)))
        }
        Err(Fault::Fatal(fault)) => {
            tracing::warn!(
                callback = callback.label(),
                fault = %fault,
                "fatal fault raised by contract callback"
            );
            Err(fault)
        }
    }
}

/// Tests a predicate against a value.
pub fn test_predicate<T>(
    predicate: impl FnOnce(&T) -> Result<bool, Fault>,
    value: &T,
    config: &CheckConfig,
) -> Result<Verdict, FatalFault> {
    Ok(
        match invoke(Callback::Predicate, || predicate(value), config)? {
            Invocation::Returned(true) => Verdict::Holds,
            Invocation::Returned(false) => Verdict::Fails,
            Invocation::Faulted(text) => Verdict::Faulted(text),
        },
    )
}

/// Describes a failing value. A recoverable describer fault yields the
/// fault's diagnostic text in place of the description.
pub fn describe<T>(
    describer: impl FnOnce(&T) -> Result<String, Fault>,
    value: &T,
    config: &CheckConfig,
) -> Result<String, FatalFault> {
    supply(|| describer(value), config)
}

/// Calls a value-less message supplier with describer semantics.
pub fn supply(
    supplier: impl FnOnce() -> Result<String, Fault>,
    config: &CheckConfig,
) -> Result<String, FatalFault> {
    Ok(match invoke(Callback::Describer, supplier, config)? {
        Invocation::Returned(text) | Invocation::Faulted(text) => text,
    })
}

/// Renders a recoverable fault: a header naming the callback, then the
/// fault type, message and trace, each on its own line.
pub fn diagnostic(callback: Callback, fault: &RecoverableFault, config: &CheckConfig) -> String {
    let sep = config.line_separator.as_str();
    let mut out = String::with_capacity(128);

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "Fault raised whilst evaluating {}:{sep}      Type: {}{sep}      Message: {}",
        callback.label(),
        fault.type_name(),
        fault.message(),
    );

    if config.include_fault_trace && !fault.trace().is_empty() {
        let _ = write!(out, "{sep}      Trace:");
        for line in fault.trace() {
            let _ = write!(out, "{sep}        {}", line.trim_start());
        }
    }

    out
}
