//! Condition values: a predicate paired with a describer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::fault::Fault;

/// Type-erased predicate stored in a [`Condition`].
pub type PredicateFn<T> = dyn Fn(&T) -> Result<bool, Fault> + Send + Sync;

/// Type-erased describer stored in a [`Condition`].
pub type DescriberFn<T> = dyn Fn(&T) -> Result<String, Fault> + Send + Sync;

/// Return types accepted from predicate callbacks.
///
/// Implemented for `bool` and for `Result<bool, E>` where `E: Into<Fault>`,
/// so a predicate can be infallible or use `?` on any standard error.
pub trait PredicateOutput {
    fn into_verdict(self) -> Result<bool, Fault>;
}

impl PredicateOutput for bool {
    fn into_verdict(self) -> Result<bool, Fault> {
        Ok(self)
    }
}

impl<E: Into<Fault>> PredicateOutput for Result<bool, E> {
    fn into_verdict(self) -> Result<bool, Fault> {
        self.map_err(Into::into)
    }
}

/// Return types accepted from describer and message-supplier callbacks.
pub trait DescriberOutput {
    fn into_description(self) -> Result<String, Fault>;
}

impl DescriberOutput for String {
    fn into_description(self) -> Result<String, Fault> {
        Ok(self)
    }
}

impl DescriberOutput for &'static str {
    fn into_description(self) -> Result<String, Fault> {
        Ok(self.to_string())
    }
}

impl<E: Into<Fault>> DescriberOutput for Result<String, E> {
    fn into_description(self) -> Result<String, Fault> {
        self.map_err(Into::into)
    }
}

/// A checkable rule: a predicate that must hold for a value, and a
/// describer producing failure text for that value.
///
/// The describer only runs when the predicate fails. Conditions are
/// immutable and cheap to clone. Two conditions are equal when they share
/// both callbacks.
pub struct Condition<T> {
    predicate: Arc<PredicateFn<T>>,
    describer: Arc<DescriberFn<T>>,
}

/// A condition over `i32` values.
pub type IntCondition = Condition<i32>;

/// A condition over `i64` values.
pub type LongCondition = Condition<i64>;

/// A condition over `f64` values.
pub type DoubleCondition = Condition<f64>;

impl<T> Condition<T> {
    /// Builds a condition from a predicate and a describer.
    pub fn new<P, R, D, S>(predicate: P, describer: D) -> Self
    where
        P: Fn(&T) -> R + Send + Sync + 'static,
        R: PredicateOutput,
        D: Fn(&T) -> S + Send + Sync + 'static,
        S: DescriberOutput,
    {
        Self {
            predicate: Arc::new(move |value: &T| predicate(value).into_verdict()),
            describer: Arc::new(move |value: &T| describer(value).into_description()),
        }
    }

    /// Builds a condition from already shared callbacks.
    pub fn from_parts(predicate: Arc<PredicateFn<T>>, describer: Arc<DescriberFn<T>>) -> Self {
        Self {
            predicate,
            describer,
        }
    }

    pub fn predicate(&self) -> &Arc<PredicateFn<T>> {
        &self.predicate
    }

    pub fn describer(&self) -> &Arc<DescriberFn<T>> {
        &self.describer
    }

    fn addresses(&self) -> (*const (), *const ()) {
        (
            Arc::as_ptr(&self.predicate) as *const (),
            Arc::as_ptr(&self.describer) as *const (),
        )
    }
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            describer: Arc::clone(&self.describer),
        }
    }
}

impl<T> PartialEq for Condition<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addresses() == other.addresses()
    }
}

impl<T> Eq for Condition<T> {}

impl<T> Hash for Condition<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addresses().hash(state);
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (predicate, describer) = self.addresses();
        f.debug_struct("Condition")
            .field("predicate", &predicate)
            .field("describer", &describer)
            .finish()
    }
}

/// Shorthand for [`Condition::new`].
pub fn condition<T, P, R, D, S>(predicate: P, describer: D) -> Condition<T>
where
    P: Fn(&T) -> R + Send + Sync + 'static,
    R: PredicateOutput,
    D: Fn(&T) -> S + Send + Sync + 'static,
    S: DescriberOutput,
{
    Condition::new(predicate, describer)
}

/// Builds an [`IntCondition`].
pub fn condition_i<P, R, D, S>(predicate: P, describer: D) -> IntCondition
where
    P: Fn(&i32) -> R + Send + Sync + 'static,
    R: PredicateOutput,
    D: Fn(&i32) -> S + Send + Sync + 'static,
    S: DescriberOutput,
{
    Condition::new(predicate, describer)
}

/// Builds a [`LongCondition`].
pub fn condition_l<P, R, D, S>(predicate: P, describer: D) -> LongCondition
where
    P: Fn(&i64) -> R + Send + Sync + 'static,
    R: PredicateOutput,
    D: Fn(&i64) -> S + Send + Sync + 'static,
    S: DescriberOutput,
{
    Condition::new(predicate, describer)
}

/// Builds a [`DoubleCondition`].
pub fn condition_d<P, R, D, S>(predicate: P, describer: D) -> DoubleCondition
where
    P: Fn(&f64) -> R + Send + Sync + 'static,
    R: PredicateOutput,
    D: Fn(&f64) -> S + Send + Sync + 'static,
    S: DescriberOutput,
{
    Condition::new(predicate, describer)
}
