//! The violation collector: evaluate every condition, record each failure.

use crate::config::CheckConfig;

use super::condition::Condition;
use super::fault::FatalFault;
use super::invoke::{describe, test_predicate, Verdict};

/// Sparse, index-ordered failure messages from one check.
///
/// Slot `i` holds a message only if condition `i` failed. `count` always
/// equals the number of occupied slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    messages: Box<[Option<String>]>,
    count: usize,
}

impl Violations {
    fn with_capacity(conditions: usize) -> Self {
        Self {
            messages: vec![None; conditions].into_boxed_slice(),
            count: 0,
        }
    }

    /// A set holding exactly one violation at index 0.
    pub fn single(message: String) -> Self {
        Self {
            messages: vec![Some(message)].into_boxed_slice(),
            count: 1,
        }
    }

    fn record(&mut self, index: usize, message: String) {
        let slot = &mut self.messages[index];
        debug_assert!(slot.is_none(), "condition {index} recorded twice");
        *slot = Some(message);
        self.count += 1;
    }

    /// Number of failed conditions.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of conditions the set was sized for.
    pub fn capacity(&self) -> usize {
        self.messages.len()
    }

    /// Message recorded for condition `index`, if it failed.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.messages.get(index)?.as_deref()
    }

    /// `(index, message)` for every failed condition, ascending by index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.messages
            .iter()
            .enumerate()
            .filter_map(|(index, message)| message.as_deref().map(|m| (index, m)))
    }
}

/// Evaluates every condition against `value`, in order, without
/// short-circuiting.
///
/// Returns `Ok(None)` when every condition holds. Storage is allocated on
/// the first failure, sized to `conditions.len()`. A fatal fault from any
/// predicate or describer aborts the walk and is returned as `Err`; the
/// partial set is dropped.
pub fn collect<T>(
    value: &T,
    conditions: &[Condition<T>],
    config: &CheckConfig,
) -> Result<Option<Violations>, FatalFault> {
    let mut violations: Option<Violations> = None;

    for (index, condition) in conditions.iter().enumerate() {
        let message = match test_predicate(|v| (condition.predicate())(v), value, config)? {
            Verdict::Holds => continue,
            Verdict::Fails => describe(|v| (condition.describer())(v), value, config)?,
            Verdict::Faulted(text) => text,
        };

        violations
            .get_or_insert_with(|| Violations::with_capacity(conditions.len()))
            .record(index, message);
    }

    Ok(violations)
}
