use std::{collections::HashMap, hash::Hash};

use crate::error::Error;

/// A trait for state and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
pub trait Hashable: Copy + Eq + Hash {}

impl<T> Hashable for T where T: Copy + Eq + Hash {}

// Repeated blended updates accumulate rounding drift, so argmax membership
// uses approximate equality instead of exact comparison.
const RTOL: f32 = 1e-5;
const ATOL: f32 = 1e-8;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

/// A sparse action-value table, grown lazily as states are first visited
///
/// Maps each visited state to one estimate per valid action. Unbounded and
/// append-only: entries are never evicted, and every inserted key holds a
/// complete row (no partial entries). Owned exclusively by one agent.
pub struct QTable<S, A>
where
    S: Hashable,
    A: Hashable,
{
    entries: HashMap<S, HashMap<A, f32>>,
}

impl<S, A> QTable<S, A>
where
    S: Hashable,
    A: Hashable,
{
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a zeroed entry for `state` if it has none
    ///
    /// Every action in `actions` starts at an estimate of `0.0`. Idempotent:
    /// an existing entry is left untouched.
    ///
    /// **Panics** if `actions` is empty
    pub fn ensure(&mut self, state: S, actions: &[A]) {
        assert!(!actions.is_empty(), "`actions` must not be empty");
        self.entries
            .entry(state)
            .or_insert_with(|| actions.iter().map(|&a| (a, 0.0)).collect());
    }

    /// The stored estimate for `(state, action)`
    ///
    /// Fails with [`Error::UnseenState`] if `state` was never
    /// [`ensure`](Self::ensure)d. Reads never fabricate a zero entry, so
    /// ordering bugs surface early.
    pub fn value(&self, state: &S, action: &A) -> Result<f32, Error> {
        let entry = self.entries.get(state).ok_or(Error::UnseenState)?;
        entry.get(action).copied().ok_or(Error::UnknownAction)
    }

    /// Overwrite the estimate for `(state, action)`
    ///
    /// Subject to the same ordering contract as [`value`](Self::value).
    pub fn set(&mut self, state: &S, action: &A, value: f32) -> Result<(), Error> {
        let entry = self.entries.get_mut(state).ok_or(Error::UnseenState)?;
        let slot = entry.get_mut(action).ok_or(Error::UnknownAction)?;
        *slot = value;
        Ok(())
    }

    /// The maximum estimate across all actions for `state`
    pub fn max_value(&self, state: &S) -> Result<f32, Error> {
        let entry = self.entries.get(state).ok_or(Error::UnseenState)?;
        Ok(entry.values().copied().fold(f32::NEG_INFINITY, f32::max))
    }

    /// All actions whose estimate ties the maximum for `state`, within tolerance
    pub fn argmax_set(&self, state: &S) -> Result<Vec<A>, Error> {
        let max = self.max_value(state)?;
        let entry = &self.entries[state];
        let set = entry
            .iter()
            .filter(|&(_, &v)| approx_eq(v, max))
            .map(|(&a, _)| a)
            .collect::<Vec<_>>();
        assert!(!set.is_empty(), "every entry holds at least one action");
        Ok(set)
    }

    /// Whether `state` has an entry
    pub fn contains(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    /// Number of states visited so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A view of the full table, for harness-side introspection
    pub fn entries(&self) -> &HashMap<S, HashMap<A, f32>> {
        &self.entries
    }
}

impl<S, A> Default for QTable<S, A>
where
    S: Hashable,
    A: Hashable,
{
    fn default() -> Self {
        Self::new()
    }
}
