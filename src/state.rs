use crate::env::{Action, Intersection, Light, Waypoint};

/// A discretized summary of the cab's situation, used as the Q-table key
///
/// Two observations that reduce to the same `State` are identical for
/// learning purposes; this is the agent's only generalization mechanism. The
/// remaining deadline and the vehicle on the right are deliberately left out
/// to keep the state space small; the deadline reaches the agent through
/// reward shaping only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct State {
    pub waypoint: Waypoint,
    pub light: Light,
    pub left: Option<Action>,
    pub oncoming: Option<Action>,
}

impl State {
    /// Reduce raw observations to a state key
    ///
    /// Referentially transparent: identical inputs always produce the same
    /// state, which is what lets the Q-table generalize across visits.
    pub fn observe(waypoint: Waypoint, intersection: &Intersection) -> Self {
        Self {
            waypoint,
            light: intersection.light,
            left: intersection.left,
            oncoming: intersection.oncoming,
        }
    }
}
