/// An action the cab can submit at an intersection
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    /// Wait at the intersection
    Hold,
    Forward,
    Left,
    Right,
}

/// Traffic light color at the cab's intersection
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Light {
    Red,
    Green,
}

/// The heading recommended by the route planner
///
/// A waypoint is never `Hold`, since the planner always points somewhere
/// while the cab is en route.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Waypoint {
    Forward,
    Left,
    Right,
}

/// Sensed inputs at the current intersection
///
/// `None` on an approach means no vehicle there; otherwise the value is the
/// maneuver that vehicle is making. `right` is sensed by the environment but
/// never folded into the learned state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Intersection {
    pub light: Light,
    pub left: Option<Action>,
    pub oncoming: Option<Action>,
    pub right: Option<Action>,
}

/// The driving environment the agent operates in
///
/// This is the narrow slice of the traffic simulation the agent consumes:
/// intersection sensing, the remaining deadline, and action application. All
/// calls are synchronous and infallible.
pub trait Environment {
    /// Sense the intersection the cab is currently at
    fn sense(&self) -> Intersection;

    /// Remaining time steps before the deadline expires
    fn deadline(&self) -> i32;

    /// Apply an action, producing a reward
    ///
    /// Rewards may be negative (traffic violations, idling) or positive
    /// (progress toward the destination).
    fn act(&mut self, action: Action) -> f32;

    /// The full set of actions the cab may submit
    ///
    /// The returned vec should never be empty and never contain duplicates.
    fn valid_actions(&self) -> Vec<Action>;
}

/// The route planner the agent delegates navigation to
pub trait Planner {
    /// A location in the grid the planner can route to
    type Destination;

    /// Re-target the planner, letting it pick its own destination on `None`
    fn route_to(&mut self, destination: Option<Self::Destination>);

    /// The heading that makes progress toward the destination
    fn next_waypoint(&mut self) -> Waypoint;
}
