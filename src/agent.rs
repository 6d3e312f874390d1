use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    decay::{self, Decay},
    env::{Action, Environment, Planner, Waypoint},
    error::Error,
    exploration,
    q_table::QTable,
    schedule::Schedule,
    state::State,
};

/// Configuration for the [`LearningAgent`]
pub struct LearningAgentConfig<D: Decay> {
    /// Whether the agent maintains and follows a Q-table at all
    pub learning: bool,
    /// Starting exploration rate
    pub epsilon: f32,
    /// Learning rate
    pub alpha: f32,
    /// Decay law applied to epsilon at each trial boundary
    pub decay: D,
    /// Seed for the agent's own RNG
    pub seed: u64,
}

impl Default for LearningAgentConfig<decay::Linear> {
    fn default() -> Self {
        Self {
            learning: false,
            epsilon: 1.0,
            alpha: 0.5,
            decay: decay::Linear::default(),
            seed: 42,
        }
    }
}

/// A driving agent that learns to negotiate intersections with Q-learning
///
/// Each time step the agent reduces its observations to a [`State`], makes
/// sure the Q-table has a row for it, picks an action under the current
/// policy, hands the action to the environment, and folds the returned reward
/// back into the table. Per trial, the harness calls [`reset`](Self::reset)
/// to re-route the planner and step the epsilon/alpha schedule.
///
/// With `learning` disabled the agent is a pure random driver: the table
/// stays empty and actions are drawn uniformly.
///
/// The agent owns its Q-table, schedule, and RNG outright. Running several
/// agents means constructing several instances; nothing here is shared. A
/// fixed seed makes a run deterministic given a deterministic environment.
pub struct LearningAgent<D: Decay> {
    q_table: QTable<State, Action>,
    schedule: Schedule<D>,
    learning: bool,
    rng: StdRng,
    state: Option<State>,
    next_waypoint: Option<Waypoint>,
}

impl<D: Decay> LearningAgent<D> {
    /// Initialize a new `LearningAgent`
    ///
    /// **Panics** if `config.epsilon` or `config.alpha` is not in `[0,1]`
    pub fn new(config: LearningAgentConfig<D>) -> Self {
        Self {
            q_table: QTable::new(),
            schedule: Schedule::new(config.decay, config.epsilon, config.alpha),
            learning: config.learning,
            rng: StdRng::seed_from_u64(config.seed),
            state: None,
            next_waypoint: None,
        }
    }

    /// Choose an action for `state` under the current policy
    ///
    /// Non-learning agents draw uniformly from the valid actions. Learning
    /// agents break argmax ties fairly, then sample epsilon-greedily over the
    /// full action set.
    fn choose_action(&mut self, state: State, actions: &[Action]) -> Result<Action, Error> {
        if !self.learning {
            return Ok(exploration::uniform(&mut self.rng, actions));
        }

        let best_set = self.q_table.argmax_set(&state)?;
        debug!(
            "Q[{:?}] = {:?}, argmax set = {:?}",
            state,
            self.q_table.entries().get(&state),
            best_set,
        );

        let epsilon = self.schedule.epsilon();
        let action = exploration::epsilon_greedy(&mut self.rng, epsilon, &best_set, actions);
        debug!("chose {:?} at epsilon {}", action, epsilon);
        Ok(action)
    }

    /// Fold an observed reward into the estimate for `(state, action)`
    ///
    /// One-step, no-discount update:
    /// Q\[s\]\[a\] ← (1 - α) · Q\[s\]\[a\] + α · reward.
    /// The next state's maximum is deliberately ignored; this is a reactive
    /// learner with the discount factor fixed at 0.
    fn learn(&mut self, state: State, action: Action, reward: f32) -> Result<(), Error> {
        if !self.learning {
            return Ok(());
        }

        let alpha = self.schedule.alpha();
        let q = self.q_table.value(&state, &action)?;
        self.q_table
            .set(&state, &action, (1.0 - alpha) * q + alpha * reward)
    }

    /// Run one full step: observe, choose, act, learn
    ///
    /// Fails only on a broken call-ordering contract inside the agent itself;
    /// the trial loop should treat any error as fatal for the trial.
    pub fn update<E, P>(&mut self, env: &mut E, planner: &mut P) -> Result<(), Error>
    where
        E: Environment,
        P: Planner,
    {
        let waypoint = planner.next_waypoint();
        let intersection = env.sense();
        // the deadline stays out of the state key; it reaches the agent
        // through reward shaping only
        debug!("deadline: {}", env.deadline());

        let state = State::observe(waypoint, &intersection);
        let actions = env.valid_actions();
        if self.learning {
            self.q_table.ensure(state, &actions);
        }

        let action = self.choose_action(state, &actions)?;
        self.state = Some(state);
        self.next_waypoint = Some(waypoint);

        let reward = env.act(action);
        self.learn(state, action, reward)
    }

    /// Per-trial hook, called by the harness before each trial runs
    ///
    /// Re-routing is delegated to the planner, then the schedule updates
    /// epsilon and alpha. The harness decides when testing begins by watching
    /// [`epsilon`](Self::epsilon) against its own tolerance and passing
    /// `testing` accordingly.
    pub fn reset<P: Planner>(
        &mut self,
        planner: &mut P,
        destination: Option<P::Destination>,
        testing: bool,
    ) {
        planner.route_to(destination);
        self.schedule.advance(testing);
    }

    /// Current exploration rate
    pub fn epsilon(&self) -> f32 {
        self.schedule.epsilon()
    }

    /// Current learning rate
    pub fn alpha(&self) -> f32 {
        self.schedule.alpha()
    }

    /// Trial counter the decay law will see next
    pub fn trial(&self) -> u32 {
        self.schedule.trial()
    }

    /// Whether this agent updates its Q-table
    pub fn is_learning(&self) -> bool {
        self.learning
    }

    /// The agent's action-value table
    pub fn q_table(&self) -> &QTable<State, Action> {
        &self.q_table
    }

    /// The state observed on the most recent step
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// The waypoint followed on the most recent step
    pub fn next_waypoint(&self) -> Option<Waypoint> {
        self.next_waypoint
    }
}
