/// The Q-learning driving agent
pub mod agent;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Driving environment and route planner interfaces
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// The action-value table
pub mod q_table;

/// Per-trial hyperparameter scheduling
pub mod schedule;

/// State abstraction
pub mod state;

mod util;
