//! Environment.
use super::{BoxSpace, DiscreteSpace, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP, with a discrete action space.
pub trait Env {
    /// Observation of the environment.
    type Obs: Obs;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Starts a new episode and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performes an environment step with the action of the given index.
    ///
    /// An action outside of [`Env::action_space`] is an error.
    fn step(&mut self, act: usize) -> Result<Step<Self>>
    where
        Self: Sized;

    /// The set of actions.
    fn action_space(&self) -> &DiscreteSpace;

    /// The set of observations.
    fn observation_space(&self) -> &BoxSpace;
}
