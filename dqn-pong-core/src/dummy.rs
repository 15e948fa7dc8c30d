//! Deterministic environment and action-value function used in tests.
use crate::{ActionValue, BoxSpace, DiscreteSpace, Env, Obs, Step};
use anyhow::{ensure, Result};

/// Dummy observation, the number of steps taken in the current episode.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyObs(pub i64);

impl Obs for DummyObs {}

/// An environment with scripted episode lengths.
///
/// The reward of a step is the index of the action taken. Episode `i` ends
/// after `episode_lengths[i % episode_lengths.len()]` steps.
pub struct DummyEnv {
    episode_lengths: Vec<usize>,
    episode: usize,
    t: usize,
    action_space: DiscreteSpace,
    observation_space: BoxSpace,

    /// Actions taken so far.
    pub actions: Vec<usize>,

    /// Number of calls to [`Env::reset`].
    pub n_resets: usize,
}

impl DummyEnv {
    /// Creates the environment.
    pub fn new(episode_lengths: Vec<usize>, n_actions: usize) -> Result<Self> {
        ensure!(!episode_lengths.is_empty(), "No episode lengths");
        Ok(Self {
            episode_lengths,
            episode: 0,
            t: 0,
            action_space: DiscreteSpace::new(n_actions)?,
            observation_space: BoxSpace::new([1], 0.0, f32::MAX),
            actions: vec![],
            n_resets: 0,
        })
    }

    fn episode_length(&self) -> usize {
        self.episode_lengths[self.episode % self.episode_lengths.len()]
    }
}

impl Env for DummyEnv {
    type Obs = DummyObs;
    type Info = ();

    fn reset(&mut self) -> Result<DummyObs> {
        if self.n_resets > 0 {
            self.episode += 1;
        }
        self.n_resets += 1;
        self.t = 0;
        Ok(DummyObs(0))
    }

    fn step(&mut self, act: usize) -> Result<Step<Self>> {
        self.action_space.check(act)?;
        self.actions.push(act);
        self.t += 1;
        let is_done = self.t >= self.episode_length();
        Ok(Step::new(DummyObs(self.t as i64), act, act as f32, is_done, ()))
    }

    fn action_space(&self) -> &DiscreteSpace {
        &self.action_space
    }

    fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }
}

/// Returns the same action values for every observation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstActionValue(pub Vec<f32>);

impl<O> ActionValue<O> for ConstActionValue {
    fn action_values(&self, _obs: &O) -> Result<Vec<f32>> {
        Ok(self.0.clone())
    }
}
