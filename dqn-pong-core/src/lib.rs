#![warn(missing_docs)]
//! Core components of a Deep Q-Network trainer.
//!
//! The crate defines the interface of environments ([`Env`]), stages
//! processing their observations ([`ObsTransform`]), action-value functions
//! ([`ActionValue`]) and their learners ([`QLearner`]). On top of them,
//! [`Agent`] plays epsilon-greedy steps into a [`FifoReplayBuffer`], and
//! [`Trainer`] runs the DQN training loop.
pub mod dummy;
pub mod error;
pub mod record;
pub mod replay_buffer;

mod agent;
mod base;
mod trainer;
pub use agent::Agent;
pub use base::{
    argmax, ActionValue, BoxSpace, Chain, DiscreteSpace, Env, ExperienceBufferBase, Info, Obs,
    ObsTransform, QLearner, ReplayBufferBase, Step, TransformedEnv,
};
pub use replay_buffer::{FifoReplayBuffer, ReplayBufferConfig, Transition};
pub use trainer::{EpsilonSchedule, Phase, Trainer, TrainerConfig, TrainingSession};
