//! Core functionalities.
mod env;
mod learner;
mod replay_buffer;
mod space;
mod step;
mod transform;
mod value;
pub use env::Env;
pub use learner::QLearner;
pub use replay_buffer::{ExperienceBufferBase, ReplayBufferBase};
pub use space::{BoxSpace, DiscreteSpace};
use std::fmt::Debug;
pub use step::{Info, Step};
pub use transform::{Chain, ObsTransform, TransformedEnv};
pub use value::{argmax, ActionValue};

/// An observation of an environment.
///
/// Observations are cloned into transitions, so the clone should be cheap,
/// for example by sharing the underlying array.
pub trait Obs: Clone + Debug {}
