//! DQN learner.
mod base;
mod config;
mod loss;
mod model;
pub use base::Dqn;
pub use config::DqnConfig;
pub use loss::{dqn_loss, q_targets};
pub use model::DqnModel;
