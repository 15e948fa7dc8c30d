//! DQN learner for Pong implemented with [tch](https://crates.io/crates/tch).
//!
//! [`Dqn`] owns an online and a target [`DqnModel`] and implements
//! [`QLearner`](dqn_pong_core::QLearner), so that it can be trained by
//! [`Trainer`](dqn_pong_core::Trainer). The action-value function is
//! [`PongCnn`].
//!
//! ```no_run
//! use dqn_pong_tch_agent::{Dqn, DqnConfig, PongCnn, PongCnnConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = DqnConfig::<PongCnnConfig>::default()
//!     .out_dim(6)
//!     .device(tch::Device::cuda_if_available());
//! let dqn = Dqn::<PongCnn>::build(config)?;
//! # Ok(())
//! # }
//! ```
pub mod cnn;
mod device;
pub mod dqn;
pub mod model;
pub mod opt;
pub mod util;
pub use cnn::{PongCnn, PongCnnConfig};
pub use device::Device;
pub use dqn::{Dqn, DqnConfig, DqnModel};
pub use opt::{Optimizer, OptimizerConfig};
