//! A FIFO replay buffer with uniform sampling without replacement.
mod base;
mod config;
mod transition;
pub use base::FifoReplayBuffer;
pub use config::ReplayBufferConfig;
pub use transition::Transition;
