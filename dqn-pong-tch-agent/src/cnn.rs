//! Convolutional neural network for Pong.
//!
//! Two convolutional layers followed by two linear layers. The input is a
//! stack of preprocessed frames with values in `[0, 1]`.
mod base;
mod config;
pub use base::PongCnn;
pub use config::PongCnnConfig;
