use crate::util::OutDim;
use serde::{Deserialize, Serialize};

/// Configuration of [`PongCnn`](super::PongCnn).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PongCnnConfig {
    /// Number of stacked frames, the input channels.
    pub n_stack: i64,

    /// Height and width of frames.
    pub frame_size: i64,

    /// Number of actions.
    pub out_dim: i64,
}

impl Default for PongCnnConfig {
    fn default() -> Self {
        Self {
            n_stack: 4,
            frame_size: 84,
            out_dim: 6,
        }
    }
}

impl PongCnnConfig {
    /// Sets the number of stacked frames.
    pub fn n_stack(mut self, v: i64) -> Self {
        self.n_stack = v;
        self
    }

    /// Sets the size of frames.
    pub fn frame_size(mut self, v: i64) -> Self {
        self.frame_size = v;
        self
    }
}

impl OutDim for PongCnnConfig {
    fn get_out_dim(&self) -> i64 {
        self.out_dim
    }

    fn set_out_dim(&mut self, v: i64) {
        self.out_dim = v;
    }
}
