//! Optimizers.
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tch::{
    nn::{Adam, Optimizer as Optimizer_, OptimizerConfig as OptimizerConfig_, RmsProp, VarStore},
    Tensor,
};

/// Configures an optimizer for training neural networks.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub enum OptimizerConfig {
    /// Adam optimizer.
    Adam {
        /// Learning rate.
        lr: f64,
    },

    /// RMSprop optimizer with the smoothing constant `0.99` and `eps = 1e-8`.
    RmsProp {
        /// Learning rate.
        lr: f64,

        /// Momentum factor.
        momentum: f64,
    },
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::RmsProp {
            lr: 0.00025,
            momentum: 0.95,
        }
    }
}

impl OptimizerConfig {
    /// Constructs an optimizer.
    pub fn build(&self, vs: &VarStore) -> Result<Optimizer> {
        match &self {
            OptimizerConfig::Adam { lr } => {
                let opt = Adam::default().build(vs, *lr)?;
                Ok(Optimizer::Adam(opt))
            }
            OptimizerConfig::RmsProp { lr, momentum } => {
                let opt = RmsProp {
                    momentum: *momentum,
                    ..Default::default()
                }
                .build(vs, *lr)?;
                Ok(Optimizer::RmsProp(opt))
            }
        }
    }
}

/// Optimizers.
///
/// This is a thin wrapper of [tch::nn::Optimizer].
///
/// [tch::nn::Optimizer]: https://docs.rs/tch/0.16.0/tch/nn/struct.Optimizer.html
pub enum Optimizer {
    /// Adam optimizer.
    Adam(Optimizer_),

    /// RMSprop optimizer.
    RmsProp(Optimizer_),
}

impl Optimizer {
    /// Zeroes the gradients, backpropagates `loss` and updates the variables.
    pub fn backward_step(&mut self, loss: &Tensor) {
        match self {
            Self::Adam(opt) => {
                opt.backward_step(loss);
            }
            Self::RmsProp(opt) => {
                opt.backward_step(loss);
            }
        }
    }
}
