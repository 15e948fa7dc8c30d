//! Linearly decaying exploration rate.
use serde::{Deserialize, Serialize};

/// Epsilon of the epsilon-greedy policy as a function of the frame index.
///
/// `value(step) = max(eps_final, eps_start - step / decay_steps)`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpsilonSchedule {
    /// Epsilon at step 0.
    pub eps_start: f32,

    /// Lower bound of epsilon.
    pub eps_final: f32,

    /// Number of steps for epsilon to decrease by one.
    pub decay_steps: usize,
}

impl Default for EpsilonSchedule {
    fn default() -> Self {
        Self {
            eps_start: 1.0,
            eps_final: 0.1,
            decay_steps: 1_000_000,
        }
    }
}

impl EpsilonSchedule {
    /// Sets the initial value.
    pub fn eps_start(mut self, v: f32) -> Self {
        self.eps_start = v;
        self
    }

    /// Sets the floor.
    pub fn eps_final(mut self, v: f32) -> Self {
        self.eps_final = v;
        self
    }

    /// Sets the decay period in steps.
    pub fn decay_steps(mut self, v: usize) -> Self {
        self.decay_steps = v;
        self
    }

    /// Epsilon at the given step.
    pub fn value(&self, step: usize) -> f32 {
        let decayed = self.eps_start as f64 - step as f64 / self.decay_steps.max(1) as f64;
        (decayed as f32).max(self.eps_final)
    }
}
