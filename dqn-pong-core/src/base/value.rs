//! Action-value functions.
use anyhow::Result;

/// Returns the index of the maximum, the first one on ties.
pub fn argmax(xs: &[f32]) -> usize {
    let mut best = 0;
    for (i, &x) in xs.iter().enumerate().skip(1) {
        if x > xs[best] {
            best = i;
        }
    }
    best
}

/// Estimates of the values of every action given an observation.
pub trait ActionValue<O> {
    /// Returns a value estimate per action.
    fn action_values(&self, obs: &O) -> Result<Vec<f32>>;

    /// Returns the action with the maximal estimated value.
    fn greedy_action(&self, obs: &O) -> Result<usize> {
        Ok(argmax(&self.action_values(obs)?))
    }
}
