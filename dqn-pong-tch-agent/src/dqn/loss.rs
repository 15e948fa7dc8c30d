//! Bellman targets and the loss of DQN.
use tch::{Reduction, Tensor};

/// Returns `reward` for terminal transitions and
/// `reward + gamma * max_a next_q[a]` otherwise.
///
/// Terminal targets are selected, not multiplied by zero, so they do not
/// depend on `next_q` at all.
pub fn q_targets(rewards: &Tensor, dones: &Tensor, next_q: &Tensor, gamma: f64) -> Tensor {
    let (next_max, _) = next_q.max_dim(-1, false);
    let bootstrapped = rewards + next_max * gamma;
    bootstrapped.where_self(&dones.logical_not(), rewards)
}

/// Mean squared error between the action values of the taken actions and the targets.
pub fn dqn_loss(q: &Tensor, actions: &Tensor, targets: &Tensor) -> Tensor {
    let pred = q.gather(-1, &actions.unsqueeze(-1), false).squeeze_dim(-1);
    pred.mse_loss(targets, Reduction::Mean)
}
