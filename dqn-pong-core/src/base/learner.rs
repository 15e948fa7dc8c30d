//! Learner of action-value functions.
use super::ActionValue;
use crate::{record::Record, Transition};
use anyhow::Result;

/// Owns an online action-value function trained from transitions and a
/// target copy of it.
pub trait QLearner<O> {
    /// The action-value function.
    type QNet: ActionValue<O>;

    /// The network updated by [`QLearner::opt`].
    fn online(&self) -> &Self::QNet;

    /// The snapshot of the online network taken at the last [`QLearner::sync_target`].
    fn target(&self) -> &Self::QNet;

    /// Performs a gradient step on the given batch.
    ///
    /// The returned record contains the loss with key `"loss"`.
    fn opt(&mut self, batch: &[Transition<O>]) -> Result<Record>;

    /// Copies the parameters of the online network into the target network.
    fn sync_target(&mut self) -> Result<()>;
}
