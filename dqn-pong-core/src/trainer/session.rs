//! Mutable state of a training run.

/// Phase of training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Filling the replay buffer with random transitions.
    Warmup,

    /// Playing with the target network and optimizing the online network.
    Learning,
}

/// Counters and values that change while training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    /// Current phase.
    pub phase: Phase,

    /// Number of learning frames played, the step key of records.
    pub frame_idx: usize,

    /// Epsilon used in the next frame.
    pub epsilon: f32,

    /// Number of random steps taken during warmup.
    pub warmup_steps: usize,

    /// Number of optimization steps.
    pub n_opts: usize,

    /// Number of target network synchronizations.
    pub n_syncs: usize,

    /// Number of finished episodes in the learning phase.
    pub n_episodes: usize,

    /// Loss of the latest optimization step.
    pub last_loss: Option<f32>,
}

impl TrainingSession {
    /// A session before warmup.
    pub fn new(epsilon: f32) -> Self {
        Self {
            phase: Phase::Warmup,
            frame_idx: 0,
            epsilon,
            warmup_steps: 0,
            n_opts: 0,
            n_syncs: 0,
            n_episodes: 0,
            last_loss: None,
        }
    }
}
