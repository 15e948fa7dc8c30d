/// A transition `(o_t, a_t, r_t, done_t, o_t+1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<O> {
    /// Observation before the step.
    pub state: O,

    /// Index of the action taken.
    pub action: usize,

    /// Reward of the step.
    pub reward: f32,

    /// Whether the episode ended at this step.
    pub done: bool,

    /// Observation after the step.
    pub next_state: O,
}

impl<O> Transition<O> {
    /// Constructs a transition.
    pub fn new(state: O, action: usize, reward: f32, done: bool, next_state: O) -> Self {
        Self {
            state,
            action,
            reward,
            done,
            next_state,
        }
    }
}
