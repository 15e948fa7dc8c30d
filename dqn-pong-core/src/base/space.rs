//! Action and observation spaces.
use crate::error::DqnError;
use rand::Rng;

/// A finite set of actions `{0, 1, ..., n - 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSpace {
    n: usize,
}

impl DiscreteSpace {
    /// Constructs a space of `n` actions. Fails if `n` is zero.
    pub fn new(n: usize) -> Result<Self, DqnError> {
        if n == 0 {
            return Err(DqnError::ZeroSize("number of actions"));
        }
        Ok(Self { n })
    }

    /// The number of actions.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Samples an action uniformly at random.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(0..self.n)
    }

    /// Fails if the action is not in the space.
    pub fn check(&self, act: usize) -> Result<(), DqnError> {
        if act < self.n {
            Ok(())
        } else {
            Err(DqnError::InvalidAction { act, n: self.n })
        }
    }
}

/// A box of observations with the given shape, each element in `[low, high]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    shape: Vec<usize>,
    low: f32,
    high: f32,
}

impl BoxSpace {
    /// Constructs a box.
    pub fn new(shape: impl Into<Vec<usize>>, low: f32, high: f32) -> Self {
        Self {
            shape: shape.into(),
            low,
            high,
        }
    }

    /// Shape of observations.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Lower bound of elements.
    pub fn low(&self) -> f32 {
        self.low
    }

    /// Upper bound of elements.
    pub fn high(&self) -> f32 {
        self.high
    }
}
