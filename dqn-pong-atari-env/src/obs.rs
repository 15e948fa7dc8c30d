//! Observations of Atari games.
use dqn_pong_core::Obs;
use ndarray::Array3;
use std::rc::Rc;

/// A raw screen, `(height, width, 3)` RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame(pub Array3<u8>);

impl Obs for RgbFrame {}

/// A preprocessed observation, `(channels, height, width)` values in `[0, 1]`.
///
/// Clones share the underlying array, so the next state of a transition and
/// the state of the following one are stored once.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageObs(Rc<Array3<f32>>);

impl ImageObs {
    /// Wraps an array.
    pub fn new(array: Array3<f32>) -> Self {
        Self(Rc::new(array))
    }

    /// The array.
    pub fn array(&self) -> &Array3<f32> {
        &self.0
    }

    /// Shape of the array.
    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }

    /// Returns `true` if both share the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Obs for ImageObs {}

#[cfg(feature = "tch")]
impl From<ImageObs> for tch::Tensor {
    fn from(obs: ImageObs) -> tch::Tensor {
        let shape = obs.shape().iter().map(|&d| d as i64).collect::<Vec<_>>();
        let data = obs.array().iter().copied().collect::<Vec<f32>>();
        tch::Tensor::from_slice(&data).reshape(shape.as_slice())
    }
}
