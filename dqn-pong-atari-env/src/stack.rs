//! Stacking of consecutive frames.
use crate::ImageObs;
use anyhow::Result;
use dqn_pong_core::{error::DqnError, BoxSpace, ObsTransform};
use ndarray::{s, Array3};

/// Stacks the latest `n_stack` frames along the channel axis.
///
/// At the start of an episode the older slots are zero. The newest frame is
/// the last one, so frames of `c` channels give `(n_stack * c, h, w)`.
#[derive(Debug, Clone)]
pub struct FrameStacker {
    n_stack: usize,
    last: Option<ImageObs>,
}

impl Default for FrameStacker {
    fn default() -> Self {
        Self {
            n_stack: 4,
            last: None,
        }
    }
}

impl FrameStacker {
    /// Constructs the stacker. Fails if `n_stack` is zero.
    pub fn new(n_stack: usize) -> Result<Self> {
        if n_stack == 0 {
            return Err(DqnError::ZeroSize("number of stacked frames").into());
        }
        Ok(Self {
            n_stack,
            last: None,
        })
    }

    /// Number of stacked frames.
    pub fn n_stack(&self) -> usize {
        self.n_stack
    }

    fn stacked_dim(&self, frame: &ImageObs) -> (usize, usize, usize) {
        let (c, h, w) = frame.array().dim();
        (self.n_stack * c, h, w)
    }
}

impl ObsTransform for FrameStacker {
    type Input = ImageObs;
    type Output = ImageObs;

    fn reset(&mut self, obs: ImageObs) -> Result<ImageObs> {
        let dim = self.stacked_dim(&obs);
        let c = obs.array().dim().0;
        let mut frames = Array3::<f32>::zeros(dim);
        frames.slice_mut(s![dim.0 - c.., .., ..]).assign(obs.array());

        let frames = ImageObs::new(frames);
        self.last = Some(frames.clone());
        Ok(frames)
    }

    fn transform(&mut self, obs: ImageObs) -> Result<ImageObs> {
        let last = match self.last.clone() {
            Some(last) => last,
            None => return self.reset(obs),
        };

        let dim = self.stacked_dim(&obs);
        if last.array().dim() != dim {
            return Err(DqnError::InvalidFrameShape(obs.shape().to_vec()).into());
        }

        let c = obs.array().dim().0;
        let mut frames = Array3::<f32>::zeros(dim);
        frames
            .slice_mut(s![..dim.0 - c, .., ..])
            .assign(&last.array().slice(s![c.., .., ..]));
        frames.slice_mut(s![dim.0 - c.., .., ..]).assign(obs.array());

        let frames = ImageObs::new(frames);
        self.last = Some(frames.clone());
        Ok(frames)
    }

    fn space(&self, input: &BoxSpace) -> BoxSpace {
        let mut shape = input.shape().to_vec();
        if let Some(c) = shape.first_mut() {
            *c *= self.n_stack;
        }
        BoxSpace::new(shape, input.low(), input.high())
    }
}
