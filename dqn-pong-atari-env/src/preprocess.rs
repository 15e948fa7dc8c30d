//! Downscaling of raw screens.
use crate::{ImageObs, RgbFrame};
use anyhow::Result;
use dqn_pong_core::{error::DqnError, BoxSpace, ObsTransform};
use image::{
    imageops::{resize, FilterType::Triangle},
    ImageBuffer, Rgb,
};
use ndarray::Array3;

const RESIZED_HEIGHT: u32 = 110;
const RESIZED_WIDTH: u32 = 84;
const CROP_TOP: usize = 20;
const SIZE: usize = 84;

/// Converts a raw RGB screen into a `(1, 84, 84)` grayscale image.
///
/// The screen is resized to 110x84 with bilinear interpolation, averaged over
/// the color channels, cropped to rows `20..104` and scaled into `[0, 1]`.
#[derive(Debug, Clone, Default)]
pub struct FramePreprocessor;

impl FramePreprocessor {
    /// Constructs the preprocessor.
    pub fn new() -> Self {
        Self
    }

    /// Preprocesses a frame.
    pub fn preprocess(frame: &RgbFrame) -> Result<Array3<f32>> {
        let (h, w, c) = frame.0.dim();
        if c != 3 || h == 0 || w == 0 {
            return Err(DqnError::InvalidFrameShape(vec![h, w, c]).into());
        }

        let pixels = frame.0.iter().copied().collect::<Vec<u8>>();
        let img = ImageBuffer::<Rgb<u8>, _>::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| DqnError::InvalidFrameShape(vec![h, w, c]))?;
        let img = resize(&img, RESIZED_WIDTH, RESIZED_HEIGHT, Triangle);

        Ok(Array3::from_shape_fn((1, SIZE, SIZE), |(_, y, x)| {
            let p = img.get_pixel(x as u32, (y + CROP_TOP) as u32);
            let mean = p.0.iter().map(|&v| v as f32).sum::<f32>() / 3.0;
            mean / 255.0
        }))
    }
}

impl ObsTransform for FramePreprocessor {
    type Input = RgbFrame;
    type Output = ImageObs;

    fn transform(&mut self, obs: RgbFrame) -> Result<ImageObs> {
        Ok(ImageObs::new(Self::preprocess(&obs)?))
    }

    fn space(&self, _input: &BoxSpace) -> BoxSpace {
        BoxSpace::new([1, SIZE, SIZE], 0.0, 1.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn frame(h: usize, w: usize, f: impl Fn(usize, usize, usize) -> u8) -> RgbFrame {
        RgbFrame(Array3::from_shape_fn((h, w, 3), |(y, x, c)| f(y, x, c)))
    }

    #[test]
    fn test_uniform_frame() -> Result<()> {
        let mut preprocessor = FramePreprocessor::new();
        let obs = preprocessor.transform(frame(210, 160, |_, _, c| [30, 60, 90][c]))?;
        assert_eq!(obs.shape(), &[1, 84, 84]);
        // Interpolated pixels may be off by one level.
        assert!(obs
            .array()
            .iter()
            .all(|&v| (v - 60.0 / 255.0).abs() <= 1.0 / 255.0));
        Ok(())
    }

    #[test]
    fn test_crop_offset() -> Result<()> {
        // Rows above the crop are white, the rest is black. The frame has the
        // resized size, so only the crop shows up.
        let array = FramePreprocessor::preprocess(&frame(110, 84, |y, _, _| {
            if y < CROP_TOP {
                255
            } else {
                0
            }
        }))?;
        assert!(array.iter().all(|&v| v == 0.0));

        let array = FramePreprocessor::preprocess(&frame(110, 84, |y, _, _| {
            if y == CROP_TOP {
                255
            } else {
                0
            }
        }))?;
        assert_eq!(array[[0, 0, 0]], 1.0);
        assert!(array.iter().skip(84).all(|&v| v == 0.0));
        Ok(())
    }

    #[test]
    fn test_invalid_channels() {
        let frame = RgbFrame(Array3::zeros((210, 160, 4)));
        let err = FramePreprocessor::preprocess(&frame).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DqnError>(),
            Some(&DqnError::InvalidFrameShape(vec![210, 160, 4]))
        );
    }
}
