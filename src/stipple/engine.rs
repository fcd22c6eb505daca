//! Greedy blue-noise importance sampling.
//!
//! Every iteration picks the global minimum of a running energy field,
//! marks it as a dot, and adds a copy of the Gaussian kernel re-centered on
//! that position. Nearby positions become more expensive, so picks spread
//! out while the initial energy still follows image content.
//!
//! Based on Bart Wronski's progressive image stippling write-up
//! (<https://bartwronski.com/2022/08/31/progressive-image-stippling-and-greedy-blue-noise-importance-sampling/>).

use rayon::prelude::*;
use serde::Deserialize;

use super::kernel::build_kernel_lut;
use super::roll::roll_2d_into;
use crate::error::StippleError;
use crate::grid::{Grid, Image, Mask, View2d};

pub const DEFAULT_PERCENTAGE: f32 = 0.33;
pub const DEFAULT_SIGMA: f32 = 0.9;
pub const DEFAULT_CONTENT_BIAS: f32 = 0.5;

/// Tunables for a stippling run.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StippleParams {
    /// Fraction of pixels turned into samples. Clamped to [0, 1].
    pub percentage: f32,
    /// Kernel spread in pixels.
    pub sigma: f32,
    /// Weight of image intensity in the initial energy field.
    pub content_bias: f32,
    /// Prefer bright pixels instead of dark ones, and draw dots as `false`
    /// on a `true` background.
    pub negate: bool,
}

impl Default for StippleParams {
    fn default() -> Self {
        Self {
            percentage: DEFAULT_PERCENTAGE,
            sigma: DEFAULT_SIGMA,
            content_bias: DEFAULT_CONTENT_BIAS,
            negate: false,
        }
    }
}

/// One accepted stipple point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub row: usize,
    pub col: usize,
    /// Image value at `(row, col)`.
    pub value: f32,
}

/// Number of samples drawn for an `n x n` image.
///
/// `percentage` is clamped to [0, 1] (NaN counts as 0). The product is
/// taken in `f32` and truncated, so `sample_count(10, 0.01)` is 1.
///
/// # Arguments
/// * `n` - Side length of the square image
/// * `percentage` - Fraction of pixels to sample
///
/// # Returns
/// Number of greedy iterations, never more than `n * n`.
pub fn sample_count(n: usize, percentage: f32) -> usize {
    let p = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 1.0)
    };
    let total = n * n;
    (((total as f32) * p) as usize).min(total)
}

/// Result of a stippling run: the dot mask plus samples in selection order.
#[derive(Debug, Clone)]
pub struct StippledImage {
    mask: Mask,
    samples: Vec<Sample>,
    dot_value: bool,
}

impl StippledImage {
    /// Stipple a square image.
    ///
    /// # Arguments
    /// * `image` - Square image with an even side length, values typically in [0, 1]
    /// * `params` - Sample budget, kernel spread, content weight and polarity
    ///
    /// # Returns
    /// The dot mask and samples in selection order, or an error when the
    /// image is not square, has an odd size, the sigma is invalid, or any
    /// weighted pixel is not finite.
    pub fn new<V>(image: &V, params: StippleParams) -> Result<Self, StippleError>
    where
        V: View2d<Elem = f32>,
    {
        let n = image.rows();
        if image.cols() != n {
            return Err(StippleError::NotSquare {
                rows: n,
                cols: image.cols(),
            });
        }

        let lut = build_kernel_lut(n, params.sigma)?;
        let dot_value = !params.negate;
        let count = sample_count(n, params.percentage);

        log::debug!(
            "stippling {n}x{n} image: {count} samples, sigma={}, content_bias={}, negate={}",
            params.sigma,
            params.content_bias,
            params.negate
        );

        let mut energy = initial_energy(image, params.content_bias, params.negate);
        if let Some(idx) = energy.as_slice().iter().position(|v| !v.is_finite()) {
            let (row, col) = (idx / n, idx % n);
            log::error!("non-finite energy at ({row}, {col})");
            return Err(StippleError::NonFiniteEnergy { row, col });
        }
        let mut mask = Grid::new(n, n, !dot_value);
        let mut samples = Vec::with_capacity(count);
        let mut rolled = Grid::new(n, n, 0.0);

        for iteration in 0..count {
            let (row, col) = next_position(&energy, &mask, dot_value, iteration)?;

            samples.push(Sample {
                row,
                col,
                value: image.at(row, col),
            });
            mask.set(row, col, dot_value);

            roll_2d_into(&lut, row, col, &mut rolled)?;
            add_assign(&mut energy, &rolled);

            log::trace!("sample {iteration}: ({row}, {col})");
        }

        log::info!("stippled {n}x{n} image with {} samples", samples.len());

        Ok(Self {
            mask,
            samples,
            dot_value,
        })
    }

    /// The stippled mask.
    pub fn stippled(&self) -> &Mask {
        &self.mask
    }

    /// Samples in selection order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Mask value used for dots (`false` when negated).
    pub fn dot_value(&self) -> bool {
        self.dot_value
    }

    /// Side length of the square mask.
    pub fn size(&self) -> usize {
        self.mask.rows()
    }

    /// Split into the mask and the ordered samples.
    pub fn into_parts(self) -> (Mask, Vec<Sample>) {
        (self.mask, self.samples)
    }
}

/// Stipple `image` and return the mask and ordered samples.
pub fn stipple<V>(image: &V, params: StippleParams) -> Result<(Mask, Vec<Sample>), StippleError>
where
    V: View2d<Elem = f32>,
{
    StippledImage::new(image, params).map(StippledImage::into_parts)
}

fn initial_energy<V: View2d<Elem = f32>>(image: &V, content_bias: f32, negate: bool) -> Image {
    let n = image.rows();
    let sign = if negate { -1.0 } else { 1.0 };
    let mut energy = Grid::new(n, n, 0.0);
    for row in 0..n {
        for col in 0..n {
            energy.set(row, col, image.at(row, col) * content_bias * sign);
        }
    }
    energy
}

/// Position of the smallest value below +inf; ties resolve to the first in
/// row-major order. `None` when every cell is +inf or NaN.
fn argmin(field: &Image) -> Option<(usize, usize)> {
    let mut best = None;
    let mut best_value = f32::INFINITY;
    for (idx, &value) in field.as_slice().iter().enumerate() {
        if value < best_value {
            best = Some(idx);
            best_value = value;
        }
    }
    let cols = field.cols().max(1);
    best.map(|idx| (idx / cols, idx % cols))
}

/// Pick the next unsampled minimum, failing if the search comes back empty
/// or lands on a cell that already holds a dot.
fn next_position(
    energy: &Image,
    mask: &Mask,
    dot_value: bool,
    iteration: usize,
) -> Result<(usize, usize), StippleError> {
    let Some((row, col)) = argmin(energy) else {
        log::error!("no finite energy left at iteration {iteration}");
        return Err(StippleError::Exhausted { iteration });
    };
    if mask.at(row, col) == dot_value {
        log::error!("energy minimum revisited ({row}, {col}) at iteration {iteration}");
        return Err(StippleError::DuplicateSample {
            row,
            col,
            iteration,
        });
    }
    Ok((row, col))
}

fn add_assign(energy: &mut Image, rolled: &Image) {
    energy
        .as_mut_slice()
        .par_iter_mut()
        .zip(rolled.as_slice().par_iter())
        .for_each(|(e, r)| *e += *r);
}
