//! Wrapped Gaussian energy kernel.
//!
//! The kernel is periodic over the image domain: distances are measured on
//! a torus, so a sample near one edge also suppresses energy near the
//! opposite edge.

use crate::error::StippleError;
use crate::grid::Grid;

/// Toroidal distance ramp `[0, 1, .., n/2 - 1, n/2, n/2 - 1, .., 1]`.
///
/// `n` is expected to be even; see [`build_kernel_lut`].
pub fn wrapped_distances(n: usize) -> Vec<f32> {
    let half = n / 2;
    let rising = (0..half).map(|i| i as f32);
    let falling = (1..=half).rev().map(|i| i as f32);
    rising.chain(falling).collect()
}

/// Integrate a unit Gaussian of width `sigma` over `[x - 0.5, x + 0.5]` for
/// every `x` in `xs`.
pub fn gauss_small_sigma(xs: &[f32], sigma: f32) -> Vec<f32> {
    let sqrt_half = 0.5f32.sqrt();
    xs.iter()
        .map(|&x| {
            let p1 = libm::erff((x - 0.5) / sigma * sqrt_half);
            let p2 = libm::erff((x + 0.5) / sigma * sqrt_half);
            (p2 - p1) / 2.0
        })
        .collect()
}

/// `result[i, j] = v[i] * v[j]`.
pub fn outer_product(v: &[f32]) -> Grid<f32> {
    let n = v.len();
    let mut grid = Grid::new(n, n, 0.0);
    for (i, &a) in v.iter().enumerate() {
        for (j, &b) in v.iter().enumerate() {
            grid.set(i, j, a * b);
        }
    }
    grid
}

/// Build the `n x n` kernel LUT for `sigma` with its origin forced to
/// +infinity, so re-centering it on a sample removes that sample's position
/// from every later minimum search.
///
/// # Arguments
/// * `n` - Side length of the image, must be even
/// * `sigma` - Kernel spread in pixels, positive and finite
///
/// # Returns
/// The wrapped Gaussian outer product, or `OddSize` / `InvalidSigma`.
pub fn build_kernel_lut(n: usize, sigma: f32) -> Result<Grid<f32>, StippleError> {
    if n % 2 != 0 {
        return Err(StippleError::OddSize { size: n });
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(StippleError::InvalidSigma { sigma });
    }

    let falloff = gauss_small_sigma(&wrapped_distances(n), sigma);
    let mut lut = outer_product(&falloff);
    if n > 0 {
        lut.set(0, 0, f32::INFINITY);
    }
    Ok(lut)
}
