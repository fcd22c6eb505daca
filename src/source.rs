//! Image loading: decode, convert to luminance, resize, blur and normalize
//! into a square [`Image`] ready for stippling.

use std::path::Path;

use image::imageops::{self, FilterType};

use crate::error::StippleError;
use crate::grid::{Grid, Image};

/// Default square size images are resampled to.
pub const DEFAULT_IMAGE_SIZE: u32 = 256;

/// Default blur sigma applied after resizing.
pub const DEFAULT_BLUR: f32 = 0.5;

/// Errors that can occur when loading an image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image size must be a positive even number, got {0}")]
    InvalidSize(u32),

    #[error(transparent)]
    Shape(#[from] StippleError),
}

/// Load `path` as a `size x size` grayscale image normalized to [0, 1].
///
/// `blur` is a Gaussian sigma in pixels; values <= 0 skip blurring.
pub fn load_grayscale(path: &Path, size: u32, blur: f32) -> Result<Image, SourceError> {
    if size == 0 || size % 2 != 0 {
        return Err(SourceError::InvalidSize(size));
    }

    let decoded = image::open(path).map_err(|e| SourceError::Decode {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    // Stay in float from decode on; no 8-bit step before resampling.
    let gray = decoded.to_luma32f();

    let mut resized = imageops::resize(&gray, size, size, FilterType::CatmullRom);
    if blur > 0.0 {
        resized = imageops::blur(&resized, blur);
    }

    let n = size as usize;
    let mut image = Grid::from_vec(n, n, resized.into_raw())?;
    normalize(&mut image);
    Ok(image)
}

/// Stretch values to [0, 1] by min/max. Constant images become all zero.
pub fn normalize(image: &mut Image) {
    let (min, max) = image
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        image.fill(0.0);
        return;
    }
    for v in image.as_mut_slice() {
        *v = (*v - min) / range;
    }
}
