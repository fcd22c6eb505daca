//! Blue-noise stippling of grayscale images.
//!
//! 1. **Kernel** - wrapped Gaussian falloff and its 2D lookup table
//! 2. **Roll** - toroidal re-centering of the lookup table
//! 3. **Engine** - greedy minimum-energy sample selection

mod engine;
pub mod kernel;
pub mod roll;

pub use engine::{
    sample_count, stipple, Sample, StippleParams, StippledImage, DEFAULT_CONTENT_BIAS,
    DEFAULT_PERCENTAGE, DEFAULT_SIGMA,
};
pub use kernel::build_kernel_lut;
pub use roll::{roll_2d, roll_2d_into};
