//! stipple-braille library crate.
//!
//! Renders boolean masks as Unicode braille text and turns grayscale
//! images into blue-noise stipple masks.

pub mod braille;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod source;
pub mod stipple;

pub use braille::{mask_braille, Border};
pub use error::StippleError;
pub use grid::{Grid, GridRef, Image, Mask, View2d};
pub use stipple::{stipple, Sample, StippleParams, StippledImage};
