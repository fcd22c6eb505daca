//! CLI enum types.

use clap::ValueEnum;

use crate::braille::Border;

/// Frame drawn around the braille output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BorderStyle {
    None,
    #[default]
    Line,
    Square,
}

impl From<BorderStyle> for Border {
    fn from(b: BorderStyle) -> Self {
        match b {
            BorderStyle::None => Border::None,
            BorderStyle::Line => Border::Line,
            BorderStyle::Square => Border::Square,
        }
    }
}
