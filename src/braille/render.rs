//! Braille text rendering with optional box-drawing frame.

use serde::Deserialize;

use super::view::{BrailleView, PaddedView, CELL_COLS, CELL_ROWS};
use crate::grid::View2d;

/// Frame drawn around rendered braille text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    /// Bare lines.
    #[default]
    None,
    /// Light lines with rounded corners (╭╮╰╯).
    Line,
    /// Light lines with square corners (┌┐└┘).
    Square,
}

impl Border {
    /// `(top-left, top-right, bottom-left, bottom-right)` corners.
    fn corners(&self) -> Option<[char; 4]> {
        match self {
            Border::None => None,
            Border::Line => Some(['╭', '╮', '╰', '╯']),
            Border::Square => Some(['┌', '┐', '└', '┘']),
        }
    }

    /// Human-readable name (matches the config and CLI spelling).
    pub fn name(&self) -> &'static str {
        match self {
            Border::None => "none",
            Border::Line => "line",
            Border::Square => "square",
        }
    }
}

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Render every row of a braille view as one UTF-8 line, framed if asked.
pub fn braille_lines<V>(view: &BrailleView<V>, border: Border) -> Vec<String>
where
    V: View2d<Elem = bool>,
{
    let body = (0..view.rows()).map(|row| view.row_chars(row).collect::<String>());

    let Some([tl, tr, bl, br]) = border.corners() else {
        return body.collect();
    };

    let bar: String = std::iter::repeat(HORIZONTAL).take(view.cols()).collect();
    let mut lines = Vec::with_capacity(view.rows() + 2);
    lines.push(format!("{tl}{bar}{tr}"));
    lines.extend(body.map(|line| format!("{VERTICAL}{line}{VERTICAL}")));
    lines.push(format!("{bl}{bar}{br}"));
    lines
}

/// Render a braille view as text, rows joined by `\n` with no trailing
/// newline.
pub fn render<V>(view: &BrailleView<V>, border: Border) -> String
where
    V: View2d<Elem = bool>,
{
    braille_lines(view, border).join("\n")
}

/// Render any boolean mask as braille text.
///
/// The mask is padded with `false` cells up to a multiple of 4 rows and 2
/// columns before encoding.
///
/// # Arguments
/// * `mask` - Any boolean view; `true` cells become raised dots
/// * `border` - Frame drawn around the braille block
///
/// # Returns
/// One line per 4 mask rows, joined by `\n` without a trailing newline.
pub fn mask_braille<V>(mask: V, border: Border) -> String
where
    V: View2d<Elem = bool>,
{
    let padded = PaddedView::for_braille(mask);
    log::debug!(
        "rendering padded {}x{} mask as {}x{} braille cells (border: {})",
        padded.rows(),
        padded.cols(),
        padded.rows() / CELL_ROWS,
        padded.cols() / CELL_COLS,
        border.name()
    );
    render(&BrailleView::new(padded), border)
}
