//! Braille rendering of boolean masks.
//!
//! Each braille character represents a 4-row by 2-column dot block. The
//! pipeline is a chain of views that never copy the mask:
//!
//! 1. **Padding** - extend the mask with `false` to whole blocks
//! 2. **Braille view** - map each block to a code point
//! 3. **Render** - encode rows as UTF-8 lines, optionally framed

mod render;
mod view;

pub use render::{braille_lines, mask_braille, render, Border};
pub use view::{
    braille_to_grid, grid_to_braille, BrailleView, PaddedView, Padding, BRAILLE_BASE, CELL_COLS,
    CELL_ROWS, DOT_WEIGHTS,
};
