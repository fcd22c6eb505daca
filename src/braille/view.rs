//! Virtual views that turn a boolean mask into braille code points.
//!
//! Neither view stores cells: each holds its source and computes values on
//! access, so chaining them costs no extra memory.

use crate::grid::View2d;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Rows covered by one braille character.
pub const CELL_ROWS: usize = 4;

/// Columns covered by one braille character.
pub const CELL_COLS: usize = 2;

/// `(bit, row offset, col offset)` for each of the eight dots.
///
/// ```text
/// 0x01 0x08
/// 0x02 0x10
/// 0x04 0x20
/// 0x40 0x80
/// ```
pub static DOT_WEIGHTS: [(u8, usize, usize); 8] = [
    (0x01, 0, 0),
    (0x08, 0, 1),
    (0x02, 1, 0),
    (0x10, 1, 1),
    (0x04, 2, 0),
    (0x20, 2, 1),
    (0x40, 3, 0),
    (0x80, 3, 1),
];

/// Convert a 2x4 boolean grid to a braille character.
///
/// # Arguments
/// * `grid` - `grid[x][y]` is the dot in column `x` (0..2) and row `y` (0..4)
///
/// # Returns
/// The braille character with the matching bits of [`DOT_WEIGHTS`] set
/// (U+2800 to U+28FF).
pub fn grid_to_braille(grid: [[bool; 4]; 2]) -> char {
    let code = DOT_WEIGHTS
        .iter()
        .filter(|&&(_, dy, dx)| grid[dx][dy])
        .fold(0u32, |acc, &(bit, _, _)| acc | bit as u32);
    char::from_u32(BRAILLE_BASE as u32 + code).unwrap_or(BRAILLE_BASE)
}

/// Decode a braille character back into its 2x4 dot grid.
///
/// Returns `None` for characters outside U+2800..=U+28FF.
pub fn braille_to_grid(c: char) -> Option<[[bool; 4]; 2]> {
    let offset = (c as u32).checked_sub(BRAILLE_BASE as u32)?;
    if offset > 0xFF {
        return None;
    }
    let mut grid = [[false; 4]; 2];
    for &(bit, dy, dx) in &DOT_WEIGHTS {
        grid[dx][dy] = offset & bit as u32 != 0;
    }
    Some(grid)
}

/// Padding that brings a mask up to whole braille cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Padding {
    /// Smallest padding making `rows` divisible by 4 and `cols` by 2, split
    /// between both sides with the odd remainder going after.
    ///
    /// # Arguments
    /// * `rows` - Row count of the unpadded mask
    /// * `cols` - Column count of the unpadded mask
    ///
    /// # Returns
    /// Padding with `top = pad_rows / 2` and `left = pad_cols / 2`.
    pub fn for_extents(rows: usize, cols: usize) -> Self {
        let pad_rows = (CELL_ROWS - rows % CELL_ROWS) % CELL_ROWS;
        let pad_cols = (CELL_COLS - cols % CELL_COLS) % CELL_COLS;
        Self {
            top: pad_rows / 2,
            bottom: pad_rows - pad_rows / 2,
            left: pad_cols / 2,
            right: pad_cols - pad_cols / 2,
        }
    }
}

/// A mask extended with `false` cells outside its source bounds.
#[derive(Debug, Clone, Copy)]
pub struct PaddedView<V> {
    base: V,
    padding: Padding,
}

impl<V: View2d<Elem = bool>> PaddedView<V> {
    pub fn new(base: V, padding: Padding) -> Self {
        Self { base, padding }
    }

    /// Pad `base` to whole braille cells.
    pub fn for_braille(base: V) -> Self {
        let padding = Padding::for_extents(base.rows(), base.cols());
        Self { base, padding }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl<V: View2d<Elem = bool>> View2d for PaddedView<V> {
    type Elem = bool;

    fn rows(&self) -> usize {
        self.base.rows() + self.padding.top + self.padding.bottom
    }

    fn cols(&self) -> usize {
        self.base.cols() + self.padding.left + self.padding.right
    }

    fn at(&self, row: usize, col: usize) -> bool {
        match (
            row.checked_sub(self.padding.top),
            col.checked_sub(self.padding.left),
        ) {
            (Some(r), Some(c)) if r < self.base.rows() && c < self.base.cols() => {
                self.base.at(r, c)
            }
            _ => false,
        }
    }
}

/// Braille code points over a boolean view, one per 4x2 block.
///
/// The source extents should be multiples of 4 rows and 2 columns; a
/// trailing partial block is not covered.
#[derive(Debug, Clone, Copy)]
pub struct BrailleView<V> {
    source: V,
}

impl<V: View2d<Elem = bool>> BrailleView<V> {
    pub fn new(source: V) -> Self {
        Self { source }
    }

    /// Character at braille cell `(row, col)`.
    pub fn char_at(&self, row: usize, col: usize) -> char {
        char::from_u32(self.at(row, col)).unwrap_or(BRAILLE_BASE)
    }

    /// Characters of one braille row, left to right.
    pub fn row_chars(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        (0..self.cols()).map(move |col| self.char_at(row, col))
    }
}

impl<V: View2d<Elem = bool>> View2d for BrailleView<V> {
    type Elem = u32;

    fn rows(&self) -> usize {
        self.source.rows() / CELL_ROWS
    }

    fn cols(&self) -> usize {
        self.source.cols() / CELL_COLS
    }

    fn at(&self, row: usize, col: usize) -> u32 {
        DOT_WEIGHTS
            .iter()
            .fold(BRAILLE_BASE as u32, |acc, &(bit, dy, dx)| {
                let on = self.source.at(row * CELL_ROWS + dy, col * CELL_COLS + dx);
                acc + bit as u32 * on as u32
            })
    }
}
