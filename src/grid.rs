//! Row-major 2D storage and the read-only view trait shared by the
//! stippling engine and the braille pipeline.

use crate::error::StippleError;

/// Read-only 2D indexable data.
///
/// Implementors compute `at` on demand; nothing requires a backing buffer.
pub trait View2d {
    type Elem: Copy;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Value at `(row, col)`. Callers keep indices inside `rows() x cols()`.
    fn at(&self, row: usize, col: usize) -> Self::Elem;

    /// Extent along `dim` (0 = rows, 1 = cols, anything else = 0).
    fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.rows(),
            1 => self.cols(),
            _ => 0,
        }
    }
}

impl<V: View2d + ?Sized> View2d for &V {
    type Elem = V::Elem;

    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn at(&self, row: usize, col: usize) -> Self::Elem {
        (**self).at(row, col)
    }
}

/// Owned, contiguous, row-major 2D array.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Boolean mask (braille input, stippling output).
pub type Mask = Grid<bool>;

/// Grayscale image, values typically in [0, 1].
pub type Image = Grid<f32>;

impl<T: Copy> Grid<T> {
    /// Create a grid filled with `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, StippleError> {
        if data.len() != rows * cols {
            return Err(StippleError::ShapeMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid from fixed-width rows.
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self {
        Self {
            rows: rows.len(),
            cols: C,
            data: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Fill every cell with `value`, keeping the shape.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Borrow as a [`GridRef`].
    pub fn view(&self) -> GridRef<'_, T> {
        GridRef {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy> View2d for Grid<T> {
    type Elem = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }
}

/// Borrowed row-major 2D view over a caller-owned slice.
#[derive(Debug, Clone, Copy)]
pub struct GridRef<'a, T> {
    rows: usize,
    cols: usize,
    data: &'a [T],
}

impl<'a, T: Copy> GridRef<'a, T> {
    pub fn new(rows: usize, cols: usize, data: &'a [T]) -> Result<Self, StippleError> {
        if data.len() != rows * cols {
            return Err(StippleError::ShapeMismatch {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn to_grid(&self) -> Grid<T> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.to_vec(),
        }
    }
}

impl<T: Copy> View2d for GridRef<'_, T> {
    type Elem = T;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_is_row_major() {
        let grid = Grid::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.at(1, 0), 4);
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Grid::from_vec(2, 2, vec![0.0f32; 3]).unwrap_err();
        assert!(matches!(
            err,
            StippleError::ShapeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2, 2, false);
        assert_eq!(grid.get(1, 1), Some(false));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_extent() {
        let grid = Grid::new(3, 5, 0u8);
        assert_eq!(grid.extent(0), 3);
        assert_eq!(grid.extent(1), 5);
        assert_eq!(grid.extent(2), 0);
        assert!(!grid.is_square());
    }

    #[test]
    fn test_grid_ref_matches_owner() {
        let data = [true, false, false, true];
        let view = GridRef::new(2, 2, &data).unwrap();
        assert!(view.at(0, 0));
        assert!(!view.at(0, 1));
        assert!(view.at(1, 1));
        let owned = Grid::from_rows(&[[true, false], [false, true]]);
        assert_eq!(view.to_grid(), owned);
        assert_eq!(owned.view().as_slice(), &data);
    }

    #[test]
    fn test_view_through_reference() {
        let grid = Grid::from_rows(&[[7u8, 8]]);
        let by_ref: &Grid<u8> = &grid;
        assert_eq!(View2d::at(&by_ref, 0, 1), 8);
        assert_eq!(View2d::cols(&by_ref), 2);
    }
}
