//! Toroidal 2D roll of a square row-major grid.

use rayon::prelude::*;

use crate::error::StippleError;
use crate::grid::Grid;

/// Return `mat` cyclically shifted by `dx` rows and `dy` columns:
/// `result[i, j] = mat[(i - dx) mod n, (j - dy) mod n]`.
pub fn roll_2d(mat: &Grid<f32>, dx: usize, dy: usize) -> Result<Grid<f32>, StippleError> {
    let mut out = Grid::new(mat.rows(), mat.cols(), 0.0);
    roll_2d_into(mat, dx, dy, &mut out)?;
    Ok(out)
}

/// Same as [`roll_2d`], writing into `out` (resized to match `mat`).
///
/// Each destination row is an independent pair of contiguous copies, so
/// rows are filled in parallel.
///
/// # Arguments
/// * `mat` - Square source grid
/// * `dx` - Row shift, taken modulo the size
/// * `dy` - Column shift, taken modulo the size
/// * `out` - Destination; reallocated only when its shape differs
///
/// # Returns
/// `NotSquare` if `mat` is not square.
pub fn roll_2d_into(
    mat: &Grid<f32>,
    dx: usize,
    dy: usize,
    out: &mut Grid<f32>,
) -> Result<(), StippleError> {
    if !mat.is_square() {
        return Err(StippleError::NotSquare {
            rows: mat.rows(),
            cols: mat.cols(),
        });
    }

    let n = mat.rows();
    if out.rows() != n || out.cols() != n {
        *out = Grid::new(n, n, 0.0);
    }
    if n == 0 {
        return Ok(());
    }

    let dx = dx % n;
    let dy = dy % n;
    let cut = n - dy;
    let src = mat.as_slice();

    out.as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(dst_row, dst)| {
            let src_row = (dst_row + n - dx) % n;
            let src = &src[src_row * n..(src_row + 1) * n];
            // tail -> head, then head -> remainder
            dst[..dy].copy_from_slice(&src[cut..]);
            dst[dy..].copy_from_slice(&src[..cut]);
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::View2d;

    fn numbered(n: usize) -> Grid<f32> {
        Grid::from_vec(n, n, (0..n * n).map(|v| v as f32).collect()).unwrap()
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let mat = numbered(4);
        assert_eq!(roll_2d(&mat, 0, 0).unwrap(), mat);
    }

    #[test]
    fn test_roll_matches_definition() {
        let n = 5;
        let mat = numbered(n);
        for dx in 0..n {
            for dy in 0..n {
                let rolled = roll_2d(&mat, dx, dy).unwrap();
                for i in 0..n {
                    for j in 0..n {
                        let si = (i + n - dx) % n;
                        let sj = (j + n - dy) % n;
                        assert_eq!(rolled.at(i, j), mat.at(si, sj), "dx={dx} dy={dy} ({i},{j})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_shift_is_reduced_modulo_n() {
        let mat = numbered(4);
        assert_eq!(roll_2d(&mat, 9, 6).unwrap(), roll_2d(&mat, 1, 2).unwrap());
    }

    #[test]
    fn test_origin_moves_to_shift() {
        let mut mat = Grid::new(6, 6, 0.0);
        mat.set(0, 0, f32::INFINITY);
        let rolled = roll_2d(&mat, 4, 1).unwrap();
        assert_eq!(rolled.at(4, 1), f32::INFINITY);
        assert_eq!(
            rolled.as_slice().iter().filter(|v| v.is_infinite()).count(),
            1
        );
    }

    #[test]
    fn test_rejects_non_square() {
        let mat = Grid::new(2, 3, 0.0);
        assert_eq!(
            roll_2d(&mat, 1, 1).unwrap_err(),
            StippleError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_into_resizes_scratch() {
        let mat = numbered(3);
        let mut out = Grid::new(1, 1, 0.0);
        roll_2d_into(&mat, 1, 0, &mut out).unwrap();
        assert_eq!(out.rows(), 3);
        assert_eq!(out.row(0), mat.row(2));
    }

    #[test]
    fn test_empty_grid() {
        let mat = Grid::new(0, 0, 0.0);
        assert!(roll_2d(&mat, 3, 3).unwrap().is_empty());
    }
}
