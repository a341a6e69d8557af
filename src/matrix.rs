//! Dense matrices over GF(P) and the linear algebra both decoders rely on
//!
//! Every system the decoders build has a rank that is not known up front, so
//! [`Matrix::solve`] and [`Matrix::kernel`] accept rank-deficient and non-square
//! matrices. Both are driven by a single Gauss-Jordan reduction to reduced row
//! echelon form. Over a finite field there is no notion of magnitude, so the
//! pivot is simply the first nonzero entry in the column.

use crate::error::{Result, RsError};
use crate::galois::Galois;
use log::trace;

/// Row-major matrix of field elements (rows = equations, columns = unknowns)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<const P: u32> {
    rows: usize,
    cols: usize,
    data: Vec<Galois<P>>,
}

impl<const P: u32> Matrix<P> {
    /// Create a new zero matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Galois::ZERO; rows * cols],
        }
    }

    /// Build from a list of equal-length rows
    pub fn from_rows(rows: Vec<Vec<Galois<P>>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(RsError::InvalidParameters(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                cols
            )));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Galois<P> {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Galois<P>) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[Galois<P>] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix-vector product `A * x`
    pub fn mul_vec(&self, x: &[Galois<P>]) -> Result<Vec<Galois<P>>> {
        if x.len() != self.cols {
            return Err(RsError::InvalidParameters(format!(
                "vector of length {} does not match {} columns",
                x.len(),
                self.cols
            )));
        }
        Ok((0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .zip(x)
                    .fold(Galois::ZERO, |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Rank over GF(P)
    pub fn rank(&self) -> Result<usize> {
        let mut reduced = self.clone();
        Ok(reduced.row_reduce(self.cols)?.len())
    }

    /// Reduce in place to reduced row echelon form, considering only the first
    /// `pivot_cols` columns as pivot candidates. Returns the pivot column of
    /// each nonzero row, in row order.
    fn row_reduce(&mut self, pivot_cols: usize) -> Result<Vec<usize>> {
        let mut pivots = Vec::new();
        let mut pivot_row = 0;

        for col in 0..pivot_cols.min(self.cols) {
            if pivot_row == self.rows {
                break;
            }

            // Find pivot
            let Some(found) = (pivot_row..self.rows).find(|&r| !self.get(r, col).is_zero())
            else {
                continue;
            };
            self.swap_rows(pivot_row, found);

            // Scale pivot row
            let pivot_inv = self.get(pivot_row, col).inverse()?;
            for c in col..self.cols {
                let val = self.get(pivot_row, c);
                self.set(pivot_row, c, val * pivot_inv);
            }

            // Eliminate column
            for row in 0..self.rows {
                if row == pivot_row {
                    continue;
                }
                let factor = self.get(row, col);
                if factor.is_zero() {
                    continue;
                }
                for c in col..self.cols {
                    let scaled = factor * self.get(pivot_row, c);
                    let current = self.get(row, c);
                    self.set(row, c, current - scaled);
                }
            }

            pivots.push(col);
            pivot_row += 1;
        }

        Ok(pivots)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// Find one `x` with `A * x = b`.
    ///
    /// Underdetermined systems return the particular solution with every free
    /// variable set to zero. Fails with [`RsError::Inconsistent`] when a row
    /// reduces to `0 = nonzero`.
    pub fn solve(&self, b: &[Galois<P>]) -> Result<Vec<Galois<P>>> {
        if b.len() != self.rows {
            return Err(RsError::InvalidParameters(format!(
                "right-hand side has {} entries for {} equations",
                b.len(),
                self.rows
            )));
        }

        // Augmented matrix [A | b]
        let width = self.cols + 1;
        let mut augmented = Matrix::new(self.rows, width);
        for r in 0..self.rows {
            for c in 0..self.cols {
                augmented.set(r, c, self.get(r, c));
            }
            augmented.set(r, self.cols, b[r]);
        }

        let pivots = augmented.row_reduce(self.cols)?;
        trace!(
            "solve: {}x{} system has rank {}",
            self.rows,
            self.cols,
            pivots.len()
        );

        if let Some(row) =
            (pivots.len()..self.rows).find(|&r| !augmented.get(r, self.cols).is_zero())
        {
            return Err(RsError::Inconsistent { row });
        }

        let mut x = vec![Galois::ZERO; self.cols];
        for (row, &col) in pivots.iter().enumerate() {
            x[col] = augmented.get(row, self.cols);
        }
        Ok(x)
    }

    /// Basis of the right null space `{x : A * x = 0}`.
    ///
    /// One vector per free column, so the basis has `cols - rank` entries. An
    /// empty basis means the null space is trivial.
    pub fn kernel(&self) -> Result<Vec<Vec<Galois<P>>>> {
        let mut reduced = self.clone();
        let pivots = reduced.row_reduce(self.cols)?;

        let mut is_pivot = vec![false; self.cols];
        for &col in &pivots {
            is_pivot[col] = true;
        }

        let basis: Vec<Vec<Galois<P>>> = (0..self.cols)
            .filter(|&free| !is_pivot[free])
            .map(|free| {
                let mut v = vec![Galois::ZERO; self.cols];
                v[free] = Galois::ONE;
                for (row, &col) in pivots.iter().enumerate() {
                    v[col] = -reduced.get(row, free);
                }
                v
            })
            .collect();

        trace!(
            "kernel: {}x{} matrix has rank {}, null space dimension {}",
            self.rows,
            self.cols,
            pivots.len(),
            basis.len()
        );
        Ok(basis)
    }
}
