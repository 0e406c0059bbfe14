use sprs::TriMat;

use crate::error::{InvalidView, Result};
use crate::shape::Shape;
use crate::types::{Scalar, SparseMat};

/// Incremental builder for an owning sparse matrix, using triplet (COO)
/// format.
///
/// Duplicate entries at the same (row, col) are summed when converting to
/// CSC.
#[derive(Debug)]
pub struct TripletBuilder {
    triplet: TriMat<Scalar>,
}

impl TripletBuilder {
    /// Create a new builder for a matrix of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            triplet: TriMat::new((rows, cols)),
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows() {
            log::debug!("rejecting triplet row: {row} >= {}", self.rows());
            return Err(InvalidView::IndexOutOfBounds {
                index: row,
                bound: self.rows(),
                context: "triplet row",
            });
        }
        if col >= self.cols() {
            log::debug!("rejecting triplet column: {col} >= {}", self.cols());
            return Err(InvalidView::IndexOutOfBounds {
                index: col,
                bound: self.cols(),
                context: "triplet column",
            });
        }
        Ok(())
    }

    /// Add a value at (row, col). Duplicate entries will be summed.
    pub fn try_add(&mut self, row: usize, col: usize, val: Scalar) -> Result<()> {
        self.check_bounds(row, col)?;
        self.triplet.add_triplet(row, col, val);
        Ok(())
    }

    /// Add a symmetric entry: inserts at both (row, col) and (col, row).
    /// If row == col, only one entry is added.
    pub fn add_symmetric(&mut self, row: usize, col: usize, val: Scalar) -> Result<()> {
        self.check_bounds(row, col)?;
        self.check_bounds(col, row)?;
        self.triplet.add_triplet(row, col, val);
        if row != col {
            self.triplet.add_triplet(col, row, val);
        }
        Ok(())
    }

    /// Number of triplets added so far (duplicates counted separately).
    pub fn nnz(&self) -> usize {
        self.triplet.nnz()
    }

    /// Convert to a CSC (Compressed Sparse Column) matrix.
    /// Duplicate entries are summed.
    pub fn to_csc(&self) -> SparseMat {
        self.triplet.to_csc()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.triplet.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.triplet.cols()
    }

    pub fn shape(&self) -> Shape {
        self.triplet.shape().into()
    }
}

/// Create a sparse identity matrix of dimension n in CSC format.
pub fn sparse_identity(n: usize) -> SparseMat {
    sparse_diagonal(&vec![1.0; n])
}

/// Create a sparse diagonal matrix from a slice of diagonal values.
pub fn sparse_diagonal(diag: &[Scalar]) -> SparseMat {
    let n = diag.len();
    let mut tri = TriMat::new((n, n));
    for (i, &val) in diag.iter().enumerate() {
        tri.add_triplet(i, i, val);
    }
    tri.to_csc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_triplet_builder_basic() {
        let mut builder = TripletBuilder::new(3, 3);
        builder.try_add(0, 0, 1.0).unwrap();
        builder.try_add(1, 1, 2.0).unwrap();
        builder.try_add(2, 2, 3.0).unwrap();
        assert_eq!(builder.nnz(), 3);
        assert_eq!(builder.shape(), Shape::new(3, 3));
        let mat = builder.to_csc();
        assert!(mat.is_csc());
        assert_eq!(mat.rows(), 3);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat.nnz(), 3);
    }

    #[test]
    fn test_triplet_duplicate_summing() {
        let mut builder = TripletBuilder::new(2, 2);
        builder.try_add(0, 0, 1.5).unwrap();
        builder.try_add(0, 0, 2.5).unwrap(); // should sum to 4.0
        let mat = builder.to_csc();
        assert_eq!(mat.nnz(), 1);
        assert_relative_eq!(*mat.get(0, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_triplet_out_of_bounds() {
        let mut builder = TripletBuilder::new(2, 3);
        let err = builder.try_add(2, 0, 1.0).unwrap_err();
        assert_eq!(
            err,
            InvalidView::IndexOutOfBounds {
                index: 2,
                bound: 2,
                context: "triplet row"
            }
        );
        assert!(builder.try_add(0, 3, 1.0).is_err());
        // (0, 2) fits but its mirror (2, 0) does not.
        assert!(builder.add_symmetric(0, 2, 1.0).is_err());
        assert_eq!(builder.nnz(), 0);
    }

    #[test]
    fn test_triplet_symmetric() {
        let mut builder = TripletBuilder::new(3, 3);
        builder.add_symmetric(0, 1, 5.0).unwrap();
        builder.add_symmetric(2, 2, 3.0).unwrap(); // diagonal: should not double
        let mat = builder.to_csc();
        assert_eq!(mat.nnz(), 3);
        assert_eq!(mat.get(0, 1), Some(&5.0));
        assert_eq!(mat.get(1, 0), Some(&5.0));
        assert_eq!(mat.get(2, 2), Some(&3.0));
    }

    #[test]
    fn test_sparse_identity() {
        let eye = sparse_identity(4);
        assert_eq!(eye.rows(), 4);
        assert_eq!(eye.cols(), 4);
        assert_eq!(eye.nnz(), 4);
        for i in 0..4 {
            assert_eq!(eye.get(i, i), Some(&1.0));
        }
    }

    #[test]
    fn test_sparse_diagonal() {
        let d = sparse_diagonal(&[2.0, 3.0, 5.0]);
        assert_eq!(d.nnz(), 3);
        assert_eq!(d.get(1, 1), Some(&3.0));
        assert_eq!(d.get(0, 1), None);
    }
}
