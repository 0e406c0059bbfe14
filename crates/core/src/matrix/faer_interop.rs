//! Hand-off from borrowed CSC views to the faer sparse backend.
//!
//! Only compiled with the `faer` feature. Solver code that factorizes with
//! faer gets an owning `SparseColMat` copied from a view that has already
//! passed construction checks.

use faer::sparse::{CreationError, SparseColMat};

use crate::error::{InvalidView, Result};
use crate::index::StorageIndex;
use crate::matrix::sparse::SparseMatrixView;

impl<I: StorageIndex> SparseMatrixView<'_, I> {
    /// Copy the view into faer's `SparseColMat<usize, f64>`.
    pub fn to_faer(&self) -> Result<SparseColMat<usize, f64>> {
        let triplets: Vec<(usize, usize, f64)> = self.iter().collect();

        match SparseColMat::<usize, f64>::try_new_from_triplets(
            self.rows(),
            self.cols(),
            &triplets,
        ) {
            Ok(mat) => Ok(mat),
            Err(CreationError::Generic(e)) => Err(InvalidView::Backend(format!(
                "failed to create faer sparse matrix: {e:?}"
            ))),
            Err(CreationError::OutOfBounds { row, col }) => Err(InvalidView::Backend(format!(
                "index out of bounds: row={row}, col={col}"
            ))),
        }
    }
}
