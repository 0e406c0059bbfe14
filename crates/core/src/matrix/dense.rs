//! Borrowed, read-only views over dense `f64` data.
//!
//! Dense data is always **column-major**: element `(i, j)` of a
//! `rows × cols` view lives at offset `i + j * rows`, which is what R and
//! nalgebra both use. A view is a checked (slice, shape) pair; it never copies
//! or allocates.

use std::ops::Index;

use nalgebra::{DMatrixView, DVectorView};

use crate::error::{InvalidView, Result};
use crate::shape::Shape;
use crate::types::{DenseMatrix, DenseVector, Scalar};

/// Read-only view over an externally owned, column-major dense matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseMatrixView<'a> {
    data: &'a [Scalar],
    rows: usize,
    cols: usize,
}

impl<'a> DenseMatrixView<'a> {
    /// Wrap `data` as a `rows × cols` column-major matrix.
    ///
    /// Fails with [`InvalidView::LengthMismatch`] unless
    /// `data.len() == rows * cols`.
    ///
    /// # Examples
    /// ```
    /// use solver_types_core::types::DenseMatrixView;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let m = DenseMatrixView::new(&data, 2, 3).unwrap();
    /// assert_eq!(m[(1, 0)], 2.0);
    /// assert_eq!(m[(0, 1)], 3.0);
    /// assert!(DenseMatrixView::new(&data, 2, 2).is_err());
    /// ```
    pub fn new(data: &'a [Scalar], rows: usize, cols: usize) -> Result<Self> {
        let expected = match Shape::new(rows, cols).checked_len() {
            Some(n) => n,
            None => {
                log::debug!("rejecting dense matrix: {rows}x{cols} overflows");
                return Err(InvalidView::LengthMismatch {
                    expected: usize::MAX,
                    got: data.len(),
                    context: "dense matrix",
                });
            }
        };
        InvalidView::check_len(expected, data.len(), "dense matrix")?;
        log::trace!("dense matrix view {rows}x{cols}");
        Ok(DenseMatrixView { data, rows, cols })
    }

    /// Build a view from a raw pointer handed over by a foreign caller.
    ///
    /// `len` is the caller's buffer length; it must equal `rows * cols`.
    ///
    /// # Safety
    /// `ptr` must either be null (rejected) or point to `len` initialized
    /// `f64` values that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw_parts(
        ptr: *const Scalar,
        len: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        if ptr.is_null() {
            log::debug!("rejecting dense matrix: null data pointer");
            return Err(InvalidView::NullPointer("dense matrix data"));
        }
        let data = std::slice::from_raw_parts(ptr, len);
        Self::new(data, rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of stored elements, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }

    /// Element `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        if row < self.rows && col < self.cols {
            Some(self.data[row + col * self.rows])
        } else {
            None
        }
    }

    /// The contiguous storage of column `col`.
    ///
    /// Panics if `col >= cols`.
    pub fn column(&self, col: usize) -> &'a [Scalar] {
        assert!(col < self.cols, "column index out of bounds");
        let start = col * self.rows;
        &self.data[start..start + self.rows]
    }

    /// The full column-major buffer.
    pub fn as_slice(&self) -> &'a [Scalar] {
        self.data
    }

    /// The same data as a borrowed nalgebra matrix, for solver code.
    pub fn as_nalgebra(&self) -> DMatrixView<'a, Scalar> {
        DMatrixView::from_slice(self.data, self.rows, self.cols)
    }

    /// Deep copy into an owning matrix.
    pub fn clone_owned(&self) -> DenseMatrix {
        DenseMatrix::from_column_slice(self.rows, self.cols, self.data)
    }
}

impl Index<(usize, usize)> for DenseMatrixView<'_> {
    type Output = Scalar;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row + col * self.rows]
    }
}

/// Read-only view over an externally owned dense vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseVectorView<'a> {
    data: &'a [Scalar],
}

impl<'a> DenseVectorView<'a> {
    /// Wrap `data`, checking it against the caller's declared length.
    pub fn new(data: &'a [Scalar], len: usize) -> Result<Self> {
        InvalidView::check_len(len, data.len(), "dense vector")?;
        log::trace!("dense vector view of length {len}");
        Ok(DenseVectorView { data })
    }

    /// Wrap a whole slice; the length is the slice's own.
    pub fn from_slice(data: &'a [Scalar]) -> Self {
        DenseVectorView { data }
    }

    /// Build a view from a raw pointer handed over by a foreign caller.
    ///
    /// # Safety
    /// `ptr` must either be null (rejected) or point to `len` initialized
    /// `f64` values that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw_parts(ptr: *const Scalar, len: usize) -> Result<Self> {
        if ptr.is_null() {
            log::debug!("rejecting dense vector: null data pointer");
            return Err(InvalidView::NullPointer("dense vector data"));
        }
        Ok(Self::from_slice(std::slice::from_raw_parts(ptr, len)))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Scalar> {
        self.data.get(i).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Scalar> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &'a [Scalar] {
        self.data
    }

    /// The same data as a borrowed nalgebra column vector.
    pub fn as_nalgebra(&self) -> DVectorView<'a, Scalar> {
        DVectorView::from_slice(self.data, self.data.len())
    }

    /// Deep copy into an owning vector.
    pub fn clone_owned(&self) -> DenseVector {
        DenseVector::from_column_slice(self.data)
    }
}

impl Index<usize> for DenseVectorView<'_> {
    type Output = Scalar;

    fn index(&self, i: usize) -> &Self::Output {
        &self.data[i]
    }
}

impl<'a> From<&'a [Scalar]> for DenseVectorView<'a> {
    fn from(data: &'a [Scalar]) -> Self {
        DenseVectorView::from_slice(data)
    }
}
