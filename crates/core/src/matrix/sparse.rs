//! Borrowed views over externally owned sparse storage.
//!
//! A [`SparseMatrixView`] borrows the three compressed-sparse-column arrays
//! (column pointers, row indices, values) exactly as a foreign caller laid
//! them out; R's `dgCMatrix` slots `p`, `i` and `x` map onto it directly.
//! The structure is read-only, the values are writable in place.
//!
//! Construction checks the whole structure once. Every accessor after that
//! relies on it: column pointers start at zero and never decrease, row
//! indices are in bounds and strictly ascending within each column.

use crate::error::{InvalidView, Result};
use crate::index::StorageIndex;
use crate::shape::Shape;
use crate::types::{DenseMatrix, DenseVector, Scalar, SparseMat, SparseVec};

/// Check a strictly ascending run of indices, each `< bound`.
fn check_index_run<I: StorageIndex>(
    indices: &[I],
    offset: usize,
    bound: usize,
    context: &'static str,
) -> Result<()> {
    let mut prev: Option<usize> = None;
    for (k, &raw) in indices.iter().enumerate() {
        let position = offset + k;
        let Some(index) = raw.try_index() else {
            log::debug!("rejecting {context}: negative index {raw:?} at {position}");
            return Err(InvalidView::NegativeIndex { position, context });
        };
        if index >= bound {
            log::debug!("rejecting {context}: index {index} >= {bound} at {position}");
            return Err(InvalidView::IndexOutOfBounds {
                index,
                bound,
                context,
            });
        }
        if prev.is_some_and(|p| index <= p) {
            log::debug!("rejecting {context}: indices not ascending at {position}");
            return Err(InvalidView::UnsortedIndices { position, context });
        }
        prev = Some(index);
    }
    Ok(())
}

/// `cols + 1`, the length of a CSC column-pointer array.
fn column_pointer_len(cols: usize) -> Result<usize> {
    cols.checked_add(1).ok_or_else(|| {
        log::debug!("rejecting sparse matrix: {cols} columns overflows");
        InvalidView::MalformedColumnPointers(format!("{cols} columns overflows"))
    })
}

/// Check column pointers and return the number of stored entries.
fn check_column_pointers<I: StorageIndex>(colptr: &[I], cols: usize) -> Result<usize> {
    let expected = column_pointer_len(cols)?;
    InvalidView::check_len(expected, colptr.len(), "sparse matrix column pointers")?;

    let mut prev = 0usize;
    for (position, &raw) in colptr.iter().enumerate() {
        let Some(ptr) = raw.try_index() else {
            log::debug!("rejecting sparse matrix: negative column pointer at {position}");
            return Err(InvalidView::NegativeIndex {
                position,
                context: "sparse matrix column pointers",
            });
        };
        if position == 0 && ptr != 0 {
            log::debug!("rejecting sparse matrix: first column pointer is {ptr}");
            return Err(InvalidView::MalformedColumnPointers(format!(
                "first column pointer must be 0, got {ptr}"
            )));
        }
        if ptr < prev {
            log::debug!("rejecting sparse matrix: column pointers decrease at {position}");
            return Err(InvalidView::MalformedColumnPointers(format!(
                "column pointers decrease at position {position} ({prev} -> {ptr})"
            )));
        }
        prev = ptr;
    }
    Ok(prev)
}

/// Mutable-value view over an externally owned CSC matrix.
///
/// `I` is the caller's index type (`i32` for R, `usize` by default).
#[derive(Debug)]
pub struct SparseMatrixView<'a, I: StorageIndex = usize> {
    rows: usize,
    cols: usize,
    colptr: &'a [I],
    rowind: &'a [I],
    values: &'a mut [Scalar],
}

impl<'a, I: StorageIndex> SparseMatrixView<'a, I> {
    /// Wrap CSC arrays describing a `rows × cols` matrix.
    ///
    /// `colptr` has `cols + 1` entries; column `j` owns positions
    /// `colptr[j]..colptr[j + 1]` of `rowind` and `values`.
    ///
    /// # Examples
    /// ```
    /// use solver_types_core::types::SparseMatrixView;
    ///
    /// // [[1, 0, 2], [0, 3, 0]]
    /// let colptr = [0i32, 1, 2, 3];
    /// let rowind = [0i32, 1, 0];
    /// let mut values = [1.0, 3.0, 2.0];
    /// let view = SparseMatrixView::new(2, 3, &colptr, &rowind, &mut values).unwrap();
    /// let triples: Vec<_> = view.iter().collect();
    /// assert_eq!(triples, vec![(0, 0, 1.0), (1, 1, 3.0), (0, 2, 2.0)]);
    /// ```
    pub fn new(
        rows: usize,
        cols: usize,
        colptr: &'a [I],
        rowind: &'a [I],
        values: &'a mut [Scalar],
    ) -> Result<Self> {
        let nnz = check_column_pointers(colptr, cols)?;
        InvalidView::check_len(nnz, rowind.len(), "sparse matrix row indices")?;
        InvalidView::check_len(nnz, values.len(), "sparse matrix values")?;

        for j in 0..cols {
            let start = colptr[j].index();
            let end = colptr[j + 1].index();
            check_index_run(&rowind[start..end], start, rows, "sparse matrix row indices")?;
        }

        log::trace!("sparse matrix view {rows}x{cols} with {nnz} entries");
        Ok(SparseMatrixView {
            rows,
            cols,
            colptr,
            rowind,
            values,
        })
    }

    /// Build a view from raw CSC pointers handed over by a foreign caller.
    ///
    /// # Safety
    /// Each pointer must either be null (rejected) or point to initialized
    /// memory of the stated length: `cols + 1` for `colptr`, `nnz` for
    /// `rowind` and `values`. The memory must stay valid for `'a`, and
    /// nothing else may access `values` while the view exists.
    pub unsafe fn from_raw_parts(
        rows: usize,
        cols: usize,
        nnz: usize,
        colptr: *const I,
        rowind: *const I,
        values: *mut Scalar,
    ) -> Result<Self> {
        if colptr.is_null() {
            log::debug!("rejecting sparse matrix: null column pointer array");
            return Err(InvalidView::NullPointer("sparse matrix column pointers"));
        }
        if rowind.is_null() {
            log::debug!("rejecting sparse matrix: null row index array");
            return Err(InvalidView::NullPointer("sparse matrix row indices"));
        }
        if values.is_null() {
            log::debug!("rejecting sparse matrix: null values array");
            return Err(InvalidView::NullPointer("sparse matrix values"));
        }
        let ncolptr = column_pointer_len(cols)?;
        let colptr = std::slice::from_raw_parts(colptr, ncolptr);
        let rowind = std::slice::from_raw_parts(rowind, nnz);
        let values = std::slice::from_raw_parts_mut(values, nnz);
        Self::new(rows, cols, colptr, rowind, values)
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

    /// Number of structurally stored entries, `colptr[cols]`.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn colptr(&self) -> &[I] {
        self.colptr
    }

    pub fn rowind(&self) -> &[I] {
        self.rowind
    }

    pub fn values(&self) -> &[Scalar] {
        &*self.values
    }

    pub fn values_mut(&mut self) -> &mut [Scalar] {
        &mut *self.values
    }

    fn column_range(&self, col: usize) -> std::ops::Range<usize> {
        self.colptr[col].index()..self.colptr[col + 1].index()
    }

    /// Stored entries as `(row, col, value)`, in storage order: ascending
    /// column, then ascending row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Scalar)> + '_ {
        (0..self.cols).flat_map(move |col| {
            self.column_range(col)
                .map(move |k| (self.rowind[k].index(), col, self.values[k]))
        })
    }

    /// Like [`iter`](Self::iter), yielding writable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, I> {
        IterMut {
            colptr: self.colptr,
            rowind: self.rowind,
            values: self.values.iter_mut(),
            pos: 0,
            col: 0,
        }
    }

    /// Stored entries of one column as `(row, value)`.
    ///
    /// Panics if `col >= cols`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, Scalar)> + '_ {
        assert!(col < self.cols, "column index out of bounds");
        self.column_range(col)
            .map(move |k| (self.rowind[k].index(), self.values[k]))
    }

    fn position(&self, row: usize, col: usize) -> Option<usize> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let range = self.column_range(col);
        let start = range.start;
        self.rowind[range]
            .binary_search_by(|r| r.index().cmp(&row))
            .ok()
            .map(|k| start + k)
    }

    /// The stored value at `(row, col)`; `None` if it is not stored.
    pub fn get(&self, row: usize, col: usize) -> Option<Scalar> {
        self.position(row, col).map(|k| self.values[k])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Scalar> {
        let k = self.position(row, col)?;
        Some(&mut self.values[k])
    }

    /// Copy into an owning sprs matrix (CSC).
    pub fn to_csmat(&self) -> SparseMat {
        let indptr: Vec<usize> = self.colptr.iter().map(|p| p.index()).collect();
        let indices: Vec<usize> = self.rowind.iter().map(|r| r.index()).collect();
        SparseMat::new_csc(self.shape().into(), indptr, indices, self.values.to_vec())
    }

    /// Copy into an owning dense matrix; unstored entries are zero.
    pub fn to_dense(&self) -> DenseMatrix {
        let mut dense = DenseMatrix::zeros(self.rows, self.cols);
        for (row, col, val) in self.iter() {
            dense[(row, col)] = val;
        }
        dense
    }
}

/// Iterator returned by [`SparseMatrixView::iter_mut`].
pub struct IterMut<'b, I: StorageIndex> {
    colptr: &'b [I],
    rowind: &'b [I],
    values: std::slice::IterMut<'b, Scalar>,
    pos: usize,
    col: usize,
}

impl<'b, I: StorageIndex> Iterator for IterMut<'b, I> {
    type Item = (usize, usize, &'b mut Scalar);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.values.next()?;
        // Skip empty columns; terminates because pos < colptr[cols].
        while self.colptr[self.col + 1].index() <= self.pos {
            self.col += 1;
        }
        let row = self.rowind[self.pos].index();
        self.pos += 1;
        Some((row, self.col, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

/// Mutable-value view over an externally owned sparse vector of logical
/// length `len`, stored as ascending `(index, value)` pairs.
#[derive(Debug)]
pub struct SparseVectorView<'a, I: StorageIndex = usize> {
    len: usize,
    indices: &'a [I],
    values: &'a mut [Scalar],
}

impl<'a, I: StorageIndex> SparseVectorView<'a, I> {
    pub fn new(len: usize, indices: &'a [I], values: &'a mut [Scalar]) -> Result<Self> {
        InvalidView::check_len(indices.len(), values.len(), "sparse vector values")?;
        check_index_run(indices, 0, len, "sparse vector indices")?;
        log::trace!("sparse vector view of length {len} with {} entries", values.len());
        Ok(SparseVectorView {
            len,
            indices,
            values,
        })
    }

    /// Build a view from raw pointers handed over by a foreign caller.
    ///
    /// # Safety
    /// Both pointers must either be null (rejected) or point to `nnz`
    /// initialized elements valid for `'a`, and nothing else may access
    /// `values` while the view exists.
    pub unsafe fn from_raw_parts(
        len: usize,
        nnz: usize,
        indices: *const I,
        values: *mut Scalar,
    ) -> Result<Self> {
        if indices.is_null() {
            log::debug!("rejecting sparse vector: null index array");
            return Err(InvalidView::NullPointer("sparse vector indices"));
        }
        if values.is_null() {
            log::debug!("rejecting sparse vector: null values array");
            return Err(InvalidView::NullPointer("sparse vector values"));
        }
        let indices = std::slice::from_raw_parts(indices, nnz);
        let values = std::slice::from_raw_parts_mut(values, nnz);
        Self::new(len, indices, values)
    }

    /// Logical length, including unstored positions.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn indices(&self) -> &[I] {
        self.indices
    }

    pub fn values(&self) -> &[Scalar] {
        &*self.values
    }

    pub fn values_mut(&mut self) -> &mut [Scalar] {
        &mut *self.values
    }

    /// Stored entries as `(index, value)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Scalar)> + '_ {
        self.indices
            .iter()
            .zip(self.values.iter())
            .map(|(i, &v)| (i.index(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut Scalar)> + '_ {
        self.indices
            .iter()
            .zip(self.values.iter_mut())
            .map(|(i, v)| (i.index(), v))
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.indices
            .binary_search_by(|i| i.index().cmp(&index))
            .ok()
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.position(index).map(|k| self.values[k])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Scalar> {
        let k = self.position(index)?;
        Some(&mut self.values[k])
    }

    /// Copy into an owning sprs vector.
    pub fn to_csvec(&self) -> SparseVec {
        let indices: Vec<usize> = self.indices.iter().map(|i| i.index()).collect();
        SparseVec::new(self.len, indices, self.values.to_vec())
    }

    /// Copy into an owning dense vector; unstored entries are zero.
    pub fn to_dense(&self) -> DenseVector {
        let mut dense = DenseVector::zeros(self.len);
        for (i, val) in self.iter() {
            dense[i] = val;
        }
        dense
    }
}
