//! Integration test: a call boundary as a foreign caller would drive it.
//!
//! An R-style caller hands over:
//!   X  2x3 dense, column-major [1, 2, 3, 4, 5, 6]
//!        [[1, 3, 5],
//!         [2, 4, 6]]
//!   y  dense vector [0.5, -0.5]
//!   A  3x3 sparse (dgCMatrix slots p, i, x as 32-bit ints)
//!        [[4, 0, 1],
//!         [0, 3, 0],
//!         [1, 0, 2]]
//!
//! The views are built from raw pointers, read, written through, and copied
//! into owning working storage, after which the caller's buffers reflect
//! exactly the writes made through the views.

use approx::assert_relative_eq;

use solver_types_core::mask::{count_selected, select, selected_indices};
use solver_types_core::matrix::{sparse_identity, TripletBuilder};
use solver_types_core::types::{
    DenseMatrixView, DenseVector, DenseVectorView, IndexVector, MaskArray, RealArray,
    SparseMatrixView,
};
use solver_types_core::{InvalidView, OwnedBuffer, Shape};

#[test]
fn test_dense_example_from_raw_parts() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let view = unsafe { DenseMatrixView::from_raw_parts(x.as_ptr(), x.len(), 2, 3) }.unwrap();

    assert_eq!(view.shape(), Shape::new(2, 3));
    assert_eq!(view[(0, 0)], 1.0);
    assert_eq!(view[(1, 0)], 2.0);
    assert_eq!(view[(0, 1)], 3.0);
    assert_eq!(view[(1, 2)], 6.0);

    // Same buffer declared with the wrong shape fails immediately.
    let err = unsafe { DenseMatrixView::from_raw_parts(x.as_ptr(), x.len(), 3, 3) }.unwrap_err();
    assert!(matches!(err, InvalidView::LengthMismatch { expected: 9, got: 6, .. }));
}

#[test]
fn test_views_feed_owning_working_storage() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let y = vec![0.5, -0.5];
    let xv = DenseMatrixView::new(&x, 2, 3).unwrap();
    let yv = DenseVectorView::new(&y, 2).unwrap();

    // Owning copies are independent of the caller's buffers.
    let mut work: DenseVector = yv.clone_owned();
    work[0] = 10.0;
    assert_eq!(y[0], 0.5);
    assert_eq!(yv[0], 0.5);

    // nalgebra views are available to solver code without copying.
    let col_sums: Vec<f64> = (0..xv.cols())
        .map(|j| xv.as_nalgebra().column(j).sum())
        .collect();
    assert_relative_eq!(col_sums[0], 3.0);
    assert_relative_eq!(col_sums[2], 11.0);

    let owned = xv.clone_owned();
    assert_eq!(owned.as_slice(), x.as_slice());
}

#[test]
fn test_sparse_view_writes_reach_caller() {
    let p: Vec<i32> = vec![0, 2, 3, 5];
    let i: Vec<i32> = vec![0, 2, 1, 0, 2];
    let mut x: Vec<f64> = vec![4.0, 1.0, 3.0, 1.0, 2.0];

    {
        let mut a = unsafe {
            SparseMatrixView::from_raw_parts(3, 3, 5, p.as_ptr(), i.as_ptr(), x.as_mut_ptr())
        }
        .unwrap();
        assert_eq!(a.nnz(), 5);
        assert_eq!(a.get(2, 0), Some(1.0));
        assert_eq!(a.get(1, 0), None);

        // Scale the diagonal in place.
        for (row, col, val) in a.iter_mut() {
            if row == col {
                *val *= 2.0;
            }
        }
        let owned = a.to_csmat();
        assert_eq!(owned.get(0, 0), Some(&8.0));
    }

    assert_eq!(x, vec![8.0, 1.0, 6.0, 1.0, 4.0]);
    assert_eq!(p, vec![0, 2, 3, 5]);
}

#[test]
fn test_owning_values_move_and_copy() {
    let mut codes = IndexVector::with_len(4);
    codes[2] = 5;
    let copy = codes.clone();
    codes[2] = 6;
    assert_eq!(copy[2], 5);

    let moved = codes.take_buffer();
    assert_eq!(codes.len(), 0);
    assert_eq!(moved[2], 6);

    let mut weights = RealArray::with_len(2);
    weights.resize_len(4);
    assert_eq!(weights.len(), 4);
    assert!(weights.iter().all(|&w| w == 0.0));
}

#[test]
fn test_mask_selects_active_set() {
    let y = vec![3.0, -1.0, 4.0, -1.5, 9.0];
    let yv = DenseVectorView::from_slice(&y);
    let active: MaskArray = yv.iter().map(|&v| v > 0.0).collect();

    assert_eq!(count_selected(&active), 3);
    assert_eq!(selected_indices(&active).unwrap().as_slice(), &[0, 2, 4]);
    let picked = select(yv, &active).unwrap();
    assert_eq!(picked.to_vec(), vec![3.0, 4.0, 9.0]);
}

#[test]
fn test_owning_sparse_built_from_triplets() {
    let mut b = TripletBuilder::new(3, 3);
    b.try_add(0, 0, 4.0).unwrap();
    b.add_symmetric(0, 2, 1.0).unwrap();
    b.try_add(1, 1, 3.0).unwrap();
    b.try_add(2, 2, 2.0).unwrap();
    let a = b.to_csc();

    // The owning matrix can be viewed again through the catalog's view type.
    let indptr: Vec<usize> = a.indptr().to_proper().to_vec();
    let indices = a.indices().to_vec();
    let mut data = a.data().to_vec();
    let view = SparseMatrixView::new(3, 3, &indptr, &indices, &mut data).unwrap();
    assert_eq!(
        view.iter().collect::<Vec<_>>(),
        vec![
            (0, 0, 4.0),
            (2, 0, 1.0),
            (1, 1, 3.0),
            (0, 2, 1.0),
            (2, 2, 2.0)
        ]
    );

    assert_eq!(sparse_identity(3).nnz(), 3);
}

#[test]
fn test_zero_sized_values_construct() {
    assert_eq!(DenseMatrixView::new(&[], 0, 0).unwrap().len(), 0);
    assert_eq!(DenseVectorView::new(&[], 0).unwrap().len(), 0);
    let colptr = [0i32];
    let mut values: [f64; 0] = [];
    let view = SparseMatrixView::<i32>::new(0, 0, &colptr, &[], &mut values).unwrap();
    assert_eq!(view.nnz(), 0);
    assert!(<DenseVector as OwnedBuffer>::empty().is_empty());
}
