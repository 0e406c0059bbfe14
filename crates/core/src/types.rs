//! The type catalog shared by solver code.
//!
//! Every parameter a solver takes can be described by four properties:
//! dense or sparse, borrowed or owning, element type, and matrix-algebra
//! versus elementwise semantics. Each name below fixes all four.
//!
//! | Name | Storage | Ownership | Element |
//! |---|---|---|---|
//! | [`DenseMatrixView`] | dense, column-major | borrowed, read-only | `f64` |
//! | [`DenseVectorView`] | dense | borrowed, read-only | `f64` |
//! | [`SparseMatrixView`] | compressed sparse column | borrowed, values writable | `f64` |
//! | [`SparseVectorView`] | index/value pairs | borrowed, values writable | `f64` |
//! | [`DenseVector`] | dense | owned | `f64` |
//! | [`IndexVector`] | dense | owned | `i32` |
//! | [`RealArray`] | dense, elementwise | owned | `f64` |
//! | [`MaskArray`] | dense, elementwise | owned | `bool` |

/// The scalar type used throughout the library.
pub type Scalar = f64;

pub use crate::matrix::dense::{DenseMatrixView, DenseVectorView};
pub use crate::matrix::sparse::{SparseMatrixView, SparseVectorView};

/// Owning dense matrix type (column-major).
pub type DenseMatrix = nalgebra::DMatrix<Scalar>;

/// Owning dense vector type.
pub type DenseVector = nalgebra::DVector<Scalar>;

/// Owning integer vector type, e.g. level codes or selected positions.
pub type IndexVector = nalgebra::DVector<i32>;

/// Owning real array with elementwise semantics.
pub type RealArray = ndarray::Array1<Scalar>;

/// Owning boolean array, typically a selection mask.
pub type MaskArray = ndarray::Array1<bool>;

/// Owning sparse matrix type (CSC format).
pub type SparseMat = sprs::CsMat<Scalar>;

/// Owning sparse vector type.
pub type SparseVec = sprs::CsVec<Scalar>;
