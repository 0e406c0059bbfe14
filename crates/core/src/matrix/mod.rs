pub mod dense;
pub mod sparse;
pub mod triplet;

#[cfg(feature = "faer")]
mod faer_interop;

pub use dense::{DenseMatrixView, DenseVectorView};
pub use sparse::{SparseMatrixView, SparseVectorView};
pub use triplet::{sparse_diagonal, sparse_identity, TripletBuilder};
