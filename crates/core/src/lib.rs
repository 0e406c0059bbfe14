//! Numeric view and value types shared by solver code.
//!
//! Buffers arriving from a foreign caller are wrapped in checked, borrowed
//! views ([`types::DenseMatrixView`], [`types::SparseMatrixView`], ...);
//! working storage uses the owning types ([`types::DenseVector`],
//! [`types::MaskArray`], ...). See [`types`] for the full catalog.

pub mod error;
pub mod index;
pub mod mask;
pub mod matrix;
pub mod owned;
pub mod shape;
pub mod types;

pub use error::{InvalidView, Result};
pub use index::StorageIndex;
pub use owned::OwnedBuffer;
pub use shape::Shape;
