//! Helpers for boolean selection masks.
//!
//! A [`MaskArray`] marks which positions of a same-length vector take part in
//! a computation (e.g. the active set of a solver). Masks combine with the
//! elementwise operators ndarray already provides (`&a & &b`, `&a | &b`,
//! `!a`).

use crate::error::{InvalidView, Result};
use crate::index::StorageIndex;
use crate::matrix::dense::DenseVectorView;
use crate::types::{IndexVector, MaskArray, RealArray};

/// Number of `true` entries.
pub fn count_selected(mask: &MaskArray) -> usize {
    mask.iter().filter(|&&selected| selected).count()
}

/// Positions of the `true` entries, ascending.
///
/// Fails if a position does not fit in `i32`.
pub fn selected_indices(mask: &MaskArray) -> Result<IndexVector> {
    let mut positions = Vec::with_capacity(count_selected(mask));
    for (i, &selected) in mask.iter().enumerate() {
        if selected {
            let Some(pos) = i32::from_index(i) else {
                log::debug!("rejecting selected indices: position {i} does not fit in i32");
                return Err(InvalidView::IndexOutOfBounds {
                    index: i,
                    bound: i32::MAX as usize,
                    context: "selected indices",
                });
            };
            positions.push(pos);
        }
    }
    Ok(IndexVector::from_vec(positions))
}

/// Gather the elements of `values` where `mask` is `true`.
///
/// `values` and `mask` must have the same length.
pub fn select(values: DenseVectorView<'_>, mask: &MaskArray) -> Result<RealArray> {
    InvalidView::check_len(values.len(), mask.len(), "selection mask")?;
    Ok(values
        .iter()
        .zip(mask.iter())
        .filter(|(_, &selected)| selected)
        .map(|(&v, _)| v)
        .collect())
}

/// Build a mask of length `len` with `true` at each of `indices`.
///
/// Indices may repeat and need not be sorted, but each must be `< len`.
pub fn mask_from_indices<I: StorageIndex>(len: usize, indices: &[I]) -> Result<MaskArray> {
    let mut mask = MaskArray::from_elem(len, false);
    for (position, &raw) in indices.iter().enumerate() {
        let Some(index) = raw.try_index() else {
            log::debug!("rejecting mask indices: negative index {raw:?} at {position}");
            return Err(InvalidView::NegativeIndex {
                position,
                context: "mask indices",
            });
        };
        if index >= len {
            log::debug!("rejecting mask indices: index {index} >= {len} at {position}");
            return Err(InvalidView::IndexOutOfBounds {
                index,
                bound: len,
                context: "mask indices",
            });
        }
        mask[index] = true;
    }
    Ok(mask)
}
