use thiserror::Error;

/// The single failure mode of this crate: a view (or an owning value built
/// from borrowed parts) was handed data whose declared shape does not match
/// what was supplied.
///
/// Every variant is raised synchronously at construction time. Nothing is
/// ever truncated or padded to make a mismatched buffer fit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidView {
    #[error("Null pointer passed for {0}")]
    NullPointer(&'static str),

    #[error("Length mismatch: expected {expected}, got {got} in {context}")]
    LengthMismatch {
        expected: usize,
        got: usize,
        context: &'static str,
    },

    #[error("Malformed column pointers: {0}")]
    MalformedColumnPointers(String),

    #[error("Negative or unrepresentable index at position {position} in {context}")]
    NegativeIndex {
        position: usize,
        context: &'static str,
    },

    #[error("Index {index} out of bounds for dimension {bound} in {context}")]
    IndexOutOfBounds {
        index: usize,
        bound: usize,
        context: &'static str,
    },

    #[error("Indices not strictly ascending at position {position} in {context}")]
    UnsortedIndices {
        position: usize,
        context: &'static str,
    },

    #[error("Sparse backend rejected the view: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, InvalidView>;

impl InvalidView {
    /// Length check shared by every constructor: `got` must equal `expected`.
    pub(crate) fn check_len(expected: usize, got: usize, context: &'static str) -> Result<()> {
        if expected == got {
            Ok(())
        } else {
            log::debug!("rejecting {context}: expected length {expected}, got {got}");
            Err(InvalidView::LengthMismatch {
                expected,
                got,
                context,
            })
        }
    }
}
