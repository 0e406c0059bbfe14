/// Integer types accepted as row / column indices by the sparse views.
///
/// Foreign callers rarely hand over `usize`: R stores compressed-column
/// pointers and row indices as 32-bit signed integers. Views keep the
/// caller's index type and convert on access, so construction never copies.
pub trait StorageIndex: Copy + std::fmt::Debug + 'static {
    /// Convert to `usize`, or `None` for negative / unrepresentable values.
    fn try_index(self) -> Option<usize>;

    /// Convert to `usize` for an index already known to be valid.
    ///
    /// Only called on indices that passed `try_index` during view
    /// construction.
    fn index(self) -> usize;

    /// Convert a `usize` back into this index type.
    fn from_index(ind: usize) -> Option<Self>;
}

macro_rules! impl_storage_index {
    ($($t:ty),*) => {
        $(
            impl StorageIndex for $t {
                #[inline]
                fn try_index(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn index(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_index(ind: usize) -> Option<Self> {
                    <$t>::try_from(ind).ok()
                }
            }
        )*
    };
}

impl_storage_index!(usize, u32, i32, i64);
