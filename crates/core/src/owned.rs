//! The contract shared by the owning 1-D types of the catalog.
//!
//! [`DenseVector`](crate::types::DenseVector),
//! [`IndexVector`](crate::types::IndexVector),
//! [`RealArray`](crate::types::RealArray) and
//! [`MaskArray`](crate::types::MaskArray) are plain nalgebra / ndarray
//! values. `Clone` is already a deep copy and a Rust move already transfers
//! the buffer; [`OwnedBuffer`] adds the remaining operations solver code
//! relies on, with the same meaning for all four.

use nalgebra::DVector;
use ndarray::Array1;

/// Owning, resizable, one-dimensional numeric buffer.
///
/// Sized construction and growth fill new slots with `T::default()`, i.e.
/// `0.0`, `0` or `false`. Nothing is ever left uninitialized.
pub trait OwnedBuffer: Clone {
    type Elem;

    /// A zero-length buffer.
    fn empty() -> Self;

    /// A buffer of `len` default (zero) elements.
    fn with_len(len: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element `i`, or `None` when out of bounds.
    fn get(&self, i: usize) -> Option<&Self::Elem>;

    fn get_mut(&mut self, i: usize) -> Option<&mut Self::Elem>;

    /// Change the length to `len`, keeping the common prefix and filling new
    /// slots with the default element.
    fn resize_len(&mut self, len: usize);

    fn to_vec(&self) -> Vec<Self::Elem>;

    /// Move the buffer out, leaving an empty buffer in its place.
    fn take_buffer(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }
}

impl<T> OwnedBuffer for DVector<T>
where
    T: nalgebra::Scalar + Default,
{
    type Elem = T;

    fn empty() -> Self {
        DVector::from_vec(Vec::new())
    }

    fn with_len(len: usize) -> Self {
        DVector::from_element(len, T::default())
    }

    fn len(&self) -> usize {
        self.nrows()
    }

    fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    fn resize_len(&mut self, len: usize) {
        self.resize_vertically_mut(len, T::default());
    }

    fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T> OwnedBuffer for Array1<T>
where
    T: Clone + Default,
{
    type Elem = T;

    fn empty() -> Self {
        Array1::from_vec(Vec::new())
    }

    fn with_len(len: usize) -> Self {
        Array1::from_elem(len, T::default())
    }

    fn len(&self) -> usize {
        self.dim()
    }

    fn get(&self, i: usize) -> Option<&T> {
        ndarray::ArrayBase::get(self, i)
    }

    fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        ndarray::ArrayBase::get_mut(self, i)
    }

    fn resize_len(&mut self, len: usize) {
        let mut data: Vec<T> = self.iter().cloned().collect();
        data.resize(len, T::default());
        *self = Array1::from_vec(data);
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
