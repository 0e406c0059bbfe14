use std::fmt;

/// Dimensions of a matrix-shaped value, `rows × cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Number of element positions, or `None` if `rows * cols` overflows.
    pub fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape { rows, cols }
    }
}

impl From<Shape> for (usize, usize) {
    fn from(shape: Shape) -> Self {
        (shape.rows, shape.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_len() {
        assert_eq!(Shape::new(2, 3).checked_len(), Some(6));
        assert_eq!(Shape::new(0, 3).checked_len(), Some(0));
        assert_eq!(Shape::new(usize::MAX, 2).checked_len(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(Shape::new(0, 5).is_empty());
        assert!(Shape::new(5, 0).is_empty());
        assert!(!Shape::new(1, 1).is_empty());
    }

    #[test]
    fn test_tuple_conversion_and_display() {
        let shape: Shape = (4, 2).into();
        assert_eq!(shape, Shape::new(4, 2));
        assert_eq!(<(usize, usize)>::from(shape), (4, 2));
        assert_eq!(shape.to_string(), "4x2");
    }
}
