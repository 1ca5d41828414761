use super::Vector;

/// Position-based cursor over a [`Vector`].
///
/// Unlike a plain slice iterator it can look at the current item without
/// consuming it and can be rewound to the start.
#[derive(Debug, Clone)]
pub struct VectorIter<'a, T> {
    vector: &'a Vector<T>,
    index: usize,
}

impl<'a, T> VectorIter<'a, T> {
    pub(super) fn new(vector: &'a Vector<T>) -> Self {
        Self { vector, index: 0 }
    }

    /// Current item without advancing.
    pub fn peek(&self) -> Option<&'a T> {
        self.vector.get(self.index)
    }

    /// Returns true if `next` would yield an item.
    pub fn has_next(&self) -> bool {
        self.index < self.vector.len()
    }

    /// Rewind to the first item.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Index of the item `next` will return.
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Iterator for VectorIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.vector.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for VectorIter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let v: Vector<i32> = vec![1, 2].into();
        let mut it = v.cursor();
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.peek(), Some(&1));
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.peek(), Some(&2));
    }

    #[test]
    fn test_exhaustion_and_reset() {
        let v: Vector<i32> = vec![7].into();
        let mut it = v.cursor();
        assert!(it.has_next());
        assert_eq!(it.next(), Some(&7));
        assert!(!it.has_next());
        assert_eq!(it.next(), None);
        assert_eq!(it.peek(), None);
        it.reset();
        assert_eq!(it.position(), 0);
        assert_eq!(it.next(), Some(&7));
    }

    #[test]
    fn test_empty_vector() {
        let v: Vector<u8> = Vector::new();
        let mut it = v.cursor();
        assert!(!it.has_next());
        assert_eq!(it.peek(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.len(), 0);
    }
}
