// Iteration over the stored (index, value) entries in storage order: insertion
// order until the vector is sorted, ascending index order afterwards.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::index::IndexType;
use crate::sparse_vector::SparseVector;
use crate::value::Value;

/// Cursor over the entries of a sparse vector, yielding each index by value
/// and each value by reference.
///
/// Cursors compare by position. Comparing cursors of two different vectors
/// is a logic error and panics.
pub struct Iter<'a, V: Value, I: IndexType> {
    vector: &'a SparseVector<V, I>,
    position: usize,
}

impl<'a, V: Value, I: IndexType> Iter<'a, V, I> {
    pub(crate) fn new(vector: &'a SparseVector<V, I>) -> Self {
        Self {
            vector,
            position: 0,
        }
    }

    /// Storage position of the next entry to be yielded.
    pub fn position(&self) -> usize {
        self.position
    }

    fn assert_same_vector(&self, other: &Self) {
        assert!(
            ptr::eq(self.vector, other.vector),
            "cannot compare cursors of different sparse vectors"
        );
    }
}

impl<'a, V: Value, I: IndexType> Iterator for Iter<'a, V, I> {
    type Item = (I, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let vector = self.vector;
        let index = *vector.indices().get(self.position)?;
        let value = &vector.values()[self.position];
        self.position += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.weight() - self.position;
        (remaining, Some(remaining))
    }
}

impl<V: Value, I: IndexType> ExactSizeIterator for Iter<'_, V, I> {}

impl<V: Value, I: IndexType> FusedIterator for Iter<'_, V, I> {}

impl<V: Value, I: IndexType> Clone for Iter<'_, V, I> {
    fn clone(&self) -> Self {
        Self {
            vector: self.vector,
            position: self.position,
        }
    }
}

impl<V: Value, I: IndexType> PartialEq for Iter<'_, V, I> {
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_vector(other);
        self.position == other.position
    }
}

impl<V: Value, I: IndexType> PartialOrd for Iter<'_, V, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.assert_same_vector(other);
        Some(self.position.cmp(&other.position))
    }
}

/// Mutable iteration over the entries of a sparse vector. Each item borrows the
/// index and the value in place, so writes through either are visible in the vector.
pub struct IterMut<'a, V: Value, I: IndexType> {
    indices: slice::IterMut<'a, I>,
    values: slice::IterMut<'a, V>,
    position: usize,
}

impl<'a, V: Value, I: IndexType> IterMut<'a, V, I> {
    pub(crate) fn new(indices: &'a mut [I], values: &'a mut [V]) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        Self {
            indices: indices.iter_mut(),
            values: values.iter_mut(),
            position: 0,
        }
    }

    /// Storage position of the next entry to be yielded.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, V: Value, I: IndexType> Iterator for IterMut<'a, V, I> {
    type Item = (&'a mut I, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indices.next()?;
        let value = self.values.next()?;
        self.position += 1;
        Some((index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V: Value, I: IndexType> ExactSizeIterator for IterMut<'_, V, I> {}

impl<V: Value, I: IndexType> FusedIterator for IterMut<'_, V, I> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(entries: &[(u32, i64)]) -> SparseVector<i64> {
        let mut sv = SparseVector::new(100);
        for (i, v) in entries.iter().copied() {
            sv.emplace_back(i, v).unwrap();
        }
        sv
    }

    #[test]
    fn test_iter() {
        let sv = build(&[(3, 30), (1, 10), (2, 20)]);
        let mut it = sv.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some((3, &30)));
        assert_eq!(it.next(), Some((1, &10)));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some((2, &20)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);

        // Iteration can be restarted at any time.
        let entries: Vec<_> = (&sv).into_iter().collect();
        assert_eq!(entries, vec![(3, &30), (1, &10), (2, &20)]);
    }

    #[test]
    fn test_iter_mut() {
        let mut sv = build(&[(3, 30), (1, 10), (2, 20)]);
        for (index, value) in &mut sv {
            *index += 1;
            *value *= -1;
        }
        assert_eq!(sv.indices(), &[4, 2, 3]);
        assert_eq!(sv.values(), &[-30, -10, -20]);

        let mut it = sv.iter_mut();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.position(), 1);
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_cursor_comparison() {
        let sv = build(&[(3, 30), (1, 10), (2, 20)]);
        let begin = sv.iter();
        let mut cursor = sv.iter();
        assert!(begin == cursor);
        assert!(begin <= cursor);

        cursor.next();
        assert_eq!(cursor.position(), 1);
        assert!(begin != cursor);
        assert!(begin < cursor);
        assert!(cursor > begin);
        assert!(cursor >= begin);

        let mut end = sv.iter();
        for _ in end.by_ref() {}
        assert_eq!(end.position(), sv.weight());
        assert!(cursor < end);
    }

    #[test]
    #[should_panic(expected = "different sparse vectors")]
    fn test_cursor_comparison_across_vectors() {
        let a = build(&[(1, 1)]);
        let b = build(&[(1, 1)]);
        let _ = a.iter() == b.iter();
    }

    #[test]
    #[should_panic(expected = "different sparse vectors")]
    fn test_cursor_ordering_across_vectors() {
        let a = build(&[(1, 1)]);
        let b = build(&[(1, 1)]);
        let _ = a.iter() < b.iter();
    }
}
