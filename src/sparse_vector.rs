// Sparse vector over a fixed-length logical vector. Only the populated entries are stored,
// as two parallel buffers: `indices[k]` is the logical position of `values[k]`.
// Entries are appended in any order (duplicates and out-of-range indices included)
// and can be reordered by index with `sort`. There is no removal; values are dropped
// together with the vector.

use std::fmt;

use crate::error::{Result, SparseVectorError};
use crate::index::IndexType;
use crate::iter::{Iter, IterMut};
use crate::value::Value;

/// Buffer capacity of the first growth of a vector created without a reservation.
/// Every later growth doubles the capacity.
pub const INITIAL_GROWTH_CAPACITY: usize = 4;

pub struct SparseVector<V: Value, I: IndexType = u32> {
    len: usize,      // Length of the logical vector
    values: Vec<V>,  // Values of the populated entries
    indices: Vec<I>, // Logical positions of the populated entries
    capacity: usize, // Shared capacity of both buffers
    // Set at construction and by `sort`. Appends do not clear it.
    is_sorted: bool,
}

impl<V: Value, I: IndexType> SparseVector<V, I> {
    /// Create an empty sparse vector of logical length `len` without allocating.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            values: Vec::new(),
            indices: Vec::new(),
            capacity: 0,
            is_sorted: true,
        }
    }

    /// Create an empty sparse vector of logical length `len` with room for `capacity`
    /// entries. A zero capacity does not allocate.
    pub fn with_capacity(len: usize, capacity: usize) -> Result<Self> {
        let mut sv = Self::new(len);
        if capacity > 0 {
            // On failure `sv` is dropped here, releasing whatever was allocated.
            sv.resize_buffers(capacity)?;
        }
        Ok(sv)
    }

    /// Append the entry `(index, value)`, growing the buffers if they are full.
    /// The index is not checked against the logical length or for duplicates.
    pub fn emplace_back(&mut self, index: I, value: impl Into<V>) -> Result<()> {
        self.emplace_back_with(index, || value.into())
    }

    /// Append an entry whose value is constructed by `f`.
    /// `f` is only called once room for the entry exists.
    pub fn emplace_back_with(&mut self, index: I, f: impl FnOnce() -> V) -> Result<()> {
        if self.weight() == self.capacity {
            self.grow()?;
        }
        // Construct before writing either buffer so a panicking `f` leaves them aligned.
        let value = f();
        self.indices.push(index);
        self.values.push(value);
        Ok(())
    }

    /// Reorder the entries by ascending index, moving each value together with its index.
    /// The order of entries with equal indices is unspecified.
    /// Allocates a scratch permutation of `weight()` positions; the buffers themselves
    /// are reordered in place.
    pub fn sort(&mut self) {
        log::trace!("sorting {} entries", self.weight());
        // order[k] is the current position of the entry that belongs at position k
        let mut order: Vec<usize> = (0..self.weight()).collect();
        let indices = &self.indices;
        order.sort_unstable_by_key(|&k| indices[k]);
        permute(&mut order, &mut self.indices, &mut self.values);
        self.is_sorted = true;
    }

    pub fn iter(&self) -> Iter<'_, V, I> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V, I> {
        IterMut::new(&mut self.indices, &mut self.values)
    }

    /// Length of the logical vector (not the number of stored entries).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored entries.
    pub fn weight(&self) -> usize {
        self.values.len()
    }

    /// Whether no entries are stored. This is about the weight, not the logical length,
    /// so a vector with a nonzero `len()` is empty until its first append.
    pub fn is_empty(&self) -> bool {
        self.weight() == 0
    }

    /// Number of entries the buffers can hold before the next growth.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Advisory sortedness flag. It is true after construction and after `sort`,
    /// and is not cleared by appends, so it does not prove the entries are ordered.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    /// Logical positions of the stored entries, in storage order.
    pub fn indices(&self) -> &[I] {
        &self.indices
    }

    /// Values of the stored entries, in storage order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = if self.capacity == 0 {
            INITIAL_GROWTH_CAPACITY
        } else {
            // An overflowing capacity is rejected by the allocation below.
            self.capacity.saturating_mul(2)
        };
        log::debug!(
            "growing sparse vector buffers from {} to {} entries",
            self.capacity,
            new_capacity
        );
        self.resize_buffers(new_capacity)
    }

    // Grow both buffers to hold `capacity` entries. Either both buffers grow or
    // neither does; live entries keep their positions.
    fn resize_buffers(&mut self, capacity: usize) -> Result<()> {
        debug_assert!(capacity >= self.capacity, "buffers never shrink");
        let additional = capacity - self.weight();

        if let Err(source) = self.values.try_reserve_exact(additional) {
            log::warn!("failed to grow value buffer to {} entries", capacity);
            return Err(SparseVectorError::OutOfMemory {
                requested: capacity,
                source,
            });
        }

        if let Err(source) = self.indices.try_reserve_exact(additional) {
            log::warn!("failed to grow index buffer to {} entries", capacity);
            // Give back the value buffer growth so both buffers keep the same capacity.
            self.values.shrink_to(self.capacity);
            return Err(SparseVectorError::OutOfMemory {
                requested: capacity,
                source,
            });
        }

        self.capacity = capacity;
        Ok(())
    }
}

// Rearrange both buffers so that position k receives the entry at position order[k],
// following each cycle of the permutation with swaps. `order` is used as scratch space.
fn permute<I, V>(order: &mut [usize], indices: &mut [I], values: &mut [V]) {
    debug_assert_eq!(order.len(), indices.len());
    debug_assert_eq!(order.len(), values.len());
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            indices.swap(current, next);
            values.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

impl<'a, V: Value, I: IndexType> IntoIterator for &'a SparseVector<V, I> {
    type Item = (I, &'a V);
    type IntoIter = Iter<'a, V, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V: Value, I: IndexType> IntoIterator for &'a mut SparseVector<V, I> {
    type Item = (&'a mut I, &'a mut V);
    type IntoIter = IterMut<'a, V, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, I> fmt::Debug for SparseVector<V, I>
where
    V: Value + fmt::Debug,
    I: IndexType + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseVector")
            .field("len", &self.len)
            .field("weight", &self.weight())
            .field("capacity", &self.capacity)
            .field("is_sorted", &self.is_sorted)
            .field("entries", &Entries(self))
            .finish()
    }
}

struct Entries<'a, V: Value, I: IndexType>(&'a SparseVector<V, I>);

impl<V, I> fmt::Debug for Entries<'_, V, I>
where
    V: Value + fmt::Debug,
    I: IndexType + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
