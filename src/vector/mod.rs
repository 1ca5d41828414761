//! Generic growable array.
//!
//! [`Vector`] tracks its own logical capacity and doubles it exactly once
//! each time a push finds it full, so growth is observable and deterministic
//! regardless of how the allocator rounds. It backs JSON array values, offers
//! a rewindable cursor ([`VectorIter`]), and carries a length-prefixed binary
//! codec driven by caller-supplied item functions (see [`codec`]).
//!
//! Absent values are expressed as `None` in return positions, so "no value"
//! can never be stored.

pub mod codec;
mod iter;

pub use iter::VectorIter;

use std::collections::TryReserveError;

use crate::error::{VectorError, VectorResult};

/// Capacity used by [`Vector::new`].
pub const DEFAULT_CAPACITY: usize = 50;

/// Growth factor applied when a push finds the vector full.
pub const EXPAND_RATE: usize = 2;

/// Resizable array with explicit capacity tracking.
#[derive(Debug, Clone)]
pub struct Vector<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty vector with room for `capacity` items.
    ///
    /// A capacity of zero is stored as one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), but returns the
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let capacity = capacity.max(1);
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, capacity })
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity. Only changes by doubling on a full push.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn expand(&mut self) {
        let new_capacity = self.capacity * EXPAND_RATE;
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }

    /// Append an item, doubling the capacity first if the vector is full.
    pub fn push_back(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.expand();
        }
        self.items.push(item);
    }

    /// Overwrite the item at `index`.
    ///
    /// `index == len()` appends like [`push_back`](Self::push_back); any
    /// larger index is rejected and the vector is left unchanged.
    pub fn set(&mut self, index: usize, item: T) -> VectorResult<()> {
        let len = self.items.len();
        if index > len {
            return Err(VectorError::IndexOutOfBounds { index, len });
        }
        if index == len {
            self.push_back(item);
        } else {
            self.items[index] = item;
        }
        Ok(())
    }

    /// Item at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable item at `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// First item, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last item, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    /// Drop every item. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Apply `f` to every item in order.
    pub fn map<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
    }

    /// Items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Standard borrowing iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Rewindable cursor supporting peek/next/reset.
    pub fn cursor(&self) -> VectorIter<'_, T> {
        VectorIter::new(self)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Capacity is an allocation detail; two vectors are equal when their items are.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        let mut vector = Self::with_capacity(items.len());
        vector.extend(items);
        vector
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
