//! Cursor-style iterators over array and dict values.
//!
//! Both iterators borrow the container, so it cannot be mutated while one
//! is alive. Each supports `peek`, `next` and `reset` in addition to the
//! standard [`Iterator`] interface.

use std::collections::btree_map;
use std::collections::BTreeMap;

use super::types::JsonValue;
use crate::vector::{Vector, VectorIter};

/// Iterator over the elements of an array value.
#[derive(Debug, Clone)]
pub struct ArrayIter<'a> {
    inner: VectorIter<'a, JsonValue>,
}

impl<'a> ArrayIter<'a> {
    pub(crate) fn new(items: &'a Vector<JsonValue>) -> Self {
        Self {
            inner: items.cursor(),
        }
    }

    /// Current element without advancing.
    pub fn peek(&self) -> Option<&'a JsonValue> {
        self.inner.peek()
    }

    /// Returns true if `next` would yield an element.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Rewind to the first element.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<'a> Iterator for ArrayIter<'a> {
    type Item = &'a JsonValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// A borrowed key/value pair from a dict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictPair<'a> {
    /// Entry key
    pub key: &'a str,
    /// Entry value
    pub value: &'a JsonValue,
}

/// Iterator over the key/value pairs of a dict value, in key order.
#[derive(Debug, Clone)]
pub struct DictIter<'a> {
    map: &'a BTreeMap<String, JsonValue>,
    entries: btree_map::Iter<'a, String, JsonValue>,
    // Pair at the current position, filled by `peek` and cleared on `next`/`reset`.
    peeked: Option<DictPair<'a>>,
}

impl<'a> DictIter<'a> {
    pub(crate) fn new(map: &'a BTreeMap<String, JsonValue>) -> Self {
        Self {
            map,
            entries: map.iter(),
            peeked: None,
        }
    }

    fn pair((key, value): (&'a String, &'a JsonValue)) -> DictPair<'a> {
        DictPair { key, value }
    }

    /// Pair at the current position without advancing.
    pub fn peek(&mut self) -> Option<DictPair<'a>> {
        if self.peeked.is_none() {
            self.peeked = self.entries.clone().next().map(Self::pair);
        }
        self.peeked
    }

    /// Returns true if `next` would yield a pair.
    pub fn has_next(&self) -> bool {
        self.entries.len() > 0
    }

    /// Rewind to the first pair.
    pub fn reset(&mut self) {
        self.entries = self.map.iter();
        self.peeked = None;
    }
}

impl<'a> Iterator for DictIter<'a> {
    type Item = DictPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.peeked = None;
        self.entries.next().map(Self::pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}
