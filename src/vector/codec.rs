//! Length-prefixed binary encoding for [`Vector`].
//!
//! Layout: element count as a little-endian `u32`, followed by each item as
//! written by the caller's item writer. The codec knows nothing about item
//! layout; the reader passed to [`Vector::deserialize`] must consume exactly
//! what the writer produced.

use std::io::{self, Read, Write};

use super::Vector;

impl<T> Vector<T> {
    /// Write the element count, then every item through `item_writer`.
    ///
    /// Fails with `InvalidInput` if the count does not fit in a `u32`.
    pub fn serialize<W, F>(&self, writer: &mut W, mut item_writer: F) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&mut W, &T) -> io::Result<()>,
    {
        let count = u32::try_from(self.len()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "vector too long to serialize")
        })?;
        writer.write_all(&count.to_le_bytes())?;
        for item in self {
            item_writer(writer, item)?;
        }
        Ok(())
    }

    /// Read a vector written by [`serialize`](Self::serialize).
    ///
    /// The result is allocated with exactly the stored count as capacity.
    /// A count too large to allocate fails with `OutOfMemory` before any
    /// item is read.
    /// Items for which `item_reader` returns `Ok(None)` are skipped without
    /// reporting it, so the result may be shorter than the stored count.
    pub fn deserialize<R, F>(reader: &mut R, mut item_reader: F) -> io::Result<Self>
    where
        R: Read,
        F: FnMut(&mut R) -> io::Result<Option<T>>,
    {
        let mut count = [0u8; 4];
        reader.read_exact(&mut count)?;
        let count = u32::from_le_bytes(count) as usize;

        let mut vector = Self::try_with_capacity(count)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        for index in 0..count {
            match item_reader(reader)? {
                Some(item) => vector.push_back(item),
                None => tracing::trace!(index, "vector item reader returned no value, skipping"),
            }
        }
        Ok(vector)
    }
}
