//! Little-endian binary reader with cursor tracking.

use crate::BufferError;

/// A binary reader over a byte slice.
///
/// The reader keeps a cursor position and every read is bounds-checked:
/// reading past `end` yields [`BufferError::EndOfBuffer`] and leaves the
/// cursor where it was. All multi-byte integers are little-endian.
///
/// # Example
///
/// ```
/// use tile3d_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04, 0x05];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u32().unwrap(), 0x0403_0201);
/// assert!(reader.u32().is_err());
/// assert_eq!(reader.rest(), &[0x05]);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub data: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            x: 0,
            end: data.len(),
        }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            return Err(BufferError::EndOfBuffer { needed, remaining });
        }
        Ok(())
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.data[start..self.x])
    }

    /// Returns everything from the cursor to the end and exhausts the reader.
    pub fn rest(&mut self) -> &'a [u8] {
        let start = self.x;
        self.x = self.end;
        &self.data[start..self.end]
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.buf(N)?);
        Ok(out)
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self) -> Result<u32, BufferError> {
        self.array().map(u32::from_le_bytes)
    }

    /// Reads a fixed-length ASCII tag (not NUL-terminated).
    pub fn tag<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let start = self.x;
        let tag = self.array::<N>()?;
        if !tag.is_ascii() {
            self.x = start;
            return Err(BufferError::InvalidAscii(crate::print_octets(&tag, N)));
        }
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32().unwrap(), 0x0403_0201);
        assert_eq!(reader.size(), 0);
    }

    #[test]
    fn test_short_read_keeps_cursor() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::new(&data);
        reader.buf(2).unwrap();
        assert_eq!(
            reader.u32(),
            Err(BufferError::EndOfBuffer {
                needed: 4,
                remaining: 3
            })
        );
        assert_eq!(reader.x, 2);
        assert_eq!(reader.buf(3).unwrap(), &[0x03, 0x04, 0x05]);
    }

    #[test]
    fn test_tag() {
        let mut reader = Reader::new(b"b3dmrest");
        assert_eq!(reader.tag::<4>().unwrap(), *b"b3dm");
        assert_eq!(reader.rest(), b"rest");
        assert_eq!(reader.size(), 0);
    }

    #[test]
    fn test_tag_rejects_non_ascii() {
        let data = [0x62, 0xff, 0x64, 0x6d];
        let mut reader = Reader::new(&data);
        assert!(matches!(reader.tag::<4>(), Err(BufferError::InvalidAscii(_))));
        assert_eq!(reader.x, 0);
    }
}
