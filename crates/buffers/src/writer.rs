//! Little-endian binary writer backed by a growable buffer.

/// A binary writer that appends to an internal `Vec<u8>`.
///
/// Writes never fail; the buffer grows as needed. [`Writer::flush`] hands
/// the written bytes out and leaves the writer empty for reuse.
///
/// # Example
///
/// ```
/// use tile3d_buffers::Writer;
///
/// let mut writer = Writer::with_capacity(8);
/// writer.u32(0x0403_0201);
/// writer.buf(&[5, 6]);
/// assert_eq!(writer.flush(), vec![1, 2, 3, 4, 5, 6]);
/// assert!(writer.flush().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    data: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.data.extend_from_slice(&val.to_le_bytes());
    }

    /// Appends raw bytes.
    pub fn buf(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Writes a fixed-length tag verbatim, without a terminator.
    pub fn tag<const N: usize>(&mut self, tag: &[u8; N]) {
        self.data.extend_from_slice(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_little_endian() {
        let mut writer = Writer::new();
        writer.u32(0x0102_0304);
        assert_eq!(writer.flush(), vec![0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_flush_leaves_writer_reusable() {
        let mut writer = Writer::new();
        writer.tag(b"pnts");
        assert_eq!(writer.flush(), b"pnts".to_vec());
        writer.buf(&[7]);
        assert_eq!(writer.flush(), vec![7]);
    }
}
