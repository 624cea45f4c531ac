use crate::DecodeError;

#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..start + len])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads `N` bytes and returns them in reverse order.
    ///
    /// The discovery reply stores its IP and MAC fields back-to-front
    /// relative to their natural representation.
    pub fn read_array_reversed<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        for (dst, src) in out.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Ok(out)
    }

    /// Consumes and returns everything left in the buffer.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.pos;
        self.pos = self.buf.len();
        &self.buf[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;
    use crate::DecodeError;

    #[test]
    fn reader_reads_spans() {
        let mut r = Reader::new(&[1, 2, 3, 4, 5]);
        assert_eq!(r.read_exact(2).unwrap(), &[1, 2]);
        assert_eq!(r.read_array::<2>().unwrap(), [3, 4]);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.read_rest(), &[5]);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn reader_reverses_arrays() {
        let mut r = Reader::new(&[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(r.read_array_reversed::<4>().unwrap(), [0xDD, 0xCC, 0xBB, 0xAA]);
    }

    #[test]
    fn reader_bounds() {
        let mut r = Reader::new(&[1]);
        assert_eq!(r.read_exact(2).unwrap_err(), DecodeError::UnexpectedEof);
        assert_eq!(r.read_exact(1).unwrap(), &[1]);
        assert_eq!(r.read_array::<1>().unwrap_err(), DecodeError::UnexpectedEof);
    }
}
