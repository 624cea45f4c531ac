use crate::EncodeError;

#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        if self.remaining() < 1 {
            return Err(EncodeError::BufferTooSmall);
        }
        self.buf[self.pos] = value;
        self.pos += 1;
        Ok(())
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        if self.remaining() < data.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        let end = self.pos + data.len();
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Ok(())
    }

    /// Writes `len` zero bytes. The probe layout is mostly reserved padding.
    pub fn write_zeros(&mut self, len: usize) -> Result<(), EncodeError> {
        if self.remaining() < len {
            return Err(EncodeError::BufferTooSmall);
        }
        let end = self.pos + len;
        self.buf[self.pos..end].fill(0);
        self.pos = end;
        Ok(())
    }

    pub fn write_le_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_all(&value.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::Writer;
    use crate::EncodeError;

    #[test]
    fn writer_writes_values() {
        let mut buf = [0xFFu8; 8];
        let mut w = Writer::new(&mut buf);
        w.write_u8(1).unwrap();
        w.write_zeros(2).unwrap();
        w.write_le_u16(0x07E1).unwrap();
        assert_eq!(w.as_written(), &[1, 0, 0, 0xE1, 0x07]);
        assert_eq!(w.position(), 5);
    }

    #[test]
    fn writer_bounds() {
        let mut buf = [0u8; 2];
        let mut w = Writer::new(&mut buf);
        w.write_le_u16(9).unwrap();
        assert_eq!(w.write_u8(1).unwrap_err(), EncodeError::BufferTooSmall);
        assert_eq!(w.write_zeros(1).unwrap_err(), EncodeError::BufferTooSmall);
    }
}
