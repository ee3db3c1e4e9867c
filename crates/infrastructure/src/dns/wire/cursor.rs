use ferrous_relay_domain::WireError;

/// Bounds-checked reader over a complete wire message.
///
/// Positions are absolute offsets into the message, so errors and
/// compression pointers refer to the same coordinates. Every read checks
/// the remaining length first and fails with [`WireError::TruncatedInput`]
/// instead of indexing past the end.
#[derive(Debug, Clone, Copy)]
pub struct WireCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// A cursor over the same message positioned at `pos`.
    pub fn at(&self, pos: usize) -> Self {
        Self { buf: self.buf, pos }
    }

    /// A cursor positioned at `start` that cannot read past `start + len`.
    ///
    /// Offsets stay absolute; only the end of the readable range moves.
    pub fn window(&self, start: usize, len: usize) -> Result<Self, WireError> {
        self.check(start, len)?;
        Ok(Self {
            buf: &self.buf[..start + len],
            pos: start,
        })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, offset: usize, needed: usize) -> Result<(), WireError> {
        let available = self.buf.len().saturating_sub(offset);
        if needed > available {
            return Err(WireError::TruncatedInput {
                offset,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Fails unless at least `needed` bytes remain at the current position.
    pub fn require(&self, needed: usize) -> Result<(), WireError> {
        self.check(self.pos, needed)
    }

    pub fn peek_u8(&self) -> Result<u8, WireError> {
        self.u8_at(self.pos)
    }

    pub fn u8_at(&self, offset: usize) -> Result<u8, WireError> {
        self.check(offset, 1)?;
        Ok(self.buf[offset])
    }

    pub fn u16_at(&self, offset: usize) -> Result<u16, WireError> {
        let bytes = self.bytes_at(offset, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], WireError> {
        self.check(offset, len)?;
        Ok(&self.buf[offset..offset + len])
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let value = self.u8_at(self.pos)?;
        self.pos += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let value = self.u16_at(self.pos)?;
        self.pos += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let bytes = self.bytes_at(self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }

    pub fn advance(&mut self, len: usize) -> Result<(), WireError> {
        self.check(self.pos, len)?;
        self.pos += len;
        Ok(())
    }

    /// Moves to an absolute offset. The end of the message is a valid
    /// position; anything past it is not.
    pub fn seek(&mut self, pos: usize) -> Result<(), WireError> {
        if pos > self.buf.len() {
            return Err(WireError::TruncatedInput {
                offset: pos,
                needed: 0,
                available: 0,
            });
        }
        self.pos = pos;
        Ok(())
    }
}
