use rrwire_domain::{CodecError, FieldKind};

/// Protocol ceiling on the size of a single message.
pub const MAX_MESSAGE_SIZE: usize = 65535;

/// Sequential big-endian writer over a caller-owned buffer.
///
/// Writes never go past `min(buf.len(), MAX_MESSAGE_SIZE)`; a write that would
/// is rejected with `Overflow` before any of its bytes are stored.
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    offset: usize,
    limit: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8], offset: usize) -> Self {
        let limit = buf.len().min(MAX_MESSAGE_SIZE);
        Self { buf, offset, limit }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    fn reserve(&mut self, len: usize) -> Result<&mut [u8], CodecError> {
        let start = self.offset;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.limit)
            .ok_or(CodecError::Overflow {
                offset: start,
                needed: len,
                limit: self.limit,
            })?;
        self.offset = end;
        Ok(&mut self.buf[start..end])
    }

    pub fn put_u8(&mut self, value: u8) -> Result<usize, CodecError> {
        self.reserve(1)?[0] = value;
        Ok(self.offset)
    }

    pub fn put_u16(&mut self, value: u16) -> Result<usize, CodecError> {
        self.reserve(2)?.copy_from_slice(&value.to_be_bytes());
        Ok(self.offset)
    }

    pub fn put_u32(&mut self, value: u32) -> Result<usize, CodecError> {
        self.reserve(4)?.copy_from_slice(&value.to_be_bytes());
        Ok(self.offset)
    }

    /// Writes the low 48 bits. Values above `2^48 - 1` are rejected, never wrapped.
    pub fn put_u48(&mut self, value: u64) -> Result<usize, CodecError> {
        if value > FieldKind::UINT48_MAX {
            return Err(CodecError::ValueOutOfRange {
                kind: FieldKind::Uint48,
                value,
            });
        }
        self.reserve(6)?.copy_from_slice(&value.to_be_bytes()[2..]);
        Ok(self.offset)
    }

    pub fn put_u64(&mut self, value: u64) -> Result<usize, CodecError> {
        self.reserve(8)?.copy_from_slice(&value.to_be_bytes());
        Ok(self.offset)
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<usize, CodecError> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(self.offset)
    }

    /// Overwrites two already-written bytes at `pos` without moving the cursor.
    pub fn patch_u16(&mut self, pos: usize, value: u16) -> Result<(), CodecError> {
        let end = pos.checked_add(2).filter(|end| *end <= self.offset).ok_or(
            CodecError::Overflow {
                offset: pos,
                needed: 2,
                limit: self.offset,
            },
        )?;
        self.buf[pos..end].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}

/// Sequential big-endian reader. Pointer targets may be read anywhere in the
/// buffer, so the whole slice stays reachable through [`WireReader::buffer`].
pub struct WireReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn buffer(&self) -> &'a [u8] {
        self.buf
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset == self.buf.len()
    }

    pub(crate) fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn get_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let start = self.offset;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or(CodecError::Truncated {
                offset: start,
                needed: len,
                available: self.remaining(),
            })?;
        self.offset = end;
        Ok(&self.buf[start..end])
    }

    pub fn get_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.get_bytes(N)?);
        Ok(out)
    }

    pub fn get_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.get_array::<1>()?[0])
    }

    pub fn get_u16(&mut self) -> Result<u16, CodecError> {
        self.get_array().map(u16::from_be_bytes)
    }

    pub fn get_u32(&mut self) -> Result<u32, CodecError> {
        self.get_array().map(u32::from_be_bytes)
    }

    pub fn get_u48(&mut self) -> Result<u64, CodecError> {
        let raw: [u8; 6] = self.get_array()?;
        let mut wide = [0u8; 8];
        wide[2..].copy_from_slice(&raw);
        Ok(u64::from_be_bytes(wide))
    }

    pub fn get_u64(&mut self) -> Result<u64, CodecError> {
        self.get_array().map(u64::from_be_bytes)
    }
}
