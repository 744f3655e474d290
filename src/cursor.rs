use std::marker::PhantomData;

use zerocopy::{BigEndian, byteorder};

use crate::{ByteOrder, Error, Result};

/// Forward-only reader over a borrowed byte buffer.
///
/// Every read checks its full width against the remaining input and fails
/// with [`Error::EndOfFile`] instead of reading past the end.
#[derive(Clone, Debug)]
pub struct Cursor<'a, O: ByteOrder = BigEndian> {
    data: &'a [u8],
    pos: usize,
    _marker: PhantomData<O>,
}

impl<'a, O: ByteOrder> Cursor<'a, O> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn get_ref(&self) -> &'a [u8] {
        self.data
    }

    /// Advances the position by `delta` bytes without reading them.
    pub fn seek(&mut self, delta: usize) -> Result<()> {
        if delta > self.remaining() {
            return Err(Error::EndOfFile);
        }
        self.pos += delta;
        Ok(())
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Result<u8> {
        self.data.get(self.pos).copied().ok_or(Error::EndOfFile)
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::EndOfFile);
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [b] = self.take_array::<1>()?;
        Ok(b)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(byteorder::U16::<O>::from_bytes(self.take_array()?).get())
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(byteorder::I16::<O>::from_bytes(self.take_array()?).get())
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(byteorder::I32::<O>::from_bytes(self.take_array()?).get())
    }

    /// Eight bytes packed most significant first (for big-endian `O`).
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(byteorder::I64::<O>::from_bytes(self.take_array()?).get())
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(byteorder::F32::<O>::from_bytes(self.take_array()?).get())
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(byteorder::F64::<O>::from_bytes(self.take_array()?).get())
    }

    /// Reads `len` bytes as text, one code point per byte.
    ///
    /// Bytes map to U+0000..=U+00FF unchanged, so any byte sequence comes
    /// back out of [`crate::text::encode_latin1`] identical.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        Ok(crate::text::decode_latin1(self.take(len)?))
    }

    /// Reads a `u16` length prefix and that many bytes of text.
    pub fn read_prefixed_text(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        self.read_text(len)
    }
}
