//! Fixed-width binary codec for call arguments and return values.
//!
//! | Type      | Encoding                                          |
//! |-----------|---------------------------------------------------|
//! | `address` | 20 raw bytes                                      |
//! | `uint256` | 32 bytes, big-endian                              |
//! | `bool`    | 1 byte, `0` or `1`                                |
//! | `uint8`   | 1 byte                                            |
//! | `string`  | 4-byte big-endian length, then the UTF-8 bytes    |
//!
//! Values are laid out back to back with no padding or delimiters. A [CalldataReader] consumes
//! them strictly in order; reading past the end of the buffer is the only way decoding an
//! address or an integer can fail.

use alloy_primitives::U256;
use thiserror::Error;

use crate::{Address, ADDRESS_LEN, U256_LEN};

const LENGTH_PREFIX_LEN: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("buffer too short: needed {needed} bytes, {remaining} remaining")]
    Underrun { needed: usize, remaining: usize },
    #[error("invalid boolean byte {0:#04x}")]
    InvalidBool(u8),
    #[error("string value is not valid UTF-8")]
    InvalidUtf8,
    #[error("string of {0} bytes does not fit a 4-byte length prefix")]
    StringTooLong(usize),
}

/// Sequential reader over a byte buffer.
#[derive(Debug, Clone)]
pub struct CalldataReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> CalldataReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        CalldataReader { data, offset: 0 }
    }

    /// Number of bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(CodecError::Underrun { needed, remaining });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    pub fn read_address(&mut self) -> Result<Address, CodecError> {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(self.take(ADDRESS_LEN)?);
        Ok(Address(bytes))
    }

    pub fn read_u256(&mut self) -> Result<U256, CodecError> {
        let mut word = [0u8; U256_LEN];
        word.copy_from_slice(self.take(U256_LEN)?);
        Ok(U256::from_be_bytes(word))
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }

    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        prefix.copy_from_slice(self.take(LENGTH_PREFIX_LEN)?);
        let len = u32::from_be_bytes(prefix) as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
    }
}

/// Append-only writer producing the same layout [CalldataReader] consumes.
#[derive(Debug, Clone, Default)]
pub struct CalldataWriter {
    buf: Vec<u8>,
}

impl CalldataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_address(&mut self, address: &Address) -> &mut Self {
        self.buf.extend_from_slice(address.as_bytes());
        self
    }

    pub fn write_u256(&mut self, value: &U256) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes::<U256_LEN>());
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(u8::from(value))
    }

    pub fn write_string(&mut self, value: &str) -> Result<&mut Self, CodecError> {
        let len =
            u32::try_from(value.len()).map_err(|_| CodecError::StringTooLong(value.len()))?;
        self.buf.extend_from_slice(&len.to_be_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        Ok(self)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
