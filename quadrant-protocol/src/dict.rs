//! Dictionary encoding and decoding.
//!
//! Dictionary format:
//! - COUNT (1 byte): number of tuples
//! - per tuple:
//!   - KEY (4 bytes, little endian)
//!   - TYPE (1 byte): 0 byte array, 1 C string, 2 unsigned int, 3 signed int
//!   - LENGTH (2 bytes, little endian): value length in bytes
//!   - VALUE (LENGTH bytes). Integers are 1, 2 or 4 bytes little endian.
//!     C strings are NUL terminated and the NUL is counted in LENGTH.

use heapless::Vec;

/// Maximum number of tuples in one dictionary
pub const MAX_TUPLES: usize = 16;

/// Size of a tuple header (KEY + TYPE + LENGTH)
pub const TUPLE_HEADER_SIZE: usize = 4 + 1 + 2;

// Wire type values
const TYPE_BYTE_ARRAY: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

/// Errors that can occur during dictionary parsing or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DictError {
    /// Input ended inside a header or value
    Truncated,
    /// More tuples than [`MAX_TUPLES`]
    TooManyTuples,
    /// Bytes left over after the last tuple
    TrailingBytes,
    /// Buffer too small for encoding
    BufferTooSmall,
    /// Value longer than a tuple can carry
    ValueTooLarge,
}

/// A decoded tuple value, borrowing from the message bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleValue<'a> {
    Bytes(&'a [u8]),
    CString(&'a str),
    UInt(u32),
    Int(i32),
}

/// One key/value pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tuple<'a> {
    pub key: u32,
    pub value: TupleValue<'a>,
}

/// A parsed dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary<'a> {
    tuples: Vec<Tuple<'a>, MAX_TUPLES>,
}

impl<'a> Dictionary<'a> {
    /// Parse a dictionary from its wire bytes
    ///
    /// Values borrow from `bytes`; nothing is copied.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DictError> {
        let (&count, mut rest) = bytes.split_first().ok_or(DictError::Truncated)?;
        if count as usize > MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }

        let mut tuples = Vec::new();
        for _ in 0..count {
            if rest.len() < TUPLE_HEADER_SIZE {
                return Err(DictError::Truncated);
            }
            let key = u32::from_le_bytes([rest[0], rest[1], rest[2], rest[3]]);
            let tuple_type = rest[4];
            let length = u16::from_le_bytes([rest[5], rest[6]]) as usize;
            rest = &rest[TUPLE_HEADER_SIZE..];

            if rest.len() < length {
                return Err(DictError::Truncated);
            }
            let (data, tail) = rest.split_at(length);
            rest = tail;

            let value = Self::parse_value(tuple_type, data);
            tuples
                .push(Tuple { key, value })
                .map_err(|_| DictError::TooManyTuples)?;
        }

        if !rest.is_empty() {
            return Err(DictError::TrailingBytes);
        }

        Ok(Self { tuples })
    }

    /// Decode one value
    ///
    /// Framing is already validated here, so a value that does not match its
    /// type byte (bad UTF-8, odd integer width, unknown type) comes back as
    /// raw bytes and the rest of the dictionary survives.
    fn parse_value(tuple_type: u8, data: &'a [u8]) -> TupleValue<'a> {
        match tuple_type {
            TYPE_BYTE_ARRAY => TupleValue::Bytes(data),
            TYPE_CSTRING => {
                // Stop at the terminator; tolerate a missing one
                let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
                core::str::from_utf8(&data[..end])
                    .map_or(TupleValue::Bytes(data), TupleValue::CString)
            }
            TYPE_UINT => match *data {
                [b0] => TupleValue::UInt(b0 as u32),
                [b0, b1] => TupleValue::UInt(u16::from_le_bytes([b0, b1]) as u32),
                [b0, b1, b2, b3] => TupleValue::UInt(u32::from_le_bytes([b0, b1, b2, b3])),
                _ => TupleValue::Bytes(data),
            },
            TYPE_INT => match *data {
                [b0] => TupleValue::Int(b0 as i8 as i32),
                [b0, b1] => TupleValue::Int(i16::from_le_bytes([b0, b1]) as i32),
                [b0, b1, b2, b3] => TupleValue::Int(i32::from_le_bytes([b0, b1, b2, b3])),
                _ => TupleValue::Bytes(data),
            },
            _ => TupleValue::Bytes(data),
        }
    }

    /// Find the first value stored under `key`
    pub fn find(&self, key: u32) -> Option<&TupleValue<'a>> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Iterate over all tuples in wire order
    pub fn iter(&self) -> impl Iterator<Item = &Tuple<'a>> {
        self.tuples.iter()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

/// Writes a dictionary into a caller-provided buffer
#[derive(Debug)]
pub struct DictionaryBuilder<'b> {
    buf: &'b mut [u8],
    len: usize,
    count: u8,
}

impl<'b> DictionaryBuilder<'b> {
    /// Start a dictionary in `buf`
    pub fn new(buf: &'b mut [u8]) -> Result<Self, DictError> {
        if buf.is_empty() {
            return Err(DictError::BufferTooSmall);
        }
        Ok(Self { buf, len: 1, count: 0 })
    }

    /// Append a signed 32-bit integer
    pub fn push_int(&mut self, key: u32, value: i32) -> Result<&mut Self, DictError> {
        self.push_raw(key, TYPE_INT, &value.to_le_bytes())
    }

    /// Append an unsigned 8-bit integer
    pub fn push_uint8(&mut self, key: u32, value: u8) -> Result<&mut Self, DictError> {
        self.push_raw(key, TYPE_UINT, &[value])
    }

    /// Append a NUL-terminated string
    pub fn push_cstring(&mut self, key: u32, value: &str) -> Result<&mut Self, DictError> {
        let length = value.len() + 1;
        self.push_header(key, TYPE_CSTRING, length)?;
        let start = self.len;
        self.buf[start..start + value.len()].copy_from_slice(value.as_bytes());
        self.buf[start + value.len()] = 0;
        self.len += length;
        Ok(self)
    }

    fn push_raw(&mut self, key: u32, tuple_type: u8, data: &[u8]) -> Result<&mut Self, DictError> {
        self.push_header(key, tuple_type, data.len())?;
        self.buf[self.len..self.len + data.len()].copy_from_slice(data);
        self.len += data.len();
        Ok(self)
    }

    /// Write a tuple header and reserve room for its value
    fn push_header(&mut self, key: u32, tuple_type: u8, length: usize) -> Result<(), DictError> {
        if self.count as usize >= MAX_TUPLES {
            return Err(DictError::TooManyTuples);
        }
        let length = u16::try_from(length).map_err(|_| DictError::ValueTooLarge)?;
        if self.buf.len() < self.len + TUPLE_HEADER_SIZE + length as usize {
            return Err(DictError::BufferTooSmall);
        }

        let header = &mut self.buf[self.len..self.len + TUPLE_HEADER_SIZE];
        header[..4].copy_from_slice(&key.to_le_bytes());
        header[4] = tuple_type;
        header[5..].copy_from_slice(&length.to_le_bytes());
        self.len += TUPLE_HEADER_SIZE;
        self.count += 1;
        Ok(())
    }

    /// Number of tuples written so far
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Finish the dictionary and return the encoded bytes
    pub fn finish(self) -> &'b [u8] {
        let Self { buf, len, count } = self;
        buf[0] = count;
        let buf: &'b [u8] = buf;
        &buf[..len]
    }
}
