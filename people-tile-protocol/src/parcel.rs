//! Ordered flat byte-stream primitives
//!
//! This module implements the low-level wire primitives the tile codec is
//! built from. A parcel is a flat sequence of fields with no framing
//! beyond each field's own encoding, so reading a stream is only
//! meaningful if the reader consumes fields in exactly the order the
//! writer emitted them.
//!
//! ## Field Encodings
//!
//! - `i32` / `i64`: big-endian fixed width
//! - bool: one byte, 0 or 1
//! - nullable string: presence byte (0 = absent, 1 = present), then a
//!   `u32` byte length, then UTF-8 bytes
//! - nullable opaque object: presence byte, then a `u32` byte length,
//!   then a JSON blob of the referenced value
//!
//! Opaque objects are externally-defined serializable values (icons,
//! notifications, launch intents); the parcel stores their serialized
//! form without inspecting it.

use crate::{Result, TileError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Read;

/// Presence byte for an absent nullable field
const TAG_ABSENT: u8 = 0;

/// Presence byte for a present nullable field
const TAG_PRESENT: u8 = 1;

/// Write side of a parcel: accumulates fields into a byte buffer
///
/// # Examples
///
/// ```
/// use people_tile_protocol::parcel::Parcel;
///
/// let mut parcel = Parcel::new();
/// parcel.write_string(Some("abc"));
/// parcel.write_i32(7);
/// parcel.write_bool(true);
/// let bytes = parcel.into_bytes();
/// assert_eq!(bytes.len(), 1 + 4 + 3 + 4 + 1);
/// ```
#[derive(Debug, Default)]
pub struct Parcel {
    bytes: Vec<u8>,
}

impl Parcel {
    /// Create an empty parcel
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Consume the parcel, returning the accumulated bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Write a nullable string field
    pub fn write_string(&mut self, value: Option<&str>) {
        match value {
            Some(s) => {
                self.bytes.push(TAG_PRESENT);
                self.bytes
                    .extend_from_slice(&(s.len() as u32).to_be_bytes());
                self.bytes.extend_from_slice(s.as_bytes());
            }
            None => self.bytes.push(TAG_ABSENT),
        }
    }

    /// Write a 32-bit integer field
    pub fn write_i32(&mut self, value: i32) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a 64-bit integer field
    pub fn write_i64(&mut self, value: i64) {
        self.bytes.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a boolean field
    pub fn write_bool(&mut self, value: bool) {
        self.bytes.push(value as u8);
    }

    /// Write a nullable opaque object field as a length-prefixed JSON blob
    pub fn write_object<T: Serialize>(&mut self, value: Option<&T>) -> Result<()> {
        match value {
            Some(v) => {
                let blob = serde_json::to_vec(v)?;
                self.bytes.push(TAG_PRESENT);
                self.bytes
                    .extend_from_slice(&(blob.len() as u32).to_be_bytes());
                self.bytes.extend_from_slice(&blob);
            }
            None => self.bytes.push(TAG_ABSENT),
        }
        Ok(())
    }
}

/// Read side of a parcel: consumes fields from any `Read` source
///
/// Each `read_*` call must correspond to the `write_*` call at the same
/// position on the write side. A short stream fails with an I/O error
/// from `read_exact`.
#[derive(Debug)]
pub struct ParcelReader<R: Read> {
    reader: R,
}

impl<R: Read> ParcelReader<R> {
    /// Wrap a byte source
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_presence(&mut self) -> Result<bool> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        match buf[0] {
            TAG_ABSENT => Ok(false),
            TAG_PRESENT => Ok(true),
            other => Err(TileError::InvalidParcel(format!(
                "presence byte must be 0 or 1, got {:#04x}",
                other
            ))),
        }
    }

    fn read_len(&mut self) -> Result<usize> {
        let mut buf = [0u8; 4];
        self.reader.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf) as usize)
    }

    /// Read a nullable string field
    pub fn read_string(&mut self) -> Result<Option<String>> {
        if !self.read_presence()? {
            return Ok(None);
        }
        let len = self.read_len()?;
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf)?;
        Ok(Some(String::from_utf8(buf)?))
    }

    /// Read a 32-bit integer field
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.reader.read_exact(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read a 64-bit integer field
    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.reader.read_exact(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    /// Read a boolean field
    pub fn read_bool(&mut self) -> Result<bool> {
        let mut buf = [0u8; 1];
        self.reader.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }

    /// Read a nullable opaque object field
    pub fn read_object<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        if !self.read_presence()? {
            return Ok(None);
        }
        let len = self.read_len()?;
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf)?;
        Ok(Some(serde_json::from_slice(&buf)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_string_round_trip() {
        let mut parcel = Parcel::new();
        parcel.write_string(Some("hello"));
        parcel.write_string(None);
        parcel.write_string(Some(""));

        let bytes = parcel.into_bytes();
        let mut reader = ParcelReader::new(bytes.as_slice());
        assert_eq!(reader.read_string().unwrap(), Some("hello".to_string()));
        assert_eq!(reader.read_string().unwrap(), None);
        assert_eq!(reader.read_string().unwrap(), Some(String::new()));
    }

    #[test]
    fn test_ints_are_big_endian() {
        let mut parcel = Parcel::new();
        parcel.write_i32(1);
        parcel.write_i64(-1);

        let bytes = parcel.into_bytes();
        assert_eq!(&bytes[..4], &[0, 0, 0, 1]);
        assert_eq!(&bytes[4..], &[0xff; 8]);

        let mut reader = ParcelReader::new(bytes.as_slice());
        assert_eq!(reader.read_i32().unwrap(), 1);
        assert_eq!(reader.read_i64().unwrap(), -1);
    }

    #[test]
    fn test_object_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Payload {
            name: String,
            count: u32,
        }

        let payload = Payload {
            name: "x".to_string(),
            count: 3,
        };

        let mut parcel = Parcel::new();
        parcel.write_object(Some(&payload)).unwrap();
        parcel.write_object::<Payload>(None).unwrap();

        let bytes = parcel.into_bytes();
        let mut reader = ParcelReader::new(bytes.as_slice());
        assert_eq!(reader.read_object::<Payload>().unwrap(), Some(payload));
        assert_eq!(reader.read_object::<Payload>().unwrap(), None);
    }

    #[test]
    fn test_bad_presence_byte() {
        let bytes = [7u8];
        let mut reader = ParcelReader::new(bytes.as_slice());
        let err = reader.read_string().unwrap_err();
        assert!(matches!(err, TileError::InvalidParcel(_)));
    }

    #[test]
    fn test_short_stream_is_io_error() {
        // String claims 10 bytes but carries none.
        let mut bytes = vec![TAG_PRESENT];
        bytes.extend_from_slice(&10u32.to_be_bytes());

        let mut reader = ParcelReader::new(bytes.as_slice());
        let err = reader.read_string().unwrap_err();
        assert!(matches!(err, TileError::Io(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut bytes = vec![TAG_PRESENT];
        bytes.extend_from_slice(&2u32.to_be_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe]);

        let mut reader = ParcelReader::new(bytes.as_slice());
        let err = reader.read_string().unwrap_err();
        assert!(matches!(err, TileError::Utf8(_)));
    }
}
