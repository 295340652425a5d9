//! Tri-state representation of a payload byte span.
//!
//! Grounded on the original source's `DataRange` (`include/data_range.hpp` /
//! `src/data_range.cpp`): a frame's backing bytes are either merely *known* by offset and size
//! (nothing read yet), *borrowed* from a buffer the caller still owns, or *owned* outright. A
//! `Known` range is promoted to `Borrowed` or `Owned` by [`DataRange::fill_from_buffer`] or
//! [`DataRange::fill_from_stream`] once a byte source is available.

use std::io::{Read, Seek, SeekFrom};

use crate::Error;

/// An absolute byte span `[offset, offset + size)` within some byte source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteRange {
    /// Offset of the first byte of the span, from the start of the source.
    pub offset: u64,
    /// Number of bytes in the span.
    pub size: u64,
}

impl ByteRange {
    /// Builds a range from an offset and size.
    pub fn new(offset: u64, size: u64) -> Self {
        ByteRange { offset, size }
    }

    /// The offset one past the last byte of the span.
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }
}

/// A payload byte span in one of three states.
///
/// Ordering compares first by variant (`Known < Borrowed < Owned`), then by contents, matching
/// the derived order below.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum DataRange<'a> {
    /// Only the offset and size are known; no bytes have been read.
    Known(ByteRange),
    /// Bytes borrowed from a buffer the caller owns.
    Borrowed(&'a [u8]),
    /// Bytes owned by this `DataRange`.
    Owned(Vec<u8>),
}

impl<'a> DataRange<'a> {
    /// True unless this range is still in the `Known` (no-bytes-yet) state.
    pub fn has_data(&self) -> bool {
        !matches!(self, DataRange::Known(_))
    }

    /// Length in bytes, regardless of variant.
    pub fn size(&self) -> u64 {
        match self {
            DataRange::Known(r) => r.size,
            DataRange::Borrowed(b) => b.len() as u64,
            DataRange::Owned(b) => b.len() as u64,
        }
    }

    /// The underlying bytes, if this range has any (i.e. is not `Known`).
    pub fn as_slice(&self) -> Option<&[u8]> {
        match self {
            DataRange::Known(_) => None,
            DataRange::Borrowed(b) => Some(b),
            DataRange::Owned(b) => Some(b.as_slice()),
        }
    }

    /// A `Borrowed` view over this range's bytes: a no-op for `Borrowed`, a borrow of the
    /// backing vector for `Owned`, and a copy of the (empty) `Known` state otherwise.
    pub fn borrow(&self) -> DataRange<'_> {
        match self {
            DataRange::Known(r) => DataRange::Known(*r),
            DataRange::Borrowed(b) => DataRange::Borrowed(b),
            DataRange::Owned(v) => DataRange::Borrowed(v.as_slice()),
        }
    }

    /// Promotes this range to `Borrowed` (or `Owned`) using an in-memory buffer that contains
    /// the full byte source this range's offsets are relative to.
    ///
    /// `Known -> Borrowed`/`Owned` slices `source[offset..offset+size]`, failing with
    /// [`Error::EndOfStream`] if that slice cannot be produced. `Borrowed -> Owned` copies.
    /// Anything already at or above `to_owned`'s target mode is returned unchanged
    /// (idempotent).
    pub fn fill_from_buffer(self, source: &'a [u8], to_owned: bool) -> crate::Result<DataRange<'a>> {
        match self {
            DataRange::Known(r) => {
                let start = usize::try_from(r.offset).map_err(|_| Error::EndOfStream)?;
                let end = usize::try_from(r.end()).map_err(|_| Error::EndOfStream)?;
                let slice = source.get(start..end).ok_or(Error::EndOfStream)?;
                Ok(if to_owned {
                    DataRange::Owned(slice.to_vec())
                } else {
                    DataRange::Borrowed(slice)
                })
            }
            DataRange::Borrowed(b) => Ok(if to_owned {
                DataRange::Owned(b.to_vec())
            } else {
                DataRange::Borrowed(b)
            }),
            owned @ DataRange::Owned(_) => Ok(owned),
        }
    }

    /// Promotes this range to `Owned` by seeking into a stream and reading `size` bytes.
    ///
    /// Always produces `Owned`, since a stream has no stable backing buffer to borrow from.
    /// Fails with [`Error::EndOfStream`] on a short read.
    pub fn fill_from_stream<R: Read + Seek>(self, stream: &mut R) -> crate::Result<DataRange<'static>> {
        match self {
            DataRange::Known(r) => {
                stream.seek(SeekFrom::Start(r.offset))?;
                let mut buf = vec![0u8; r.size as usize];
                stream.read_exact(&mut buf).map_err(|_| Error::EndOfStream)?;
                Ok(DataRange::Owned(buf))
            }
            DataRange::Borrowed(b) => Ok(DataRange::Owned(b.to_vec())),
            DataRange::Owned(v) => Ok(DataRange::Owned(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_promotes_to_borrowed_then_owned() {
        let source = [0xDEu8, 0xAD, 0xBE, 0xEF, 0xFF, 0x00];
        let range = DataRange::Known(ByteRange::new(0, 4));
        let borrowed = range.fill_from_buffer(&source, false).unwrap();
        assert_eq!(borrowed.as_slice(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
        assert!(matches!(borrowed, DataRange::Borrowed(_)));

        let owned = borrowed.fill_from_buffer(&source, true).unwrap();
        assert!(matches!(owned, DataRange::Owned(_)));
        assert_eq!(owned.as_slice(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
    }

    #[test]
    fn out_of_range_known_is_end_of_stream() {
        let source = [0u8; 4];
        let range = DataRange::Known(ByteRange::new(2, 10));
        assert!(matches!(
            range.fill_from_buffer(&source, false),
            Err(Error::EndOfStream)
        ));
    }

    #[test]
    fn fill_from_stream_reads_exact_slice() {
        let source: Vec<u8> = vec![
            0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF, 0xFF, 0x00, 0xBA, 0xBE, 0xFF, 0xFF,
            0xFF, 0xDE, 0xAD, 0xBE, 0xEF, 0xB0, 0x0B, 0xDE, 0xAD, 0xBE, 0xEF, 0xF0, 0x0B,
        ];
        let mut cursor = std::io::Cursor::new(source);
        let range = DataRange::Known(ByteRange::new(0, 4));
        let filled = range.fill_from_stream(&mut cursor).unwrap();
        assert_eq!(filled.as_slice(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
    }

    #[test]
    fn fill_from_stream_short_read_is_end_of_stream() {
        let mut cursor = std::io::Cursor::new(vec![1u8, 2, 3]);
        let range = DataRange::Known(ByteRange::new(0, 10));
        assert!(matches!(
            range.fill_from_stream(&mut cursor),
            Err(Error::EndOfStream)
        ));
    }

    #[test]
    fn fill_is_idempotent_when_already_at_target() {
        let owned = DataRange::Owned(vec![1, 2, 3]);
        let source = [0u8; 4];
        let refilled = owned.fill_from_buffer(&source, false).unwrap();
        assert_eq!(refilled.as_slice(), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn ordering_is_variant_then_contents() {
        let known = DataRange::Known(ByteRange::new(0, 1));
        let borrowed = DataRange::Borrowed(&[1]);
        let owned = DataRange::Owned(vec![1]);
        assert!(known < borrowed);
        assert!(borrowed < owned);
    }
}
