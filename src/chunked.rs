//! Incremental, child-at-a-time master parsing.
//!
//! The `nested!` macro in `src/master.rs` decodes a whole master in one call, dispatching on
//! each child's peeked ID. [`ChunkedReader`] extracts that same peek/dispatch/advance loop into
//! a standalone value so a caller can drive it one child at a time (`has_next`/`next`) instead
//! of getting a fully-populated struct back — grounded on the original's `hasMoreMembers`-driven
//! read loop in `examples/original_source/ebml/ebml.cpp`, expressed here as the explicit
//! `enum State` state machine stable Rust needs in place of a coroutine.
//!
//! [`skip_element`]/[`copy_element`] are the sibling primitives for a caller that wants to walk
//! past (or duplicate) an element it doesn't otherwise care about, including unknown-size
//! masters, without decoding it into any particular Rust type.

use std::io::{Read, Seek, SeekFrom, Write};

use crate::base::{Header, VInt64};
use crate::functional::{Buf, Decode};
use crate::io::blocking::ReadFrom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initial,
    Reading,
    Finished,
}

/// Sentinel ID returned by [`ChunkedReader::next`] once the master has no more children.
pub const SENTINEL_ID: VInt64 = VInt64::new(0);

/// Reads a master's children one at a time off an in-memory buffer already positioned at the
/// start of the master's body (its own header must already be consumed by the caller).
///
/// Between calls this holds only the bookkeeping §4.H names: the master's declared `dataSize`,
/// its start length (to measure `position - startPos` against it), and the terminator set —
/// never a copy of, or reference into, a partially consumed child.
pub struct ChunkedReader {
    state: State,
    data_size: VInt64,
    start_len: usize,
    terminators: &'static [VInt64],
}

impl ChunkedReader {
    /// Begins reading a master's children from `buf`, which must be positioned just past the
    /// master's own header.
    pub fn new(buf: &[u8], data_size: VInt64, terminators: &'static [VInt64]) -> Self {
        ChunkedReader {
            state: State::Initial,
            data_size,
            start_len: buf.len(),
            terminators,
        }
    }

    fn should_continue(&self, buf: &[u8]) -> bool {
        if self.data_size.is_unknown {
            buf.has_remaining()
        } else {
            let consumed = self.start_len - buf.len();
            consumed < *self.data_size as usize
        }
    }

    /// Whether another child can be attempted. Never consumes anything, and is safe to call
    /// repeatedly.
    pub fn has_next(&self, buf: &[u8]) -> bool {
        self.state != State::Finished && self.should_continue(buf)
    }

    /// Reads exactly one child's header, returning its ID, or [`SENTINEL_ID`] once the master is
    /// finished (on a terminator ID, known-size exhaustion, or source exhaustion).
    ///
    /// On a non-sentinel return, `buf` has been advanced past the child's header only; the
    /// caller is responsible for consuming (or skipping) exactly that child's body — via
    /// `Element::decode_element`/[`skip_element`] — before calling `next` again, the same
    /// contract the `nested!` macro's own dispatch loop follows.
    pub fn next(&mut self, buf: &mut &[u8]) -> crate::Result<VInt64> {
        if !self.should_continue(buf) {
            self.state = State::Finished;
            return Ok(SENTINEL_ID);
        }
        self.state = State::Reading;

        let mut probe = *buf;
        let header = match Header::decode(&mut probe) {
            Ok(header) => header,
            Err(_) => {
                self.state = State::Finished;
                return Ok(SENTINEL_ID);
            }
        };

        if self.data_size.is_unknown && self.terminators.contains(&header.id) {
            self.state = State::Finished;
            return Ok(SENTINEL_ID);
        }

        *buf = probe;
        Ok(header.id)
    }
}

/// Skips a single element (header plus body) from `reader` without materialising it anywhere,
/// recursing through an unknown-size master's children until a terminator ID is peeked or the
/// stream runs out. Returns the total number of bytes skipped (header plus body).
pub fn skip_element<R: Read + Seek>(reader: &mut R, terminators: &[VInt64]) -> crate::Result<u64> {
    let start = reader.stream_position()?;
    let header = Header::read_from(reader)?;

    if !header.size.is_unknown {
        std::io::copy(&mut reader.take(*header.size), &mut std::io::sink())?;
        return Ok(reader.stream_position()? - start);
    }

    loop {
        let child_pos = reader.stream_position()?;
        match Header::read_from(reader) {
            Ok(child) if terminators.contains(&child.id) => {
                reader.seek(SeekFrom::Start(child_pos))?;
                break;
            }
            Ok(_) => {
                reader.seek(SeekFrom::Start(child_pos))?;
                skip_element(reader, terminators)?;
            }
            Err(_) => break,
        }
    }

    Ok(reader.stream_position()? - start)
}

/// Identical to [`skip_element`], but copies every processed byte through to `writer` instead of
/// discarding it, byte-for-byte (header included). Returns the total number of bytes copied.
pub fn copy_element<R: Read + Seek, W: Write>(
    reader: &mut R,
    writer: &mut W,
    terminators: &[VInt64],
) -> crate::Result<u64> {
    let start = reader.stream_position()?;
    let header = Header::read_from(reader)?;
    let header_len = reader.stream_position()? - start;
    reader.seek(SeekFrom::Start(start))?;
    std::io::copy(&mut reader.take(header_len), writer)?;

    if !header.size.is_unknown {
        std::io::copy(&mut reader.take(*header.size), writer)?;
        return Ok(reader.stream_position()? - start);
    }

    loop {
        let child_pos = reader.stream_position()?;
        match Header::read_from(reader) {
            Ok(child) if terminators.contains(&child.id) => {
                reader.seek(SeekFrom::Start(child_pos))?;
                break;
            }
            Ok(_) => {
                reader.seek(SeekFrom::Start(child_pos))?;
                copy_element(reader, writer, terminators)?;
            }
            Err(_) => break,
        }
    }

    Ok(reader.stream_position()? - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::Encode;
    use crate::master::{Cluster, Ebml, Segment};

    fn encode_header(id: VInt64, size: VInt64) -> Vec<u8> {
        let mut out = Vec::new();
        Header { id, size }.encode(&mut out).unwrap();
        out
    }

    #[test]
    fn chunked_reader_stops_at_known_size_exhaustion() {
        let leaf_id = VInt64::new(0x80);
        let mut body = encode_header(leaf_id, VInt64::new(2));
        body.extend_from_slice(&[0xAA, 0xBB]);
        let data_size = VInt64::new(body.len() as u64);

        let mut reader = ChunkedReader::new(&body, data_size, &[]);
        let mut buf: &[u8] = &body;

        assert!(reader.has_next(buf));
        let id = reader.next(&mut buf).unwrap();
        assert_eq!(id, leaf_id);
        buf.advance(2); // caller consumes the body itself

        assert!(!reader.has_next(buf));
        assert_eq!(reader.next(&mut buf).unwrap(), SENTINEL_ID);
    }

    #[test]
    fn chunked_reader_stops_at_terminator_without_consuming_it() {
        let mut body = encode_header(VInt64::new(0x80), VInt64::new(1));
        body.push(0x01);
        body.extend_from_slice(&encode_header(Segment::ID, VInt64::new(0)));

        let mut reader = ChunkedReader::new(&body, VInt64::new_unknown(), &[Segment::ID]);
        let mut buf: &[u8] = &body;

        let id = reader.next(&mut buf).unwrap();
        assert_eq!(id, VInt64::new(0x80));
        buf.advance(1);

        assert_eq!(reader.next(&mut buf).unwrap(), SENTINEL_ID);
        // the terminator itself was never consumed
        assert_eq!(buf.remaining(), encode_header(Segment::ID, VInt64::new(0)).len());
    }

    #[test]
    fn skip_element_handles_unknown_size_cluster() {
        let mut inner = encode_header(VInt64::new(0x80), VInt64::new(1));
        inner.push(0x01);
        let mut cluster = encode_header(Cluster::ID, VInt64::new_unknown());
        cluster.extend_from_slice(&inner);
        cluster.extend_from_slice(&encode_header(Ebml::ID, VInt64::new(0)));

        let mut cursor = std::io::Cursor::new(cluster.clone());
        let n = skip_element(&mut cursor, &[Ebml::ID, Segment::ID, Cluster::ID]).unwrap();
        assert_eq!(n, (cluster.len() - encode_header(Ebml::ID, VInt64::new(0)).len()) as u64);
    }

    #[test]
    fn copy_element_reproduces_bytes_for_known_size_element() {
        let mut elem = encode_header(VInt64::new(0x4286), VInt64::new(3));
        elem.extend_from_slice(&[1, 2, 3]);

        let mut cursor = std::io::Cursor::new(elem.clone());
        let mut out = Vec::new();
        let n = copy_element(&mut cursor, &mut out, &[]).unwrap();
        assert_eq!(n, elem.len() as u64);
        assert_eq!(out, elem);
    }
}
