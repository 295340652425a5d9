//! Block headers, lazy frame extraction, and the track-filtered, seekable [`FrameView`].
//!
//! Grounded on the original source's `ebml/frames.cpp` (`BlockHeader`, `FrameView::Iterator`,
//! `findNextBlock`, `advanceToFirstBlockForTrack`, `advanceToNextLaceIndex`).

use crate::{
    base::VInt64,
    data_range::{ByteRange, DataRange},
    functional::{Decode, Encode},
    lacer::Lacer,
    leaf::SimpleBlock,
    master::{BlockGroup, Cluster},
};

/// The four Matroska lacing modes, decoded from bits 1-2 of a block's flag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lacing {
    /// No lacing: the block holds exactly one frame.
    None,
    /// Xiph-style lacing: frame sizes are a sequence of summed bytes terminated by one `< 0xFF`.
    Xiph,
    /// EBML lacing: the first frame size is a size-VINT, the rest are signed VINT deltas.
    Ebml,
    /// Fixed-size lacing: all frames share one size, computed from the remaining length.
    FixedSize,
}

/// The fixed-layout header shared by `SimpleBlock` and the `Block` inside a `BlockGroup`.
///
/// Wire format: `trackNumber: VINT`, a 16-bit signed big-endian `timestampOffset`, then one
/// flag byte packed as `[keyframe:1][reserved:3][invisible:1][lacing:2][discardable:1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Track number this block belongs to.
    pub track_number: u64,
    /// Timestamp of the block, relative to the enclosing Cluster's timestamp.
    pub timestamp_offset: i16,
    /// Set when the wire keyframe bit is set. Only meaningful for `SimpleBlock`; a `Block`
    /// inside a `BlockGroup` determines keyframe status from `ReferenceBlock` instead.
    pub keyframe: bool,
    /// Whether the frame(s) should not be rendered (used for e.g. subtitle tracks).
    pub invisible: bool,
    /// Lacing mode used to pack the payload into one or more frames.
    pub lacing: Lacing,
    /// Whether the frame(s) may be discarded without breaking decoding of later frames.
    pub discardable: bool,
}

impl BlockHeader {
    /// Parses a block header from the front of `data`, returning it along with the remaining
    /// payload bytes (the laced frame data).
    pub fn parse(data: &[u8]) -> crate::Result<(BlockHeader, &[u8])> {
        let buf = &mut &*data;
        let track_number = *VInt64::decode(buf)?;
        let timestamp_offset = i16::decode(buf)?;
        let flag = u8::decode(buf)?;

        let lacing = match (flag >> 1) & 0x03 {
            0b00 => Lacing::None,
            0b01 => Lacing::Xiph,
            0b11 => Lacing::Ebml,
            _ => Lacing::FixedSize,
        };

        Ok((
            BlockHeader {
                track_number,
                timestamp_offset,
                keyframe: flag & 0x80 != 0,
                invisible: flag & 0x08 != 0,
                lacing,
                discardable: flag & 0x01 != 0,
            },
            *buf,
        ))
    }
}

impl Lacing {
    fn lacer(self) -> Option<Lacer> {
        match self {
            Lacing::None => None,
            Lacing::Xiph => Some(Lacer::Xiph),
            Lacing::Ebml => Some(Lacer::Ebml),
            Lacing::FixedSize => Some(Lacer::FixedSize),
        }
    }
}

/// A single decoded Matroska frame: the payload of one lace index of one block.
///
/// Only the first frame of a laced block carries a `timestamp` — later frames in the same
/// lace have no individually encoded offset and are left as `None` rather than interpolated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Timestamp in the Cluster's (segment) clock, present only for the lace's first frame.
    pub timestamp: Option<i64>,
    /// Byte range of this frame's data relative to the start of the block's own payload.
    pub data_range: ByteRange,
    /// The frame's bytes, if already materialised.
    pub data: &'a [u8],
    /// Track number the frame belongs to.
    pub track_number: u64,
    /// Whether the frame is a keyframe.
    pub is_keyframe: bool,
    /// Whether the frame is invisible.
    pub is_invisible: bool,
    /// Whether the frame is discardable.
    pub is_discardable: bool,
}

/// A block in a Cluster, either a SimpleBlock or a BlockGroup.
///
/// This is a convenience enum to allow handling both types of blocks uniformly.
/// * when reading: often we just want to iterate over all blocks in a cluster, regardless of type.
/// * when writing: we may want to write a list of blocks of mixed types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterBlock {
    /// A SimpleBlock
    Simple(SimpleBlock),
    /// A BlockGroup
    Group(BlockGroup),
}

impl ClusterBlock {
    fn block_ref(&self) -> BlockRef<'_> {
        match self {
            ClusterBlock::Simple(b) => BlockRef::Simple(b),
            ClusterBlock::Group(b) => BlockRef::Group(b),
        }
    }
}
impl From<SimpleBlock> for ClusterBlock {
    fn from(b: SimpleBlock) -> Self {
        ClusterBlock::Simple(b)
    }
}
impl From<BlockGroup> for ClusterBlock {
    fn from(b: BlockGroup) -> Self {
        ClusterBlock::Group(b)
    }
}

impl Encode for ClusterBlock {
    fn encode<B: crate::functional::BufMut>(&self, buf: &mut B) -> crate::Result<()> {
        match self {
            ClusterBlock::Simple(b) => b.encode(buf),
            ClusterBlock::Group(b) => b.encode(buf),
        }
    }
}

/// A borrow of either a `SimpleBlock` or a `BlockGroup`'s `Block`, for uniform frame extraction.
#[derive(Debug, Clone, Copy)]
enum BlockRef<'a> {
    Simple(&'a SimpleBlock),
    Group(&'a BlockGroup),
}

impl<'a> BlockRef<'a> {
    fn raw(self) -> &'a [u8] {
        match self {
            BlockRef::Simple(b) => &b.0,
            BlockRef::Group(g) => &g.block.0,
        }
    }

    /// Keyframe status, corrected for `BlockGroup` semantics (no `ReferenceBlock` => keyframe).
    fn is_keyframe(self, header: &BlockHeader) -> bool {
        match self {
            BlockRef::Simple(_) => header.keyframe,
            BlockRef::Group(g) => g.reference_block.is_empty(),
        }
    }

    /// Parses the header and splits the payload into per-lace-index `(ByteRange, &[u8])`
    /// frames, ready to be stamped with a timestamp and track filter.
    fn into_frames(self, cluster_ts: u64) -> crate::Result<Vec<Frame<'a>>> {
        let raw = self.raw();
        let (header, payload) = BlockHeader::parse(raw)?;
        let base_offset = (raw.len() - payload.len()) as u64;

        let slices: Vec<&[u8]> = match header.lacing.lacer() {
            None => vec![payload],
            Some(lacer) => lacer.delace(payload)?,
        };

        let is_keyframe = self.is_keyframe(&header);
        let mut offset = base_offset;
        let mut frames = Vec::with_capacity(slices.len());
        for (index, slice) in slices.into_iter().enumerate() {
            frames.push(Frame {
                timestamp: (index == 0)
                    .then(|| cluster_ts as i64 + header.timestamp_offset as i64),
                data_range: ByteRange::new(offset, slice.len() as u64),
                data: slice,
                track_number: header.track_number,
                is_keyframe,
                is_invisible: header.invisible,
                is_discardable: header.discardable,
            });
            offset += slice.len() as u64;
        }
        Ok(frames)
    }
}

impl<'a> From<&'a SimpleBlock> for BlockRef<'a> {
    fn from(b: &'a SimpleBlock) -> Self {
        BlockRef::Simple(b)
    }
}
impl<'a> From<&'a BlockGroup> for BlockRef<'a> {
    fn from(b: &'a BlockGroup) -> Self {
        BlockRef::Group(b)
    }
}

/// Merge-orders a cluster's `simple_block` and `block_group` children by timestamp offset,
/// breaking ties in favour of `SimpleBlock` (the source's `findNextBlock` tie-break: SimpleBlock
/// strictly-less, BlockGroup less-or-equal).
fn ordered_blocks(cluster: &Cluster) -> crate::Result<Vec<BlockRef<'_>>> {
    let mut refs: Vec<(i16, u8, BlockRef<'_>)> = Vec::with_capacity(
        cluster.simple_block.len() + cluster.block_group.len(),
    );
    for b in &cluster.simple_block {
        let (header, _) = BlockHeader::parse(&b.0)?;
        refs.push((header.timestamp_offset, 0, BlockRef::Simple(b)));
    }
    for g in &cluster.block_group {
        let (header, _) = BlockHeader::parse(&g.block.0)?;
        refs.push((header.timestamp_offset, 1, BlockRef::Group(g)));
    }
    refs.sort_by_key(|(offset, tag, _)| (*offset, *tag));
    Ok(refs.into_iter().map(|(_, _, r)| r).collect())
}

impl Cluster {
    /// All frames in the cluster, across every track, in non-decreasing timestamp order.
    pub fn frames(&self) -> crate::Result<Vec<Frame<'_>>> {
        let mut out = Vec::new();
        for block in ordered_blocks(self)? {
            out.extend(block.into_frames(*self.timestamp)?);
        }
        Ok(out)
    }
}

/// A single track's timestamp, expressed in that track's own clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TrackTimestamp(pub i64);

/// A lazy, track-filtered, seekable view over the frames of a sequence of Clusters.
///
/// Mirrors the original source's `FrameView::Iterator`: cluster timestamps (segment clock) are
/// converted to the track's clock via `track_timescale` (division crosses one level down, per
/// `Timestamp x Timescale` in the data model).
pub struct FrameView<'a> {
    clusters: std::slice::Iter<'a, Cluster>,
    track_number: u64,
    track_timescale: f64,
    start: Option<TrackTimestamp>,
    current: std::vec::IntoIter<Frame<'a>>,
}

impl<'a> FrameView<'a> {
    /// Builds a view over `clusters` yielding only frames of `track_number`, optionally
    /// starting at the first frame whose track-clock timestamp is `>= start`.
    ///
    /// `track_timescale` converts a track-clock duration to the segment clock: multiplying a
    /// track timestamp by it yields the corresponding segment timestamp.
    pub fn new(
        clusters: &'a [Cluster],
        track_number: u64,
        track_timescale: f64,
        start: Option<TrackTimestamp>,
    ) -> Self {
        let start_index = match start {
            Some(TrackTimestamp(t)) if t > 0 => {
                let target = (t as f64 * track_timescale).round() as i64;
                // last cluster with `cluster.timestamp < target`, strict per the source
                // (preserved intentionally: a shared boundary timestamp picks the earlier
                // cluster).
                let mut candidate = 0usize;
                for (i, c) in clusters.iter().enumerate() {
                    if (*c.timestamp as i64) < target {
                        candidate = i;
                    } else {
                        break;
                    }
                }
                candidate
            }
            _ => 0,
        };

        let mut view = FrameView {
            clusters: clusters[start_index..].iter(),
            track_number,
            track_timescale,
            start,
            current: Vec::new().into_iter(),
        };
        view.fill_current();
        view
    }

    fn fill_current(&mut self) {
        while self.current.len() == 0 {
            let Some(cluster) = self.clusters.next() else {
                return;
            };
            let Ok(blocks) = ordered_blocks(cluster) else {
                continue;
            };
            let mut frames = Vec::new();
            for block in blocks {
                if let Ok(block_frames) = block.into_frames(*cluster.timestamp) {
                    frames.extend(
                        block_frames
                            .into_iter()
                            .filter(|f| f.track_number == self.track_number),
                    );
                }
            }
            self.current = frames.into_iter();
        }
    }
}

impl<'a> Iterator for FrameView<'a> {
    type Item = Frame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(frame) = self.current.next() {
                if let Some(TrackTimestamp(start)) = self.start {
                    if let Some(ts) = frame.timestamp {
                        let track_ts = (ts as f64 / self.track_timescale).round() as i64;
                        if track_ts < start {
                            continue;
                        }
                    }
                }
                return Some(frame);
            }
            self.fill_current();
            if self.current.len() == 0 {
                return None;
            }
        }
    }
}

/// Fills every frame's `data` from `source`, an in-memory buffer holding the bytes that the
/// frames' `data_range`s are relative to.
///
/// Mirrors `fillFrameData`: each frame's range is sliced from `source` and substituted in
/// place. Fails with [`crate::Error::EndOfStream`] if a range lies outside `source`.
pub fn fill_frame_data<'a>(
    frames: impl IntoIterator<Item = Frame<'a>>,
    source: &'a [u8],
) -> crate::Result<Vec<Frame<'a>>> {
    frames
        .into_iter()
        .map(|f| {
            let start = usize::try_from(f.data_range.offset).map_err(|_| crate::Error::EndOfStream)?;
            let end = usize::try_from(f.data_range.end()).map_err(|_| crate::Error::EndOfStream)?;
            let data = source.get(start..end).ok_or(crate::Error::EndOfStream)?;
            Ok(Frame { data, ..f })
        })
        .collect()
}

/// Promotes every frame's range-relative data into an owned [`DataRange`], useful when frames
/// were produced with only `data_range` known (e.g. deferred from a `readMediaData = false`
/// parse) and must later be filled from the original source.
pub fn frame_data_ranges<'a>(frames: &[Frame<'a>]) -> Vec<DataRange<'a>> {
    frames.iter().map(|f| DataRange::Borrowed(f.data)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_block(track: u64, offset: i16, flag: u8, payload: &[u8]) -> SimpleBlock {
        let mut buf = Vec::new();
        VInt64::new(track).encode(&mut buf).unwrap();
        offset.encode(&mut buf).unwrap();
        flag.encode(&mut buf).unwrap();
        buf.extend_from_slice(payload);
        SimpleBlock(buf)
    }

    #[test]
    fn xiph_lace_scenario() {
        // SimpleBlock payload after the header: 3 frames, sizes 4, 2, 6 (spec scenario 4)
        let payload = [
            0x02u8, 0x04, 0x02, 0xDE, 0xAD, 0xBE, 0xEF, 0xB0, 0x0B, 0xDE, 0xAD, 0xBE, 0xEF, 0xF0,
            0x0B,
        ];
        // lacing bits 0b01 = Xiph, track 1, offset 0, no other flags
        let block = simple_block(1, 0, 0b0000_0010, &payload);
        let frames = BlockRef::Simple(&block).into_frames(0).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].data, &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(frames[1].data, &[0xB0, 0x0B]);
        assert_eq!(frames[2].data, &[0xDE, 0xAD, 0xBE, 0xEF, 0xF0, 0x0B]);
        assert_eq!(frames[0].timestamp, Some(0));
        assert_eq!(frames[1].timestamp, None);
        assert_eq!(frames[2].timestamp, None);
    }

    #[test]
    fn no_lacing_single_frame_carries_timestamp() {
        let block = simple_block(5, 7, 0x80, &[1, 2, 3]);
        let frames = BlockRef::Simple(&block).into_frames(1000).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].timestamp, Some(1007));
        assert!(frames[0].is_keyframe);
        assert_eq!(frames[0].track_number, 5);
    }

    #[test]
    fn fill_frame_data_from_buffer() {
        let source: Vec<u8> = vec![
            0xDE, 0xAD, 0xBE, 0xEF, 0xDE, 0xAD, 0xBE, 0xEF, 0xFF, 0x00, 0xBA, 0xBE, 0xFF, 0xFF,
            0xFF, 0xDE, 0xAD, 0xBE, 0xEF, 0xB0, 0x0B, 0xDE, 0xAD, 0xBE, 0xEF, 0xF0, 0x0B,
        ];
        let frame = Frame {
            timestamp: Some(0),
            data_range: ByteRange::new(0, 4),
            data: &[],
            track_number: 1,
            is_keyframe: true,
            is_invisible: false,
            is_discardable: false,
        };
        let filled = fill_frame_data(vec![frame], &source).unwrap();
        assert_eq!(filled[0].data, &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn fill_frame_data_out_of_range_fails() {
        let source = vec![0u8; 2];
        let frame = Frame {
            timestamp: Some(0),
            data_range: ByteRange::new(0, 4),
            data: &[],
            track_number: 1,
            is_keyframe: true,
            is_invisible: false,
            is_discardable: false,
        };
        assert!(fill_frame_data(vec![frame], &source).is_err());
    }
}
