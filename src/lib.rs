#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Error types for this crate.
mod error;
mod functional;
pub use error::*;

/// I/O utilities.
pub mod io;

/// Bit-level reading and writing, and the integer/string codecs built on top of it.
pub mod bitio;

/// base types for Matroska elements. ie. `VInt64`, `Header`, etc.
mod base;
/// Incremental, child-at-a-time master parsing (`ChunkedReader`), plus `skip_element`/
/// `copy_element` for walking past an element without decoding it into a Rust type.
pub mod chunked;
/// Lazy block/frame decoding: `BlockHeader`, `Frame`, `FrameView`, the lacing-aware split of a
/// block's payload into individual frames, and the `fill_frame_data` data-fill adaptor.
mod frame;
/// Tri-state (known/borrowed/owned) byte-span representation for deferred frame payloads.
pub mod data_range;
/// Lacing/delacing of a Matroska Block's payload into individual frames (Xiph, EBML, FixedSize).
pub mod lacer;
/// Leaf elements in Matroska.
mod leaf;
/// Master elements in Matroska.
mod master;
/// Supplementary elements in Matroska. Void elements, CRC-32, etc.
///
/// These elements are not from the Matroska specification, but Matroska specifications inherit them from EBML specifications.
mod supplement;
// Element body definitions and traits.
mod element;
/// Parses the EBML and Segment headers of a Matroska file without loading Clusters into memory.
pub mod view;

/// A prelude for common types and traits.
pub mod prelude {
    pub use crate::base::*;
    pub use crate::chunked::*;
    pub use crate::data_range::*;
    pub use crate::element::*;
    pub use crate::frame::*;
    pub use crate::lacer::*;
    pub use crate::leaf::*;
    pub use crate::master::*;
    pub use crate::supplement::*;
}
