//! Bit-level I/O.
//!
//! `BitReader`/`BitWriter` read and write a stream MSB-first through a left-justified 64-bit
//! cache, grounded on the original source's `BitReader`/`BitWriter` classes
//! (`include/reader.hpp`, `include/writer.hpp`). `codec` holds the pure, total encode/decode
//! functions (Exponential-Golomb, Fibonacci, UTF) that the reader and writer wrap with
//! bit-consuming/bit-producing state.

mod cache;
pub mod codec;
pub mod mapper;
mod reader;
mod sizes;
mod source;
mod writer;

pub use mapper::Mapper;
pub use reader::BitReader;
pub use sizes::{BitCount, BitCountExt, ByteCount};
pub use source::{ByteSink, ByteSource};
pub use writer::BitWriter;
