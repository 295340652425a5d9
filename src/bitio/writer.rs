//! `BitWriter`: the write-side counterpart to `BitReader`.
//!
//! Grounded on the original source's `BitWriter` (`include/writer.hpp`, `src/writer.cpp`): the
//! overflow-split `write`, `fillToAligment`, and the `invertBits`-before-write step for
//! Fibonacci/NegaFibonacci codes are all reproduced here.

use super::cache::{Cache, CACHE_SIZE};
use super::codec::{
    encode_exp_golomb, encode_fibonacci, encode_negafibonacci, encode_signed_exp_golomb,
    encode_utf8, invert_bits,
};
use super::sizes::{BitCount, BitCountExt};
use super::source::ByteSink;
use crate::error::{Error, Result};

/// Writes a stream MSB-first, tracking position in bits.
pub struct BitWriter<'a> {
    sink: ByteSink<'a>,
    cache: Cache,
    bits_written: BitCount,
}

impl<'a> BitWriter<'a> {
    /// Builds a writer over an arbitrary byte sink.
    pub fn new(sink: ByteSink<'a>) -> Self {
        BitWriter { sink, cache: Cache::new(), bits_written: BitCount::ZERO }
    }

    /// Builds a writer over an in-memory buffer.
    pub fn from_slice(data: &'a mut [u8]) -> Self {
        Self::new(ByteSink::from_slice(data))
    }

    /// Total number of bits written so far.
    pub fn position(&self) -> BitCount {
        self.bits_written
    }

    fn drain_full_bytes(&mut self) -> Result<()> {
        let (cache, sink) = (&mut self.cache, &mut self.sink);
        let mut rejected = false;
        cache.flush_full_bytes(|byte| {
            if rejected {
                return false;
            }
            if sink.push_byte(byte) {
                true
            } else {
                rejected = true;
                false
            }
        });
        if rejected { Err(Error::EndOfStream) } else { Ok(()) }
    }

    /// Writes the low `n` bits (`n <= 64`) of `value`, MSB-first.
    ///
    /// When `n` plus whatever is already cached would overflow the 64-bit cache, the write is
    /// split in half: the high half is written first, then the low half.
    pub fn write(&mut self, value: u64, n: BitCount) -> Result<()> {
        if n.value() == 0 {
            return Ok(());
        }
        if n.value() > CACHE_SIZE.value() {
            return Err(Error::OutOfRange);
        }
        if n.value() + self.cache.size.value() > CACHE_SIZE.value() {
            let half = (n.value() / 2).bits();
            let rest = (n.value() - half.value()).bits();
            self.write(value >> rest.value(), half)?;
            self.write(value, rest)?;
            return Ok(());
        }
        self.cache.push_bits(value, n);
        self.bits_written += n;
        self.drain_full_bytes()
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, value: bool) -> Result<()> {
        self.write(value as u64, 1u64.bits())
    }

    /// Writes a single byte.
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write(value as u64, 8u64.bits())
    }

    /// Writes each byte of `data` in order.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        for &byte in data {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Pads with zero bits until the position is a multiple of `align` bits.
    pub fn fill_to_alignment(&mut self, align: BitCount) -> Result<()> {
        if align.value() == 0 {
            return Ok(());
        }
        let rem = self.position().value() % align.value();
        if rem != 0 {
            self.write(0, (align.value() - rem).bits())?;
        }
        Ok(())
    }

    /// Errors unless the current position is a multiple of `align` bits.
    pub fn assert_alignment(&self, align: BitCount) -> Result<()> {
        if align.value() != 0 && self.position().value() % align.value() != 0 {
            return Err(Error::Unaligned);
        }
        Ok(())
    }

    /// Writes an unsigned Exponential-Golomb code.
    pub fn write_exp_golomb(&mut self, value: u64) -> Result<()> {
        let (encoded, n) = encode_exp_golomb(value);
        self.write(encoded, n)
    }

    /// Writes a zig-zag signed Exponential-Golomb code.
    pub fn write_signed_exp_golomb(&mut self, value: i64) -> Result<()> {
        let (encoded, n) = encode_signed_exp_golomb(value);
        self.write(encoded, n)
    }

    /// Writes an unsigned Fibonacci (Zeckendorf) code.
    pub fn write_fibonacci(&mut self, value: u32) -> Result<()> {
        let (encoded, n) = encode_fibonacci(value);
        self.write(invert_bits(encoded, n), n)
    }

    /// Writes a signed NegaFibonacci code.
    pub fn write_signed_fibonacci(&mut self, value: i32) -> Result<()> {
        let (encoded, n) = encode_negafibonacci(value);
        self.write(invert_bits(encoded, n), n)
    }

    /// Writes one Unicode scalar value as UTF-8.
    pub fn write_utf8_code_point(&mut self, code_point: char) -> Result<()> {
        self.assert_alignment(8u64.bits())?;
        let (buf, len) = encode_utf8(code_point);
        self.write_bytes(&buf[..len])
    }

    /// Writes one Unicode scalar value as UTF-16, using a surrogate pair above U+FFFF.
    pub fn write_utf16_code_point(&mut self, code_point: char) -> Result<()> {
        self.assert_alignment(8u64.bits())?;
        let c = code_point as u32;
        if c >= 0x10000 {
            let shifted = c - 0x10000;
            let high = 0xD800 + (shifted >> 10);
            let low = 0xDC00 + (shifted & 0x3FF);
            self.write(high as u64, 16u64.bits())?;
            self.write(low as u64, 16u64.bits())
        } else {
            self.write(c as u64, 16u64.bits())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::reader::BitReader;

    #[test]
    fn writes_simple_bit_runs() {
        let mut buf = [0u8; 2];
        {
            let mut w = BitWriter::from_slice(&mut buf);
            w.write(0b1010, 4u64.bits()).unwrap();
            w.write(0b1100, 4u64.bits()).unwrap();
            w.write(0b1111_0000, 8u64.bits()).unwrap();
        }
        assert_eq!(buf, [0b1010_1100, 0b1111_0000]);
    }

    #[test]
    fn exp_golomb_round_trips_through_bits() {
        let mut buf = [0u8; 2];
        {
            let mut w = BitWriter::from_slice(&mut buf);
            w.write_exp_golomb(37).unwrap();
            w.fill_to_alignment(8u64.bits()).unwrap();
        }
        let mut r = BitReader::from_slice(&buf);
        assert_eq!(r.read_exp_golomb().unwrap(), 37);
    }

    #[test]
    fn fibonacci_round_trips_through_bits() {
        for &n in &[1u32, 5, 9, 14, 65, 107] {
            let mut buf = [0u8; 8];
            {
                let mut w = BitWriter::from_slice(&mut buf);
                w.write_fibonacci(n).unwrap();
            }
            let mut r = BitReader::from_slice(&buf);
            assert_eq!(r.read_fibonacci().unwrap(), n);
        }
    }

    #[test]
    fn negafibonacci_round_trips_through_bits() {
        for &n in &[-11i32, -8, -3, -1, 1, 3, 8, 11] {
            let mut buf = [0u8; 8];
            {
                let mut w = BitWriter::from_slice(&mut buf);
                w.write_signed_fibonacci(n).unwrap();
            }
            let mut r = BitReader::from_slice(&buf);
            assert_eq!(r.read_signed_fibonacci().unwrap(), n);
        }
    }

    #[test]
    fn sink_exhaustion_surfaces_as_end_of_stream() {
        let mut buf = [0u8; 1];
        let mut w = BitWriter::from_slice(&mut buf);
        w.write_byte(1).unwrap();
        assert!(matches!(w.write_byte(2), Err(Error::EndOfStream)));
    }
}
