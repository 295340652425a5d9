//! Composable bit-level value mappers.
//!
//! A mapper pairs a read operation with its write inverse, optionally declaring a fixed bit
//! width when the encoding never varies. This generalises the teacher's `functional::coding`
//! module (which maps whole element bodies through fixed closures) down to the bit level, in
//! the same closed-set-of-factories shape, so the EBML leaf and `BlockHeader` encodings can be
//! built by composing a handful of primitives instead of hand-rolling every field.

use std::marker::PhantomData;

use super::reader::BitReader;
use super::sizes::{BitCount, BitCountExt, ByteCount};
use super::writer::BitWriter;
use crate::error::{Error, Result};

/// A value with a read operation and its write inverse, usable over any `BitReader`/`BitWriter`.
pub trait Mapper<T> {
    /// Reads one `T` from `reader`.
    fn read(&self, reader: &mut BitReader) -> Result<T>;
    /// Writes `value` to `writer`.
    fn write(&self, writer: &mut BitWriter, value: &T) -> Result<()>;
    /// The bit width this mapper always consumes/produces, if constant.
    fn fixed_size(&self) -> Option<BitCount> {
        None
    }
}

/// Converts to and from a raw bit pattern. Implemented for the integer/bool types `map_bits`
/// and the fixed-bits mappers are parameterised over.
pub trait BitValue: Copy {
    fn from_bits(bits: u64) -> Self;
    fn to_bits(self) -> u64;
}

macro_rules! impl_bit_value_unsigned {
    ($($ty:ty),+) => {
        $(impl BitValue for $ty {
            fn from_bits(bits: u64) -> Self { bits as $ty }
            fn to_bits(self) -> u64 { self as u64 }
        })+
    };
}
impl_bit_value_unsigned!(u8, u16, u32, u64);

impl BitValue for bool {
    fn from_bits(bits: u64) -> Self {
        bits != 0
    }
    fn to_bits(self) -> u64 {
        self as u64
    }
}

/// `map_bits::<T>(n)`: reads/writes `n` raw bits as `T`.
pub struct BitsMapper<T> {
    n: BitCount,
    _marker: PhantomData<T>,
}

pub fn map_bits<T: BitValue>(n: BitCount) -> BitsMapper<T> {
    BitsMapper { n, _marker: PhantomData }
}

impl<T: BitValue> Mapper<T> for BitsMapper<T> {
    fn read(&self, reader: &mut BitReader) -> Result<T> {
        Ok(T::from_bits(reader.read(self.n)?))
    }
    fn write(&self, writer: &mut BitWriter, value: &T) -> Result<()> {
        writer.write((*value).to_bits(), self.n)
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(self.n)
    }
}

/// `map_bytes(n)`: reads/writes `n` byte-aligned bytes as a `Vec<u8>`. Fails on read or write
/// if the cursor is not currently byte-aligned.
pub struct BytesMapper {
    n: ByteCount,
}

pub fn map_bytes(n: ByteCount) -> BytesMapper {
    BytesMapper { n }
}

impl Mapper<Vec<u8>> for BytesMapper {
    fn read(&self, reader: &mut BitReader) -> Result<Vec<u8>> {
        reader.read_bytes(self.n)
    }
    fn write(&self, writer: &mut BitWriter, value: &Vec<u8>) -> Result<()> {
        writer.assert_alignment(8u64.bits())?;
        if value.len() as u64 != self.n.value() {
            return Err(Error::OutOfRange);
        }
        writer.write_bytes(value)
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(self.n.as_bits())
    }
}

/// Values with an Exponential-Golomb reader/writer, generalising `map_exp_golomb_bits::<T>()`
/// over both the unsigned and zig-zag signed variants.
pub trait ExpGolombValue: Copy {
    fn read_exp_golomb(reader: &mut BitReader) -> Result<Self>;
    fn write_exp_golomb(writer: &mut BitWriter, value: Self) -> Result<()>;
}

impl ExpGolombValue for u64 {
    fn read_exp_golomb(reader: &mut BitReader) -> Result<Self> {
        reader.read_exp_golomb()
    }
    fn write_exp_golomb(writer: &mut BitWriter, value: Self) -> Result<()> {
        writer.write_exp_golomb(value)
    }
}

impl ExpGolombValue for i64 {
    fn read_exp_golomb(reader: &mut BitReader) -> Result<Self> {
        reader.read_signed_exp_golomb()
    }
    fn write_exp_golomb(writer: &mut BitWriter, value: Self) -> Result<()> {
        writer.write_signed_exp_golomb(value)
    }
}

/// `map_exp_golomb_bits::<T>()`: variable-length Exponential-Golomb prefix code.
pub struct ExpGolombMapper<T> {
    _marker: PhantomData<T>,
}

pub fn map_exp_golomb_bits<T: ExpGolombValue>() -> ExpGolombMapper<T> {
    ExpGolombMapper { _marker: PhantomData }
}

impl<T: ExpGolombValue> Mapper<T> for ExpGolombMapper<T> {
    fn read(&self, reader: &mut BitReader) -> Result<T> {
        T::read_exp_golomb(reader)
    }
    fn write(&self, writer: &mut BitWriter, value: &T) -> Result<()> {
        T::write_exp_golomb(writer, *value)
    }
}

/// Values with a Fibonacci/NegaFibonacci reader/writer, generalising `map_fibonacci_bits::<T>()`
/// over the unsigned and signed variants.
pub trait FibonacciValue: Copy {
    fn read_fibonacci(reader: &mut BitReader) -> Result<Self>;
    fn write_fibonacci(writer: &mut BitWriter, value: Self) -> Result<()>;
}

impl FibonacciValue for u32 {
    fn read_fibonacci(reader: &mut BitReader) -> Result<Self> {
        reader.read_fibonacci()
    }
    fn write_fibonacci(writer: &mut BitWriter, value: Self) -> Result<()> {
        writer.write_fibonacci(value)
    }
}

impl FibonacciValue for i32 {
    fn read_fibonacci(reader: &mut BitReader) -> Result<Self> {
        reader.read_signed_fibonacci()
    }
    fn write_fibonacci(writer: &mut BitWriter, value: Self) -> Result<()> {
        writer.write_signed_fibonacci(value)
    }
}

/// `map_fibonacci_bits::<T>()`: variable-length Zeckendorf prefix code.
pub struct FibonacciMapper<T> {
    _marker: PhantomData<T>,
}

pub fn map_fibonacci_bits<T: FibonacciValue>() -> FibonacciMapper<T> {
    FibonacciMapper { _marker: PhantomData }
}

impl<T: FibonacciValue> Mapper<T> for FibonacciMapper<T> {
    fn read(&self, reader: &mut BitReader) -> Result<T> {
        T::read_fibonacci(reader)
    }
    fn write(&self, writer: &mut BitWriter, value: &T) -> Result<()> {
        T::write_fibonacci(writer, *value)
    }
}

/// `map_utf8_bytes()`: one UTF-8 encoded Unicode scalar value.
pub struct Utf8Mapper;

pub fn map_utf8_bytes() -> Utf8Mapper {
    Utf8Mapper
}

impl Mapper<char> for Utf8Mapper {
    fn read(&self, reader: &mut BitReader) -> Result<char> {
        reader.read_utf8_code_point()
    }
    fn write(&self, writer: &mut BitWriter, value: &char) -> Result<()> {
        writer.write_utf8_code_point(*value)
    }
}

/// `map_checked_fixed_bits::<V, N>()`: reads `N` bits, failing unless they equal `V`; writes
/// `V` unconditionally.
pub struct CheckedFixedBitsMapper<const V: u64, const N: u64>;

pub fn map_checked_fixed_bits<const V: u64, const N: u64>() -> CheckedFixedBitsMapper<V, N> {
    CheckedFixedBitsMapper
}

impl<const V: u64, const N: u64> Mapper<()> for CheckedFixedBitsMapper<V, N> {
    fn read(&self, reader: &mut BitReader) -> Result<()> {
        let got = reader.read(N.bits())?;
        if got != V {
            return Err(Error::OutOfRange);
        }
        Ok(())
    }
    fn write(&self, writer: &mut BitWriter, _value: &()) -> Result<()> {
        writer.write(V, N.bits())
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(N.bits())
    }
}

/// `map_unchecked_fixed_bits::<V, N>()`: reads and discards `N` bits without checking their
/// value; writes `V` unconditionally. Used for reserved/don't-care bit patterns.
pub struct UncheckedFixedBitsMapper<const V: u64, const N: u64>;

pub fn map_unchecked_fixed_bits<const V: u64, const N: u64>() -> UncheckedFixedBitsMapper<V, N> {
    UncheckedFixedBitsMapper
}

impl<const V: u64, const N: u64> Mapper<()> for UncheckedFixedBitsMapper<V, N> {
    fn read(&self, reader: &mut BitReader) -> Result<()> {
        reader.read(N.bits())?;
        Ok(())
    }
    fn write(&self, writer: &mut BitWriter, _value: &()) -> Result<()> {
        writer.write(V, N.bits())
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(N.bits())
    }
}

/// `assert_byte_aligned()`: a zero-size mapper that fails unless the cursor is byte-aligned.
pub struct AssertByteAligned;

pub fn assert_byte_aligned() -> AssertByteAligned {
    AssertByteAligned
}

impl Mapper<()> for AssertByteAligned {
    fn read(&self, reader: &mut BitReader) -> Result<()> {
        reader.assert_alignment(8u64.bits())
    }
    fn write(&self, writer: &mut BitWriter, _value: &()) -> Result<()> {
        writer.assert_alignment(8u64.bits())
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(BitCount::ZERO)
    }
}

/// Pairs two mappers into one producing a `(A, B)` tuple, reading/writing `A` then `B` in
/// order. `map_compound!` chains these to cover arbitrary arity.
pub struct Compound2<MA, MB>(pub MA, pub MB);

impl<TA, TB, MA: Mapper<TA>, MB: Mapper<TB>> Mapper<(TA, TB)> for Compound2<MA, MB> {
    fn read(&self, reader: &mut BitReader) -> Result<(TA, TB)> {
        let a = self.0.read(reader)?;
        let b = self.1.read(reader)?;
        Ok((a, b))
    }
    fn write(&self, writer: &mut BitWriter, value: &(TA, TB)) -> Result<()> {
        self.0.write(writer, &value.0)?;
        self.1.write(writer, &value.1)
    }
    fn fixed_size(&self) -> Option<BitCount> {
        Some(self.0.fixed_size()? + self.1.fixed_size()?)
    }
}

/// Applies every listed mapper in order, folding the results into a right-nested tuple
/// `(T1, (T2, (T3, ...)))`. Mirrors the `nested!` master-dispatch macro's "apply every member
/// in declaration order" idiom, one level down at the bit layer.
#[macro_export]
macro_rules! map_compound {
    ($a:expr) => {
        $a
    };
    ($a:expr, $($rest:expr),+ $(,)?) => {
        $crate::bitio::mapper::Compound2($a, $crate::map_compound!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_mapper_round_trips() {
        let mapper = map_bits::<u16>(12u64.bits());
        let mut buf = [0u8; 2];
        {
            let mut w = BitWriter::from_slice(&mut buf);
            mapper.write(&mut w, &0xABCu16).unwrap();
        }
        let mut r = BitReader::from_slice(&buf);
        assert_eq!(mapper.read(&mut r).unwrap(), 0xABC);
    }

    #[test]
    fn checked_fixed_bits_rejects_mismatch() {
        let mapper = map_checked_fixed_bits::<0b101, 3>();
        let data = [0b110_00000u8];
        let mut r = BitReader::from_slice(&data);
        assert!(mapper.read(&mut r).is_err());
    }

    #[test]
    fn compound_reads_members_in_order() {
        let mapper = map_compound!(map_bits::<u8>(4u64.bits()), map_bits::<u8>(4u64.bits()));
        let data = [0b1010_0101u8];
        let mut r = BitReader::from_slice(&data);
        let (a, b) = mapper.read(&mut r).unwrap();
        assert_eq!((a, b), (0b1010, 0b0101));
    }
}
