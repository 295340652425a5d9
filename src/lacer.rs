//! Handler for lacing and delacing operations on frame data.

use crate::Error;

/// Size in bytes of the EBML/Matroska `size-VINT` encoding for `value`, picking the smallest
/// width whose marker bit and payload can hold it (mirrors `VInt64::encode_size`, duplicated
/// here so lacing stays independent of the element-header VInt64 type).
fn vint_width_for(value: u64) -> usize {
    let total_bits = 64 - value.leading_zeros() as usize;
    if total_bits == 0 { 1 } else { total_bits.div_ceil(7) }
}

/// Writes `value` as a size-VINT using exactly `width` bytes (caller guarantees it fits).
fn write_vint_fixed_width(out: &mut Vec<u8>, value: u64, width: usize) {
    let mut buf = [0u8; 8];
    let slice = &mut buf[8 - width..];
    slice.copy_from_slice(&value.to_be_bytes()[8 - width..]);
    slice[0] |= 1u8 << (8 - width);
    out.extend_from_slice(&buf[8 - width..]);
}

/// Writes an unsigned lace frame size as a minimal-width size-VINT.
fn write_vint(out: &mut Vec<u8>, value: u64) {
    write_vint_fixed_width(out, value, vint_width_for(value));
}

/// Reads a size-VINT from the front of `data`, returning `(value, width_in_bytes)`.
fn read_vint(data: &[u8]) -> crate::Result<(u64, usize)> {
    let first = *data.first().ok_or(Error::MalformedLacingData)?;
    if first == 0 {
        return Err(Error::MalformedLacingData);
    }
    let width = first.leading_zeros() as usize + 1;
    if data.len() < width {
        return Err(Error::MalformedLacingData);
    }
    let mut bytes = [0u8; 8];
    bytes[8 - width] = first & (0xFFu16 >> width) as u8;
    if width > 1 {
        bytes[9 - width..8].copy_from_slice(&data[1..width]);
    }
    Ok((u64::from_be_bytes(bytes), width))
}

/// Smallest VINT width able to represent `delta` once biased for that width, per the EBML
/// lacing "signed VINT" scheme: `vint - (2^(7*width-1) - 1)`.
fn signed_vint_width(delta: i64) -> usize {
    for width in 1..=8u32 {
        let bias = (1i64 << (7 * width - 1)) - 1;
        let biased = delta + bias;
        let max = (1i64 << (7 * width)) - 2; // top value reserved as the unknown-size sentinel
        if (0..=max).contains(&biased) {
            return width as usize;
        }
    }
    8
}

fn write_signed_vint(out: &mut Vec<u8>, delta: i64) {
    let width = signed_vint_width(delta);
    let bias = (1i64 << (7 * width - 1)) - 1;
    write_vint_fixed_width(out, (delta + bias) as u64, width);
}

fn read_signed_vint(data: &[u8]) -> crate::Result<(i64, usize)> {
    let (biased, width) = read_vint(data)?;
    let bias = (1i64 << (7 * width as u32 - 1)) - 1;
    Ok((biased as i64 - bias, width))
}

/// Handler for lacing and delacing operations on frame data.
pub enum Lacer {
    /// Xiph lacing (variable-size frames with size prefixes)
    Xiph,
    /// Fixed-size lacing (all frames have the same size)
    FixedSize,
    /// EBML lacing (variable-size frames with EBML-encoded sizes)
    Ebml,
}

impl Lacer {
    /// Encode multiple frames into a single laced block
    pub fn lace(&self, frames: &[&[u8]]) -> Vec<u8> {
        match self {
            Lacer::Xiph => {
                if frames.is_empty() {
                    return vec![];
                }
                let num_frames = frames.len();
                let mut output = vec![];
                output.push((num_frames - 1) as u8); // Number of frames - 1
                for frame in &frames[..num_frames - 1] {
                    let mut size = frame.len();
                    while size >= 0xFF {
                        output.push(0xFF);
                        size -= 0xFF;
                    }
                    output.push(size as u8);
                }
                for frame in frames {
                    output.extend_from_slice(frame);
                }
                output
            }
            Lacer::FixedSize => {
                if frames.is_empty() {
                    return vec![];
                }
                let num_frames = frames.len();
                let mut output = vec![(num_frames - 1) as u8];
                for frame in frames {
                    output.extend_from_slice(frame);
                }
                output
            }
            Lacer::Ebml => {
                if frames.is_empty() {
                    return vec![];
                }
                let num_frames = frames.len();
                let mut output = vec![(num_frames - 1) as u8];
                if num_frames > 1 {
                    write_vint(&mut output, frames[0].len() as u64);
                    let mut cum = frames[0].len() as i64;
                    for frame in &frames[1..num_frames - 1] {
                        let size = frame.len() as i64;
                        write_signed_vint(&mut output, size - cum);
                        cum = size;
                    }
                }
                for frame in frames {
                    output.extend_from_slice(frame);
                }
                output
            }
        }
    }

    /// Decode a laced block into individual frames
    pub fn delace<'a>(&self, data: &'a [u8]) -> crate::Result<Vec<&'a [u8]>> {
        // TODO(perf): avoid heap allocations ideally
        // we should be able to return a `impl Iterator<Item = crate::Result<&'a [u8]>>` here
        // can make it work using nightly features like `generators`.
        // but not sure how to do that with the current stable Rust.

        match self {
            Lacer::Xiph => {
                if data.is_empty() {
                    return Ok(vec![]);
                }

                let num_frames = data[0] as usize + 1;
                if num_frames == 1 {
                    return Ok(vec![&data[1..]]);
                }
                let mut out = Vec::with_capacity(num_frames);

                let data_start_pos = data
                    .iter()
                    .enumerate()
                    .skip(1)
                    .filter(|(_, b)| **b != 0xFF)
                    .nth(num_frames - 2)
                    .map(|(i, _)| i)
                    .ok_or(Error::MalformedLacingData)?
                    + 1;

                let laced_data = data
                    .get(data_start_pos..)
                    .ok_or(Error::MalformedLacingData)?;

                let mut start = 0;
                for size in data[1..data_start_pos]
                    .split_inclusive(|b| *b != 0xFF)
                    .map(|chunk| chunk.iter().map(|b| *b as usize).sum::<usize>())
                {
                    out.push(
                        laced_data
                            .get(start..start + size)
                            .ok_or(Error::MalformedLacingData)?,
                    );
                    start += size;
                }
                out.push(laced_data.get(start..).ok_or(Error::MalformedLacingData)?);
                Ok(out)
            }
            Lacer::FixedSize => {
                if data.is_empty() {
                    return Ok(vec![]);
                }
                let num_frames = data[0] as usize + 1;
                let rest = &data[1..];
                if num_frames == 0 || rest.len() % num_frames != 0 {
                    return Err(Error::MalformedLacingData);
                }
                let frame_size = rest.len() / num_frames;
                Ok(rest.chunks(frame_size).collect())
            }
            Lacer::Ebml => {
                if data.is_empty() {
                    return Ok(vec![]);
                }
                let num_frames = data[0] as usize + 1;
                if num_frames == 1 {
                    return Ok(vec![&data[1..]]);
                }

                let mut pos = 1usize;
                let (first_size, width) = read_vint(data.get(pos..).ok_or(Error::MalformedLacingData)?)?;
                pos += width;

                let mut sizes = Vec::with_capacity(num_frames - 1);
                sizes.push(first_size);
                let mut cum = first_size as i64;
                for _ in 0..num_frames - 2 {
                    let (delta, width) =
                        read_signed_vint(data.get(pos..).ok_or(Error::MalformedLacingData)?)?;
                    pos += width;
                    cum += delta;
                    sizes.push(cum as u64);
                }

                let laced_data = data.get(pos..).ok_or(Error::MalformedLacingData)?;
                let mut out = Vec::with_capacity(num_frames);
                let mut start = 0usize;
                for size in sizes {
                    let size = size as usize;
                    out.push(
                        laced_data
                            .get(start..start + size)
                            .ok_or(Error::MalformedLacingData)?,
                    );
                    start += size;
                }
                out.push(laced_data.get(start..).ok_or(Error::MalformedLacingData)?);
                Ok(out)
            }
        }
    }
}

// The Xiph lacing uses the same coding of size as found in the Ogg container [@?RFC3533]. The bits 5-6 of the Block Header flags are set to 01.
// The Block data with laced frames is stored as follows:
//     Lacing Head on 1 Octet: Number of frames in the lace minus 1.
//     Lacing size of each frame except the last one.
//     Binary data of each frame consecutively.
// The lacing size is split into 255 values, stored as unsigned octets – for example, 500 is coded 255;245 or [0xFF 0xF5]. A frame with a size multiple of 255 is coded with a 0 at the end of the size – for example, 765 is coded 255;255;255;0 or [0xFF 0xFF 0xFF 0x00].
// The size of the last frame is deduced from the size remaining in the Block after the other frames.
#[cfg(test)]
mod lacer_tests {
    use super::*;
    #[test]
    fn test_xiph_lacing() {
        // 0 frames
        let laced = Lacer::Xiph.lace(&[]);
        assert_eq!(laced, vec![]);
        let frames: Vec<_> = Lacer::Xiph.delace(&[]).unwrap();
        assert_eq!(frames.len(), 0);

        // 4 frames, sizes: 255, 256, 1, remaining
        let len = vec![0x03, 0xFF, 0x00, 0xFF, 0x1, 0x1];
        let frame0 = vec![2u8; 255];
        let frame1 = vec![42u8; 256];
        let frame2 = vec![38u8; 1];
        let frame3 = vec![100u8; 1];

        let laced = Lacer::Xiph.lace(&[&frame0, &frame1, &frame2, &frame3]);
        let data = [len, frame0, frame1, frame2, frame3].concat();
        assert_eq!(laced, data);

        let frames: Vec<_> = Lacer::Xiph.delace(&data).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], &[2u8; 255]);
        assert_eq!(frames[1], &[42u8; 256]);
        assert_eq!(frames[2], &[38u8; 1]);
        assert_eq!(frames[3], &[100u8; 1]);

        // 1 frame, size: remaining
        let len = vec![0x00];
        let frame0 = vec![2u8; 255];

        let laced = Lacer::Xiph.lace(&[&frame0]);
        let data = [len, frame0].concat();
        assert_eq!(laced, data);

        let frames: Vec<_> = Lacer::Xiph.delace(&data).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], &[2u8; 255]);

        // 2 frames, sizes: 32, remaining
        let len = vec![0x01, 0x20];
        let frame0 = vec![2u8; 32];
        let frame1 = vec![42u8; 256];

        let laced = Lacer::Xiph.lace(&[&frame0, &frame1]);
        let data = [len, frame0, frame1].concat();
        assert_eq!(laced, data);

        let frames: Vec<_> = Lacer::Xiph.delace(&data).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], &[2u8; 32]);
        assert_eq!(frames[1], &[42u8; 256]);

        // 4 frames, sizes: 600, 3, 520, remaining
        let len = vec![0x03, 0xFF, 0xFF, 0x5A, 0x3, 0xFF, 0xFF, 0xA];
        assert_eq!(0xff + 0xff + 0x5A, 600);
        assert_eq!(0xff + 0xff + 0xA, 520);
        let frame0 = vec![2u8; 600];
        let frame1 = vec![42u8; 3];
        let frame2 = vec![38u8; 520];
        let frame3 = vec![100u8; 1];

        let laced = Lacer::Xiph.lace(&[&frame0, &frame1, &frame2, &frame3]);
        let data = [len, frame0, frame1, frame2, frame3].concat();
        assert_eq!(laced, data);

        let frames: Vec<_> = Lacer::Xiph.delace(&data).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], &[2u8; 600]);
        assert_eq!(frames[1], &[42u8; 3]);
        assert_eq!(frames[2], &[38u8; 520]);
        assert_eq!(frames[3], &[100u8; 1]);
    }

    #[test]
    fn test_fixed_size_lacing() {
        let frame0 = vec![1u8; 4];
        let frame1 = vec![2u8; 4];
        let frame2 = vec![3u8; 4];

        let laced = Lacer::FixedSize.lace(&[&frame0, &frame1, &frame2]);
        assert_eq!(laced, [vec![2u8], frame0.clone(), frame1.clone(), frame2.clone()].concat());

        let frames = Lacer::FixedSize.delace(&laced).unwrap();
        assert_eq!(frames, vec![&frame0[..], &frame1[..], &frame2[..]]);

        // 1 frame
        let laced = Lacer::FixedSize.lace(&[&frame0]);
        assert_eq!(laced, [vec![0u8], frame0.clone()].concat());
        let frames = Lacer::FixedSize.delace(&laced).unwrap();
        assert_eq!(frames, vec![&frame0[..]]);

        // no frames
        assert_eq!(Lacer::FixedSize.lace(&[]), Vec::<u8>::new());
        assert_eq!(Lacer::FixedSize.delace(&[]).unwrap().len(), 0);

        // mismatched total length is malformed
        assert!(Lacer::FixedSize.delace(&[2, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_ebml_lacing() {
        // scenario from the block-lacing decoder test vectors: 3 frames, sizes 4, 2, 6
        let frame0 = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
        let frame1 = vec![0xB0u8, 0x0B];
        let frame2 = vec![0xDEu8, 0xAD, 0xBE, 0xEF, 0xF0, 0x0B];

        let laced = Lacer::Ebml.lace(&[&frame0, &frame1, &frame2]);
        let frames = Lacer::Ebml.delace(&laced).unwrap();
        assert_eq!(frames, vec![&frame0[..], &frame1[..], &frame2[..]]);

        // 1 frame: no size fields at all
        let laced = Lacer::Ebml.lace(&[&frame0]);
        assert_eq!(laced, [vec![0u8], frame0.clone()].concat());
        let frames = Lacer::Ebml.delace(&laced).unwrap();
        assert_eq!(frames, vec![&frame0[..]]);

        // larger frame count with big size deltas (exercises multi-byte signed vint deltas)
        let big0 = vec![7u8; 500];
        let big1 = vec![8u8; 3];
        let big2 = vec![9u8; 20000];
        let big3 = vec![10u8; 1];
        let laced = Lacer::Ebml.lace(&[&big0, &big1, &big2, &big3]);
        let frames = Lacer::Ebml.delace(&laced).unwrap();
        assert_eq!(frames, vec![&big0[..], &big1[..], &big2[..], &big3[..]]);

        // no frames
        assert_eq!(Lacer::Ebml.lace(&[]), Vec::<u8>::new());
        assert_eq!(Lacer::Ebml.delace(&[]).unwrap().len(), 0);
    }
}
