//! Leaf element definitions: EBML/Matroska scalar element types.
//!
//! Every element here implements [`crate::element::Element`] by hand through one of the
//! `define_*!` macros below, one macro invocation per element. This mirrors the shape the
//! teacher crate generated at build time from `matroska-specification/ebml_matroska.xml` (see
//! `DESIGN.md`) but is written directly as Rust source, since that XML schema isn't part of the
//! retrieved pack and running codegen isn't an option here.

use crate::functional::{Buf, BufMut};

/// An unsigned-integer leaf element. Absent payload decodes as `0` (or the element's default,
/// if it has one); on the wire the value is the minimal big-endian encoding of the integer.
macro_rules! define_uint {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        define_uint!(@impl $(#[$meta])* $name, $id, 0u64, false);
    };
    ($(#[$meta:meta])* $name:ident = $id:expr, default = $default:expr) => {
        define_uint!(@impl $(#[$meta])* $name, $id, $default, true);
    };
    (@impl $(#[$meta:meta])* $name:ident, $id:expr, $default:expr, $has_default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);
        impl std::ops::Deref for $name {
            type Target = u64;
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            const HAS_DEFAULT_VALUE: bool = $has_default;
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                if buf.is_empty() {
                    return Ok(Self($default));
                }
                if buf.len() > 8 {
                    return Err(crate::Error::UnderDecode(Self::ID));
                }
                let len = buf.len();
                let mut value = [0u8; 8];
                value[8 - len..].copy_from_slice(buf);
                buf.advance(len);
                Ok(Self(u64::from_be_bytes(value)))
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                let bytes = self.0.to_be_bytes();
                let first_non_zero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
                buf.append_slice(&bytes[first_non_zero..]);
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self($default) }
        }
    };
}

/// A signed-integer leaf element, two's-complement, sign-extended on read.
macro_rules! define_sint {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        define_sint!(@impl $(#[$meta])* $name, $id, 0i64, false);
    };
    ($(#[$meta:meta])* $name:ident = $id:expr, default = $default:expr) => {
        define_sint!(@impl $(#[$meta])* $name, $id, $default, true);
    };
    (@impl $(#[$meta:meta])* $name:ident, $id:expr, $default:expr, $has_default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);
        impl std::ops::Deref for $name {
            type Target = i64;
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            const HAS_DEFAULT_VALUE: bool = $has_default;
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                if buf.is_empty() {
                    return Ok(Self($default));
                }
                if buf.len() > 8 {
                    return Err(crate::Error::UnderDecode(Self::ID));
                }
                let len = buf.len();
                let is_neg = (buf[0] & 0x80) != 0;
                let mut value = if is_neg { [0xFFu8; 8] } else { [0u8; 8] };
                value[8 - len..].copy_from_slice(buf);
                buf.advance(len);
                Ok(Self(i64::from_be_bytes(value)))
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                let bytes = self.0.to_be_bytes();
                if self.0 >= 0 {
                    let first_non_zero = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
                    buf.append_slice(&bytes[first_non_zero..]);
                } else {
                    let first_non_ff = bytes.iter().position(|&b| b != 0xFF).unwrap_or(bytes.len() - 1);
                    buf.append_slice(&bytes[first_non_ff..]);
                }
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self($default) }
        }
    };
}

/// A float leaf element. On the wire this is exactly 4 or 8 bytes; any other length reads as
/// the element's default (per the RFC 8794 reader lenience the spec documents).
macro_rules! define_float {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        define_float!(@impl $(#[$meta])* $name, $id, 0.0f64, false);
    };
    ($(#[$meta:meta])* $name:ident = $id:expr, default = $default:expr) => {
        define_float!(@impl $(#[$meta])* $name, $id, $default, true);
    };
    (@impl $(#[$meta:meta])* $name:ident, $id:expr, $default:expr, $has_default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
        pub struct $name(pub f64);
        impl std::ops::Deref for $name {
            type Target = f64;
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            const HAS_DEFAULT_VALUE: bool = $has_default;
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                match buf.len() {
                    0 => Ok(Self($default)),
                    4 => {
                        let mut value = [0u8; 4];
                        value.copy_from_slice(&buf[..4]);
                        buf.advance(4);
                        Ok(Self(f32::from_be_bytes(value) as f64))
                    }
                    8 => {
                        let mut value = [0u8; 8];
                        value.copy_from_slice(&buf[..8]);
                        buf.advance(8);
                        Ok(Self(f64::from_be_bytes(value)))
                    }
                    _ => {
                        log::warn!("float element {} has non-4/8-byte payload, using default", Self::ID);
                        Ok(Self($default))
                    }
                }
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                fn can_represent_as_f32(value: f64) -> bool {
                    if value.is_infinite() || value.is_nan() {
                        return false;
                    }
                    if value.abs() > f32::MAX as f64
                        || (value != 0.0 && value.abs() < f32::MIN_POSITIVE as f64)
                    {
                        return false;
                    }
                    let f32_value = value as f32;
                    f32_value as f64 == value
                }
                if can_represent_as_f32(self.0) {
                    buf.append_slice(&(self.0 as f32).to_be_bytes());
                } else {
                    buf.append_slice(&self.0.to_be_bytes());
                }
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self($default) }
        }
    };
}

/// A string (ASCII or UTF-8 — both are stored as raw text payload) leaf element.
macro_rules! define_text {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        define_text!(@impl $(#[$meta])* $name, $id, "", false);
    };
    ($(#[$meta:meta])* $name:ident = $id:expr, default = $default:expr) => {
        define_text!(@impl $(#[$meta])* $name, $id, $default, true);
    };
    (@impl $(#[$meta:meta])* $name:ident, $id:expr, $default:expr, $has_default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub String);
        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            const HAS_DEFAULT_VALUE: bool = $has_default;
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                if buf.is_empty() {
                    return Ok(Self($default.to_string()));
                }
                let first_zero = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
                let result = Self(String::from_utf8_lossy(&buf[..first_zero]).to_string());
                buf.advance(buf.len());
                Ok(result)
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                buf.append_slice(self.0.as_bytes());
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self($default.to_string()) }
        }
    };
}

/// A raw binary-blob leaf element. Never has a schema default (matches the teacher's codegen,
/// which never set `HAS_DEFAULT_VALUE` for binary elements).
macro_rules! define_bin {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub Vec<u8>);
        impl std::ops::Deref for $name {
            type Target = [u8];
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                let result = Self(buf.to_vec());
                buf.advance(buf.len());
                Ok(result)
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                buf.append_slice(&self.0);
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self(Vec::new()) }
        }
    };
}

/// A date leaf element: an 8-byte signed integer of nanoseconds relative to
/// 2001-01-01T00:00:00.000000000 UTC. Any other payload length fails.
macro_rules! define_date {
    ($(#[$meta:meta])* $name:ident = $id:expr) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);
        impl std::ops::Deref for $name {
            type Target = i64;
            fn deref(&self) -> &Self::Target { &self.0 }
        }
        impl crate::element::Element for $name {
            const ID: crate::base::VInt64 = crate::base::VInt64::from_encoded($id);
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                if buf.len() != 8 {
                    return Err(crate::Error::UnderDecode(Self::ID));
                }
                let result = i64::from_be_bytes(buf[..8].try_into().unwrap());
                buf.advance(8);
                Ok(Self(result))
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                buf.append_slice(&self.0.to_be_bytes());
                Ok(())
            }
        }
        impl Default for $name {
            fn default() -> Self { Self(0) }
        }
    };
}

// ---------------------------------------------------------------------------------------------
// EBML header
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// The version of EBML parser used to create the file.
    EbmlVersion = 0x4286, default = 1
);
define_uint!(
    /// The minimum EBML version a parser has to support to read this file.
    EbmlReadVersion = 0x42F7, default = 1
);
define_uint!(
    /// The maximum length of the IDs you'll find in this file.
    EbmlMaxIdLength = 0x42F2, default = 4
);
define_uint!(
    /// The maximum length of the sizes you'll find in this file.
    EbmlMaxSizeLength = 0x42F3, default = 8
);
define_text!(
    /// A string that describes and identifies the content of the EBML body.
    DocType = 0x4282, default = "matroska"
);
define_uint!(
    /// The version of DocType interpreter used to create the file.
    DocTypeVersion = 0x4287, default = 1
);
define_uint!(
    /// The minimum DocType version an interpreter has to support to read this file.
    DocTypeReadVersion = 0x4285, default = 1
);
define_text!(
    /// The name of the DocType Extension used.
    DocTypeExtensionName = 0x4283
);
define_uint!(
    /// The version of the DocType Extension used.
    DocTypeExtensionVersion = 0x4284
);

// ---------------------------------------------------------------------------------------------
// SeekHead / Seek
// ---------------------------------------------------------------------------------------------

define_bin!(
    /// The binary ID corresponding to the Element name.
    SeekId = 0x53AB
);
define_uint!(
    /// The Segment Position of the Element.
    SeekPosition = 0x53AC
);

// ---------------------------------------------------------------------------------------------
// Info
// ---------------------------------------------------------------------------------------------

define_bin!(
    /// A randomly generated unique ID that identifies the Segment amongst many others (128 bits).
    SegmentUuid = 0x73A4
);
define_text!(
    /// A filename corresponding to this Segment.
    SegmentFilename = 0x7384
);
define_bin!(
    /// A unique ID to identify the previous Segment of a Linked Segment (128 bits).
    PrevUuid = 0x3CB923
);
define_text!(
    /// A filename corresponding to the file of the previous Linked Segment.
    PrevFilename = 0x3C83AB
);
define_bin!(
    /// A unique ID to identify the next Segment of a Linked Segment (128 bits).
    NextUuid = 0x3EB923
);
define_text!(
    /// A filename corresponding to the file of the next Linked Segment.
    NextFilename = 0x3E83BB
);
define_bin!(
    /// A unique ID that all Segments of a Linked Segment MUST share (128 bits).
    SegmentFamily = 0x4444
);
define_bin!(
    /// The binary value used to represent this Segment in the chapter codec data.
    ChapterTranslateId = 0x69A5
);
define_uint!(
    /// This `ChapterTranslate` applies to this chapter codec of the given chapter edition(s).
    ChapterTranslateCodec = 0x69BF
);
define_uint!(
    /// Specify a chapter edition UID on which this `ChapterTranslate` applies.
    ChapterTranslateEditionUid = 0x69FC
);
define_uint!(
    /// Base unit for Segment Ticks and Track Ticks, in nanoseconds.
    TimestampScale = 0x2AD7B1, default = 1_000_000
);
define_float!(
    /// Duration of the Segment, expressed in Segment Ticks which is based on TimestampScale.
    Duration = 0x4489
);
define_float!(
    /// A value to multiply the Raw Timestamp with to get the Track Timestamp. Deprecated in favour
    /// of `TimestampScale`, still carried for files that set it explicitly.
    TrackTimestampScale = 0x23314F, default = 1.0
);
define_date!(
    /// The date and time that the Segment was created by the muxing application or library.
    DateUtc = 0x4461
);
define_text!(
    /// General name of the Segment.
    Title = 0x7BA9
);
define_text!(
    /// Muxing application or library (example: "libmatroska-0.4.3").
    MuxingApp = 0x4D80
);
define_text!(
    /// Writing application (example: "mkvmerge-0.3.3").
    WritingApp = 0x5741
);

// ---------------------------------------------------------------------------------------------
// Cluster / Block
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// Absolute timestamp of the cluster, expressed in Segment Ticks.
    Timestamp = 0xE7
);
define_uint!(
    /// The Segment Position of the Cluster in the Segment.
    Position = 0xA7
);
define_uint!(
    /// Size of the previous Cluster, in octets.
    PrevSize = 0xAB
);
define_bin!(
    /// Similar to Block, but without all the extra information; see basics on SimpleBlock.
    SimpleBlock = 0xA3
);
define_bin!(
    /// Block containing the actual data to be rendered and a timestamp relative to the Cluster.
    Block = 0xA1
);
define_uint!(
    /// This frame is referenced and has the specified cache priority.
    ReferencePriority = 0xFA, default = 0
);
define_uint!(
    /// The duration of the Block, expressed in Track Ticks.
    BlockDuration = 0x9B
);
define_sint!(
    /// A timestamp value, relative to the timestamp of the Block in this BlockGroup.
    ReferenceBlock = 0xFB
);
define_bin!(
    /// The new codec state to use, private to the codec.
    CodecState = 0xA4
);
define_sint!(
    /// Duration of the silent data added to the Block, in nanoseconds.
    DiscardPadding = 0x75A2
);
define_bin!(
    /// Interpreted by the codec as it wishes (using the BlockAddID).
    BlockAdditional = 0xA5
);
define_uint!(
    /// An ID to identify how to interpret the BlockAdditional data.
    BlockAddId = 0xEE, default = 1
);
define_uint!(
    /// The BlockAddID value that is used to define the meaning of the BlockAddID in a BlockMore.
    BlockAddIdValue = 0x41F0
);
define_text!(
    /// A human-friendly name describing the type of BlockAdditional data.
    BlockAddIdName = 0x41A4
);
define_uint!(
    /// Stores the registered identifier of the BlockAdditional mapping to define how the
    /// BlockAdditional data should be handled.
    BlockAddIdType = 0x41E7, default = 0
);
define_bin!(
    /// Extra binary data that the BlockAddIDType can use to interpret the BlockAdditional data.
    BlockAddIdExtraData = 0x41ED
);

// ---------------------------------------------------------------------------------------------
// Tracks / TrackEntry
// ---------------------------------------------------------------------------------------------

define_bin!(
    /// The binary value used to represent this track in the chapter codec data.
    TrackTranslateTrackId = 0x66A5
);
define_uint!(
    /// This TrackTranslate applies to this chapter codec of the given chapter edition(s).
    TrackTranslateCodec = 0x66BF
);
define_uint!(
    /// Specify a chapter edition UID on which this TrackTranslate applies.
    TrackTranslateEditionUid = 0x66FC
);
define_uint!(
    /// The track number as used in the Block Header.
    TrackNumber = 0xD7
);
define_uint!(
    /// A unique ID to identify the Track.
    TrackUid = 0x73C5
);
define_uint!(
    /// The track's type (1=video, 2=audio, 3=complex, 0x10=logo, 0x11=subtitle, 0x12=buttons, 0x20=control, 0x30=metadata).
    TrackType = 0x83
);
define_uint!(
    /// Set if the track is usable.
    FlagEnabled = 0xB9, default = 1
);
define_uint!(
    /// Set if that track (audio, video or subs) is eligible for automatic selection by the player.
    FlagDefault = 0x88, default = 1
);
define_uint!(
    /// Applies only to subtitle tracks. Set if the track was forced to be displayed.
    FlagForced = 0x55AA, default = 0
);
define_uint!(
    /// Set if the track is suitable for users with hearing impairments.
    FlagHearingImpaired = 0x55AB, default = 0
);
define_uint!(
    /// Set if the track is suitable for users with visual impairments.
    FlagVisualImpaired = 0x55AC, default = 0
);
define_uint!(
    /// Set if the track contains textual descriptions of video content.
    FlagTextDescriptions = 0x55AD, default = 0
);
define_uint!(
    /// Set if the track is in the content's original language.
    FlagOriginal = 0x55AE, default = 0
);
define_uint!(
    /// Set if the track contains commentary.
    FlagCommentary = 0x55AF, default = 0
);
define_uint!(
    /// Set if the track MAY contain blocks using lacing.
    FlagLacing = 0x9C, default = 1
);
define_uint!(
    /// The minimum number of frames a player should be able to cache during playback.
    MinCache = 0x6DE7, default = 0
);
define_uint!(
    /// The maximum number of frames a player should be able to cache during playback.
    MaxCache = 0x6DF8
);
define_uint!(
    /// Number of nanoseconds per frame, expressed in Matroska Ticks.
    DefaultDuration = 0x23E383
);
define_uint!(
    /// The period between two successive fields at the output of the decoding process.
    DefaultDecodedFieldDuration = 0x234E7A
);
define_uint!(
    /// The maximum value of BlockAddID used by any Block in this Track.
    MaxBlockAdditionId = 0x55EE, default = 0
);
define_text!(
    /// A human-readable track name.
    Name = 0x536E
);
define_text!(
    /// The language of the track, in the Matroska languages form.
    Language = 0x22B59C, default = "eng"
);
define_text!(
    /// The language of the track, in the form defined in [@!BCP47].
    LanguageBcp47 = 0x22B59D
);
define_text!(
    /// An ID corresponding to the codec.
    CodecId = 0x86
);
define_bin!(
    /// Private data only known to the codec.
    CodecPrivate = 0x63A2
);
define_text!(
    /// A human-readable string specifying the codec.
    CodecName = 0x258688
);
define_uint!(
    /// The UID of an attachment that is used by this codec.
    AttachmentLink = 0x7446
);
define_uint!(
    /// The built-in delay for the codec, expressed in Matroska Ticks.
    CodecDelay = 0x56AA, default = 0
);
define_uint!(
    /// A value to add to the Block's Timestamp, expressed in Matroska Ticks.
    SeekPreRoll = 0x56BB, default = 0
);
define_uint!(
    /// Specify that this track is an overlay track for the Track specified by this UID.
    TrackOverlay = 0x6FAB
);
define_uint!(
    /// Set to 1 if the codec can decode potentially damaged data.
    CodecDecodeAll = 0xAA, default = 1
);
define_uint!(
    /// UID of the Track to combine with the current track for the given TrackPlaneType.
    TrackPlaneUid = 0xE5
);
define_uint!(
    /// The kind of plane this track corresponds to.
    TrackPlaneType = 0xE6, default = 0
);
define_uint!(
    /// UID of the other track to join with this track, in the order they are joined.
    TrackJoinUid = 0xED
);

// ---------------------------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// Set if the video is interlaced.
    FlagInterlaced = 0x9A, default = 0
);
define_uint!(
    /// Field order, declared in the same way as [@!WebM-VP9].
    FieldOrder = 0x9D, default = 2
);
define_uint!(
    /// Stereo-3D video mode.
    StereoMode = 0x53B8, default = 0
);
define_uint!(
    /// Alpha Video Mode; indicates if the BlockAdditional element could contain Alpha.
    AlphaMode = 0x53C0, default = 0
);
define_uint!(
    /// Width of the encoded video frames in pixels.
    PixelWidth = 0xB0
);
define_uint!(
    /// Height of the encoded video frames in pixels.
    PixelHeight = 0xBA
);
define_uint!(
    /// The number of video pixels to remove at the bottom of the image.
    PixelCropBottom = 0x54AA, default = 0
);
define_uint!(
    /// The number of video pixels to remove at the top of the image.
    PixelCropTop = 0x54BB, default = 0
);
define_uint!(
    /// The number of video pixels to remove on the left of the image.
    PixelCropLeft = 0x54CC, default = 0
);
define_uint!(
    /// The number of video pixels to remove on the right of the image.
    PixelCropRight = 0x54DD, default = 0
);
define_uint!(
    /// Width of the video frames to display.
    DisplayWidth = 0x54B0
);
define_uint!(
    /// Height of the video frames to display.
    DisplayHeight = 0x54BA
);
define_uint!(
    /// How DisplayWidth and DisplayHeight are interpreted.
    DisplayUnit = 0x54B2, default = 0
);
define_uint!(
    /// The diagonal aspect ratio type.
    AspectRatioType = 0x54B3, default = 0
);
define_bin!(
    /// Specify the uncompressed pixel format used for the Track's data as a FourCC.
    UncompressedFourcc = 0x2EB524
);

// ---------------------------------------------------------------------------------------------
// Colour
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// The Matrix Coefficients of the video used to derive luma and chroma values.
    MatrixCoefficients = 0x55B1, default = 2
);
define_uint!(
    /// Number of decoded bits per channel.
    BitsPerChannel = 0x55B2, default = 0
);
define_uint!(
    /// The horizontal chroma subsampling.
    ChromaSubsamplingHorz = 0x55B3
);
define_uint!(
    /// The vertical chroma subsampling.
    ChromaSubsamplingVert = 0x55B4
);
define_uint!(
    /// The horizontal Cb subsampling.
    CbSubsamplingHorz = 0x55B5
);
define_uint!(
    /// The vertical Cb subsampling.
    CbSubsamplingVert = 0x55B6
);
define_uint!(
    /// How chroma is subsampled horizontally.
    ChromaSitingHorz = 0x55B7, default = 0
);
define_uint!(
    /// How chroma is subsampled vertically.
    ChromaSitingVert = 0x55B8, default = 0
);
define_uint!(
    /// Clipping of the color ranges.
    ColourRange = 0x55B9, default = 0
);
define_uint!(
    /// The transfer characteristics of the video.
    TransferCharacteristics = 0x55BA, default = 2
);
define_uint!(
    /// The color primaries of the video.
    Primaries = 0x55BB, default = 2
);
define_uint!(
    /// Maximum brightness of a single pixel (MaxCLL), in candelas per square meter.
    MaxCll = 0x55BC
);
define_uint!(
    /// Maximum frame-average light level (MaxFALL), in candelas per square meter.
    MaxFall = 0x55BD
);

// ---------------------------------------------------------------------------------------------
// MasteringMetadata
// ---------------------------------------------------------------------------------------------

define_float!(PrimaryRChromaticityX = 0x55D1);
define_float!(PrimaryRChromaticityY = 0x55D2);
define_float!(PrimaryGChromaticityX = 0x55D3);
define_float!(PrimaryGChromaticityY = 0x55D4);
define_float!(PrimaryBChromaticityX = 0x55D5);
define_float!(PrimaryBChromaticityY = 0x55D6);
define_float!(WhitePointChromaticityX = 0x55D7);
define_float!(WhitePointChromaticityY = 0x55D8);
define_float!(
    /// Maximum luminance, in candelas per square meter.
    LuminanceMax = 0x55D9
);
define_float!(
    /// Minimum luminance, in candelas per square meter.
    LuminanceMin = 0x55DA
);

// ---------------------------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// Describes the projection used for this video track.
    ProjectionType = 0x7671, default = 0
);
define_bin!(
    /// Private data that only applies to a specific projection.
    ProjectionPrivate = 0x7672
);
define_float!(
    /// Specifies a yaw rotation to the projection, in degrees.
    ProjectionPoseYaw = 0x7673, default = 0.0
);
define_float!(
    /// Specifies a pitch rotation to the projection, in degrees.
    ProjectionPosePitch = 0x7674, default = 0.0
);
define_float!(
    /// Specifies a roll rotation to the projection, in degrees.
    ProjectionPoseRoll = 0x7675, default = 0.0
);

// ---------------------------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------------------------

define_float!(
    /// Sampling frequency in Hz.
    SamplingFrequency = 0xB5, default = 8000.0
);
define_float!(
    /// Real output sampling frequency in Hz.
    OutputSamplingFrequency = 0x78B5
);
define_uint!(
    /// Numbers of channels in the track.
    Channels = 0x9F, default = 1
);
define_uint!(
    /// Bits per sample, mostly used for PCM.
    BitDepth = 0x6264
);

// ---------------------------------------------------------------------------------------------
// ContentEncodings / ContentEncoding
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// Tells when this modification was used during encoding/muxing starting with 0.
    ContentEncodingOrder = 0x5031, default = 0
);
define_uint!(
    /// A bit field that describes which Elements have been modified in this way.
    ContentEncodingScope = 0x5032, default = 1
);
define_uint!(
    /// A value describing what kind of transformation has been done.
    ContentEncodingType = 0x5033, default = 0
);
define_uint!(
    /// The compression algorithm used.
    ContentCompAlgo = 0x4254, default = 0
);
define_bin!(
    /// Settings that might be needed by the decompressor.
    ContentCompSettings = 0x4255
);
define_uint!(
    /// The encryption algorithm used.
    ContentEncAlgo = 0x47E1, default = 0
);
define_bin!(
    /// For public key algorithms this is the ID of the public key.
    ContentEncKeyId = 0x47E2
);
define_bin!(
    /// A cryptographic signature of the contents.
    ContentSignature = 0x47E3
);
define_bin!(
    /// This is the ID of the private key used to sign the segment.
    ContentSigKeyId = 0x47E4
);
define_uint!(
    /// The algorithm used for the signature.
    ContentSigAlgo = 0x47E5, default = 0
);
define_uint!(
    /// The hash algorithm used for the signature.
    ContentSigHashAlgo = 0x47E6, default = 0
);
define_uint!(
    /// The AES cipher mode used in the encryption.
    AesSettingsCipherMode = 0x47E8, default = 1
);

// ---------------------------------------------------------------------------------------------
// Cues
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// Absolute timestamp of the seek point, expressed in Segment Ticks.
    CueTime = 0xB3
);
define_uint!(
    /// The track for which a position is given.
    CueTrack = 0xF7
);
define_uint!(
    /// The Segment Position of the Cluster containing the associated Block.
    CueClusterPosition = 0xF1
);
define_uint!(
    /// The relative position inside the Cluster of the referenced SimpleBlock or BlockGroup.
    CueRelativePosition = 0xF0
);
define_uint!(
    /// The duration of the block, expressed in Segment Ticks.
    CueDuration = 0xB2
);
define_uint!(
    /// Number of the Block in the specified Cluster.
    CueBlockNumber = 0x5378, default = 1
);
define_uint!(
    /// The Segment Position of the Codec State corresponding to this Cue Element.
    CueCodecState = 0xEA, default = 0
);
define_uint!(
    /// Timestamp of another earlier Cue pointing for the same track.
    CueRefTime = 0x96
);

// ---------------------------------------------------------------------------------------------
// Chapters
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// A unique ID to identify the edition.
    EditionUid = 0x45BC
);
define_uint!(
    /// Set if the edition SHOULD be hidden in the user interface.
    EditionFlagHidden = 0x45BD, default = 0
);
define_uint!(
    /// Set if the edition SHOULD be used as the default one.
    EditionFlagDefault = 0x45DB, default = 0
);
define_uint!(
    /// Set if the chapters can be defined multiple times and the order to play them is enforced.
    EditionFlagOrdered = 0x45DD, default = 0
);
define_text!(
    /// Contains the text to use as the Edition's display string.
    EditionString = 0x4521
);
define_text!(
    /// Language of the EditionString, in the form defined in [@!BCP47].
    EditionLanguageIetf = 0x45E4
);
define_uint!(
    /// A unique ID to identify the Chapter.
    ChapterUid = 0x73C4
);
define_text!(
    /// A unique string ID to identify the Chapter, for WebVTT cue identifier storage.
    ChapterStringUid = 0x5654
);
define_uint!(
    /// Timestamp of the start of Chapter, expressed in Matroska Ticks.
    ChapterTimeStart = 0x91
);
define_uint!(
    /// Timestamp of the end of Chapter, expressed in Matroska Ticks.
    ChapterTimeEnd = 0x92
);
define_uint!(
    /// Set if the chapter is hidden in the user interface.
    ChapterFlagHidden = 0x98, default = 0
);
define_uint!(
    /// Set if the chapter is enabled, disabled chapters may not be played or displayed.
    ChapterFlagEnabled = 0x4598, default = 1
);
define_bin!(
    /// The SegmentUUID of another Segment to play during this chapter.
    ChapterSegmentUuid = 0x6E67
);
define_uint!(
    /// The EditionUID to play from the Segment linked in ChapterSegmentUUID.
    ChapterSegmentEditionUid = 0x6EBC
);
define_uint!(
    /// Specify the physical equivalent of this chapter.
    ChapterPhysicalEquiv = 0x63C3
);
define_uint!(
    /// UID of the Track to apply this chapter to.
    ChapterTrackUid = 0x89
);
define_text!(
    /// Contains the string to use as the chapter atom.
    ChapString = 0x85
);
define_text!(
    /// The language used in the ChapterDisplay, in the Matroska languages form.
    ChapLanguage = 0x437C, default = "eng"
);
define_text!(
    /// The language used in the ChapterDisplay, in the form defined in [@!BCP47].
    ChapLanguageBcp47 = 0x437D
);
define_text!(
    /// A country corresponding to the string, in the [Matroska country list].
    ChapCountry = 0x437E
);
define_uint!(
    /// Contains the type of the codec used for processing.
    ChapProcessCodecId = 0x6955, default = 0
);
define_bin!(
    /// Some data attached to the ChapProcess element.
    ChapProcessPrivate = 0x450D
);
define_uint!(
    /// Defines when the process command SHOULD be handled.
    ChapProcessTime = 0x6922
);
define_bin!(
    /// Contains the command information.
    ChapProcessData = 0x6933
);

// ---------------------------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------------------------

define_uint!(
    /// A number to indicate the logical level of the target.
    TargetTypeValue = 0x68CA, default = 50
);
define_text!(
    /// An informational string that can be used to display the logical level of the target.
    TargetType = 0x63CA
);
define_uint!(
    /// A UID to identify the Track(s) the tags belong to.
    TagTrackUid = 0x63C5, default = 0
);
define_uint!(
    /// A UID to identify the EditionEntry(s) the tags belong to.
    TagEditionUid = 0x63C9, default = 0
);
define_uint!(
    /// A UID to identify the Chapter(s) the tags belong to.
    TagChapterUid = 0x63C4, default = 0
);
define_uint!(
    /// A UID to identify the Attachment(s) the tags belong to.
    TagAttachmentUid = 0x63C6, default = 0
);
define_text!(
    /// The name of the Tag that is going to be stored.
    TagName = 0x45A3
);
define_text!(
    /// Specifies the language of the tag, in the Matroska languages form.
    TagLanguage = 0x447A, default = "und"
);
define_text!(
    /// Specifies the language of the tag, in the form defined in [@!BCP47].
    TagLanguageBcp47 = 0x447B
);
define_uint!(
    /// Set if this is the default/original language to use for the given tag.
    TagDefault = 0x4484, default = 1
);
define_text!(
    /// The value of the Tag.
    TagString = 0x4487
);
define_bin!(
    /// The values of the Tag, if it is binary. Useful for, e.g., containing image data.
    TagBinary = 0x4485
);

// ---------------------------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------------------------

define_text!(
    /// A human-friendly name for the attached file.
    FileDescription = 0x467E
);
define_text!(
    /// Filename of the attached file.
    FileName = 0x466E
);
define_text!(
    /// Media type of the file following the [RFC6838] format.
    FileMediaType = 0x4660
);
define_bin!(
    /// The data of the file.
    FileData = 0x465C
);
define_uint!(
    /// Unique ID representing the file, as random as possible.
    FileUid = 0x46AE
);
