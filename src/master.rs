use crc::{CRC_32_ISO_HDLC, Crc};

use crate::Error;
use crate::base::*;
use crate::element::*;
use crate::functional::*;
use crate::leaf::*;
use crate::supplement::*;

/// The CRC-32 algorithm used by EBML, as specified in RFC 8794: polynomial 0x04C11DB7,
/// reflected in and out, reversed on output ("CRC-32/ISO-HDLC" / "CRC-32/JAMCRC"'s sibling).
fn ebml_crc32(data: &[u8]) -> u32 {
    Crc::<u32>::new(&CRC_32_ISO_HDLC).checksum(data)
}

/// Peeks the next child header. Returns `None` once the body is exhausted; an empty buffer is
/// not an error here, since it's the normal way a nested element's children run out.
fn next_header(buf: &mut &[u8]) -> Option<Header> {
    if buf.has_remaining() {
        Header::decode(buf).ok()
    } else {
        None
    }
}

/// Peeks the next child header without consuming it, for terminator lookahead on unknown-size
/// masters. `None` means the body is exhausted or unparsable, either of which ends the loop.
fn peek_header(buf: &[u8]) -> Option<Header> {
    let mut probe = buf;
    next_header(&mut probe)
}

/// Peeks for a leading Crc32 child without disturbing `buf` if one isn't there.
fn peek_crc32(buf: &mut &[u8]) -> Option<Crc32> {
    let mut probe = *buf;
    let header = next_header(&mut probe)?;
    if header.id != Crc32::ID {
        return None;
    }
    let crc32 = Crc32::decode_element(&header, &mut probe).ok()?;
    *buf = probe;
    Some(crc32)
}

// A helper for generating nested elements.
/* example:
nested! {
    required: [ EbmlMaxIdLength, EbmlMaxSizeLength ],
    optional: [ EbmlVersion, EbmlReadVersion, DocType, DocTypeVersion, DocTypeReadVersion ],
    multiple: [ ],
};
*/
macro_rules! nested {
    (required: [$($required:ident),*$(,)?], optional: [$($optional:ident),*$(,)?], multiple: [$($multiple:ident),*$(,)?],) => {
        paste::paste! {
            fn decode_body(buf: &mut &[u8]) -> crate::Result<Self> {
                let crc32 = peek_crc32(buf);
                let crc_checked_body: &[u8] = *buf;
                $( let mut [<$required:snake>] = None;)*
                $( let mut [<$optional:snake>] = None;)*
                $( let mut [<$multiple:snake>] = Vec::new();)*
                let mut void: Option<Void> = None;

                loop {
                    match peek_header(buf) {
                        Some(header) if Self::TERMINATORS.contains(&header.id) => break,
                        None => break,
                        _ => {}
                    }
                    let header = next_header(buf).expect("header was just peeked successfully");
                    match header.id {
                        $( $required::ID => {
                            if [<$required:snake>].is_some() {
                                return Err(Error::DuplicateElement { id: header.id, parent: Self::ID });
                            } else {
                                [<$required:snake>] = Some($required::decode_element(&header, buf)?)
                            }
                        } )*
                        $( $optional::ID => {
                            if [<$optional:snake>].is_some() {
                                return Err(Error::DuplicateElement { id: header.id, parent: Self::ID });
                            } else {
                                [<$optional:snake>] = Some($optional::decode_element(&header, buf)?)
                            }
                        } )*
                        $( $multiple::ID => {
                            [<$multiple:snake>].push($multiple::decode_element(&header, buf)?);
                        } )*
                        Void::ID => {
                            let v = Void::decode_element(&header, buf)?;
                            if let Some(previous) = void {
                                void = Some(Void { size: previous.size + v.size });
                            } else {
                                void = Some(v);
                            }
                            log::info!("Skipping Void element in Element {}, size: {}B", Self::ID, *header.size);
                        }
                        _ => {
                            buf.advance(*header.size as usize);
                            log::warn!("Unknown element {}({}b) in Element({})", header.id, *header.size, Self::ID);
                        }
                    }
                }

                if let Some(crc32) = &crc32 {
                    // `crc_checked_body` was captured before any children were consumed; for an
                    // unknown-size master it still spans everything after us (including whatever
                    // sibling the terminator loop stopped at), so only checksum what we actually
                    // consumed as our own children.
                    let consumed = crc_checked_body.len() - buf.len();
                    if ebml_crc32(&crc_checked_body[..consumed]) != **crc32 {
                        return Err(Error::ChecksumMismatch);
                    }
                }

                Ok(Self {
                    crc32,
                    $( [<$required:snake>]: [<$required:snake>].or(if $required::HAS_DEFAULT_VALUE { Some($required::default()) } else { None }).ok_or(Error::MissingElement($required::ID))?, )*
                    $( [<$optional:snake>], )*
                    $( [<$multiple:snake>], )*
                    void,
                })
            }
            fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
                if self.crc32.is_some() {
                    let mut rest = Vec::new();
                    $( self.[<$required:snake>].encode(&mut rest)?; )*
                    $( self.[<$optional:snake>].encode(&mut rest)?; )*
                    $( self.[<$multiple:snake>].encode(&mut rest)?; )*
                    self.void.encode(&mut rest)?;

                    Crc32(ebml_crc32(&rest)).encode(buf)?;
                    buf.append_slice(&rest);
                } else {
                    self.crc32.encode(buf)?;

                    $( self.[<$required:snake>].encode(buf)?; )*
                    $( self.[<$optional:snake>].encode(buf)?; )*
                    $( self.[<$multiple:snake>].encode(buf)?; )*

                    self.void.encode(buf)?;
                }

                Ok(())
            }
        }
    };
}

/// EBML element, the first top-level element in a Matroska file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ebml {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// EBMLVersion element, indicates the version of EBML used.
    pub ebml_version: Option<EbmlVersion>,
    /// EBMLReadVersion element, indicates the minimum version of EBML required to read the file.
    pub ebml_read_version: Option<EbmlReadVersion>,
    /// EBMLMaxIDLength element, indicates the maximum length of an EBML ID in bytes.
    pub ebml_max_id_length: EbmlMaxIdLength,
    /// EBMLMaxSizeLength element, indicates the maximum length of an EBML size in bytes.
    pub ebml_max_size_length: EbmlMaxSizeLength,
    /// DocType element, indicates the type of document. For Matroska files, this is usually "matroska" or "webm".
    pub doc_type: Option<DocType>,
    /// DocTypeVersion element, indicates the version of the document type.
    pub doc_type_version: Option<DocTypeVersion>,
    /// DocTypeReadVersion element, indicates the minimum version of the document type required to read the file.
    pub doc_type_read_version: Option<DocTypeReadVersion>,
    /// Extension to a DocType that adds extra features or semantics that can't be recognized by a
    /// reader built only for the base DocType.
    pub doc_type_extension: Vec<DocTypeExtension>,
}

impl Element for Ebml {
    const ID: VInt64 = VInt64::from_encoded(0x1A45_DFA3);
    nested! {
        required: [ EbmlMaxIdLength, EbmlMaxSizeLength ],
        optional: [ EbmlVersion, EbmlReadVersion, DocType, DocTypeVersion, DocTypeReadVersion ],
        multiple: [ DocTypeExtension ],
    }
}

/// A DocType Extension used, containing its name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTypeExtension {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The name of the DocType Extension used.
    pub doc_type_extension_name: DocTypeExtensionName,
    /// The version of the DocType Extension used.
    pub doc_type_extension_version: DocTypeExtensionVersion,
}

impl Element for DocTypeExtension {
    const ID: VInt64 = VInt64::from_encoded(0x4281);
    nested! {
        required: [ DocTypeExtensionName, DocTypeExtensionVersion ],
        optional: [ ],
        multiple: [ ],
    }
}

/// The Root Element that contains all other Top-Level Elements; see data-layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains seeking information of Top-Level Elements; see data-layout.
    pub seek_head: Vec<SeekHead>,
    /// Contains general information about the Segment.
    pub info: Info,
    /// The Top-Level Element containing the (monolithic) Block structure.
    pub cluster: Vec<Cluster>,
    /// A Top-Level Element of information with many tracks described.
    pub tracks: Option<Tracks>,
    /// A Top-Level Element to speed seeking access. All entries are local to the Segment.
    pub cues: Option<Cues>,
    /// Contain attached files.
    pub attachments: Option<Attachments>,
    /// A system to define basic menus and partition data.
    pub chapters: Option<Chapters>,
    /// Element containing metadata describing Tracks, Editions, Chapters, Attachments, or the Segment as a whole.
    pub tags: Vec<Tags>,
}

impl Element for Segment {
    const ID: VInt64 = VInt64::from_encoded(0x18538067);
    // Segment is the only Top-Level Element besides EBML itself; an unknown-size Segment (the
    // common case for live streams) ends when we see either of them starting.
    const TERMINATORS: &'static [VInt64] = &[Ebml::ID, Segment::ID];
    nested! {
      required: [ Info ],
      optional: [ Tracks, Cues, Attachments, Chapters ],
      multiple: [ SeekHead, Tags, Cluster ],
    }
}

/// Contains seeking information of Top-Level Elements; see data-layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeekHead {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains a single seek entry to an EBML Element.
    pub seek: Vec<Seek>,
}

impl Element for SeekHead {
    const ID: VInt64 = VInt64::from_encoded(0x114D9B74);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ Seek ],
    }
}

/// Contains a single seek entry to an EBML Element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seek {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The binary EBML ID of a Top-Level Element.
    pub seek_id: SeekId,
    /// The Segment Position (segment-position) of a Top-Level Element.
    pub seek_position: SeekPosition,
}

impl Element for Seek {
    const ID: VInt64 = VInt64::from_encoded(0x4DBB);
    nested! {
      required: [ SeekId, SeekPosition ],
      optional: [ ],
      multiple: [ ],
    }
}

/// Contains general information about the Segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Info {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A randomly generated unique ID to identify the Segment amongst many others (128 bits). It is equivalent to a UUID v4 [@!RFC4122] with all bits randomly (or pseudo-randomly) chosen. An actual UUID v4 value, where some bits are not random, **MAY** also be used. If the Segment is a part of a Linked Segment, then this Element is **REQUIRED**. The value of the unique ID **MUST** contain at least one bit set to 1.
    pub segment_uuid: Option<SegmentUuid>,
    /// A filename corresponding to this Segment.
    pub segment_filename: Option<SegmentFilename>,
    /// An ID to identify the previous Segment of a Linked Segment. If the Segment is a part of a Linked Segment that uses Hard Linking (hard-linking), then either the PrevUUID or the NextUUID Element is **REQUIRED**. If a Segment contains a PrevUUID but not a NextUUID, then it **MAY** be considered as the last Segment of the Linked Segment. The PrevUUID **MUST NOT** be equal to the SegmentUUID.
    pub prev_uuid: Option<PrevUuid>,
    /// A filename corresponding to the file of the previous Linked Segment. Provision of the previous filename is for display convenience, but PrevUUID **SHOULD** be considered authoritative for identifying the previous Segment in a Linked Segment.
    pub prev_filename: Option<PrevFilename>,
    /// An ID to identify the next Segment of a Linked Segment. If the Segment is a part of a Linked Segment that uses Hard Linking (hard-linking), then either the PrevUUID or the NextUUID Element is **REQUIRED**. If a Segment contains a NextUUID but not a PrevUUID, then it **MAY** be considered as the first Segment of the Linked Segment. The NextUUID **MUST NOT** be equal to the SegmentUUID.
    pub next_uuid: Option<NextUuid>,
    /// A filename corresponding to the file of the next Linked Segment. Provision of the next filename is for display convenience, but NextUUID **SHOULD** be considered authoritative for identifying the Next Segment.
    pub next_filename: Option<NextFilename>,
    /// A unique ID that all Segments of a Linked Segment **MUST** share (128 bits). It is equivalent to a UUID v4 [@!RFC4122] with all bits randomly (or pseudo-randomly) chosen. An actual UUID v4 value, where some bits are not random, **MAY** also be used. If the Segment Info contains a `ChapterTranslate` element, this Element is **REQUIRED**.
    pub segment_family: Vec<SegmentFamily>,
    /// The mapping between this `Segment` and a segment value in the given Chapter Codec. Chapter Codec may need to address different segments, but they may not know of the way to identify such segment when stored in Matroska. This element and its child elements add a way to map the internal segments known to the Chapter Codec to the Segment IDs in Matroska. This allows remuxing a file with Chapter Codec without changing the content of the codec data, just the Segment mapping.
    pub chapter_translate: Vec<ChapterTranslate>,
    /// Base unit for Segment Ticks and Track Ticks, in nanoseconds. A TimestampScale value of 1000000 means scaled timestamps in the Segment are expressed in milliseconds; see timestamps on how to interpret timestamps.
    pub timestamp_scale: TimestampScale,
    /// Duration of the Segment, expressed in Segment Ticks which is based on TimestampScale; see timestamp-ticks.
    pub duration: Option<Duration>,
    /// The date and time that the Segment was created by the muxing application or library.
    pub date_utc: Option<DateUtc>,
    /// General name of the Segment
    pub title: Option<Title>,
    /// Muxing application or library (example: "libmatroska-0.4.3"). Include the full name of the application or library followed by the version number.
    pub muxing_app: MuxingApp,
    /// Writing application (example: "mkvmerge-0.3.3"). Include the full name of the application followed by the version number.
    pub writing_app: WritingApp,
}

impl Element for Info {
    const ID: VInt64 = VInt64::from_encoded(0x1549A966);
    nested! {
      required: [ TimestampScale, MuxingApp, WritingApp ],
      optional: [ SegmentUuid, SegmentFilename, PrevUuid, PrevFilename, NextUuid, NextFilename, Duration, DateUtc, Title ],
      multiple: [ SegmentFamily, ChapterTranslate ],
    }
}

/// The mapping between this `Segment` and a segment value in the given Chapter Codec. Chapter Codec may need to address different segments, but they may not know of the way to identify such segment when stored in Matroska. This element and its child elements add a way to map the internal segments known to the Chapter Codec to the Segment IDs in Matroska. This allows remuxing a file with Chapter Codec without changing the content of the codec data, just the Segment mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterTranslate {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The binary value used to represent this Segment in the chapter codec data. The format depends on the ChapProcessCodecID used; see [ChapProcessCodecID](https://www.matroska.org/technical/elements.html#chapprocesscodecid-element).
    pub chapter_translate_id: ChapterTranslateId,
    /// This `ChapterTranslate` applies to this chapter codec of the given chapter edition(s); see ChapProcessCodecID.
    /// * 0 - Matroska Script,
    /// * 1 - DVD-menu
    pub chapter_translate_codec: ChapterTranslateCodec,
    /// Specify a chapter edition UID on which this `ChapterTranslate` applies. When no `ChapterTranslateEditionUID` is specified in the `ChapterTranslate`, the `ChapterTranslate` applies to all chapter editions found in the Segment using the given `ChapterTranslateCodec`.
    pub chapter_translate_edition_uid: Vec<ChapterTranslateEditionUid>,
}

impl Element for ChapterTranslate {
    const ID: VInt64 = VInt64::from_encoded(0x6924);
    nested! {
        required: [ ChapterTranslateId, ChapterTranslateCodec ],
        optional: [ ],
        multiple: [ ChapterTranslateEditionUid ],
    }
}

/// The Top-Level Element containing the (monolithic) Block structure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cluster {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Absolute timestamp of the cluster, expressed in Segment Ticks which is based on TimestampScale; see timestamp-ticks. This element **SHOULD** be the first child element of the Cluster it belongs to, or the second if that Cluster contains a CRC-32 element (crc-32).
    pub timestamp: Timestamp,
    /// The Segment Position of the Cluster in the Segment (0 in live streams). It might help to resynchronise offset on damaged streams.
    pub position: Option<Position>,
    /// Size of the previous Cluster, in octets. Can be useful for backward playing.
    pub prev_size: Option<PrevSize>,
    /// Similar to Block, see [basics](https://www.matroska.org/technical/basics.html#block-structure), but without all the extra information, mostly used to reduced overhead when no extra feature is needed; see basics on SimpleBlock Structure.
    pub simple_block: Vec<SimpleBlock>,
    /// Basic container of information containing a single Block and information specific to that Block.
    pub block_group: Vec<BlockGroup>,
}

impl Element for Cluster {
    const ID: VInt64 = VInt64::from_encoded(0x1F43B675);
    // An unknown-size Cluster ends at the next Cluster or any other Segment-level sibling, since
    // none of those can legally appear nested inside one.
    const TERMINATORS: &'static [VInt64] = &[
        Ebml::ID,
        Segment::ID,
        SeekHead::ID,
        Info::ID,
        Tracks::ID,
        Cues::ID,
        Chapters::ID,
        Cluster::ID,
        Attachments::ID,
        Tags::ID,
    ];
    nested! {
      required: [ Timestamp ],
      optional: [ Position, PrevSize ],
      multiple: [ SimpleBlock, BlockGroup ],
    }
}

/// Basic container of information containing a single Block and information specific to that Block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockGroup {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Block containing the actual data to be rendered and a timestamp relative to the Cluster Timestamp; see [basics](https://www.matroska.org/technical/basics.html#block-structure) on Block Structure.
    pub block: Block,
    /// Contain additional binary data to complete the main one; see Codec BlockAdditions section of [Matroska codec RFC](https://www.matroska.org/technical/codec_specs.html) for more information. An EBML parser that has no knowledge of the Block structure could still see and use/skip these data.
    pub block_additions: Option<BlockAdditions>,
    /// The duration of the Block, expressed in Track Ticks; see timestamp-ticks.
    /// The BlockDuration Element can be useful at the end of a Track to define the duration of the last frame (as there is no subsequent Block available),
    /// or when there is a break in a track like for subtitle tracks.
    /// When not written and with no DefaultDuration, the value is assumed to be the difference between the timestamp of this Block and the timestamp of the next Block in "display" order (not coding order). BlockDuration **MUST** be set if the associated TrackEntry stores a DefaultDuration value.
    pub block_duration: Option<BlockDuration>,
    /// This frame is referenced and has the specified cache priority. In cache only a frame of the same or higher priority can replace this frame. A value of 0 means the frame is not referenced.
    pub reference_priority: ReferencePriority,
    /// A timestamp value, relative to the timestamp of the Block in this BlockGroup, expressed in Track Ticks; see timestamp-ticks. This is used to reference other frames necessary to decode this frame. The relative value **SHOULD** correspond to a valid `Block` this `Block` depends on. Historically Matroska Writer didn't write the actual `Block(s)` this `Block` depends on, but *some* `Block` in the past. The value "0" **MAY** also be used to signify this `Block` cannot be decoded on its own, but without knownledge of which `Block` is necessary. In this case, other `ReferenceBlock` **MUST NOT** be found in the same `BlockGroup`. If the `BlockGroup` doesn't have any `ReferenceBlock` element, then the `Block` it contains can be decoded without using any other `Block` data.
    pub reference_block: Vec<ReferenceBlock>,
    /// The new codec state to use. Data interpretation is private to the codec. This information **SHOULD** always be referenced by a seek entry.
    pub codec_state: Option<CodecState>,
    /// Duration of the silent data added to the Block, expressed in Matroska Ticks -- i.e., in nanoseconds; see timestamp-ticks (padding at the end of the Block for positive value, at the beginning of the Block for negative value). The duration of DiscardPadding is not calculated in the duration of the TrackEntry and **SHOULD** be discarded during playback.
    pub discard_padding: Option<DiscardPadding>,
}

impl Element for BlockGroup {
    const ID: VInt64 = VInt64::from_encoded(0xA0);
    nested! {
      required: [ Block, ReferencePriority ],
      optional: [ BlockAdditions, BlockDuration, CodecState, DiscardPadding ],
      multiple: [ ReferenceBlock ],
    }
}
/// Contain additional binary data to complete the main one; see Codec BlockAdditions section of [Matroska codec RFC](https://www.matroska.org/technical/codec_specs.html) for more information. An EBML parser that has no knowledge of the Block structure could still see and use/skip these data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockAdditions {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contain the BlockAdditional and some parameters.
    pub block_more: Vec<BlockMore>,
}

impl Element for BlockAdditions {
    const ID: VInt64 = VInt64::from_encoded(0x75A1);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ BlockMore ],
    }
}

/// Contain the BlockAdditional and some parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockMore {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Interpreted by the codec as it wishes (using the BlockAddID).
    pub block_additional: BlockAdditional,
    /// An ID to identify how to interpret the BlockAdditional data; see Codec BlockAdditions section of [Matroska codec RFC](https://www.matroska.org/technical/codec_specs.html) for more information. A value of 1 indicates that the meaning of the BlockAdditional data is defined by the codec. Any other value indicates the meaning of the BlockAdditional data is found in the BlockAddIDType found in the TrackEntry. Each BlockAddID value **MUST** be unique between all BlockMore elements found in a BlockAdditions.To keep MaxBlockAdditionID as low as possible, small values **SHOULD** be used.
    pub block_add_id: BlockAddId,
}

impl Element for BlockMore {
    const ID: VInt64 = VInt64::from_encoded(0xA6);
    nested! {
      required: [ BlockAdditional, BlockAddId ],
      optional: [ ],
      multiple: [ ],
    }
}

// -------------------------------------------------------------------------------------------
// Tracks
// -------------------------------------------------------------------------------------------

/// A Top-Level Element of information with many tracks described.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tracks {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Describes a track with all Elements.
    pub track_entry: Vec<TrackEntry>,
}

impl Element for Tracks {
    const ID: VInt64 = VInt64::from_encoded(0x1654AE6B);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ TrackEntry ],
    }
}

/// Describes a track with all Elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackEntry {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The track number as used in the Block Header.
    pub track_number: TrackNumber,
    /// A unique ID to identify the Track.
    pub track_uid: TrackUid,
    /// The track's type.
    pub track_type: TrackType,
    /// Set if the track is usable.
    pub flag_enabled: FlagEnabled,
    /// Set if that track is eligible for automatic selection by the player.
    pub flag_default: FlagDefault,
    /// Applies only to subtitle tracks; set if the track was forced to be displayed.
    pub flag_forced: FlagForced,
    /// Set if the track is suitable for users with hearing impairments.
    pub flag_hearing_impaired: Option<FlagHearingImpaired>,
    /// Set if the track is suitable for users with visual impairments.
    pub flag_visual_impaired: Option<FlagVisualImpaired>,
    /// Set if the track contains textual descriptions of video content.
    pub flag_text_descriptions: Option<FlagTextDescriptions>,
    /// Set if the track is in the content's original language.
    pub flag_original: Option<FlagOriginal>,
    /// Set if the track contains commentary.
    pub flag_commentary: Option<FlagCommentary>,
    /// Set if the track MAY contain blocks using lacing.
    pub flag_lacing: FlagLacing,
    /// A value to multiply the Raw Timestamp with to get the Track Timestamp.
    pub track_timestamp_scale: TrackTimestampScale,
    /// The minimum number of frames a player should be able to cache during playback.
    pub min_cache: MinCache,
    /// The maximum number of frames a player should be able to cache during playback.
    pub max_cache: Option<MaxCache>,
    /// Number of nanoseconds (not scaled via TimestampScale) per frame.
    pub default_duration: Option<DefaultDuration>,
    /// The period between two successive fields at the output of the decoding process.
    pub default_decoded_field_duration: Option<DefaultDecodedFieldDuration>,
    /// The maximum value of BlockAddID used by any Block in this Track.
    pub max_block_addition_id: MaxBlockAdditionId,
    /// Contains the mapping between the BlockAddID value and its meaning, such as specific track
    /// features.
    pub block_addition_mapping: Vec<BlockAdditionMapping>,
    /// A human-readable track name.
    pub name: Option<Name>,
    /// The language of the track, in the Matroska languages form.
    pub language: Language,
    /// The language of the track, in the form defined in BCP 47.
    pub language_bcp47: Option<LanguageBcp47>,
    /// An ID corresponding to the codec.
    pub codec_id: CodecId,
    /// Private data only known to the codec.
    pub codec_private: Option<CodecPrivate>,
    /// A human-readable string specifying the codec.
    pub codec_name: Option<CodecName>,
    /// The UID of an attachment that is used by this codec.
    pub attachment_link: Option<AttachmentLink>,
    /// Set to 1 if the codec can decode potentially damaged data.
    pub codec_decode_all: CodecDecodeAll,
    /// Specify that this track is an overlay track for another track with the given UID.
    pub track_overlay: Vec<TrackOverlay>,
    /// The built-in delay for the codec.
    pub codec_delay: CodecDelay,
    /// A value to add to the Block's Timestamp.
    pub seek_pre_roll: SeekPreRoll,
    /// The track translation mapping(s) for Chapter Codecs.
    pub track_translate: Vec<TrackTranslate>,
    /// Video settings.
    pub video: Option<Video>,
    /// Audio settings.
    pub audio: Option<Audio>,
    /// Operation that needs to be applied on tracks to create this virtual track.
    pub track_operation: Option<TrackOperation>,
    /// Settings for several content encoding mechanisms like compression or encryption.
    pub content_encodings: Option<ContentEncodings>,
}

impl Element for TrackEntry {
    const ID: VInt64 = VInt64::from_encoded(0xAE);
    nested! {
      required: [ TrackNumber, TrackUid, TrackType, FlagEnabled, FlagDefault, FlagForced, FlagLacing, TrackTimestampScale, MinCache, MaxBlockAdditionId, Language, CodecId, CodecDecodeAll, CodecDelay, SeekPreRoll ],
      optional: [ FlagHearingImpaired, FlagVisualImpaired, FlagTextDescriptions, FlagOriginal, FlagCommentary, MaxCache, DefaultDuration, DefaultDecodedFieldDuration, Name, LanguageBcp47, CodecPrivate, CodecName, AttachmentLink, Video, Audio, TrackOperation, ContentEncodings ],
      multiple: [ BlockAdditionMapping, TrackOverlay, TrackTranslate ],
    }
}

/// Contains the mapping between the BlockAddID value and its meaning, such as specific track
/// features.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockAdditionMapping {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// If the BlockAddIDType is 0, this value **SHOULD** be the BlockAddID value used to
    /// represent the entries in the Block's additional data.
    pub block_add_id_value: Option<BlockAddIdValue>,
    /// A human-friendly name describing the type of BlockAdditional data.
    pub block_add_id_name: Option<BlockAddIdName>,
    /// Stores the registered identifier of the BlockAdditional mapping.
    pub block_add_id_type: BlockAddIdType,
    /// Extra binary data that the BlockAddIDType can use to interpret the BlockAdditional data.
    pub block_add_id_extra_data: Option<BlockAddIdExtraData>,
}

impl Element for BlockAdditionMapping {
    const ID: VInt64 = VInt64::from_encoded(0x41E4);
    nested! {
      required: [ BlockAddIdType ],
      optional: [ BlockAddIdValue, BlockAddIdName, BlockAddIdExtraData ],
      multiple: [ ],
    }
}

/// Operation that needs to be applied on tracks to create this virtual track.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackOperation {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains the list of all video plane tracks that need to be combined to create this
    /// virtual track.
    pub track_combine_planes: Option<TrackCombinePlanes>,
    /// Contains the list of all tracks whose Blocks need to be combined to create this virtual
    /// track.
    pub track_join_blocks: Option<TrackJoinBlocks>,
}

impl Element for TrackOperation {
    const ID: VInt64 = VInt64::from_encoded(0xE2);
    nested! {
      required: [ ],
      optional: [ TrackCombinePlanes, TrackJoinBlocks ],
      multiple: [ ],
    }
}

/// Contains the list of all video plane tracks that need to be combined to create this virtual
/// track.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackCombinePlanes {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains a video plane track that needs to be combined to create this virtual track.
    pub track_plane: Vec<TrackPlane>,
}

impl Element for TrackCombinePlanes {
    const ID: VInt64 = VInt64::from_encoded(0xE3);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ TrackPlane ],
    }
}

/// Contains a video plane track that needs to be combined to create this virtual track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPlane {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// UID of the track to combine with the current track for the given TrackPlaneType.
    pub track_plane_uid: TrackPlaneUid,
    /// The kind of plane this track corresponds to.
    pub track_plane_type: TrackPlaneType,
}

impl Element for TrackPlane {
    const ID: VInt64 = VInt64::from_encoded(0xE4);
    nested! {
      required: [ TrackPlaneUid, TrackPlaneType ],
      optional: [ ],
      multiple: [ ],
    }
}

/// Contains the list of all tracks whose Blocks need to be combined to create this virtual track.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackJoinBlocks {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// UID of the other track to join with this track, in the order they are joined.
    pub track_join_uid: Vec<TrackJoinUid>,
}

impl Element for TrackJoinBlocks {
    const ID: VInt64 = VInt64::from_encoded(0xE9);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ TrackJoinUid ],
    }
}

/// The mapping between this TrackEntry and a track value in the given Chapter Codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTranslate {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The binary value used to represent this track in the chapter codec data.
    pub track_translate_track_id: TrackTranslateTrackId,
    /// This TrackTranslate applies to this chapter codec of the given chapter edition(s).
    pub track_translate_codec: TrackTranslateCodec,
    /// Specify a chapter edition UID on which this TrackTranslate applies.
    pub track_translate_edition_uid: Vec<TrackTranslateEditionUid>,
}

impl Element for TrackTranslate {
    const ID: VInt64 = VInt64::from_encoded(0x6624);
    nested! {
        required: [ TrackTranslateTrackId, TrackTranslateCodec ],
        optional: [ ],
        multiple: [ TrackTranslateEditionUid ],
    }
}

/// Video settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Video {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Set if the video is interlaced.
    pub flag_interlaced: FlagInterlaced,
    /// Field order.
    pub field_order: FieldOrder,
    /// Stereo-3D video mode.
    pub stereo_mode: Option<StereoMode>,
    /// Alpha Video Mode.
    pub alpha_mode: Option<AlphaMode>,
    /// Width of the encoded video frames in pixels.
    pub pixel_width: PixelWidth,
    /// Height of the encoded video frames in pixels.
    pub pixel_height: PixelHeight,
    /// The number of video pixels to remove at the bottom of the image.
    pub pixel_crop_bottom: PixelCropBottom,
    /// The number of video pixels to remove at the top of the image.
    pub pixel_crop_top: PixelCropTop,
    /// The number of video pixels to remove on the left of the image.
    pub pixel_crop_left: PixelCropLeft,
    /// The number of video pixels to remove on the right of the image.
    pub pixel_crop_right: PixelCropRight,
    /// Width of the video frames to display.
    pub display_width: Option<DisplayWidth>,
    /// Height of the video frames to display.
    pub display_height: Option<DisplayHeight>,
    /// How DisplayWidth and DisplayHeight are interpreted.
    pub display_unit: DisplayUnit,
    /// The diagonal aspect ratio type.
    pub aspect_ratio_type: AspectRatioType,
    /// Specify the uncompressed pixel format as a FourCC.
    pub uncompressed_fourcc: Option<UncompressedFourcc>,
    /// Settings describing the colour format.
    pub colour: Option<Colour>,
    /// Describes the video projection used for rendering.
    pub projection: Option<Projection>,
}

impl Element for Video {
    const ID: VInt64 = VInt64::from_encoded(0xE0);
    nested! {
      required: [ FlagInterlaced, FieldOrder, PixelWidth, PixelHeight, PixelCropBottom, PixelCropTop, PixelCropLeft, PixelCropRight, DisplayUnit, AspectRatioType ],
      optional: [ StereoMode, AlphaMode, DisplayWidth, DisplayHeight, UncompressedFourcc, Colour, Projection ],
      multiple: [ ],
    }
}

/// Settings describing the colour format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The Matrix Coefficients of the video used to derive luma and chroma values.
    pub matrix_coefficients: MatrixCoefficients,
    /// Number of decoded bits per channel.
    pub bits_per_channel: BitsPerChannel,
    /// The horizontal chroma subsampling.
    pub chroma_subsampling_horz: Option<ChromaSubsamplingHorz>,
    /// The vertical chroma subsampling.
    pub chroma_subsampling_vert: Option<ChromaSubsamplingVert>,
    /// The horizontal Cb subsampling.
    pub cb_subsampling_horz: Option<CbSubsamplingHorz>,
    /// The vertical Cb subsampling.
    pub cb_subsampling_vert: Option<CbSubsamplingVert>,
    /// How chroma is subsampled horizontally.
    pub chroma_siting_horz: ChromaSitingHorz,
    /// How chroma is subsampled vertically.
    pub chroma_siting_vert: ChromaSitingVert,
    /// Clipping of the color ranges.
    pub colour_range: ColourRange,
    /// The transfer characteristics of the video.
    pub transfer_characteristics: TransferCharacteristics,
    /// The color primaries of the video.
    pub primaries: Primaries,
    /// Maximum brightness of a single pixel (MaxCLL).
    pub max_cll: Option<MaxCll>,
    /// Maximum frame-average light level (MaxFALL).
    pub max_fall: Option<MaxFall>,
    /// SMPTE 2086 mastering data.
    pub mastering_metadata: Option<MasteringMetadata>,
}

impl Element for Colour {
    const ID: VInt64 = VInt64::from_encoded(0x55B0);
    nested! {
      required: [ MatrixCoefficients, BitsPerChannel, ChromaSitingHorz, ChromaSitingVert, ColourRange, TransferCharacteristics, Primaries ],
      optional: [ ChromaSubsamplingHorz, ChromaSubsamplingVert, CbSubsamplingHorz, CbSubsamplingVert, MaxCll, MaxFall, MasteringMetadata ],
      multiple: [ ],
    }
}

/// SMPTE 2086 mastering data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasteringMetadata {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Red X chromaticity coordinate, as defined by CIE 1931.
    pub primary_r_chromaticity_x: Option<PrimaryRChromaticityX>,
    /// Red Y chromaticity coordinate, as defined by CIE 1931.
    pub primary_r_chromaticity_y: Option<PrimaryRChromaticityY>,
    /// Green X chromaticity coordinate, as defined by CIE 1931.
    pub primary_g_chromaticity_x: Option<PrimaryGChromaticityX>,
    /// Green Y chromaticity coordinate, as defined by CIE 1931.
    pub primary_g_chromaticity_y: Option<PrimaryGChromaticityY>,
    /// Blue X chromaticity coordinate, as defined by CIE 1931.
    pub primary_b_chromaticity_x: Option<PrimaryBChromaticityX>,
    /// Blue Y chromaticity coordinate, as defined by CIE 1931.
    pub primary_b_chromaticity_y: Option<PrimaryBChromaticityY>,
    /// White point X chromaticity coordinate, as defined by CIE 1931.
    pub white_point_chromaticity_x: Option<WhitePointChromaticityX>,
    /// White point Y chromaticity coordinate, as defined by CIE 1931.
    pub white_point_chromaticity_y: Option<WhitePointChromaticityY>,
    /// Maximum luminance, in candelas per square meter.
    pub luminance_max: Option<LuminanceMax>,
    /// Minimum luminance, in candelas per square meter.
    pub luminance_min: Option<LuminanceMin>,
}

impl Element for MasteringMetadata {
    const ID: VInt64 = VInt64::from_encoded(0x55D0);
    nested! {
      required: [ ],
      optional: [ PrimaryRChromaticityX, PrimaryRChromaticityY, PrimaryGChromaticityX, PrimaryGChromaticityY, PrimaryBChromaticityX, PrimaryBChromaticityY, WhitePointChromaticityX, WhitePointChromaticityY, LuminanceMax, LuminanceMin ],
      multiple: [ ],
    }
}

/// Describes the video projection used for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Describes the projection used for this video track.
    pub projection_type: ProjectionType,
    /// Private data that only applies to a specific projection.
    pub projection_private: Option<ProjectionPrivate>,
    /// Specifies a yaw rotation to the projection.
    pub projection_pose_yaw: ProjectionPoseYaw,
    /// Specifies a pitch rotation to the projection.
    pub projection_pose_pitch: ProjectionPosePitch,
    /// Specifies a roll rotation to the projection.
    pub projection_pose_roll: ProjectionPoseRoll,
}

impl Element for Projection {
    const ID: VInt64 = VInt64::from_encoded(0x7670);
    nested! {
      required: [ ProjectionType, ProjectionPoseYaw, ProjectionPosePitch, ProjectionPoseRoll ],
      optional: [ ProjectionPrivate ],
      multiple: [ ],
    }
}

/// Audio settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Audio {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Sampling frequency in Hz.
    pub sampling_frequency: SamplingFrequency,
    /// Real output sampling frequency in Hz, used for SBR techniques.
    pub output_sampling_frequency: Option<OutputSamplingFrequency>,
    /// Numbers of channels in the track.
    pub channels: Channels,
    /// Bits per sample, mostly used for PCM.
    pub bit_depth: Option<BitDepth>,
}

impl Element for Audio {
    const ID: VInt64 = VInt64::from_encoded(0xE1);
    nested! {
      required: [ SamplingFrequency, Channels ],
      optional: [ OutputSamplingFrequency, BitDepth ],
      multiple: [ ],
    }
}

/// Settings for several content encoding mechanisms like compression or encryption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentEncodings {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Settings for one content encoding like compression or encryption.
    pub content_encoding: Vec<ContentEncoding>,
}

impl Element for ContentEncodings {
    const ID: VInt64 = VInt64::from_encoded(0x6D80);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ ContentEncoding ],
    }
}

/// Settings for one content encoding like compression or encryption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentEncoding {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Tells when this modification was used during encoding/muxing starting with 0.
    pub content_encoding_order: ContentEncodingOrder,
    /// A bit field that describes which Elements have been modified in this way.
    pub content_encoding_scope: ContentEncodingScope,
    /// A value describing what kind of transformation has been done.
    pub content_encoding_type: ContentEncodingType,
    /// Settings describing the compression used.
    pub content_compression: Option<ContentCompression>,
    /// Settings describing the encryption used.
    pub content_encryption: Option<ContentEncryption>,
}

impl Element for ContentEncoding {
    const ID: VInt64 = VInt64::from_encoded(0x6240);
    nested! {
      required: [ ContentEncodingOrder, ContentEncodingScope, ContentEncodingType ],
      optional: [ ContentCompression, ContentEncryption ],
      multiple: [ ],
    }
}

/// Settings describing the compression used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentCompression {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The compression algorithm used.
    pub content_comp_algo: ContentCompAlgo,
    /// Settings that might be needed by the decompressor.
    pub content_comp_settings: Option<ContentCompSettings>,
}

impl Element for ContentCompression {
    const ID: VInt64 = VInt64::from_encoded(0x5034);
    nested! {
      required: [ ContentCompAlgo ],
      optional: [ ContentCompSettings ],
      multiple: [ ],
    }
}

/// Settings describing the encryption used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentEncryption {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The encryption algorithm used.
    pub content_enc_algo: ContentEncAlgo,
    /// For public key algorithms this is the ID of the public key.
    pub content_enc_key_id: Option<ContentEncKeyId>,
    /// A cryptographic signature of the contents.
    pub content_signature: Option<ContentSignature>,
    /// This is the ID of the private key used to sign the segment.
    pub content_sig_key_id: Option<ContentSigKeyId>,
    /// The algorithm used for the signature.
    pub content_sig_algo: ContentSigAlgo,
    /// The hash algorithm used for the signature.
    pub content_sig_hash_algo: ContentSigHashAlgo,
    /// Settings describing the encryption algorithm used, when ContentEncAlgo is AES.
    pub content_enc_aes_settings: Option<ContentEncAesSettings>,
}

impl Element for ContentEncryption {
    const ID: VInt64 = VInt64::from_encoded(0x5035);
    nested! {
      required: [ ContentEncAlgo, ContentSigAlgo, ContentSigHashAlgo ],
      optional: [ ContentEncKeyId, ContentSignature, ContentSigKeyId, ContentEncAesSettings ],
      multiple: [ ],
    }
}

/// Settings describing the encryption algorithm used, when ContentEncAlgo is AES.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentEncAesSettings {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The AES cipher mode used in the encryption.
    pub aes_settings_cipher_mode: AesSettingsCipherMode,
}

impl Element for ContentEncAesSettings {
    const ID: VInt64 = VInt64::from_encoded(0x47E7);
    nested! {
      required: [ AesSettingsCipherMode ],
      optional: [ ],
      multiple: [ ],
    }
}

// -------------------------------------------------------------------------------------------
// Cues
// -------------------------------------------------------------------------------------------

/// A Top-Level Element to speed seeking access. All entries are local to the Segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cues {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains all information relative to a seek point in the Segment.
    pub cue_point: Vec<CuePoint>,
}

impl Element for Cues {
    const ID: VInt64 = VInt64::from_encoded(0x1C53BB6B);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ CuePoint ],
    }
}

/// Contains all information relative to a seek point in the Segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CuePoint {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Absolute timestamp of the seek point.
    pub cue_time: CueTime,
    /// Contain positions for different tracks corresponding to the timestamp.
    pub cue_track_positions: Vec<CueTrackPositions>,
}

impl Element for CuePoint {
    const ID: VInt64 = VInt64::from_encoded(0xBB);
    nested! {
      required: [ CueTime ],
      optional: [ ],
      multiple: [ CueTrackPositions ],
    }
}

/// Contain positions for different tracks corresponding to the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CueTrackPositions {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The track for which a position is given.
    pub cue_track: CueTrack,
    /// The Segment Position of the Cluster containing the associated Block.
    pub cue_cluster_position: CueClusterPosition,
    /// The relative position inside the Cluster of the referenced SimpleBlock or BlockGroup.
    pub cue_relative_position: Option<CueRelativePosition>,
    /// The duration of the block, expressed in Segment Ticks.
    pub cue_duration: Option<CueDuration>,
    /// Number of the Block in the specified Cluster.
    pub cue_block_number: CueBlockNumber,
    /// The Segment Position of the Codec State corresponding to this Cue Element.
    pub cue_codec_state: CueCodecState,
    /// The Clusters containing the required referenced Blocks.
    pub cue_reference: Vec<CueReference>,
}

impl Element for CueTrackPositions {
    const ID: VInt64 = VInt64::from_encoded(0xB7);
    nested! {
      required: [ CueTrack, CueClusterPosition, CueBlockNumber, CueCodecState ],
      optional: [ CueRelativePosition, CueDuration ],
      multiple: [ CueReference ],
    }
}

/// The Clusters containing the required referenced Blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CueReference {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Timestamp of another earlier Cue pointing for the same track.
    pub cue_ref_time: CueRefTime,
}

impl Element for CueReference {
    const ID: VInt64 = VInt64::from_encoded(0xDB);
    nested! {
      required: [ CueRefTime ],
      optional: [ ],
      multiple: [ ],
    }
}

// -------------------------------------------------------------------------------------------
// Chapters
// -------------------------------------------------------------------------------------------

/// A system to define basic menus and partition data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chapters {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains all information about a Segment edition.
    pub edition_entry: Vec<EditionEntry>,
}

impl Element for Chapters {
    const ID: VInt64 = VInt64::from_encoded(0x1043A770);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ EditionEntry ],
    }
}

/// Contains all information about a Segment edition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditionEntry {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A unique ID to identify the edition.
    pub edition_uid: Option<EditionUid>,
    /// Set if the edition SHOULD be hidden in the user interface.
    pub edition_flag_hidden: EditionFlagHidden,
    /// Set if the edition SHOULD be used as the default one.
    pub edition_flag_default: EditionFlagDefault,
    /// Set if the chapters can be defined multiple times and the order to play them is enforced.
    pub edition_flag_ordered: EditionFlagOrdered,
    /// Contains all possible strings to use for the edition's display.
    pub edition_display: Vec<EditionDisplay>,
    /// Contains the atom information to use as the chapter atom.
    pub chapter_atom: Vec<ChapterAtom>,
}

impl Element for EditionEntry {
    const ID: VInt64 = VInt64::from_encoded(0x45B9);
    nested! {
      required: [ EditionFlagHidden, EditionFlagDefault, EditionFlagOrdered ],
      optional: [ EditionUid ],
      multiple: [ EditionDisplay, ChapterAtom ],
    }
}

/// Contains all possible strings to use for the edition's display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditionDisplay {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains the text to use as the Edition's display string.
    pub edition_string: EditionString,
    /// One language corresponding to the EditionString, in the form defined in [@!BCP47].
    pub edition_language_ietf: Vec<EditionLanguageIetf>,
}

impl Element for EditionDisplay {
    const ID: VInt64 = VInt64::from_encoded(0x4520);
    nested! {
      required: [ EditionString ],
      optional: [ ],
      multiple: [ EditionLanguageIetf ],
    }
}

/// Contains the atom information to use as the chapter atom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterAtom {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A unique ID to identify the Chapter.
    pub chapter_uid: ChapterUid,
    /// A unique string ID to identify the Chapter.
    pub chapter_string_uid: Option<ChapterStringUid>,
    /// Timestamp of the start of Chapter.
    pub chapter_time_start: ChapterTimeStart,
    /// Timestamp of the end of Chapter.
    pub chapter_time_end: Option<ChapterTimeEnd>,
    /// Set if the chapter is hidden in the user interface.
    pub chapter_flag_hidden: ChapterFlagHidden,
    /// Set if the chapter is enabled.
    pub chapter_flag_enabled: ChapterFlagEnabled,
    /// The SegmentUUID of another Segment to play during this chapter.
    pub chapter_segment_uuid: Option<ChapterSegmentUuid>,
    /// The EditionUID to play from the Segment linked in ChapterSegmentUUID.
    pub chapter_segment_edition_uid: Option<ChapterSegmentEditionUid>,
    /// Specify the physical equivalent of this chapter.
    pub chapter_physical_equiv: Option<ChapterPhysicalEquiv>,
    /// List of tracks on which the chapter applies.
    pub chapter_track: Vec<ChapterTrack>,
    /// Contains all possible strings to use for the chapter display.
    pub chapter_display: Vec<ChapterDisplay>,
    /// Contains all the commands associated with the Atom.
    pub chap_process: Vec<ChapProcess>,
    /// A nested Chapter Atom, allowing a hierarchical structure of chapters.
    pub chapter_atom: Vec<ChapterAtom>,
}

impl Element for ChapterAtom {
    const ID: VInt64 = VInt64::from_encoded(0xB6);
    nested! {
      required: [ ChapterUid, ChapterTimeStart, ChapterFlagHidden, ChapterFlagEnabled ],
      optional: [ ChapterStringUid, ChapterTimeEnd, ChapterSegmentUuid, ChapterSegmentEditionUid, ChapterPhysicalEquiv ],
      multiple: [ ChapterTrack, ChapterDisplay, ChapProcess, ChapterAtom ],
    }
}

/// List of tracks on which the chapter applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterTrack {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// UID of the Track to apply this chapter to.
    pub chapter_track_uid: Vec<ChapterTrackUid>,
}

impl Element for ChapterTrack {
    const ID: VInt64 = VInt64::from_encoded(0x8F);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ ChapterTrackUid ],
    }
}

/// Contains all possible strings to use for the chapter display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterDisplay {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains the string to use as the chapter atom.
    pub chap_string: ChapString,
    /// The language used in the ChapterDisplay.
    pub chap_language: Vec<ChapLanguage>,
    /// The language used in the ChapterDisplay, in BCP 47 form.
    pub chap_language_bcp47: Vec<ChapLanguageBcp47>,
    /// A country corresponding to the string.
    pub chap_country: Vec<ChapCountry>,
}

impl Element for ChapterDisplay {
    const ID: VInt64 = VInt64::from_encoded(0x80);
    nested! {
      required: [ ChapString ],
      optional: [ ],
      multiple: [ ChapLanguage, ChapLanguageBcp47, ChapCountry ],
    }
}

/// Contains all the commands associated with the Atom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapProcess {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Contains the type of the codec used for processing.
    pub chap_process_codec_id: ChapProcessCodecId,
    /// Some data attached to the ChapProcess element.
    pub chap_process_private: Option<ChapProcessPrivate>,
    /// Contains all the commands associated with the Atom.
    pub chap_process_command: Vec<ChapProcessCommand>,
}

impl Element for ChapProcess {
    const ID: VInt64 = VInt64::from_encoded(0x6944);
    nested! {
      required: [ ChapProcessCodecId ],
      optional: [ ChapProcessPrivate ],
      multiple: [ ChapProcessCommand ],
    }
}

/// Contains the command information.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapProcessCommand {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Defines when the process command SHOULD be handled.
    pub chap_process_time: ChapProcessTime,
    /// Contains the command information.
    pub chap_process_data: ChapProcessData,
}

impl Element for ChapProcessCommand {
    const ID: VInt64 = VInt64::from_encoded(0x6911);
    nested! {
      required: [ ChapProcessTime, ChapProcessData ],
      optional: [ ],
      multiple: [ ],
    }
}

// -------------------------------------------------------------------------------------------
// Tags
// -------------------------------------------------------------------------------------------

/// Element containing metadata describing Tracks, Editions, Chapters, Attachments, or the Segment as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tags {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A single metadata descriptor.
    pub tag: Vec<Tag>,
}

impl Element for Tags {
    const ID: VInt64 = VInt64::from_encoded(0x1254C367);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ Tag ],
    }
}

/// A single metadata descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tag {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// Specifies which other elements the metadata represented by the Tag applies to.
    pub targets: Targets,
    /// Contains general information about the target.
    pub simple_tag: Vec<SimpleTag>,
}

impl Element for Tag {
    const ID: VInt64 = VInt64::from_encoded(0x7373);
    nested! {
      required: [ Targets ],
      optional: [ ],
      multiple: [ SimpleTag ],
    }
}

/// Specifies which other elements the metadata represented by the Tag applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Targets {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A number to indicate the logical level of the target.
    pub target_type_value: TargetTypeValue,
    /// An informational string to display the logical level of the target.
    pub target_type: Option<TargetType>,
    /// A UID to identify the Track(s) the tags belong to.
    pub tag_track_uid: Vec<TagTrackUid>,
    /// A UID to identify the EditionEntry(s) the tags belong to.
    pub tag_edition_uid: Vec<TagEditionUid>,
    /// A UID to identify the Chapter(s) the tags belong to.
    pub tag_chapter_uid: Vec<TagChapterUid>,
    /// A UID to identify the Attachment(s) the tags belong to.
    pub tag_attachment_uid: Vec<TagAttachmentUid>,
}

impl Element for Targets {
    const ID: VInt64 = VInt64::from_encoded(0x63C0);
    nested! {
      required: [ TargetTypeValue ],
      optional: [ TargetType ],
      multiple: [ TagTrackUid, TagEditionUid, TagChapterUid, TagAttachmentUid ],
    }
}

/// Contains general information about the target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleTag {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// The name of the Tag that is going to be stored.
    pub tag_name: TagName,
    /// Specifies the language of the tag.
    pub tag_language: TagLanguage,
    /// Specifies the language of the tag, in the form defined in BCP 47.
    pub tag_language_bcp47: Option<TagLanguageBcp47>,
    /// Set if this is the default/original language to use for the given tag.
    pub tag_default: TagDefault,
    /// The value of the Tag.
    pub tag_string: Option<TagString>,
    /// The values of the Tag, if it is binary.
    pub tag_binary: Option<TagBinary>,
    /// Nested sub-tags providing additional information under the same target.
    pub simple_tag: Vec<SimpleTag>,
}

impl Element for SimpleTag {
    const ID: VInt64 = VInt64::from_encoded(0x67C8);
    nested! {
      required: [ TagName, TagLanguage, TagDefault ],
      optional: [ TagLanguageBcp47, TagString, TagBinary ],
      multiple: [ SimpleTag ],
    }
}

// -------------------------------------------------------------------------------------------
// Attachments
// -------------------------------------------------------------------------------------------

/// Contain attached files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attachments {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// An attached file.
    pub attached_file: Vec<AttachedFile>,
}

impl Element for Attachments {
    const ID: VInt64 = VInt64::from_encoded(0x1941A469);
    nested! {
      required: [ ],
      optional: [ ],
      multiple: [ AttachedFile ],
    }
}

/// An attached file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttachedFile {
    /// Optional CRC-32 element for integrity checking.
    pub crc32: Option<Crc32>,
    /// void element, useful for reserving space during writing.
    pub void: Option<Void>,

    /// A human-friendly name for the attached file.
    pub file_description: Option<FileDescription>,
    /// Filename of the attached file.
    pub file_name: FileName,
    /// Media type of the file, following RFC 6838.
    pub file_media_type: FileMediaType,
    /// The data of the file.
    pub file_data: FileData,
    /// Unique ID representing the file, as random as possible.
    pub file_uid: FileUid,
}

impl Element for AttachedFile {
    const ID: VInt64 = VInt64::from_encoded(0x61A7);
    nested! {
      required: [ FileName, FileMediaType, FileData, FileUid ],
      optional: [ FileDescription ],
      multiple: [ ],
    }
}
