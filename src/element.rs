use crate::base::*;
use crate::error::Error;
use crate::functional::*;
use crate::io::blocking::ReadFrom;

/// A Matroska element.
pub trait Element: Sized {
    const ID: VInt64;
    const HAS_DEFAULT_VALUE: bool = false;
    /// Sibling/ancestor IDs that stop an unknown-size instance of this master without being
    /// consumed (RFC 8794 §13.3's "element is not a valid child" unknown-size termination rule).
    /// Empty for every master except the handful that are legally unknown-size in the wild
    /// (`Segment`, `Cluster`).
    const TERMINATORS: &'static [VInt64] = &[];
    fn decode_body(buf: &mut &[u8]) -> crate::Result<Self>;
    fn encode_body<B: BufMut>(&self, buf: &mut B) -> crate::Result<()>;
}

impl<T: Element> Decode for T {
    fn decode(buf: &mut &[u8]) -> crate::Result<Self> {
        let header = Header::decode(buf)?;

        if header.size.is_unknown {
            // No declared length to pre-slice to: hand decode_body the rest of the buffer and
            // let it stop at a terminator ID (or run off the end). Whatever it doesn't consume
            // belongs to our caller (a sibling Top-Level Element), not to us.
            let start_remaining = buf.remaining();
            let mut body: &[u8] = *buf;
            let element = match T::decode_body(&mut body) {
                Ok(e) => e,
                Err(Error::OutOfBounds) => return Err(Error::OverDecode(Self::ID)),
                Err(Error::ShortRead) => return Err(Error::UnderDecode(Self::ID)),
                Err(e) => return Err(e),
            };
            let consumed = start_remaining - body.remaining();
            buf.advance(consumed);
            return Ok(element);
        }

        let body_size = *header.size as usize;
        if buf.remaining() < body_size {
            return Err(crate::error::Error::OutOfBounds);
        }
        let mut body = buf.slice(body_size);
        let element = match T::decode_body(&mut body) {
            Ok(e) => e,
            Err(Error::OutOfBounds) => return Err(Error::OverDecode(Self::ID)),
            Err(Error::ShortRead) => return Err(Error::UnderDecode(Self::ID)),
            Err(e) => return Err(e),
        };

        if body.has_remaining() {
            return Err(Error::UnderDecode(Self::ID));
        }

        buf.advance(body_size);
        Ok(element)
    }
}

impl<T: Element> Encode for T {
    fn encode<B: BufMut>(&self, buf: &mut B) -> crate::Result<()> {
        let mut body_buf = Vec::new();
        self.encode_body(&mut body_buf)?;
        let header = Header {
            id: T::ID,
            size: VInt64::new(body_buf.len() as u64),
        };
        header.encode(buf)?;
        buf.append_slice(&body_buf);
        Ok(())
    }
}

impl<T: Element> ReadFrom for T {
    fn read_from<R: std::io::Read>(r: &mut R) -> crate::Result<Self> {
        let header = Header::read_from(r)?;
        let body = header.read_body(r)?;
        let element = match T::decode_body(&mut &body[..]) {
            Ok(e) => e,
            Err(Error::OutOfBounds) => return Err(Error::OverDecode(Self::ID)),
            Err(Error::ShortRead) => return Err(Error::UnderDecode(Self::ID)),
            Err(e) => return Err(e),
        };
        Ok(element)
    }
}
