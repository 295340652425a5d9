//! I/O utilities.

/// A single-byte read, for the stream-based VINT/header decoders that read a byte at a time.
pub(crate) trait ReadExt: std::io::Read {
    fn read_u8(&mut self) -> std::io::Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}
impl<R: std::io::Read + ?Sized> ReadExt for R {}

/// blocking I/O implementations, supporting reading and writing.
pub mod blocking_impl {
    use crate::{base::Header, element::Element, functional::Encode};
    use std::io::{Read, Write};

    /// Read from a reader.
    pub trait ReadFrom: Sized {
        /// Read Self from a reader.
        fn read_from<R: Read>(r: &mut R) -> crate::Result<Self>;
    }

    /// Read an element from a reader provided the header.
    pub trait ReadElement: Sized + Element {
        /// Read an element from a reader provided the header.
        fn read_element<R: Read>(header: &Header, r: &mut R) -> crate::Result<Self> {
            let body = header.read_body(r)?;
            Self::decode_body(&mut &body[..])
        }
    }
    impl<T: Element> ReadElement for T {}

    impl Header {
        /// Read the body of the element from a reader into memory.
        ///
        /// For an unknown-size master, there is no declared length to stop at, so the whole rest
        /// of the reader is buffered; `decode_body` is responsible for stopping at a terminator
        /// ID and leaving any trailing bytes (e.g. a sibling Top-Level Element) unconsumed.
        pub(crate) fn read_body<R: Read>(&self, r: &mut R) -> crate::Result<Vec<u8>> {
            if self.size.is_unknown {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf)?;
                return Ok(buf);
            }
            let size = *self.size;
            // we allocate 4096 bytes upfront and grow as needed
            let cap = size.min(4096) as usize;
            let mut buf = Vec::with_capacity(cap);
            let n = std::io::copy(&mut r.take(size), &mut buf)?;
            if size != n {
                return Err(crate::Error::OutOfBounds);
            }
            Ok(buf)
        }
    }

    /// Write to a writer.
    pub trait WriteTo {
        /// Write to a writer.
        fn write_to<W: Write>(&self, w: &mut W) -> crate::Result<()>;
    }

    impl<T: Encode> WriteTo for T {
        fn write_to<W: Write>(&self, w: &mut W) -> crate::Result<()> {
            //TODO should avoid the extra allocation here
            let mut buf = vec![];
            self.encode(&mut buf)?;
            w.write_all(&buf)?;
            Ok(())
        }
    }

    /// Write an element to a writer provided the header.
    pub trait WriteElement: Sized + Element {
        /// Write an element to a writer.
        fn write_element<W: Write>(&self, header: &Header, w: &mut W) -> crate::Result<()> {
            header.write_to(w)?;
            let mut buf = vec![];
            self.encode_body(&mut buf)?;
            w.write_all(&buf)?;
            Ok(())
        }
    }
    impl<T: Element> WriteElement for T {}
}

/// Alias for [`blocking_impl`], for callers that don't need the async side and just want
/// `mkv_element::io::blocking`.
pub use blocking_impl as blocking;

/// tokio non-blocking I/O implementations, supporting async reading and writing.
#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod tokio_impl {
    use crate::{base::Header, element::Element};

    use std::future::Future;
    use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

    /// Read from a reader asynchronously.
    pub trait AsyncReadFrom: Sized {
        /// Read Self from a reader.
        fn async_read_from<R: tokio::io::AsyncRead + Unpin>(
            r: &mut R,
        ) -> impl Future<Output = crate::Result<Self>>;
    }

    /// Read an element from a reader provided the header asynchronously.
    pub trait AsyncReadElement: Sized + Element {
        /// Read an element from a reader provided the header.
        fn async_read_element<R: tokio::io::AsyncRead + Unpin>(
            header: &Header,
            r: &mut R,
        ) -> impl std::future::Future<Output = crate::Result<Self>> {
            async {
                let body = header.read_body_tokio(r).await?;
                Self::decode_body(&mut &body[..])
            }
        }
    }
    impl<T: Element> AsyncReadElement for T {}

    /// Write to a writer asynchronously.
    pub trait AsyncWriteTo {
        /// Write to a writer asynchronously.
        fn async_write_to<W: tokio::io::AsyncWrite + Unpin>(
            &self,
            w: &mut W,
        ) -> impl std::future::Future<Output = crate::Result<()>>;
    }

    impl<T: crate::functional::Encode> AsyncWriteTo for T {
        async fn async_write_to<W: tokio::io::AsyncWrite + Unpin>(
            &self,
            w: &mut W,
        ) -> crate::Result<()> {
            //TODO should avoid the extra allocation here
            let mut buf = vec![];
            self.encode(&mut buf)?;
            Ok(w.write_all(&buf).await?)
        }
    }

    /// Write an element to a writer provided the header asynchronously.
    pub trait AsyncWriteElement: Sized + Element {
        /// Write an element to a writer asynchronously.
        fn async_write_element<W: tokio::io::AsyncWrite + Unpin>(
            &self,
            header: &Header,
            w: &mut W,
        ) -> impl std::future::Future<Output = crate::Result<()>> {
            async {
                header.async_write_to(w).await?;
                let mut buf = vec![];
                self.encode_body(&mut buf)?;
                Ok(w.write_all(&buf).await?)
            }
        }
    }
    impl<T: Element> AsyncWriteElement for T {}

    impl Header {
        /// Read the body of the element from a reader into memory.
        pub(crate) async fn read_body_tokio<R: AsyncRead + Unpin>(
            &self,
            r: &mut R,
        ) -> crate::Result<Vec<u8>> {
            if self.size.is_unknown {
                let mut buf = Vec::new();
                r.read_to_end(&mut buf).await?;
                return Ok(buf);
            }
            let size = *self.size;
            // we allocate 4096 bytes upfront and grow as needed
            let cap = size.min(4096) as usize;
            let mut buf = Vec::with_capacity(cap);
            let n = tokio::io::copy(&mut r.take(size), &mut buf).await?;
            if size != n {
                return Err(crate::Error::OutOfBounds);
            }
            Ok(buf)
        }
    }
}
