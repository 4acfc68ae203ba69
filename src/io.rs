//! `std::io` integration for the incremental filters.

use std::io::{self, Write};

use crate::{CodecError, Filter};

fn into_io_error(err: CodecError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// A `Write` proxy that runs written data through a [`Filter`] and hands the
/// result off to another writer.
///
/// It is critical to call [`finish`](FilterWriter::finish) when done writing:
/// carry state and any trailing padding are only flushed there, and dropping
/// the writer without finishing loses them.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use textfilter::{io::FilterWriter, Base64, Direction};
///
/// let mut writer = FilterWriter::new(Base64::new(Direction::Encode), Vec::new());
/// writer.write_all(b"hello ").unwrap();
/// writer.write_all(b"world").unwrap();
/// writer.finish().unwrap();
/// assert_eq!(b"aGVsbG8gd29ybGQ=", &writer.into_inner()[..]);
/// ```
pub struct FilterWriter<F: Filter, W: Write> {
    filter: F,
    inner: W,
    /// True iff carry state / padding has been flushed.
    finished: bool,
}

impl<F: Filter, W: Write> FilterWriter<F, W> {
    /// Create a new writer that feeds written bytes through `filter` into
    /// `inner`.
    pub fn new(filter: F, inner: W) -> FilterWriter<F, W> {
        FilterWriter {
            filter,
            inner,
            finished: false,
        }
    }

    /// Flush the filter's carry state, including any trailing padding, and
    /// flush the inner writer.
    ///
    /// Subsequent calls are no-ops; no further writes can be performed.
    ///
    /// # Errors
    ///
    /// Filter errors (a partial trailing group, for example) surface as
    /// `io::ErrorKind::InvalidData`; inner writer errors pass through.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let out = self.filter.finalize().map_err(into_io_error)?;
        self.inner.write_all(&out)?;
        self.inner.flush()
    }

    /// Unwraps this `FilterWriter`, returning the inner writer.
    ///
    /// If [`finish`](FilterWriter::finish) has not been called, carry state
    /// still held by the filter is lost.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<F: Filter, W: Write> Write for FilterWriter<F, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finished {
            panic!("Cannot write after the trailing padding has been written");
        }

        let out = self.filter.update(buf).map_err(into_io_error)?;
        self.inner.write_all(&out)?;
        Ok(buf.len())
    }

    /// Flushes the inner writer. This does *not* flush incomplete filter
    /// groups or write padding; use [`finish`](FilterWriter::finish).
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Base64, Direction, Hex};

    #[test]
    fn encode_writer_matches_one_shot() {
        let mut writer = FilterWriter::new(Base64::new(Direction::Encode), Vec::new());
        for chunk in b"some bytes to encode".chunks(3) {
            writer.write_all(chunk).unwrap();
        }
        writer.finish().unwrap();
        assert_eq!(
            crate::base64::encode(b"some bytes to encode").as_bytes(),
            &writer.into_inner()[..]
        );
    }

    #[test]
    fn decode_writer_produces_raw_bytes() {
        let mut writer = FilterWriter::new(Hex::new(Direction::Decode), Vec::new());
        writer.write_all(b"68656c6c").unwrap();
        writer.write_all(b"6f").unwrap();
        writer.finish().unwrap();
        assert_eq!(b"hello", &writer.into_inner()[..]);
    }

    #[test]
    fn decode_writer_surfaces_invalid_data() {
        let mut writer = FilterWriter::new(Hex::new(Direction::Decode), Vec::new());
        let err = writer.write_all(b"6z").unwrap_err();
        assert_eq!(io::ErrorKind::InvalidData, err.kind());
    }

    #[test]
    fn finish_fails_on_partial_group() {
        let mut writer = FilterWriter::new(Hex::new(Direction::Decode), Vec::new());
        writer.write_all(b"686").unwrap();
        let err = writer.finish().unwrap_err();
        assert_eq!(io::ErrorKind::InvalidData, err.kind());
    }
}
