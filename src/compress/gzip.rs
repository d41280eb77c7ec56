//! gzip compression into a byte-counting sink.

use std::fmt;
use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

/// A writer that discards everything and remembers how much it was given.
#[derive(Debug, Default)]
pub(crate) struct CountingSink {
    written: u64,
}

impl CountingSink {
    /// Returns the number of bytes written so far.
    pub(crate) fn written(&self) -> u64 {
        self.written
    }
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A streaming gzip compressor that only measures its output size.
pub(crate) struct GzipCounter {
    encoder: GzEncoder<CountingSink>,
}

impl GzipCounter {
    /// Creates a compressor at the given level (0-9).
    pub(crate) fn new(level: u32) -> Self {
        Self {
            encoder: GzEncoder::new(CountingSink::default(), Compression::new(level)),
        }
    }

    /// Feeds more input to the compressor.
    pub(crate) fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.encoder.write_all(data)
    }

    /// Flushes the deflate stream and gzip trailer and returns the total
    /// compressed size, header included.
    pub(crate) fn finish(self) -> io::Result<u64> {
        let sink = self.encoder.finish()?;
        Ok(sink.written())
    }
}

impl fmt::Debug for GzipCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GzipCounter")
            .field("emitted", &self.encoder.get_ref().written())
            .finish_non_exhaustive()
    }
}
