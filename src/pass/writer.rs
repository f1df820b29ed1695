//! Buffered writer that wipes its buffer.

use std::io::{self, Write};

use zeroize::Zeroize;

const CAPACITY: usize = 8 * 1024;

/// Like `BufWriter`, but the buffer is zeroized after every flush and on drop,
/// so no password bytes linger in freed memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    /// Bytes waiting to be written to the inner writer.
    #[cfg(test)]
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let written = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        written
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            // Too big to buffer, goes straight through
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::debug!(error = %e, "flush on drop failed");
        }
        self.buf.zeroize();
    }
}
