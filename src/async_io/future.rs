//! Async fingerprint future.
//!
//! This module drives a [`FingerprintEngine`] from a `futures_io::AsyncRead`,
//! making it runtime-agnostic and compatible with tokio, async-std, smol,
//! and other async runtimes.
//!
//! # Example
//!
//! ```ignore
//! use hazzy::fingerprint_async;
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), hazzy::FingerprintError> {
//!     let fingerprint = fingerprint_async(reader).await?;
//!     println!("{fingerprint}");
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::FusedFuture;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::error::FingerprintError;
use crate::fingerprint::Fingerprint;
use crate::fingerprinter::{FingerprintEngine, Fingerprinter};

pin_project! {
    /// A future that fingerprints everything an async reader yields.
    ///
    /// Dropping the future before completion discards all partial state.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct FingerprintFuture<R> {
        #[pin]
        reader: R,
        engine: Option<FingerprintEngine>,
        buffer: Vec<u8>,
    }
}

impl<R> FingerprintFuture<R> {
    fn new(reader: R, engine: FingerprintEngine) -> Self {
        let buffer = vec![0u8; engine.config().block_size()];
        Self {
            reader,
            engine: Some(engine),
            buffer,
        }
    }
}

impl<R: AsyncRead> Future for FingerprintFuture<R> {
    type Output = Result<Fingerprint, FingerprintError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        let outcome = loop {
            let Some(engine) = this.engine.as_mut() else {
                panic!("`FingerprintFuture` polled after completion");
            };

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                // End of stream
                Poll::Ready(Ok(0)) => break Ok(()),
                Poll::Ready(Ok(n)) => {
                    if let Err(e) = engine.update(&this.buffer[..n]) {
                        break Err(e);
                    }
                }
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => break Err(FingerprintError::Io(e)),
            }
        };

        let engine = this.engine.take();
        Poll::Ready(match outcome {
            Ok(()) => engine.map_or(Err(FingerprintError::EmptyInput), FingerprintEngine::finish),
            Err(e) => Err(e),
        })
    }
}

impl<R: AsyncRead> FusedFuture for FingerprintFuture<R> {
    fn is_terminated(&self) -> bool {
        self.engine.is_none()
    }
}

impl Fingerprinter {
    /// Fingerprints an async reader with this fingerprinter's configuration.
    ///
    /// See [`fingerprint_async`].
    pub fn fingerprint_async<R: AsyncRead>(&self, reader: R) -> FingerprintFuture<R> {
        FingerprintFuture::new(reader, self.engine())
    }
}

/// Fingerprints an async reader with the default configuration.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. For tokio
/// readers, convert with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
///
/// let file = tokio::fs::File::open("file").await?;
/// let fingerprint = hazzy::fingerprint_async(file.compat()).await?;
/// ```
///
/// The returned future resolves to the same fingerprint
/// [`crate::fingerprint_reader`] computes for the same bytes.
pub fn fingerprint_async<R: AsyncRead>(reader: R) -> FingerprintFuture<R> {
    Fingerprinter::default().fingerprint_async(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::io;

    /// Yields `data` in full, then fails.
    struct FailsAfter {
        data: Vec<u8>,
        pos: usize,
    }

    impl AsyncRead for FailsAfter {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            buf: &mut [u8],
        ) -> Poll<io::Result<usize>> {
            let this = self.get_mut();
            if this.pos == this.data.len() {
                return Poll::Ready(Err(io::Error::other("link dropped")));
            }
            let n = buf.len().min(this.data.len() - this.pos);
            buf[..n].copy_from_slice(&this.data[this.pos..this.pos + n]);
            this.pos += n;
            Poll::Ready(Ok(n))
        }
    }

    #[tokio::test]
    async fn test_fingerprint_future_empty() {
        let reader: &[u8] = &[];
        let result = fingerprint_async(reader).await;
        assert!(matches!(result, Err(FingerprintError::EmptyInput)));
    }

    #[tokio::test]
    async fn test_fingerprint_future_matches_sync() {
        let data: Vec<u8> = (0..250_000u32).map(|i| (i % 253) as u8).collect();
        let reader: &[u8] = &data;

        let from_async = fingerprint_async(reader).await.unwrap();
        let from_sync = crate::fingerprint_bytes(data.clone()).unwrap();
        assert_eq!(from_async, from_sync);
    }

    #[tokio::test]
    async fn test_fingerprint_future_is_terminated() {
        let reader: &[u8] = b"abc";
        let mut future = fingerprint_async(reader);
        assert!(!future.is_terminated());

        let result = (&mut future).await;
        assert_eq!(result.unwrap().coarse(), crate::hash_chunk(b"abc").to_string());
        assert!(future.is_terminated());
    }

    #[test]
    fn test_ready_reader_completes_in_one_poll() {
        let reader: &[u8] = &[0, 0, 0];
        let result = fingerprint_async(reader).now_or_never();
        let fingerprint = result.expect("slice reader never pends").unwrap();
        assert_eq!(fingerprint.coarse(), "00");
    }

    #[tokio::test]
    async fn test_read_error_after_first_block_aborts() {
        let reader = FailsAfter {
            data: vec![9u8; 150 * 1024],
            pos: 0,
        };
        let mut future = fingerprint_async(reader);

        let result = (&mut future).await;
        assert!(matches!(result, Err(FingerprintError::Io(_))));
        assert!(future.is_terminated());
    }
}
