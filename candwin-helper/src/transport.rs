//! Engine connection loop
//!
//! Reads the engine's byte stream, cuts it into frames and applies every
//! complete frame before the next read.

use std::io::ErrorKind;

use anyhow::{Context, Result, bail};
use candwin_core::render::{self, CaretIndicator, Renderer};
use candwin_core::{CandidateWindow, FrameReader};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{info, trace, warn};

use crate::config::EofPolicy;

/// Read size per transport read
pub const READ_CHUNK: usize = 4096;

/// Drive `window` from `reader` until the stream ends or fails.
///
/// Returns `Ok` on EOF only under [`EofPolicy::Shutdown`].
pub async fn run<R, W, C>(
    mut reader: R,
    window: &mut CandidateWindow,
    renderer: &mut W,
    caret: &mut C,
    on_eof: EofPolicy,
) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: Renderer + ?Sized,
    C: CaretIndicator + ?Sized,
{
    let mut frames = FrameReader::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read from engine"),
        };

        if n == 0 {
            if frames.pending() > 0 {
                warn!(
                    "Dropping {} unframed bytes at end of stream",
                    frames.pending()
                );
            }
            return match on_eof {
                EofPolicy::Exit => bail!("Engine closed the connection"),
                EofPolicy::Shutdown => {
                    info!("Engine closed the connection, shutting down");
                    Ok(())
                }
            };
        }

        for frame in frames.feed(&buf[..n]) {
            trace!("Received frame of {} bytes", frame.len());
            let actions = window.handle_frame(&frame);
            render::apply(&actions, renderer, caret);
        }
    }
}
