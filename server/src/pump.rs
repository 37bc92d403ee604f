//! Per-connection outbound delivery pump.

use log::debug;
use shared::Frame;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Drains a player's outbox in FIFO order and writes each encoded frame to
/// the transport, preserving per-recipient ordering.
///
/// Runs for the lifetime of the connection and terminates when the outbox is
/// closed (the registry dropped the last sender on removal) or on a write
/// error, whichever comes first. A write error does not trigger removal;
/// cleanup is always driven by the read side of the same connection.
pub async fn run<W>(mut outbox: mpsc::Receiver<Frame>, mut writer: W)
where
    W: AsyncWrite + Unpin,
{
    while let Some(frame) = outbox.recv().await {
        if let Err(e) = writer.write_all(frame.encode().as_bytes()).await {
            debug!("Outbound pump stopping on write error: {}", e);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_pump_writes_frames_in_fifo_order() {
        let (tx, rx) = mpsc::channel(4);

        tx.try_send(Frame::Msg("first".to_string())).unwrap();
        tx.try_send(Frame::Msg("second".to_string())).unwrap();
        drop(tx);

        let writer = Builder::new()
            .write(b"MSG:first\n")
            .write(b"MSG:second\n")
            .build();

        // Completes once the channel closes and the queue is drained.
        run(rx, writer).await;
    }

    #[tokio::test]
    async fn test_pump_exits_when_outbox_closes() {
        let (tx, rx) = mpsc::channel::<Frame>(1);
        let writer = Builder::new().build();

        drop(tx);
        run(rx, writer).await;
    }

    #[tokio::test]
    async fn test_pump_exits_on_write_error() {
        let (tx, rx) = mpsc::channel(4);

        tx.try_send(Frame::Msg("first".to_string())).unwrap();
        tx.try_send(Frame::Msg("never written".to_string())).unwrap();

        let writer = Builder::new()
            .write_error(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"))
            .build();

        // Returns despite the channel still holding a frame and a live
        // sender; the broken transport ends the pump on its own.
        run(rx, writer).await;
        drop(tx);
    }
}
