//! Length-prefix framing shared by the stream transports
//!
//! A frame is a 4-byte big-endian length followed by that many bytes.

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Error, Result};

/// Largest frame accepted from a peer (100 MiB)
pub const MAX_FRAME_LEN: usize = 100 * 1024 * 1024;

pub(crate) async fn write_frame<W>(writer: &mut W, bytes: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if bytes.len() > MAX_FRAME_LEN {
        return Err(Error::InvalidFrame(format!(
            "Message too large: {} bytes",
            bytes.len()
        )));
    }

    writer.write_u32(bytes.len() as u32).await?;
    writer.write_all(bytes).await?;
    writer.flush().await?;
    tracing::trace!(len = bytes.len(), "frame sent");
    Ok(())
}

pub(crate) async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let len = reader.read_u32().await.map_err(Error::from_read)? as usize;

    if len > MAX_FRAME_LEN {
        return Err(Error::InvalidFrame(format!(
            "Message too large: {} bytes",
            len
        )));
    }

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await.map_err(Error::from_read)?;
    tracing::trace!(len, "frame received");
    Ok(buf)
}

/// Run `op`, bounded by `limit` when one is configured
pub(crate) async fn timed<T, F>(operation: &'static str, limit: Option<Duration>, op: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match limit {
        Some(after) => tokio::time::timeout(after, op)
            .await
            .map_err(|_| Error::Timeout { operation, after })?,
        None => op.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frames_keep_their_boundaries() {
        let (mut a, mut b) = tokio::io::duplex(1024);
        write_frame(&mut a, b"first").await.unwrap();
        write_frame(&mut a, b"").await.unwrap();
        write_frame(&mut a, b"third").await.unwrap();

        assert_eq!(read_frame(&mut b).await.unwrap(), b"first");
        assert_eq!(read_frame(&mut b).await.unwrap(), b"");
        assert_eq!(read_frame(&mut b).await.unwrap(), b"third");
    }

    #[tokio::test]
    async fn eof_mid_frame_is_connection_closed() {
        let (mut a, mut b) = tokio::io::duplex(1024);
        a.write_u32(10).await.unwrap();
        a.write_all(b"abc").await.unwrap();
        drop(a);

        assert!(matches!(
            read_frame(&mut b).await,
            Err(Error::ConnectionClosed)
        ));
    }
}
