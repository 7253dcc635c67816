use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod framing;
pub mod tcp;
pub mod unix;

pub use self::framing::MAX_FRAME_LEN;
pub use self::tcp::{TcpTransport, TcpTransportBuilder, TcpTransportListener};
pub use self::unix::{UnixTransport, UnixTransportBuilder, UnixTransportListener};

/// Transport trait for sending and receiving raw bytes
///
/// Each transport instance represents a single connection.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send bytes over the transport
    async fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Receive bytes from the transport
    async fn receive(&mut self) -> Result<Vec<u8>>;

    /// Close the transport connection
    async fn close(&mut self) -> Result<()>;
}

/// Listener side of a transport, used by the coordinating peer
#[async_trait::async_trait]
pub trait TransportListener: Send + Sync {
    type Transport: Transport;

    /// Wait for the next incoming connection
    async fn accept(&self) -> Result<Self::Transport>;

    /// Stop listening
    async fn close(&mut self) -> Result<()>;
}

/// Where the coordinating peer can be reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Endpoint {
    Unix { path: PathBuf },
    Tcp { address: SocketAddr },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Unix { path } => write!(f, "unix:{}", path.display()),
            Endpoint::Tcp { address } => write!(f, "tcp:{}", address),
        }
    }
}
