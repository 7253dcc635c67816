use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::codec::Codec;
use crate::error::Result;
use crate::transport::{Endpoint, TcpTransport, Transport, UnixTransport};

/// High-level channel for bidirectional communication
///
/// Combines a transport and codec for persistent connections. A channel has
/// exactly one peer; messages arrive in the order the peer sent them.
pub struct Channel<C> {
    transport: Box<dyn Transport>,
    codec: C,
}

impl<C: Codec> Channel<C> {
    /// Create a channel from an existing transport
    pub fn from_transport(transport: impl Transport + 'static, codec: C) -> Self {
        Self {
            transport: Box::new(transport),
            codec,
        }
    }

    /// Open a channel to `endpoint`, bounding only the connect phase
    pub async fn connect(endpoint: &Endpoint, connect_timeout: Duration, codec: C) -> Result<Self> {
        match endpoint {
            Endpoint::Unix { path } => {
                let transport = UnixTransport::connect_timeout(path, connect_timeout).await?;
                Ok(Self::from_transport(transport, codec))
            }
            Endpoint::Tcp { address } => {
                let transport = TcpTransport::connect_timeout(*address, connect_timeout).await?;
                Ok(Self::from_transport(transport, codec))
            }
        }
    }

    /// Send a message over the channel
    pub async fn send<T: Serialize>(&mut self, message: &T) -> Result<()> {
        let bytes = self.codec.encode(message)?;
        self.transport.send(&bytes).await
    }

    /// Receive a message from the channel
    pub async fn receive<T: DeserializeOwned>(&mut self) -> Result<T> {
        let bytes = self.transport.receive().await?;
        self.codec.decode(&bytes)
    }

    /// Close the channel
    pub async fn close(mut self) -> Result<()> {
        self.transport.close().await
    }
}
