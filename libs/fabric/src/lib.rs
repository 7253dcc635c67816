//! HLA Fabric - transport and codec layer between a federate and its coordinator
//!
//! Provides transport abstractions (Unix sockets, TCP) with length-prefix
//! framing and codec support (bincode) for a single reliable, ordered,
//! bidirectional peer link.
//!
//! # Example
//!
//! ```no_run
//! use hla_fabric::{Channel, codec::BincodeCodec, transport::Endpoint};
//! use serde::{Serialize, Deserialize};
//! use std::time::Duration;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Ping { seq: u32 }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = Endpoint::Unix { path: "/tmp/rtia.sock".into() };
//! let mut channel = Channel::connect(&endpoint, Duration::from_secs(10), BincodeCodec).await?;
//! channel.send(&Ping { seq: 1 }).await?;
//! let pong: Ping = channel.receive().await?;
//! channel.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod codec;
pub mod error;
pub mod transport;

// Re-exports for convenience
pub use channel::Channel;
pub use error::{Error, Result};
pub use transport::Endpoint;
