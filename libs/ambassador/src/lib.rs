//! HLA Ambassador - federate side of the federate/coordinator link
//!
//! A federate talks to its local coordinator (the RTIA) over one exclusive
//! channel. Every service is a strict request/response exchange; callbacks
//! are only delivered while the federate ticks.
//!
//! # Example
//!
//! ```no_run
//! use hla_ambassador::{AmbassadorConfig, FederateAmbassador, FederateCallbacks, RtiAmbassador};
//! use hla_core::{FedTime, Result};
//!
//! struct Clock { now: FedTime }
//!
//! impl FederateAmbassador for Clock {
//!     fn time_advance_grant(&mut self, time: FedTime) -> Result<()> {
//!         self.now = time;
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let config = AmbassadorConfig::unix("/tmp/rtia.sock");
//! let mut rti = RtiAmbassador::connect(&config).await?;
//! rti.join_federation_execution("clock", "demo").await?;
//!
//! let mut callbacks = FederateCallbacks(Clock { now: FedTime::ZERO });
//! rti.time_advance_request(FedTime::new(1.0)).await?;
//! while callbacks.0.now < FedTime::new(1.0) {
//!     rti.tick_blocking(&mut callbacks).await?;
//! }
//! rti.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod ambassador;
pub mod callback;
pub mod config;
pub mod connection;
pub mod dispatch;
pub mod region;
pub mod tick;

mod services;

pub use ambassador::RtiAmbassador;
pub use callback::{Callback, FederateAmbassador, FederateCallbacks};
pub use config::{AmbassadorConfig, ConfigError};
pub use connection::{Connection, PeerContext};
pub use dispatch::FromPayload;
pub use region::Region;
pub use tick::{CallbackHandler, TickPolicy};
