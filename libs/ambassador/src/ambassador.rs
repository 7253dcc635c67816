use std::time::Duration;

use hla_core::{MessageKind, Payload, Result};
use hla_fabric::codec::BincodeCodec;
use hla_fabric::transport::Transport;
use tracing::info;

use crate::config::AmbassadorConfig;
use crate::connection::{Connection, PeerContext};
use crate::dispatch::FromPayload;
use crate::tick::{CallbackHandler, TickPolicy};

/// Federate-side entry point to the RTI
///
/// Each service method sends one request and waits for its response before
/// returning. Methods take `&mut self`; a federate drives its ambassador from
/// one task.
pub struct RtiAmbassador {
    pub(crate) conn: Connection<BincodeCodec>,
}

impl RtiAmbassador {
    /// Connect to the coordinator described by `config` and open the session
    pub async fn connect(config: &AmbassadorConfig) -> Result<Self> {
        let mut conn = Connection::connect(config, BincodeCodec).await?;
        conn.open().await?;
        info!(endpoint = %config.endpoint, "RTI ambassador ready");
        Ok(Self { conn })
    }

    /// Open a session over an already established transport
    pub async fn with_transport(transport: impl Transport + 'static, context: PeerContext) -> Result<Self> {
        let mut conn = Connection::from_transport(transport, BincodeCodec, context);
        conn.open().await?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection<BincodeCodec> {
        &self.conn
    }

    /// End the session; the ambassador cannot be used afterwards
    pub async fn close(self) -> Result<()> {
        self.conn.close().await
    }

    /// Deliver at most what is already queued, without waiting
    pub async fn tick(&mut self, handler: &mut dyn CallbackHandler) -> Result<bool> {
        self.conn.tick(TickPolicy::single(), handler).await
    }

    /// Deliver until nothing is pending
    pub async fn tick_drain(&mut self, handler: &mut dyn CallbackHandler) -> Result<bool> {
        self.conn.tick(TickPolicy::drain(), handler).await
    }

    /// Deliver callbacks for at least `min` and at most `max`
    pub async fn tick_with(
        &mut self,
        min: Duration,
        max: Duration,
        handler: &mut dyn CallbackHandler,
    ) -> Result<bool> {
        self.conn.tick(TickPolicy::window(min, max), handler).await
    }

    /// Wait for one callback and deliver it
    pub async fn tick_blocking(&mut self, handler: &mut dyn CallbackHandler) -> Result<bool> {
        self.conn.tick(TickPolicy::blocking(), handler).await
    }

    pub async fn tick_policy(&mut self, policy: TickPolicy, handler: &mut dyn CallbackHandler) -> Result<bool> {
        self.conn.tick(policy, handler).await
    }

    pub(crate) async fn execute<T: FromPayload>(&mut self, kind: MessageKind, payload: Payload) -> Result<T> {
        self.conn.call_for(kind, payload).await
    }
}
