use std::fmt;

use hla_core::{
    Exception, Message, MessageKind, Payload, Result, PROTOCOL_VERSION_MAJOR,
    PROTOCOL_VERSION_MINOR,
};
use hla_fabric::codec::{BincodeCodec, Codec};
use hla_fabric::transport::Transport;
use hla_fabric::Channel;
use tracing::{debug, warn};

use crate::config::AmbassadorConfig;

/// Identifies this federate in log records
///
/// Owned by its connection; joining a federation renames it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerContext {
    federate: String,
}

impl PeerContext {
    pub fn new(federate: impl Into<String>) -> Self {
        Self {
            federate: federate.into(),
        }
    }

    pub fn federate(&self) -> &str {
        &self.federate
    }
}

impl fmt::Display for PeerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.federate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Transport established, handshake not done
    Fresh,
    Open,
    /// Handshake failed or the stream lost sync; nothing more may be sent
    Broken,
}

/// Exclusive link between one federate and its coordinator
///
/// Every operation takes `&mut self`, so at most one exchange is in progress
/// at a time. An exchange abandoned half way (its future dropped) leaves the
/// connection refusing further calls, since the stream may still hold the
/// reply.
pub struct Connection<C = BincodeCodec> {
    channel: Channel<C>,
    context: PeerContext,
    pub(crate) state: State,
    pub(crate) outstanding: Option<MessageKind>,
}

impl<C: Codec> Connection<C> {
    /// Wrap an already established transport
    pub fn from_transport(
        transport: impl Transport + 'static,
        codec: C,
        context: PeerContext,
    ) -> Self {
        Self {
            channel: Channel::from_transport(transport, codec),
            context,
            state: State::Fresh,
            outstanding: None,
        }
    }

    /// Connect to the coordinator named in `config`
    ///
    /// Only this phase is bounded by a timeout.
    pub async fn connect(config: &AmbassadorConfig, codec: C) -> Result<Self> {
        let channel = Channel::connect(&config.endpoint, config.connect_timeout(), codec)
            .await
            .map_err(|e| {
                Exception::internal(format!(
                    "Cannot connect to RTIA at {}: {}",
                    config.endpoint, e
                ))
            })?;
        debug!(endpoint = %config.endpoint, "connected to coordinator");

        Ok(Self {
            channel,
            context: PeerContext::new(config.federate_label.clone()),
            state: State::Fresh,
            outstanding: None,
        })
    }

    pub fn context(&self) -> &PeerContext {
        &self.context
    }

    pub fn set_federate_name(&mut self, name: impl Into<String>) {
        self.context = PeerContext::new(name);
    }

    pub fn is_open(&self) -> bool {
        self.state == State::Open
    }

    /// Exchange protocol versions; the connection is usable afterwards
    pub async fn open(&mut self) -> Result<()> {
        if self.state != State::Fresh {
            return Err(Exception::internal("OPEN_CONNEXION on a connection already opened"));
        }

        let request = Message::request(
            MessageKind::OpenConnexion,
            Payload::Version {
                major: PROTOCOL_VERSION_MAJOR,
                minor: PROTOCOL_VERSION_MINOR,
            },
        );

        let response = match self.exchange(request).await {
            Ok(response) => response,
            Err(e) => {
                self.state = State::Broken;
                return Err(e);
            }
        };

        match response.payload {
            Payload::Version { major, minor }
                if major == PROTOCOL_VERSION_MAJOR && minor == PROTOCOL_VERSION_MINOR =>
            {
                self.state = State::Open;
                debug!(federate = %self.context, major, minor, "connection open");
                Ok(())
            }
            Payload::Version { major, minor } => {
                self.state = State::Broken;
                Err(Exception::internal(format!(
                    "RTIA speaks protocol {}.{}, expected {}.{}",
                    major, minor, PROTOCOL_VERSION_MAJOR, PROTOCOL_VERSION_MINOR
                )))
            }
            other => {
                self.state = State::Broken;
                Err(Exception::internal(format!(
                    "OPEN_CONNEXION answered with a {} payload",
                    other.shape()
                )))
            }
        }
    }

    /// Say goodbye to the coordinator and release the transport
    pub async fn close(mut self) -> Result<()> {
        let response = self
            .call(Message::request(MessageKind::CloseConnexion, Payload::Empty))
            .await;

        if let Err(e) = self.channel.close().await {
            warn!(federate = %self.context, error = %e, "transport shutdown failed");
        }
        debug!(federate = %self.context, "connection closed");
        response.map(|_| ())
    }

    /// Refuse to start an exchange unless the link is in a known-good state
    pub(crate) fn ensure_ready(&self, kind: MessageKind) -> Result<()> {
        self.ensure_idle(kind)?;
        match self.state {
            State::Open => Ok(()),
            State::Fresh => Err(Exception::internal(format!(
                "cannot send {} before OPEN_CONNEXION",
                kind
            ))),
            State::Broken => Err(Exception::internal(format!(
                "cannot send {}: connection to RTIA is unusable",
                kind
            ))),
        }
    }

    /// No exchange may start while another awaits its response
    pub(crate) fn ensure_idle(&self, kind: MessageKind) -> Result<()> {
        match self.outstanding {
            Some(pending) => Err(Exception::internal(format!(
                "cannot send {} while {} is still awaiting its response",
                kind, pending
            ))),
            None => Ok(()),
        }
    }

    /// Write one message; `during` names the operation for error reports
    pub(crate) async fn send_message(&mut self, message: &Message, during: &str) -> Result<()> {
        if let Err(e) = self.channel.send(message).await {
            self.state = State::Broken;
            self.outstanding = None;
            return Err(Exception::internal(format!(
                "NetworkError in {}() while sending {}: {}",
                during, message.kind, e
            )));
        }
        Ok(())
    }

    /// Read one message; `during` names the operation for error reports
    pub(crate) async fn receive_message(&mut self, during: &str) -> Result<Message> {
        match self.channel.receive::<Message>().await {
            Ok(message) => Ok(message),
            Err(e) => {
                if e.is_disconnect() {
                    debug!(federate = %self.context, "coordinator hung up");
                } else {
                    warn!(federate = %self.context, error = %e, "receive from coordinator failed");
                }
                self.state = State::Broken;
                self.outstanding = None;
                Err(Exception::internal(format!(
                    "NetworkError in {}() while receiving response: {}",
                    during, e
                )))
            }
        }
    }
}
