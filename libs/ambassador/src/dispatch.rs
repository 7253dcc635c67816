//! Synchronous request/response over a [`Connection`]
//!
//! One request goes out, exactly one response comes back before anything
//! else is sent. Channel failures become `RTIinternalError` naming the phase;
//! an exception-tagged response becomes an [`Exception`] of exactly the
//! tagged kind.

use hla_core::{
    AttributeHandle, EventRetraction, Exception, FedTime, FederateHandle, Message, MessageKind,
    ObjectHandle, Payload, Result,
};
use hla_fabric::codec::Codec;
use tracing::{debug, trace};

use crate::connection::{Connection, State};

impl<C: Codec> Connection<C> {
    /// Execute one service: send `request`, wait for its response
    ///
    /// Returns the response message when it carries no exception.
    pub async fn call(&mut self, request: Message) -> Result<Message> {
        self.ensure_ready(request.kind)?;
        self.exchange(request).await
    }

    /// Send, receive and validate; the only state checked is the
    /// outstanding-call guard
    pub(crate) async fn exchange(&mut self, request: Message) -> Result<Message> {
        self.ensure_idle(request.kind)?;

        let kind = request.kind;
        debug!(federate = %self.context(), %kind, "executeService");

        self.outstanding = Some(kind);
        self.send_message(&request, "executeService").await?;
        let response = self.receive_message("executeService").await?;
        self.outstanding = None;

        if !response.is_response_to(kind) {
            self.state = State::Broken;
            return Err(Exception::internal(format!(
                "executeService: expected response to {}, received {:?} {}",
                kind, response.direction, response.kind
            )));
        }

        if let Some(exception) = response.exception_carried() {
            debug!(
                federate = %self.context(),
                %kind,
                exception = %exception.kind,
                "service raised exception"
            );
            return Err(exception);
        }

        trace!(%kind, payload = response.payload.shape(), "service completed");
        Ok(response)
    }

    /// Execute one service and extract a typed result from the response
    pub async fn call_for<T: FromPayload>(&mut self, kind: MessageKind, payload: Payload) -> Result<T> {
        let response = self.call(Message::request(kind, payload)).await?;
        T::from_payload(kind, response.payload)
    }
}

/// Typed view of a response payload
pub trait FromPayload: Sized {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self>;
}

fn unexpected<T>(kind: MessageKind, payload: &Payload) -> Result<T> {
    Err(Exception::internal(format!(
        "{} answered with an unexpected {} payload",
        kind,
        payload.shape()
    )))
}

/// Services whose response carries nothing the federate needs
impl FromPayload for () {
    fn from_payload(_kind: MessageKind, _payload: Payload) -> Result<Self> {
        Ok(())
    }
}

/// Services that inspect the response payload themselves
impl FromPayload for Payload {
    fn from_payload(_kind: MessageKind, payload: Payload) -> Result<Self> {
        Ok(payload)
    }
}

impl FromPayload for FederateHandle {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Federate(handle) => Ok(handle),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for ObjectHandle {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Object(handle) => Ok(handle),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for EventRetraction {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Retraction(retraction) => Ok(retraction),
            Payload::AttributeValues {
                retraction: Some(retraction),
                ..
            }
            | Payload::Interaction {
                retraction: Some(retraction),
                ..
            }
            | Payload::DeleteObject {
                retraction: Some(retraction),
                ..
            } => Ok(retraction),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for Vec<AttributeHandle> {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Attributes(attributes) => Ok(attributes),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for bool {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Owned(owned) => Ok(owned),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for FedTime {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Time(time) | Payload::Lookahead(time) => Ok(time),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for u32 {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Handle(handle) => Ok(handle),
            other => unexpected(kind, &other),
        }
    }
}

impl FromPayload for String {
    fn from_payload(kind: MessageKind, payload: Payload) -> Result<Self> {
        match payload {
            Payload::Name(name) => Ok(name),
            other => unexpected(kind, &other),
        }
    }
}
