#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hla_ambassador::{PeerContext, RtiAmbassador};
use hla_core::{Message, MessageKind, Payload, PROTOCOL_VERSION_MAJOR, PROTOCOL_VERSION_MINOR};
use hla_fabric::codec::{BincodeCodec, Codec};
use hla_fabric::transport::Transport;
use hla_fabric::{Error, Result};

/// What the scripted peer does once its replies run out
#[derive(Debug, Clone, Copy)]
pub enum Drained {
    /// Never answer
    Hang,
    /// Report the connection closed
    Close,
}

/// Transport that records every frame written and replays canned frames
pub struct ScriptedTransport {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
    replies: VecDeque<Vec<u8>>,
    drained: Drained,
    fail_from: Option<usize>,
}

/// Read side of what a [`ScriptedTransport`] was asked to send
#[derive(Clone)]
pub struct Wire {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl ScriptedTransport {
    pub fn new() -> (Self, Wire) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let transport = Self {
            sent: sent.clone(),
            replies: VecDeque::new(),
            drained: Drained::Close,
            fail_from: None,
        };
        (transport, Wire { sent })
    }

    pub fn reply(mut self, message: Message) -> Self {
        self.replies.push_back(encode(&message));
        self
    }

    pub fn replies(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        for message in messages {
            self.replies.push_back(encode(&message));
        }
        self
    }

    pub fn reply_raw(mut self, frame: Vec<u8>) -> Self {
        self.replies.push_back(frame);
        self
    }

    pub fn when_drained(mut self, drained: Drained) -> Self {
        self.drained = drained;
        self
    }

    /// Accept the handshake, then fail every later send
    pub fn fail_sends_after_open(self) -> Self {
        self.fail_sends_after(1)
    }

    /// Accept the first `accepted` frames, then fail every later send
    pub fn fail_sends_after(mut self, accepted: usize) -> Self {
        self.fail_from = Some(accepted);
        self
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_from.is_some_and(|accepted| sent.len() >= accepted) {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "peer hung up",
            )));
        }
        sent.push(bytes.to_vec());
        Ok(())
    }

    async fn receive(&mut self) -> Result<Vec<u8>> {
        if let Some(frame) = self.replies.pop_front() {
            return Ok(frame);
        }
        match self.drained {
            Drained::Hang => std::future::pending().await,
            Drained::Close => Err(Error::ConnectionClosed),
        }
    }

    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Wire {
    pub fn frames(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|frame| BincodeCodec.decode(frame).unwrap())
            .collect()
    }

    pub fn kinds(&self) -> Vec<MessageKind> {
        self.messages().into_iter().map(|m| m.kind).collect()
    }

    pub fn last(&self) -> Message {
        self.messages().pop().expect("nothing was sent")
    }
}

pub fn encode(message: &Message) -> Vec<u8> {
    BincodeCodec.encode(message).unwrap()
}

pub fn version_request() -> Message {
    Message::request(
        MessageKind::OpenConnexion,
        Payload::Version {
            major: PROTOCOL_VERSION_MAJOR,
            minor: PROTOCOL_VERSION_MINOR,
        },
    )
}

pub fn version_reply() -> Message {
    Message::response(
        MessageKind::OpenConnexion,
        Payload::Version {
            major: PROTOCOL_VERSION_MAJOR,
            minor: PROTOCOL_VERSION_MINOR,
        },
    )
}

/// Ambassador already past the handshake, followed by `replies`
pub async fn opened(replies: Vec<Message>) -> (RtiAmbassador, Wire) {
    opened_with(replies, Drained::Close).await
}

pub async fn opened_with(replies: Vec<Message>, drained: Drained) -> (RtiAmbassador, Wire) {
    let (transport, wire) = ScriptedTransport::new();
    let transport = transport
        .reply(version_reply())
        .replies(replies)
        .when_drained(drained);
    let rti = RtiAmbassador::with_transport(transport, PeerContext::new("test"))
        .await
        .unwrap();
    (rti, wire)
}

/// Number of frames sent after the handshake
pub fn service_frames(wire: &Wire) -> usize {
    wire.frames() - 1
}

pub fn ok(kind: MessageKind) -> Message {
    Message::response(kind, Payload::Empty)
}

pub fn callback(kind: MessageKind, payload: Payload) -> Message {
    Message::request(kind, payload)
}

pub fn tick_done(multiple: bool) -> Message {
    Message::response(
        MessageKind::TickRequest,
        Payload::Tick {
            multiple,
            min_tick_time: 0.0,
            max_tick_time: 0.0,
        },
    )
}
