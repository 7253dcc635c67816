//! Callback pump
//!
//! The coordinator queues callbacks for the federate and hands them out one
//! at a time, only when asked:
//!
//! ```text
//! federate                      coordinator
//!    TICK_REQUEST(policy)  -->
//!                          <--  callback 1
//!    TICK_REQUEST_NEXT     -->
//!                          <--  callback 2
//!    TICK_REQUEST_NEXT     -->
//!                          <--  TICK_REQUEST response (multiple)
//! ```
//!
//! If the federate's handler fails, `TICK_REQUEST_STOP` replaces the next
//! `TICK_REQUEST_NEXT` so the coordinator is never left mid-stream.

use std::time::Duration;

use hla_core::{Exception, Message, MessageKind, Payload, Result};
use hla_fabric::codec::Codec;
use tracing::{debug, trace, warn};

use crate::connection::{Connection, State};

/// How long and how much a tick may drain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPolicy {
    /// Keep delivering callbacks while more are pending
    pub multiple: bool,
    /// Seconds; `f64::INFINITY` waits for at least one callback
    pub min_tick_time: f64,
    /// Seconds; `f64::INFINITY` drains until nothing is pending
    pub max_tick_time: f64,
}

impl TickPolicy {
    /// At most one pass over whatever is already queued
    pub fn single() -> Self {
        Self {
            multiple: false,
            min_tick_time: 0.0,
            max_tick_time: 0.0,
        }
    }

    /// Deliver until the coordinator reports nothing pending
    pub fn drain() -> Self {
        Self {
            multiple: true,
            min_tick_time: 0.0,
            max_tick_time: f64::INFINITY,
        }
    }

    /// Block until one callback has been delivered
    pub fn blocking() -> Self {
        Self {
            multiple: false,
            min_tick_time: f64::INFINITY,
            max_tick_time: 0.0,
        }
    }

    /// Spend between `min` and `max` delivering callbacks
    pub fn window(min: Duration, max: Duration) -> Self {
        Self {
            multiple: true,
            min_tick_time: min.as_secs_f64(),
            max_tick_time: max.as_secs_f64(),
        }
    }

    fn payload(&self) -> Payload {
        Payload::Tick {
            multiple: self.multiple,
            min_tick_time: self.min_tick_time,
            max_tick_time: self.max_tick_time,
        }
    }
}

/// Federate-side sink for inbound callbacks
///
/// Called once per callback, in the order the coordinator sent them. An
/// error stops the current tick and is handed back to its caller unchanged.
pub trait CallbackHandler: Send {
    fn handle(&mut self, callback: Message) -> Result<()>;
}

impl<F> CallbackHandler for F
where
    F: FnMut(Message) -> Result<()> + Send,
{
    fn handle(&mut self, callback: Message) -> Result<()> {
        self(callback)
    }
}

impl<C: Codec> Connection<C> {
    /// Deliver queued callbacks to `handler` according to `policy`
    ///
    /// Returns whether the coordinator still holds pending callbacks.
    pub async fn tick(&mut self, policy: TickPolicy, handler: &mut dyn CallbackHandler) -> Result<bool> {
        self.ensure_ready(MessageKind::TickRequest)?;

        self.outstanding = Some(MessageKind::TickRequest);
        self.send_message(
            &Message::request(MessageKind::TickRequest, policy.payload()),
            "tick",
        )
        .await?;

        let mut delivered = 0usize;
        loop {
            let message = self.receive_message("tick").await?;

            if message.is_response_to(MessageKind::TickRequest) {
                self.outstanding = None;
                debug!(federate = %self.context(), callbacks = delivered, "tick finished");

                // the coordinator only reports exceptions tick() may raise
                if let Some(exception) = message.exception_carried() {
                    return Err(exception);
                }
                return match message.payload {
                    Payload::Tick { multiple, .. } => Ok(multiple),
                    other => Err(Exception::internal(format!(
                        "TICK_REQUEST answered with a {} payload",
                        other.shape()
                    ))),
                };
            }

            trace!(federate = %self.context(), kind = %message.kind, "delivering callback");
            if let Err(e) = handler.handle(message) {
                debug!(
                    federate = %self.context(),
                    callbacks = delivered,
                    error = %e,
                    "callback handler failed, stopping tick"
                );
                self.stop_tick().await;
                return Err(e);
            }
            delivered += 1;

            self.send_message(
                &Message::request(MessageKind::TickRequestNext, Payload::Empty),
                "tick",
            )
            .await?;
        }
    }

    /// Tell the coordinator to end the callback stream and drop its reply
    ///
    /// Failures here are logged; the caller is already reporting an error.
    async fn stop_tick(&mut self) {
        let stop = Message::request(MessageKind::TickRequestStop, Payload::Empty);
        let outcome = match self.send_message(&stop, "tick").await {
            Ok(()) => self.receive_message("tick").await.map(|_| ()),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => self.outstanding = None,
            Err(e) => {
                warn!(federate = %self.context(), error = %e, "TICK_REQUEST_STOP exchange failed");
                self.state = State::Broken;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_legacy_tick_variants() {
        assert_eq!(
            TickPolicy::single(),
            TickPolicy {
                multiple: false,
                min_tick_time: 0.0,
                max_tick_time: 0.0
            }
        );
        assert!(TickPolicy::drain().max_tick_time.is_infinite());
        assert!(TickPolicy::blocking().min_tick_time.is_infinite());
        assert!(!TickPolicy::blocking().multiple);
    }

    #[test]
    fn window_is_expressed_in_seconds() {
        let policy = TickPolicy::window(Duration::from_millis(250), Duration::from_secs(2));
        assert!(policy.multiple);
        assert_eq!(policy.min_tick_time, 0.25);
        assert_eq!(policy.max_tick_time, 2.0);
    }
}
