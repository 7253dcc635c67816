//! HLA Core - shared vocabulary of the federate/coordinator protocol
//!
//! Handles, federation time, the exception catalogue and the message
//! envelope used by both sides of the link.

pub mod error;
pub mod handle;
pub mod message;
pub mod payload;
pub mod time;

pub use error::{Exception, ExceptionKind, Result};
pub use handle::*;
pub use message::{Direction, Message, MessageKind, PROTOCOL_VERSION_MAJOR, PROTOCOL_VERSION_MINOR};
pub use payload::{AttributeValue, Extent, ParameterValue, Payload, Range};
pub use time::FedTime;
