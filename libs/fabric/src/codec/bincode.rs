use serde::{de::DeserializeOwned, Serialize};

use crate::codec::Codec;
use crate::error::{Error, Result};

/// Bincode codec for binary serialization
///
/// Enum discriminants outside the receiver's catalogue fail to decode, so a
/// peer speaking a different message set is reported as a codec error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl Codec for BincodeCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        bincode::serialize(value).map_err(|e| Error::Codec(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        bincode::deserialize(bytes).map_err(|e| Error::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    enum Small {
        A,
        B(u32),
    }

    #[test]
    fn unknown_variant_is_a_codec_error() {
        let codec = BincodeCodec;
        // variant index 7 does not exist in `Small`
        let bytes = 7u32.to_le_bytes().to_vec();
        match codec.decode::<Small>(&bytes) {
            Err(Error::Codec(_)) => {}
            other => panic!("expected codec error, got {:?}", other),
        }
    }

    #[test]
    fn truncated_payload_is_a_codec_error() {
        let codec = BincodeCodec;
        let mut bytes = codec.encode(&Small::B(9)).unwrap();
        bytes.truncate(5);
        assert!(matches!(codec.decode::<Small>(&bytes), Err(Error::Codec(_))));
    }
}
