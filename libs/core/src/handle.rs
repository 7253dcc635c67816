//! Federation-scoped handles
//!
//! Handles are small integers handed out by the coordinator. They are only
//! meaningful inside the federation execution that issued them.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_handle {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub u32);

            impl From<u32> for $name {
                fn from(raw: u32) -> Self {
                    Self(raw)
                }
            }

            impl From<$name> for u32 {
                fn from(handle: $name) -> u32 {
                    handle.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

define_handle!(
    /// A federate joined to a federation execution
    FederateHandle,
    ObjectClassHandle,
    AttributeHandle,
    InteractionClassHandle,
    ParameterHandle,
    /// A registered object instance
    ObjectHandle,
    /// A routing space used by data distribution management
    SpaceHandle,
    DimensionHandle,
    TransportationHandle,
    OrderingHandle,
    /// A region created through data distribution management
    RegionHandle,
);

/// Identifies a timestamped event so that it can be retracted later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventRetraction {
    pub sending_federate: FederateHandle,
    pub serial_number: u64,
}

/// What a resigning federate does with the attributes it still owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResignAction {
    ReleaseAttributes,
    DeleteObjects,
    DeleteObjectsAndReleaseAttributes,
    NoAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_distinct_types_over_u32() {
        let class = ObjectClassHandle::from(12);
        let raw: u32 = class.into();
        assert_eq!(raw, 12);
        assert_eq!(class.to_string(), "12");
    }

    #[test]
    fn handle_serializes_as_bare_integer() {
        let bytes = bincode::serialize(&RegionHandle(5)).unwrap();
        assert_eq!(bytes, bincode::serialize(&5u32).unwrap());
    }
}
