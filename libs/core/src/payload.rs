//! Kind-specific message bodies
//!
//! The dispatcher never looks inside a payload; service wrappers build
//! request payloads and pick apart the response ones.

use serde::{Deserialize, Serialize};

use crate::handle::{
    AttributeHandle, DimensionHandle, EventRetraction, FederateHandle, InteractionClassHandle,
    ObjectClassHandle, ObjectHandle, ParameterHandle, RegionHandle, ResignAction, SpaceHandle,
};
use crate::time::FedTime;

/// Attribute value as sent on the wire, in the order the federate gave it
pub type AttributeValue = (AttributeHandle, Vec<u8>);
/// Parameter value as sent on the wire, in the order the federate gave it
pub type ParameterValue = (ParameterHandle, Vec<u8>);

/// Lower and upper bound of a region along one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub dimension: DimensionHandle,
    pub lower: u64,
    pub upper: u64,
}

/// A box in a routing space; dimensions not listed are unbounded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub ranges: Vec<Range>,
}

impl Extent {
    pub fn range(&self, dimension: DimensionHandle) -> Option<&Range> {
        self.ranges.iter().find(|r| r.dimension == dimension)
    }

    pub fn range_mut(&mut self, dimension: DimensionHandle) -> &mut Range {
        if let Some(pos) = self.ranges.iter().position(|r| r.dimension == dimension) {
            return &mut self.ranges[pos];
        }
        self.ranges.push(Range {
            dimension,
            lower: 0,
            upper: u64::MAX,
        });
        let last = self.ranges.len() - 1;
        &mut self.ranges[last]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    Empty,

    // Connection and tick protocol
    Version {
        major: u32,
        minor: u32,
    },
    Tick {
        multiple: bool,
        /// seconds, may be `+inf`
        min_tick_time: f64,
        max_tick_time: f64,
    },

    // Federation management
    CreateFederation {
        federation: String,
        fom_modules: Vec<String>,
    },
    Federation {
        federation: String,
    },
    Join {
        federate_name: String,
        federation: String,
    },
    Federate(FederateHandle),
    Resign(ResignAction),
    SynchronizationPoint {
        label: String,
        tag: String,
        /// `None` synchronizes the whole federation
        federates: Option<Vec<FederateHandle>>,
    },
    Label {
        label: String,
        tag: Option<String>,
    },
    Save {
        label: String,
        time: Option<FedTime>,
    },
    Restore {
        label: String,
        federate: FederateHandle,
    },

    // Declaration management
    ClassAttributes {
        class: ObjectClassHandle,
        attributes: Vec<AttributeHandle>,
        active: bool,
        region: Option<RegionHandle>,
    },
    ObjectClass(ObjectClassHandle),
    InteractionClass {
        class: InteractionClassHandle,
        active: bool,
        region: Option<RegionHandle>,
    },

    // Object management
    RegisterObject {
        class: ObjectClassHandle,
        name: Option<String>,
        tag: Option<String>,
        /// Attribute to region associations, DDM registration only
        regions: Vec<(AttributeHandle, RegionHandle)>,
    },
    Object(ObjectHandle),
    Discover {
        object: ObjectHandle,
        class: ObjectClassHandle,
        name: String,
    },
    AttributeValues {
        object: ObjectHandle,
        values: Vec<AttributeValue>,
        time: Option<FedTime>,
        tag: Option<String>,
        retraction: Option<EventRetraction>,
    },
    Interaction {
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        time: Option<FedTime>,
        tag: Option<String>,
        region: Option<RegionHandle>,
        retraction: Option<EventRetraction>,
    },
    DeleteObject {
        object: ObjectHandle,
        time: Option<FedTime>,
        tag: Option<String>,
        retraction: Option<EventRetraction>,
    },
    Retraction(EventRetraction),
    AttributesType {
        object: ObjectHandle,
        attributes: Vec<AttributeHandle>,
        type_handle: u32,
    },
    InteractionType {
        class: InteractionClassHandle,
        type_handle: u32,
    },

    // Ownership management
    ObjectAttributes {
        object: ObjectHandle,
        attributes: Vec<AttributeHandle>,
        tag: Option<String>,
    },
    ObjectAttribute {
        object: ObjectHandle,
        attribute: AttributeHandle,
        owner: Option<FederateHandle>,
    },
    Attributes(Vec<AttributeHandle>),
    Owned(bool),

    // Time management
    Time(FedTime),
    TimeRegulation {
        time: FedTime,
        lookahead: FedTime,
    },
    Lookahead(FedTime),

    // Data distribution management
    CreateRegion {
        space: SpaceHandle,
        extent_count: u32,
    },
    Region {
        region: RegionHandle,
        extents: Vec<Extent>,
    },
    RegionHandle(RegionHandle),
    RegionAssociation {
        object: ObjectHandle,
        region: RegionHandle,
        attributes: Vec<AttributeHandle>,
    },

    // Support services
    NameLookup {
        name: String,
        scope: Option<u32>,
    },
    HandleLookup {
        handle: u32,
        scope: Option<u32>,
    },
    Handle(u32),
    Name(String),
}

impl Payload {
    /// Variant name, used when reporting a payload of the wrong shape
    pub fn shape(&self) -> &'static str {
        match self {
            Payload::Empty => "Empty",
            Payload::Version { .. } => "Version",
            Payload::Tick { .. } => "Tick",
            Payload::CreateFederation { .. } => "CreateFederation",
            Payload::Federation { .. } => "Federation",
            Payload::Join { .. } => "Join",
            Payload::Federate(_) => "Federate",
            Payload::Resign(_) => "Resign",
            Payload::SynchronizationPoint { .. } => "SynchronizationPoint",
            Payload::Label { .. } => "Label",
            Payload::Save { .. } => "Save",
            Payload::Restore { .. } => "Restore",
            Payload::ClassAttributes { .. } => "ClassAttributes",
            Payload::ObjectClass(_) => "ObjectClass",
            Payload::InteractionClass { .. } => "InteractionClass",
            Payload::RegisterObject { .. } => "RegisterObject",
            Payload::Object(_) => "Object",
            Payload::Discover { .. } => "Discover",
            Payload::AttributeValues { .. } => "AttributeValues",
            Payload::Interaction { .. } => "Interaction",
            Payload::DeleteObject { .. } => "DeleteObject",
            Payload::Retraction(_) => "Retraction",
            Payload::AttributesType { .. } => "AttributesType",
            Payload::InteractionType { .. } => "InteractionType",
            Payload::ObjectAttributes { .. } => "ObjectAttributes",
            Payload::ObjectAttribute { .. } => "ObjectAttribute",
            Payload::Attributes(_) => "Attributes",
            Payload::Owned(_) => "Owned",
            Payload::Time(_) => "Time",
            Payload::TimeRegulation { .. } => "TimeRegulation",
            Payload::Lookahead(_) => "Lookahead",
            Payload::CreateRegion { .. } => "CreateRegion",
            Payload::Region { .. } => "Region",
            Payload::RegionHandle(_) => "RegionHandle",
            Payload::RegionAssociation { .. } => "RegionAssociation",
            Payload::NameLookup { .. } => "NameLookup",
            Payload::HandleLookup { .. } => "HandleLookup",
            Payload::Handle(_) => "Handle",
            Payload::Name(_) => "Name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_mut_inserts_unbounded_range_once() {
        let mut extent = Extent::default();
        extent.range_mut(DimensionHandle(2)).lower = 10;
        extent.range_mut(DimensionHandle(2)).upper = 20;
        assert_eq!(extent.ranges.len(), 1);
        assert_eq!(
            extent.range(DimensionHandle(2)),
            Some(&Range {
                dimension: DimensionHandle(2),
                lower: 10,
                upper: 20
            })
        );
        assert!(extent.range(DimensionHandle(3)).is_none());
    }
}
