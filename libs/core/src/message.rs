//! Message envelope exchanged with the coordinator

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Exception, ExceptionKind};
use crate::payload::Payload;

/// Major protocol version announced in the connection handshake
pub const PROTOCOL_VERSION_MAJOR: u32 = 1;
/// Minor protocol version announced in the connection handshake
pub const PROTOCOL_VERSION_MINOR: u32 = 0;

macro_rules! message_kinds {
    (
        services { $($service:ident => $service_name:literal),* $(,)? }
        callbacks { $($callback:ident => $callback_name:literal),* $(,)? }
    ) => {
        /// Closed, versioned catalogue of service and callback identifiers
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum MessageKind {
            $($service,)*
            $($callback,)*
        }

        impl MessageKind {
            pub fn name(self) -> &'static str {
                match self {
                    $(MessageKind::$service => $service_name,)*
                    $(MessageKind::$callback => $callback_name,)*
                }
            }

            /// Delivered by the coordinator to the federate during a tick
            pub fn is_callback(self) -> bool {
                matches!(self, $(MessageKind::$callback)|*)
            }
        }
    };
}

message_kinds! {
    services {
        OpenConnexion => "OPEN_CONNEXION",
        CloseConnexion => "CLOSE_CONNEXION",
        TickRequest => "TICK_REQUEST",
        TickRequestNext => "TICK_REQUEST_NEXT",
        TickRequestStop => "TICK_REQUEST_STOP",

        CreateFederationExecution => "CREATE_FEDERATION_EXECUTION",
        DestroyFederationExecution => "DESTROY_FEDERATION_EXECUTION",
        JoinFederationExecution => "JOIN_FEDERATION_EXECUTION",
        ResignFederationExecution => "RESIGN_FEDERATION_EXECUTION",
        RegisterFederationSynchronizationPoint => "REGISTER_FEDERATION_SYNCHRONIZATION_POINT",
        SynchronizationPointAchieved => "SYNCHRONIZATION_POINT_ACHIEVED",
        RequestFederationSave => "REQUEST_FEDERATION_SAVE",
        FederateSaveBegun => "FEDERATE_SAVE_BEGUN",
        FederateSaveComplete => "FEDERATE_SAVE_COMPLETE",
        FederateSaveNotComplete => "FEDERATE_SAVE_NOT_COMPLETE",
        RequestFederationRestore => "REQUEST_FEDERATION_RESTORE",
        FederateRestoreComplete => "FEDERATE_RESTORE_COMPLETE",
        FederateRestoreNotComplete => "FEDERATE_RESTORE_NOT_COMPLETE",

        PublishObjectClass => "PUBLISH_OBJECT_CLASS",
        UnpublishObjectClass => "UNPUBLISH_OBJECT_CLASS",
        PublishInteractionClass => "PUBLISH_INTERACTION_CLASS",
        UnpublishInteractionClass => "UNPUBLISH_INTERACTION_CLASS",
        SubscribeObjectClassAttributes => "SUBSCRIBE_OBJECT_CLASS_ATTRIBUTES",
        UnsubscribeObjectClass => "UNSUBSCRIBE_OBJECT_CLASS",
        SubscribeInteractionClass => "SUBSCRIBE_INTERACTION_CLASS",
        UnsubscribeInteractionClass => "UNSUBSCRIBE_INTERACTION_CLASS",

        RegisterObjectInstance => "REGISTER_OBJECT_INSTANCE",
        UpdateAttributeValues => "UPDATE_ATTRIBUTE_VALUES",
        SendInteraction => "SEND_INTERACTION",
        DeleteObjectInstance => "DELETE_OBJECT_INSTANCE",
        LocalDeleteObjectInstance => "LOCAL_DELETE_OBJECT_INSTANCE",
        ChangeAttributeTransportationType => "CHANGE_ATTRIBUTE_TRANSPORTATION_TYPE",
        ChangeInteractionTransportationType => "CHANGE_INTERACTION_TRANSPORTATION_TYPE",
        RequestObjectAttributeValueUpdate => "REQUEST_OBJECT_ATTRIBUTE_VALUE_UPDATE",
        RequestClassAttributeValueUpdate => "REQUEST_CLASS_ATTRIBUTE_VALUE_UPDATE",

        UnconditionalAttributeOwnershipDivestiture => "UNCONDITIONAL_ATTRIBUTE_OWNERSHIP_DIVESTITURE",
        NegotiatedAttributeOwnershipDivestiture => "NEGOTIATED_ATTRIBUTE_OWNERSHIP_DIVESTITURE",
        AttributeOwnershipAcquisition => "ATTRIBUTE_OWNERSHIP_ACQUISITION",
        AttributeOwnershipReleaseResponse => "ATTRIBUTE_OWNERSHIP_RELEASE_RESPONSE",
        CancelNegotiatedAttributeOwnershipDivestiture => "CANCEL_NEGOTIATED_ATTRIBUTE_OWNERSHIP_DIVESTITURE",
        CancelAttributeOwnershipAcquisition => "CANCEL_ATTRIBUTE_OWNERSHIP_ACQUISITION",
        AttributeOwnershipAcquisitionIfAvailable => "ATTRIBUTE_OWNERSHIP_ACQUISITION_IF_AVAILABLE",
        QueryAttributeOwnership => "QUERY_ATTRIBUTE_OWNERSHIP",
        IsAttributeOwnedByFederate => "IS_ATTRIBUTE_OWNED_BY_FEDERATE",

        EnableTimeRegulation => "ENABLE_TIME_REGULATION",
        DisableTimeRegulation => "DISABLE_TIME_REGULATION",
        EnableTimeConstrained => "ENABLE_TIME_CONSTRAINED",
        DisableTimeConstrained => "DISABLE_TIME_CONSTRAINED",
        TimeAdvanceRequest => "TIME_ADVANCE_REQUEST",
        TimeAdvanceRequestAvailable => "TIME_ADVANCE_REQUEST_AVAILABLE",
        NextEventRequest => "NEXT_EVENT_REQUEST",
        NextEventRequestAvailable => "NEXT_EVENT_REQUEST_AVAILABLE",
        FlushQueueRequest => "FLUSH_QUEUE_REQUEST",
        EnableAsynchronousDelivery => "ENABLE_ASYNCHRONOUS_DELIVERY",
        DisableAsynchronousDelivery => "DISABLE_ASYNCHRONOUS_DELIVERY",
        QueryLbts => "QUERY_LBTS",
        QueryFederateTime => "QUERY_FEDERATE_TIME",
        QueryMinNextEventTime => "QUERY_MIN_NEXT_EVENT_TIME",
        ModifyLookahead => "MODIFY_LOOKAHEAD",
        QueryLookahead => "QUERY_LOOKAHEAD",
        Retract => "RETRACT",
        ChangeAttributeOrderType => "CHANGE_ATTRIBUTE_ORDER_TYPE",
        ChangeInteractionOrderType => "CHANGE_INTERACTION_ORDER_TYPE",

        DdmCreateRegion => "DDM_CREATE_REGION",
        DdmModifyRegion => "DDM_MODIFY_REGION",
        DdmDeleteRegion => "DDM_DELETE_REGION",
        DdmRegisterObject => "DDM_REGISTER_OBJECT",
        DdmAssociateRegion => "DDM_ASSOCIATE_REGION",
        DdmUnassociateRegion => "DDM_UNASSOCIATE_REGION",
        DdmSubscribeAttributes => "DDM_SUBSCRIBE_ATTRIBUTES",
        DdmUnsubscribeAttributes => "DDM_UNSUBSCRIBE_ATTRIBUTES",
        DdmSubscribeInteraction => "DDM_SUBSCRIBE_INTERACTION",
        DdmUnsubscribeInteraction => "DDM_UNSUBSCRIBE_INTERACTION",
        DdmRequestUpdate => "DDM_REQUEST_UPDATE",

        GetObjectClassHandle => "GET_OBJECT_CLASS_HANDLE",
        GetObjectClassName => "GET_OBJECT_CLASS_NAME",
        GetAttributeHandle => "GET_ATTRIBUTE_HANDLE",
        GetAttributeName => "GET_ATTRIBUTE_NAME",
        GetInteractionClassHandle => "GET_INTERACTION_CLASS_HANDLE",
        GetInteractionClassName => "GET_INTERACTION_CLASS_NAME",
        GetParameterHandle => "GET_PARAMETER_HANDLE",
        GetParameterName => "GET_PARAMETER_NAME",
        GetObjectInstanceHandle => "GET_OBJECT_INSTANCE_HANDLE",
        GetObjectInstanceName => "GET_OBJECT_INSTANCE_NAME",
        GetSpaceHandle => "GET_SPACE_HANDLE",
        GetSpaceName => "GET_SPACE_NAME",
        GetDimensionHandle => "GET_DIMENSION_HANDLE",
        GetDimensionName => "GET_DIMENSION_NAME",
        GetAttributeSpaceHandle => "GET_ATTRIBUTE_SPACE_HANDLE",
        GetObjectClass => "GET_OBJECT_CLASS",
        GetInteractionSpaceHandle => "GET_INTERACTION_SPACE_HANDLE",
        GetTransportationHandle => "GET_TRANSPORTATION_HANDLE",
        GetTransportationName => "GET_TRANSPORTATION_NAME",
        GetOrderingHandle => "GET_ORDERING_HANDLE",
        GetOrderingName => "GET_ORDERING_NAME",
        EnableClassRelevanceAdvisorySwitch => "ENABLE_CLASS_RELEVANCE_ADVISORY_SWITCH",
        DisableClassRelevanceAdvisorySwitch => "DISABLE_CLASS_RELEVANCE_ADVISORY_SWITCH",
        EnableAttributeRelevanceAdvisorySwitch => "ENABLE_ATTRIBUTE_RELEVANCE_ADVISORY_SWITCH",
        DisableAttributeRelevanceAdvisorySwitch => "DISABLE_ATTRIBUTE_RELEVANCE_ADVISORY_SWITCH",
        EnableAttributeScopeAdvisorySwitch => "ENABLE_ATTRIBUTE_SCOPE_ADVISORY_SWITCH",
        DisableAttributeScopeAdvisorySwitch => "DISABLE_ATTRIBUTE_SCOPE_ADVISORY_SWITCH",
        EnableInteractionRelevanceAdvisorySwitch => "ENABLE_INTERACTION_RELEVANCE_ADVISORY_SWITCH",
        DisableInteractionRelevanceAdvisorySwitch => "DISABLE_INTERACTION_RELEVANCE_ADVISORY_SWITCH",
    }
    callbacks {
        SynchronizationPointRegistrationSucceeded => "SYNCHRONIZATION_POINT_REGISTRATION_SUCCEEDED",
        SynchronizationPointRegistrationFailed => "SYNCHRONIZATION_POINT_REGISTRATION_FAILED",
        AnnounceSynchronizationPoint => "ANNOUNCE_SYNCHRONIZATION_POINT",
        FederationSynchronized => "FEDERATION_SYNCHRONIZED",
        InitiateFederateSave => "INITIATE_FEDERATE_SAVE",
        FederationSaved => "FEDERATION_SAVED",
        FederationNotSaved => "FEDERATION_NOT_SAVED",
        RequestFederationRestoreSucceeded => "REQUEST_FEDERATION_RESTORE_SUCCEEDED",
        RequestFederationRestoreFailed => "REQUEST_FEDERATION_RESTORE_FAILED",
        FederationRestoreBegun => "FEDERATION_RESTORE_BEGUN",
        InitiateFederateRestore => "INITIATE_FEDERATE_RESTORE",
        FederationRestored => "FEDERATION_RESTORED",
        FederationNotRestored => "FEDERATION_NOT_RESTORED",
        StartRegistrationForObjectClass => "START_REGISTRATION_FOR_OBJECT_CLASS",
        StopRegistrationForObjectClass => "STOP_REGISTRATION_FOR_OBJECT_CLASS",
        TurnInteractionsOn => "TURN_INTERACTIONS_ON",
        TurnInteractionsOff => "TURN_INTERACTIONS_OFF",
        DiscoverObjectInstance => "DISCOVER_OBJECT_INSTANCE",
        ReflectAttributeValues => "REFLECT_ATTRIBUTE_VALUES",
        ReceiveInteraction => "RECEIVE_INTERACTION",
        RemoveObjectInstance => "REMOVE_OBJECT_INSTANCE",
        AttributesInScope => "ATTRIBUTES_IN_SCOPE",
        AttributesOutOfScope => "ATTRIBUTES_OUT_OF_SCOPE",
        ProvideAttributeValueUpdate => "PROVIDE_ATTRIBUTE_VALUE_UPDATE",
        TurnUpdatesOnForObjectInstance => "TURN_UPDATES_ON_FOR_OBJECT_INSTANCE",
        TurnUpdatesOffForObjectInstance => "TURN_UPDATES_OFF_FOR_OBJECT_INSTANCE",
        RequestAttributeOwnershipAssumption => "REQUEST_ATTRIBUTE_OWNERSHIP_ASSUMPTION",
        AttributeOwnershipDivestitureNotification => "ATTRIBUTE_OWNERSHIP_DIVESTITURE_NOTIFICATION",
        AttributeOwnershipAcquisitionNotification => "ATTRIBUTE_OWNERSHIP_ACQUISITION_NOTIFICATION",
        AttributeOwnershipUnavailable => "ATTRIBUTE_OWNERSHIP_UNAVAILABLE",
        RequestAttributeOwnershipRelease => "REQUEST_ATTRIBUTE_OWNERSHIP_RELEASE",
        ConfirmAttributeOwnershipAcquisitionCancellation => "CONFIRM_ATTRIBUTE_OWNERSHIP_ACQUISITION_CANCELLATION",
        InformAttributeOwnership => "INFORM_ATTRIBUTE_OWNERSHIP",
        AttributeIsNotOwned => "ATTRIBUTE_IS_NOT_OWNED",
        AttributeOwnedByRti => "ATTRIBUTE_OWNED_BY_RTI",
        TimeRegulationEnabled => "TIME_REGULATION_ENABLED",
        TimeConstrainedEnabled => "TIME_CONSTRAINED_ENABLED",
        TimeAdvanceGrant => "TIME_ADVANCE_GRANT",
        RequestRetraction => "REQUEST_RETRACTION",
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Request,
    Response,
}

/// One unit of traffic on the federate/coordinator link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub direction: Direction,
    pub exception: ExceptionKind,
    /// Human readable detail accompanying `exception`
    pub reason: String,
    pub payload: Payload,
}

impl Message {
    pub fn request(kind: MessageKind, payload: Payload) -> Self {
        Self {
            kind,
            direction: Direction::Request,
            exception: ExceptionKind::NoException,
            reason: String::new(),
            payload,
        }
    }

    pub fn response(kind: MessageKind, payload: Payload) -> Self {
        Self {
            direction: Direction::Response,
            ..Self::request(kind, payload)
        }
    }

    /// Response reporting that the service failed with `exception`
    pub fn exception(kind: MessageKind, exception: ExceptionKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            direction: Direction::Response,
            exception,
            reason: reason.into(),
            payload: Payload::Empty,
        }
    }

    pub fn is_response_to(&self, kind: MessageKind) -> bool {
        self.direction == Direction::Response && self.kind == kind
    }

    /// The exception carried by this message, if any
    pub fn exception_carried(&self) -> Option<Exception> {
        self.exception
            .is_exception()
            .then(|| Exception::new(self.exception, self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callbacks_are_partitioned_from_services() {
        assert!(MessageKind::ReflectAttributeValues.is_callback());
        assert!(MessageKind::TimeAdvanceGrant.is_callback());
        assert!(!MessageKind::TickRequest.is_callback());
        assert!(!MessageKind::UpdateAttributeValues.is_callback());
    }

    #[test]
    fn exception_response_drops_payload() {
        let msg = Message::exception(
            MessageKind::DdmDeleteRegion,
            ExceptionKind::RegionNotKnown,
            "no such region",
        );
        assert!(msg.is_response_to(MessageKind::DdmDeleteRegion));
        assert_eq!(msg.payload, Payload::Empty);
        let e = msg.exception_carried().unwrap();
        assert_eq!(e.kind, ExceptionKind::RegionNotKnown);
    }

    #[test]
    fn plain_response_carries_no_exception() {
        let msg = Message::response(MessageKind::CloseConnexion, Payload::Empty);
        assert!(msg.exception_carried().is_none());
        assert!(!msg.is_response_to(MessageKind::OpenConnexion));
    }

    #[test]
    fn kind_names_match_protocol_identifiers() {
        assert_eq!(MessageKind::TickRequestNext.to_string(), "TICK_REQUEST_NEXT");
        assert_eq!(MessageKind::OpenConnexion.name(), "OPEN_CONNEXION");
    }
}
