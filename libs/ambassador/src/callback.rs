//! Typed federate callbacks
//!
//! [`Callback::from_message`] turns an inbound callback message into a
//! typed value; [`FederateCallbacks`] feeds those values to a
//! [`FederateAmbassador`] from inside the callback pump.

use hla_core::{
    AttributeHandle, AttributeValue, EventRetraction, Exception, FedTime, FederateHandle,
    InteractionClassHandle, Message, MessageKind, ObjectClassHandle, ObjectHandle,
    ParameterValue, Payload, Result,
};

use crate::tick::CallbackHandler;

#[derive(Debug, Clone, PartialEq)]
pub enum Callback {
    // Federation management
    SynchronizationPointRegistrationSucceeded { label: String },
    SynchronizationPointRegistrationFailed { label: String },
    AnnounceSynchronizationPoint { label: String, tag: String },
    FederationSynchronized { label: String },
    InitiateFederateSave { label: String },
    FederationSaved,
    FederationNotSaved,
    RequestFederationRestoreSucceeded { label: String },
    RequestFederationRestoreFailed { label: String, reason: String },
    FederationRestoreBegun,
    InitiateFederateRestore { label: String, federate: FederateHandle },
    FederationRestored,
    FederationNotRestored,

    // Declaration management
    StartRegistrationForObjectClass(ObjectClassHandle),
    StopRegistrationForObjectClass(ObjectClassHandle),
    TurnInteractionsOn(InteractionClassHandle),
    TurnInteractionsOff(InteractionClassHandle),

    // Object management
    DiscoverObjectInstance {
        object: ObjectHandle,
        class: ObjectClassHandle,
        name: String,
    },
    ReflectAttributeValues {
        object: ObjectHandle,
        values: Vec<AttributeValue>,
        time: Option<FedTime>,
        tag: Option<String>,
        retraction: Option<EventRetraction>,
    },
    ReceiveInteraction {
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        time: Option<FedTime>,
        tag: Option<String>,
        retraction: Option<EventRetraction>,
    },
    RemoveObjectInstance {
        object: ObjectHandle,
        time: Option<FedTime>,
        tag: Option<String>,
        retraction: Option<EventRetraction>,
    },
    AttributesInScope { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    AttributesOutOfScope { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    ProvideAttributeValueUpdate { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    TurnUpdatesOnForObjectInstance { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    TurnUpdatesOffForObjectInstance { object: ObjectHandle, attributes: Vec<AttributeHandle> },

    // Ownership management
    RequestAttributeOwnershipAssumption {
        object: ObjectHandle,
        attributes: Vec<AttributeHandle>,
        tag: Option<String>,
    },
    AttributeOwnershipDivestitureNotification { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    AttributeOwnershipAcquisitionNotification { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    AttributeOwnershipUnavailable { object: ObjectHandle, attributes: Vec<AttributeHandle> },
    RequestAttributeOwnershipRelease {
        object: ObjectHandle,
        attributes: Vec<AttributeHandle>,
        tag: Option<String>,
    },
    ConfirmAttributeOwnershipAcquisitionCancellation {
        object: ObjectHandle,
        attributes: Vec<AttributeHandle>,
    },
    InformAttributeOwnership {
        object: ObjectHandle,
        attribute: AttributeHandle,
        owner: FederateHandle,
    },
    AttributeIsNotOwned { object: ObjectHandle, attribute: AttributeHandle },
    AttributeOwnedByRti { object: ObjectHandle, attribute: AttributeHandle },

    // Time management
    TimeRegulationEnabled(FedTime),
    TimeConstrainedEnabled(FedTime),
    TimeAdvanceGrant(FedTime),
    RequestRetraction(EventRetraction),
}

impl Callback {
    /// Decode an inbound message; anything that is not a well-formed
    /// callback is an internal error
    pub fn from_message(message: Message) -> Result<Self> {
        use MessageKind as K;

        let kind = message.kind;
        let callback = match (kind, message.payload) {
            (K::SynchronizationPointRegistrationSucceeded, Payload::Label { label, .. }) => {
                Callback::SynchronizationPointRegistrationSucceeded { label }
            }
            (K::SynchronizationPointRegistrationFailed, Payload::Label { label, .. }) => {
                Callback::SynchronizationPointRegistrationFailed { label }
            }
            (K::AnnounceSynchronizationPoint, Payload::Label { label, tag }) => {
                Callback::AnnounceSynchronizationPoint {
                    label,
                    tag: tag.unwrap_or_default(),
                }
            }
            (K::FederationSynchronized, Payload::Label { label, .. }) => {
                Callback::FederationSynchronized { label }
            }
            (K::InitiateFederateSave, Payload::Label { label, .. }) => {
                Callback::InitiateFederateSave { label }
            }
            (K::FederationSaved, _) => Callback::FederationSaved,
            (K::FederationNotSaved, _) => Callback::FederationNotSaved,
            (K::RequestFederationRestoreSucceeded, Payload::Label { label, .. }) => {
                Callback::RequestFederationRestoreSucceeded { label }
            }
            (K::RequestFederationRestoreFailed, Payload::Label { label, tag }) => {
                Callback::RequestFederationRestoreFailed {
                    label,
                    reason: tag.unwrap_or_default(),
                }
            }
            (K::FederationRestoreBegun, _) => Callback::FederationRestoreBegun,
            (K::InitiateFederateRestore, Payload::Restore { label, federate }) => {
                Callback::InitiateFederateRestore { label, federate }
            }
            (K::FederationRestored, _) => Callback::FederationRestored,
            (K::FederationNotRestored, _) => Callback::FederationNotRestored,

            (K::StartRegistrationForObjectClass, Payload::ObjectClass(class)) => {
                Callback::StartRegistrationForObjectClass(class)
            }
            (K::StopRegistrationForObjectClass, Payload::ObjectClass(class)) => {
                Callback::StopRegistrationForObjectClass(class)
            }
            (K::TurnInteractionsOn, Payload::InteractionClass { class, .. }) => {
                Callback::TurnInteractionsOn(class)
            }
            (K::TurnInteractionsOff, Payload::InteractionClass { class, .. }) => {
                Callback::TurnInteractionsOff(class)
            }

            (K::DiscoverObjectInstance, Payload::Discover { object, class, name }) => {
                Callback::DiscoverObjectInstance { object, class, name }
            }
            (
                K::ReflectAttributeValues,
                Payload::AttributeValues {
                    object,
                    values,
                    time,
                    tag,
                    retraction,
                },
            ) => Callback::ReflectAttributeValues {
                object,
                values,
                time,
                tag,
                retraction,
            },
            (
                K::ReceiveInteraction,
                Payload::Interaction {
                    class,
                    parameters,
                    time,
                    tag,
                    retraction,
                    ..
                },
            ) => Callback::ReceiveInteraction {
                class,
                parameters,
                time,
                tag,
                retraction,
            },
            (
                K::RemoveObjectInstance,
                Payload::DeleteObject {
                    object,
                    time,
                    tag,
                    retraction,
                },
            ) => Callback::RemoveObjectInstance {
                object,
                time,
                tag,
                retraction,
            },
            (K::AttributesInScope, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::AttributesInScope { object, attributes }
            }
            (K::AttributesOutOfScope, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::AttributesOutOfScope { object, attributes }
            }
            (K::ProvideAttributeValueUpdate, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::ProvideAttributeValueUpdate { object, attributes }
            }
            (K::TurnUpdatesOnForObjectInstance, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::TurnUpdatesOnForObjectInstance { object, attributes }
            }
            (K::TurnUpdatesOffForObjectInstance, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::TurnUpdatesOffForObjectInstance { object, attributes }
            }

            (
                K::RequestAttributeOwnershipAssumption,
                Payload::ObjectAttributes {
                    object,
                    attributes,
                    tag,
                },
            ) => Callback::RequestAttributeOwnershipAssumption {
                object,
                attributes,
                tag,
            },
            (
                K::AttributeOwnershipDivestitureNotification,
                Payload::ObjectAttributes { object, attributes, .. },
            ) => Callback::AttributeOwnershipDivestitureNotification { object, attributes },
            (
                K::AttributeOwnershipAcquisitionNotification,
                Payload::ObjectAttributes { object, attributes, .. },
            ) => Callback::AttributeOwnershipAcquisitionNotification { object, attributes },
            (K::AttributeOwnershipUnavailable, Payload::ObjectAttributes { object, attributes, .. }) => {
                Callback::AttributeOwnershipUnavailable { object, attributes }
            }
            (
                K::RequestAttributeOwnershipRelease,
                Payload::ObjectAttributes {
                    object,
                    attributes,
                    tag,
                },
            ) => Callback::RequestAttributeOwnershipRelease {
                object,
                attributes,
                tag,
            },
            (
                K::ConfirmAttributeOwnershipAcquisitionCancellation,
                Payload::ObjectAttributes { object, attributes, .. },
            ) => Callback::ConfirmAttributeOwnershipAcquisitionCancellation { object, attributes },
            (
                K::InformAttributeOwnership,
                Payload::ObjectAttribute {
                    object,
                    attribute,
                    owner: Some(owner),
                },
            ) => Callback::InformAttributeOwnership {
                object,
                attribute,
                owner,
            },
            (K::AttributeIsNotOwned, Payload::ObjectAttribute { object, attribute, .. }) => {
                Callback::AttributeIsNotOwned { object, attribute }
            }
            (K::AttributeOwnedByRti, Payload::ObjectAttribute { object, attribute, .. }) => {
                Callback::AttributeOwnedByRti { object, attribute }
            }

            (K::TimeRegulationEnabled, Payload::Time(time)) => Callback::TimeRegulationEnabled(time),
            (K::TimeConstrainedEnabled, Payload::Time(time)) => Callback::TimeConstrainedEnabled(time),
            (K::TimeAdvanceGrant, Payload::Time(time)) => Callback::TimeAdvanceGrant(time),
            (K::RequestRetraction, Payload::Retraction(retraction)) => {
                Callback::RequestRetraction(retraction)
            }

            (kind, payload) if kind.is_callback() => {
                return Err(Exception::internal(format!(
                    "callback {} carries a malformed {} payload",
                    kind,
                    payload.shape()
                )))
            }
            (kind, _) => {
                return Err(Exception::internal(format!(
                    "unexpected message {} during tick",
                    kind
                )))
            }
        };
        Ok(callback)
    }
}

/// The federate's view of the federation
///
/// One method per callback, each with a no-op default; override the ones
/// the simulation cares about.
pub trait FederateAmbassador: Send {
    // Federation management

    fn synchronization_point_registration_succeeded(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn synchronization_point_registration_failed(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn announce_synchronization_point(&mut self, _label: &str, _tag: &str) -> Result<()> {
        Ok(())
    }

    fn federation_synchronized(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn initiate_federate_save(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn federation_saved(&mut self) -> Result<()> {
        Ok(())
    }

    fn federation_not_saved(&mut self) -> Result<()> {
        Ok(())
    }

    fn request_federation_restore_succeeded(&mut self, _label: &str) -> Result<()> {
        Ok(())
    }

    fn request_federation_restore_failed(&mut self, _label: &str, _reason: &str) -> Result<()> {
        Ok(())
    }

    fn federation_restore_begun(&mut self) -> Result<()> {
        Ok(())
    }

    fn initiate_federate_restore(&mut self, _label: &str, _federate: FederateHandle) -> Result<()> {
        Ok(())
    }

    fn federation_restored(&mut self) -> Result<()> {
        Ok(())
    }

    fn federation_not_restored(&mut self) -> Result<()> {
        Ok(())
    }

    // Declaration management

    fn start_registration_for_object_class(&mut self, _class: ObjectClassHandle) -> Result<()> {
        Ok(())
    }

    fn stop_registration_for_object_class(&mut self, _class: ObjectClassHandle) -> Result<()> {
        Ok(())
    }

    fn turn_interactions_on(&mut self, _class: InteractionClassHandle) -> Result<()> {
        Ok(())
    }

    fn turn_interactions_off(&mut self, _class: InteractionClassHandle) -> Result<()> {
        Ok(())
    }

    // Object management

    fn discover_object_instance(
        &mut self,
        _object: ObjectHandle,
        _class: ObjectClassHandle,
        _name: &str,
    ) -> Result<()> {
        Ok(())
    }

    /// `retraction` is present only for timestamped updates
    fn reflect_attribute_values(
        &mut self,
        _object: ObjectHandle,
        _values: Vec<AttributeValue>,
        _time: Option<FedTime>,
        _tag: Option<String>,
        _retraction: Option<EventRetraction>,
    ) -> Result<()> {
        Ok(())
    }

    fn receive_interaction(
        &mut self,
        _class: InteractionClassHandle,
        _parameters: Vec<ParameterValue>,
        _time: Option<FedTime>,
        _tag: Option<String>,
        _retraction: Option<EventRetraction>,
    ) -> Result<()> {
        Ok(())
    }

    fn remove_object_instance(
        &mut self,
        _object: ObjectHandle,
        _time: Option<FedTime>,
        _tag: Option<String>,
        _retraction: Option<EventRetraction>,
    ) -> Result<()> {
        Ok(())
    }

    fn attributes_in_scope(&mut self, _object: ObjectHandle, _attributes: Vec<AttributeHandle>) -> Result<()> {
        Ok(())
    }

    fn attributes_out_of_scope(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn provide_attribute_value_update(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn turn_updates_on_for_object_instance(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn turn_updates_off_for_object_instance(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    // Ownership management

    fn request_attribute_ownership_assumption(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
        _tag: Option<String>,
    ) -> Result<()> {
        Ok(())
    }

    fn attribute_ownership_divestiture_notification(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn attribute_ownership_acquisition_notification(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn attribute_ownership_unavailable(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn request_attribute_ownership_release(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
        _tag: Option<String>,
    ) -> Result<()> {
        Ok(())
    }

    fn confirm_attribute_ownership_acquisition_cancellation(
        &mut self,
        _object: ObjectHandle,
        _attributes: Vec<AttributeHandle>,
    ) -> Result<()> {
        Ok(())
    }

    fn inform_attribute_ownership(
        &mut self,
        _object: ObjectHandle,
        _attribute: AttributeHandle,
        _owner: FederateHandle,
    ) -> Result<()> {
        Ok(())
    }

    fn attribute_is_not_owned(&mut self, _object: ObjectHandle, _attribute: AttributeHandle) -> Result<()> {
        Ok(())
    }

    fn attribute_owned_by_rti(&mut self, _object: ObjectHandle, _attribute: AttributeHandle) -> Result<()> {
        Ok(())
    }

    // Time management

    fn time_regulation_enabled(&mut self, _time: FedTime) -> Result<()> {
        Ok(())
    }

    fn time_constrained_enabled(&mut self, _time: FedTime) -> Result<()> {
        Ok(())
    }

    fn time_advance_grant(&mut self, _time: FedTime) -> Result<()> {
        Ok(())
    }

    fn request_retraction(&mut self, _retraction: EventRetraction) -> Result<()> {
        Ok(())
    }
}

/// Adapts a [`FederateAmbassador`] to the callback pump
pub struct FederateCallbacks<F>(pub F);

impl<F: FederateAmbassador> FederateCallbacks<F> {
    pub fn into_inner(self) -> F {
        self.0
    }

    fn dispatch(&mut self, callback: Callback) -> Result<()> {
        use Callback as C;

        let fed = &mut self.0;
        match callback {
            C::SynchronizationPointRegistrationSucceeded { label } => {
                fed.synchronization_point_registration_succeeded(&label)
            }
            C::SynchronizationPointRegistrationFailed { label } => {
                fed.synchronization_point_registration_failed(&label)
            }
            C::AnnounceSynchronizationPoint { label, tag } => {
                fed.announce_synchronization_point(&label, &tag)
            }
            C::FederationSynchronized { label } => fed.federation_synchronized(&label),
            C::InitiateFederateSave { label } => fed.initiate_federate_save(&label),
            C::FederationSaved => fed.federation_saved(),
            C::FederationNotSaved => fed.federation_not_saved(),
            C::RequestFederationRestoreSucceeded { label } => {
                fed.request_federation_restore_succeeded(&label)
            }
            C::RequestFederationRestoreFailed { label, reason } => {
                fed.request_federation_restore_failed(&label, &reason)
            }
            C::FederationRestoreBegun => fed.federation_restore_begun(),
            C::InitiateFederateRestore { label, federate } => {
                fed.initiate_federate_restore(&label, federate)
            }
            C::FederationRestored => fed.federation_restored(),
            C::FederationNotRestored => fed.federation_not_restored(),

            C::StartRegistrationForObjectClass(class) => {
                fed.start_registration_for_object_class(class)
            }
            C::StopRegistrationForObjectClass(class) => fed.stop_registration_for_object_class(class),
            C::TurnInteractionsOn(class) => fed.turn_interactions_on(class),
            C::TurnInteractionsOff(class) => fed.turn_interactions_off(class),

            C::DiscoverObjectInstance { object, class, name } => {
                fed.discover_object_instance(object, class, &name)
            }
            C::ReflectAttributeValues {
                object,
                values,
                time,
                tag,
                retraction,
            } => fed.reflect_attribute_values(object, values, time, tag, retraction),
            C::ReceiveInteraction {
                class,
                parameters,
                time,
                tag,
                retraction,
            } => fed.receive_interaction(class, parameters, time, tag, retraction),
            C::RemoveObjectInstance {
                object,
                time,
                tag,
                retraction,
            } => fed.remove_object_instance(object, time, tag, retraction),
            C::AttributesInScope { object, attributes } => fed.attributes_in_scope(object, attributes),
            C::AttributesOutOfScope { object, attributes } => {
                fed.attributes_out_of_scope(object, attributes)
            }
            C::ProvideAttributeValueUpdate { object, attributes } => {
                fed.provide_attribute_value_update(object, attributes)
            }
            C::TurnUpdatesOnForObjectInstance { object, attributes } => {
                fed.turn_updates_on_for_object_instance(object, attributes)
            }
            C::TurnUpdatesOffForObjectInstance { object, attributes } => {
                fed.turn_updates_off_for_object_instance(object, attributes)
            }

            C::RequestAttributeOwnershipAssumption {
                object,
                attributes,
                tag,
            } => fed.request_attribute_ownership_assumption(object, attributes, tag),
            C::AttributeOwnershipDivestitureNotification { object, attributes } => {
                fed.attribute_ownership_divestiture_notification(object, attributes)
            }
            C::AttributeOwnershipAcquisitionNotification { object, attributes } => {
                fed.attribute_ownership_acquisition_notification(object, attributes)
            }
            C::AttributeOwnershipUnavailable { object, attributes } => {
                fed.attribute_ownership_unavailable(object, attributes)
            }
            C::RequestAttributeOwnershipRelease {
                object,
                attributes,
                tag,
            } => fed.request_attribute_ownership_release(object, attributes, tag),
            C::ConfirmAttributeOwnershipAcquisitionCancellation { object, attributes } => {
                fed.confirm_attribute_ownership_acquisition_cancellation(object, attributes)
            }
            C::InformAttributeOwnership {
                object,
                attribute,
                owner,
            } => fed.inform_attribute_ownership(object, attribute, owner),
            C::AttributeIsNotOwned { object, attribute } => fed.attribute_is_not_owned(object, attribute),
            C::AttributeOwnedByRti { object, attribute } => fed.attribute_owned_by_rti(object, attribute),

            C::TimeRegulationEnabled(time) => fed.time_regulation_enabled(time),
            C::TimeConstrainedEnabled(time) => fed.time_constrained_enabled(time),
            C::TimeAdvanceGrant(time) => fed.time_advance_grant(time),
            C::RequestRetraction(retraction) => fed.request_retraction(retraction),
        }
    }
}

impl<F: FederateAmbassador> CallbackHandler for FederateCallbacks<F> {
    fn handle(&mut self, callback: Message) -> Result<()> {
        let callback = Callback::from_message(callback)?;
        self.dispatch(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hla_core::{ExceptionKind, Payload};

    #[test]
    fn decodes_time_advance_grant() {
        let msg = Message::request(MessageKind::TimeAdvanceGrant, Payload::Time(FedTime::new(4.0)));
        assert_eq!(
            Callback::from_message(msg).unwrap(),
            Callback::TimeAdvanceGrant(FedTime::new(4.0))
        );
    }

    #[test]
    fn announce_without_tag_gets_empty_tag() {
        let msg = Message::request(
            MessageKind::AnnounceSynchronizationPoint,
            Payload::Label {
                label: "ReadyToRun".into(),
                tag: None,
            },
        );
        assert_eq!(
            Callback::from_message(msg).unwrap(),
            Callback::AnnounceSynchronizationPoint {
                label: "ReadyToRun".into(),
                tag: String::new()
            }
        );
    }

    #[test]
    fn service_kind_is_not_a_callback() {
        let msg = Message::request(MessageKind::QueryLbts, Payload::Empty);
        let err = Callback::from_message(msg).unwrap_err();
        assert_eq!(err.kind, ExceptionKind::RtiInternalError);
        assert!(err.reason.contains("QUERY_LBTS"));
    }

    #[test]
    fn malformed_callback_payload_is_rejected() {
        let msg = Message::request(MessageKind::DiscoverObjectInstance, Payload::Empty);
        let err = Callback::from_message(msg).unwrap_err();
        assert!(err.reason.contains("malformed"));
    }

    #[derive(Default)]
    struct Recorder {
        grants: Vec<FedTime>,
        saved: usize,
        reflected: Vec<(ObjectHandle, Option<EventRetraction>)>,
        removed: Vec<(ObjectHandle, Option<FedTime>, Option<EventRetraction>)>,
        owners: Vec<(AttributeHandle, FederateHandle)>,
        releases: Vec<(Vec<AttributeHandle>, Option<String>)>,
        retractions: Vec<EventRetraction>,
        restore_failures: Vec<(String, String)>,
        interactions_on: Vec<InteractionClassHandle>,
    }

    impl FederateAmbassador for Recorder {
        fn time_advance_grant(&mut self, time: FedTime) -> Result<()> {
            self.grants.push(time);
            Ok(())
        }

        fn federation_saved(&mut self) -> Result<()> {
            self.saved += 1;
            Ok(())
        }

        fn reflect_attribute_values(
            &mut self,
            object: ObjectHandle,
            _values: Vec<AttributeValue>,
            _time: Option<FedTime>,
            _tag: Option<String>,
            retraction: Option<EventRetraction>,
        ) -> Result<()> {
            self.reflected.push((object, retraction));
            Ok(())
        }

        fn remove_object_instance(
            &mut self,
            object: ObjectHandle,
            time: Option<FedTime>,
            _tag: Option<String>,
            retraction: Option<EventRetraction>,
        ) -> Result<()> {
            self.removed.push((object, time, retraction));
            Ok(())
        }

        fn inform_attribute_ownership(
            &mut self,
            _object: ObjectHandle,
            attribute: AttributeHandle,
            owner: FederateHandle,
        ) -> Result<()> {
            self.owners.push((attribute, owner));
            Ok(())
        }

        fn request_attribute_ownership_release(
            &mut self,
            _object: ObjectHandle,
            attributes: Vec<AttributeHandle>,
            tag: Option<String>,
        ) -> Result<()> {
            self.releases.push((attributes, tag));
            Ok(())
        }

        fn request_retraction(&mut self, retraction: EventRetraction) -> Result<()> {
            self.retractions.push(retraction);
            Ok(())
        }

        fn request_federation_restore_failed(&mut self, label: &str, reason: &str) -> Result<()> {
            self.restore_failures.push((label.to_owned(), reason.to_owned()));
            Ok(())
        }

        fn turn_interactions_on(&mut self, class: InteractionClassHandle) -> Result<()> {
            self.interactions_on.push(class);
            Ok(())
        }
    }

    #[test]
    fn adapter_routes_to_ambassador_methods() {
        let mut callbacks = FederateCallbacks(Recorder::default());
        callbacks
            .handle(Message::request(
                MessageKind::TimeAdvanceGrant,
                Payload::Time(FedTime::new(1.5)),
            ))
            .unwrap();
        callbacks
            .handle(Message::request(MessageKind::FederationSaved, Payload::Empty))
            .unwrap();

        let recorder = callbacks.into_inner();
        assert_eq!(recorder.grants, vec![FedTime::new(1.5)]);
        assert_eq!(recorder.saved, 1);
    }

    #[test]
    fn every_family_reaches_its_own_method() {
        let retraction = EventRetraction {
            sending_federate: FederateHandle(4),
            serial_number: 31,
        };
        let object = ObjectHandle(12);
        let messages = vec![
            Message::request(
                MessageKind::ReflectAttributeValues,
                Payload::AttributeValues {
                    object,
                    values: Vec::new(),
                    time: Some(FedTime::new(6.0)),
                    tag: Some("fast".into()),
                    retraction: Some(retraction),
                },
            ),
            Message::request(
                MessageKind::RemoveObjectInstance,
                Payload::DeleteObject {
                    object,
                    time: Some(FedTime::new(7.0)),
                    tag: None,
                    retraction: Some(retraction),
                },
            ),
            Message::request(
                MessageKind::InformAttributeOwnership,
                Payload::ObjectAttribute {
                    object,
                    attribute: AttributeHandle(2),
                    owner: Some(FederateHandle(9)),
                },
            ),
            Message::request(
                MessageKind::RequestAttributeOwnershipRelease,
                Payload::ObjectAttributes {
                    object,
                    attributes: vec![AttributeHandle(2), AttributeHandle(3)],
                    tag: Some("mine".into()),
                },
            ),
            Message::request(MessageKind::RequestRetraction, Payload::Retraction(retraction)),
            Message::request(
                MessageKind::RequestFederationRestoreFailed,
                Payload::Label {
                    label: "snap".into(),
                    tag: Some("no such save".into()),
                },
            ),
            Message::request(
                MessageKind::TurnInteractionsOn,
                Payload::InteractionClass {
                    class: InteractionClassHandle(5),
                    active: true,
                    region: None,
                },
            ),
        ];

        let mut callbacks = FederateCallbacks(Recorder::default());
        for message in messages {
            callbacks.handle(message).unwrap();
        }

        let recorder = callbacks.into_inner();
        assert_eq!(recorder.reflected, vec![(object, Some(retraction))]);
        assert_eq!(
            recorder.removed,
            vec![(object, Some(FedTime::new(7.0)), Some(retraction))]
        );
        assert_eq!(recorder.owners, vec![(AttributeHandle(2), FederateHandle(9))]);
        assert_eq!(
            recorder.releases,
            vec![(vec![AttributeHandle(2), AttributeHandle(3)], Some("mine".to_string()))]
        );
        assert_eq!(recorder.retractions, vec![retraction]);
        assert_eq!(
            recorder.restore_failures,
            vec![("snap".to_string(), "no such save".to_string())]
        );
        assert_eq!(recorder.interactions_on, vec![InteractionClassHandle(5)]);
        assert!(recorder.grants.is_empty());
        assert_eq!(recorder.saved, 0);
    }
}
