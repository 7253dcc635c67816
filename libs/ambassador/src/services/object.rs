use hla_core::{
    AttributeHandle, AttributeValue, EventRetraction, Exception, FedTime, InteractionClassHandle,
    MessageKind, ObjectClassHandle, ObjectHandle, ParameterValue, Payload, Result,
    TransportationHandle,
};

use super::{owned_tag, required_tag};
use crate::RtiAmbassador;

impl RtiAmbassador {
    /// Register a new instance of `class`, optionally under a chosen name
    pub async fn register_object_instance(
        &mut self,
        class: ObjectClassHandle,
        name: Option<&str>,
    ) -> Result<ObjectHandle> {
        self.execute(
            MessageKind::RegisterObjectInstance,
            Payload::RegisterObject {
                class,
                name: name.map(str::to_owned),
                tag: None,
                regions: Vec::new(),
            },
        )
        .await
    }

    /// Receive-order update; an absent tag is sent as absent
    pub async fn update_attribute_values(
        &mut self,
        object: ObjectHandle,
        values: Vec<AttributeValue>,
        tag: Option<&str>,
    ) -> Result<()> {
        self.execute(
            MessageKind::UpdateAttributeValues,
            Payload::AttributeValues {
                object,
                values,
                time: None,
                tag: owned_tag(tag),
                retraction: None,
            },
        )
        .await
    }

    /// Timestamped update; the handle allows the event to be retracted
    pub async fn update_attribute_values_at(
        &mut self,
        object: ObjectHandle,
        values: Vec<AttributeValue>,
        time: FedTime,
        tag: Option<&str>,
    ) -> Result<EventRetraction> {
        self.execute(
            MessageKind::UpdateAttributeValues,
            Payload::AttributeValues {
                object,
                values,
                time: Some(time),
                tag: owned_tag(tag),
                retraction: None,
            },
        )
        .await
    }

    pub async fn send_interaction(
        &mut self,
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        tag: Option<&str>,
    ) -> Result<()> {
        self.execute(
            MessageKind::SendInteraction,
            Payload::Interaction {
                class,
                parameters,
                time: None,
                tag: owned_tag(tag),
                region: None,
                retraction: None,
            },
        )
        .await
    }

    pub async fn send_interaction_at(
        &mut self,
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        time: FedTime,
        tag: Option<&str>,
    ) -> Result<EventRetraction> {
        self.execute(
            MessageKind::SendInteraction,
            Payload::Interaction {
                class,
                parameters,
                time: Some(time),
                tag: owned_tag(tag),
                region: None,
                retraction: None,
            },
        )
        .await
    }

    pub async fn delete_object_instance(&mut self, object: ObjectHandle, tag: Option<&str>) -> Result<()> {
        let tag = required_tag("deleteObjectInstance", tag)?;
        self.execute(
            MessageKind::DeleteObjectInstance,
            Payload::DeleteObject {
                object,
                time: None,
                tag: Some(tag.to_owned()),
                retraction: None,
            },
        )
        .await
    }

    pub async fn delete_object_instance_at(
        &mut self,
        object: ObjectHandle,
        time: FedTime,
        tag: Option<&str>,
    ) -> Result<EventRetraction> {
        let tag = required_tag("deleteObjectInstance", tag)?;
        self.execute(
            MessageKind::DeleteObjectInstance,
            Payload::DeleteObject {
                object,
                time: Some(time),
                tag: Some(tag.to_owned()),
                retraction: None,
            },
        )
        .await
    }

    /// Not supported; always fails without contacting the coordinator
    pub async fn local_delete_object_instance(&mut self, _object: ObjectHandle) -> Result<()> {
        Err(Exception::unimplemented("localDeleteObjectInstance"))
    }

    pub async fn change_attribute_transportation_type(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
        transportation: TransportationHandle,
    ) -> Result<()> {
        self.execute(
            MessageKind::ChangeAttributeTransportationType,
            Payload::AttributesType {
                object,
                attributes: attributes.to_vec(),
                type_handle: transportation.into(),
            },
        )
        .await
    }

    pub async fn change_interaction_transportation_type(
        &mut self,
        class: InteractionClassHandle,
        transportation: TransportationHandle,
    ) -> Result<()> {
        self.execute(
            MessageKind::ChangeInteractionTransportationType,
            Payload::InteractionType {
                class,
                type_handle: transportation.into(),
            },
        )
        .await
    }

    pub async fn request_object_attribute_value_update(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::RequestObjectAttributeValueUpdate,
            Payload::ObjectAttributes {
                object,
                attributes: attributes.to_vec(),
                tag: None,
            },
        )
        .await
    }

    pub async fn request_class_attribute_value_update(
        &mut self,
        class: ObjectClassHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::RequestClassAttributeValueUpdate,
            Payload::ClassAttributes {
                class,
                attributes: attributes.to_vec(),
                active: true,
                region: None,
            },
        )
        .await
    }
}
