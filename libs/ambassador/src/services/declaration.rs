use hla_core::{AttributeHandle, InteractionClassHandle, MessageKind, ObjectClassHandle, Payload, Result};

use crate::RtiAmbassador;

impl RtiAmbassador {
    pub async fn publish_object_class(
        &mut self,
        class: ObjectClassHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::PublishObjectClass,
            Payload::ClassAttributes {
                class,
                attributes: attributes.to_vec(),
                active: true,
                region: None,
            },
        )
        .await
    }

    pub async fn unpublish_object_class(&mut self, class: ObjectClassHandle) -> Result<()> {
        self.execute(MessageKind::UnpublishObjectClass, Payload::ObjectClass(class))
            .await
    }

    pub async fn publish_interaction_class(&mut self, class: InteractionClassHandle) -> Result<()> {
        self.execute(MessageKind::PublishInteractionClass, interaction(class, true))
            .await
    }

    pub async fn unpublish_interaction_class(&mut self, class: InteractionClassHandle) -> Result<()> {
        self.execute(MessageKind::UnpublishInteractionClass, interaction(class, true))
            .await
    }

    /// Subscribe to `attributes` of `class`; a passive subscription does not
    /// make the federate a relevant receiver for advisories
    pub async fn subscribe_object_class_attributes(
        &mut self,
        class: ObjectClassHandle,
        attributes: &[AttributeHandle],
        active: bool,
    ) -> Result<()> {
        self.execute(
            MessageKind::SubscribeObjectClassAttributes,
            Payload::ClassAttributes {
                class,
                attributes: attributes.to_vec(),
                active,
                region: None,
            },
        )
        .await
    }

    pub async fn unsubscribe_object_class(&mut self, class: ObjectClassHandle) -> Result<()> {
        self.execute(MessageKind::UnsubscribeObjectClass, Payload::ObjectClass(class))
            .await
    }

    pub async fn subscribe_interaction_class(
        &mut self,
        class: InteractionClassHandle,
        active: bool,
    ) -> Result<()> {
        self.execute(MessageKind::SubscribeInteractionClass, interaction(class, active))
            .await
    }

    pub async fn unsubscribe_interaction_class(&mut self, class: InteractionClassHandle) -> Result<()> {
        self.execute(MessageKind::UnsubscribeInteractionClass, interaction(class, true))
            .await
    }
}

fn interaction(class: InteractionClassHandle, active: bool) -> Payload {
    Payload::InteractionClass {
        class,
        active,
        region: None,
    }
}
