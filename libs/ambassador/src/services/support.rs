use hla_core::{
    AttributeHandle, DimensionHandle, InteractionClassHandle, MessageKind, ObjectClassHandle,
    ObjectHandle, OrderingHandle, ParameterHandle, Payload, Result, SpaceHandle,
    TransportationHandle,
};

use crate::RtiAmbassador;

impl RtiAmbassador {
    /// Resolve a name to a raw handle, optionally within a parent scope
    async fn handle_of(&mut self, kind: MessageKind, name: &str, scope: Option<u32>) -> Result<u32> {
        self.execute(
            kind,
            Payload::NameLookup {
                name: name.to_owned(),
                scope,
            },
        )
        .await
    }

    async fn name_of(&mut self, kind: MessageKind, handle: u32, scope: Option<u32>) -> Result<String> {
        self.execute(kind, Payload::HandleLookup { handle, scope })
            .await
    }

    pub async fn get_object_class_handle(&mut self, name: &str) -> Result<ObjectClassHandle> {
        self.handle_of(MessageKind::GetObjectClassHandle, name, None)
            .await
            .map(ObjectClassHandle)
    }

    pub async fn get_object_class_name(&mut self, class: ObjectClassHandle) -> Result<String> {
        self.name_of(MessageKind::GetObjectClassName, class.into(), None)
            .await
    }

    pub async fn get_attribute_handle(&mut self, name: &str, class: ObjectClassHandle) -> Result<AttributeHandle> {
        self.handle_of(MessageKind::GetAttributeHandle, name, Some(class.into()))
            .await
            .map(AttributeHandle)
    }

    pub async fn get_attribute_name(
        &mut self,
        attribute: AttributeHandle,
        class: ObjectClassHandle,
    ) -> Result<String> {
        self.name_of(MessageKind::GetAttributeName, attribute.into(), Some(class.into()))
            .await
    }

    pub async fn get_interaction_class_handle(&mut self, name: &str) -> Result<InteractionClassHandle> {
        self.handle_of(MessageKind::GetInteractionClassHandle, name, None)
            .await
            .map(InteractionClassHandle)
    }

    pub async fn get_interaction_class_name(&mut self, class: InteractionClassHandle) -> Result<String> {
        self.name_of(MessageKind::GetInteractionClassName, class.into(), None)
            .await
    }

    pub async fn get_parameter_handle(
        &mut self,
        name: &str,
        class: InteractionClassHandle,
    ) -> Result<ParameterHandle> {
        self.handle_of(MessageKind::GetParameterHandle, name, Some(class.into()))
            .await
            .map(ParameterHandle)
    }

    pub async fn get_parameter_name(
        &mut self,
        parameter: ParameterHandle,
        class: InteractionClassHandle,
    ) -> Result<String> {
        self.name_of(MessageKind::GetParameterName, parameter.into(), Some(class.into()))
            .await
    }

    pub async fn get_object_instance_handle(&mut self, name: &str) -> Result<ObjectHandle> {
        self.handle_of(MessageKind::GetObjectInstanceHandle, name, None)
            .await
            .map(ObjectHandle)
    }

    pub async fn get_object_instance_name(&mut self, object: ObjectHandle) -> Result<String> {
        self.name_of(MessageKind::GetObjectInstanceName, object.into(), None)
            .await
    }

    pub async fn get_routing_space_handle(&mut self, name: &str) -> Result<SpaceHandle> {
        self.handle_of(MessageKind::GetSpaceHandle, name, None)
            .await
            .map(SpaceHandle)
    }

    pub async fn get_routing_space_name(&mut self, space: SpaceHandle) -> Result<String> {
        self.name_of(MessageKind::GetSpaceName, space.into(), None).await
    }

    pub async fn get_dimension_handle(&mut self, name: &str, space: SpaceHandle) -> Result<DimensionHandle> {
        self.handle_of(MessageKind::GetDimensionHandle, name, Some(space.into()))
            .await
            .map(DimensionHandle)
    }

    pub async fn get_dimension_name(&mut self, dimension: DimensionHandle, space: SpaceHandle) -> Result<String> {
        self.name_of(MessageKind::GetDimensionName, dimension.into(), Some(space.into()))
            .await
    }

    pub async fn get_attribute_routing_space_handle(
        &mut self,
        attribute: AttributeHandle,
        class: ObjectClassHandle,
    ) -> Result<SpaceHandle> {
        self.execute::<u32>(
            MessageKind::GetAttributeSpaceHandle,
            Payload::HandleLookup {
                handle: attribute.into(),
                scope: Some(class.into()),
            },
        )
        .await
        .map(SpaceHandle)
    }

    pub async fn get_object_class(&mut self, object: ObjectHandle) -> Result<ObjectClassHandle> {
        self.execute::<u32>(MessageKind::GetObjectClass, Payload::Object(object))
            .await
            .map(ObjectClassHandle)
    }

    pub async fn get_interaction_routing_space_handle(
        &mut self,
        class: InteractionClassHandle,
    ) -> Result<SpaceHandle> {
        self.execute::<u32>(
            MessageKind::GetInteractionSpaceHandle,
            Payload::HandleLookup {
                handle: class.into(),
                scope: None,
            },
        )
        .await
        .map(SpaceHandle)
    }

    pub async fn get_transportation_handle(&mut self, name: &str) -> Result<TransportationHandle> {
        self.handle_of(MessageKind::GetTransportationHandle, name, None)
            .await
            .map(TransportationHandle)
    }

    pub async fn get_transportation_name(&mut self, transportation: TransportationHandle) -> Result<String> {
        self.name_of(MessageKind::GetTransportationName, transportation.into(), None)
            .await
    }

    pub async fn get_ordering_handle(&mut self, name: &str) -> Result<OrderingHandle> {
        self.handle_of(MessageKind::GetOrderingHandle, name, None)
            .await
            .map(OrderingHandle)
    }

    pub async fn get_ordering_name(&mut self, ordering: OrderingHandle) -> Result<String> {
        self.name_of(MessageKind::GetOrderingName, ordering.into(), None)
            .await
    }

    pub async fn enable_class_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableClassRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn disable_class_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableClassRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn enable_attribute_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableAttributeRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn disable_attribute_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableAttributeRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn enable_attribute_scope_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableAttributeScopeAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn disable_attribute_scope_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableAttributeScopeAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn enable_interaction_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableInteractionRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }

    pub async fn disable_interaction_relevance_advisory_switch(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableInteractionRelevanceAdvisorySwitch, Payload::Empty)
            .await
    }
}
