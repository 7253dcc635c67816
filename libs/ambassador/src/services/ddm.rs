use hla_core::{
    AttributeHandle, EventRetraction, Exception, FedTime, InteractionClassHandle, MessageKind,
    ObjectClassHandle, ObjectHandle, ParameterValue, Payload, RegionHandle, Result, SpaceHandle,
};
use tracing::debug;

use super::{owned_tag, required_tag};
use crate::region::Region;
use crate::RtiAmbassador;

impl RtiAmbassador {
    /// Create a region of `extent_count` unbounded extents in `space`
    pub async fn create_region(&mut self, space: SpaceHandle, extent_count: u32) -> Result<Region> {
        let response = self
            .conn
            .call_for::<Payload>(
                MessageKind::DdmCreateRegion,
                Payload::CreateRegion { space, extent_count },
            )
            .await?;

        match response {
            Payload::Region { region, extents } if extents.len() == extent_count as usize => {
                debug!(%region, %space, extent_count, "region created");
                Ok(Region::new(region, space, extents))
            }
            Payload::Region { extents, .. } => Err(Exception::internal(format!(
                "DDM_CREATE_REGION returned {} extents, {} requested",
                extents.len(),
                extent_count
            ))),
            other => Err(Exception::internal(format!(
                "DDM_CREATE_REGION answered with a {} payload",
                other.shape()
            ))),
        }
    }

    /// Send the region's current bounds; they become its committed bounds
    pub async fn notify_about_region_modification(&mut self, region: &mut Region) -> Result<()> {
        self.execute::<()>(
            MessageKind::DdmModifyRegion,
            Payload::Region {
                region: region.handle(),
                extents: region.extents().to_vec(),
            },
        )
        .await?;
        region.commit();
        Ok(())
    }

    /// Delete a region; it is consumed whatever the outcome
    pub async fn delete_region(&mut self, region: Region) -> Result<()> {
        self.execute(
            MessageKind::DdmDeleteRegion,
            Payload::RegionHandle(region.handle()),
        )
        .await
    }

    /// Register an object whose attributes update through the given regions
    pub async fn register_object_instance_with_region(
        &mut self,
        class: ObjectClassHandle,
        name: Option<&str>,
        associations: &[(AttributeHandle, &Region)],
    ) -> Result<ObjectHandle> {
        self.execute(
            MessageKind::DdmRegisterObject,
            Payload::RegisterObject {
                class,
                name: name.map(str::to_owned),
                tag: None,
                regions: associations
                    .iter()
                    .map(|(attribute, region)| (*attribute, region.handle()))
                    .collect(),
            },
        )
        .await
    }

    pub async fn associate_region_for_updates(
        &mut self,
        region: &Region,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::DdmAssociateRegion,
            Payload::RegionAssociation {
                object,
                region: region.handle(),
                attributes: attributes.to_vec(),
            },
        )
        .await
    }

    pub async fn unassociate_region_for_updates(&mut self, region: &Region, object: ObjectHandle) -> Result<()> {
        self.execute(
            MessageKind::DdmUnassociateRegion,
            Payload::RegionAssociation {
                object,
                region: region.handle(),
                attributes: Vec::new(),
            },
        )
        .await
    }

    pub async fn subscribe_object_class_attributes_with_region(
        &mut self,
        class: ObjectClassHandle,
        region: &Region,
        attributes: &[AttributeHandle],
        active: bool,
    ) -> Result<()> {
        self.execute(
            MessageKind::DdmSubscribeAttributes,
            Payload::ClassAttributes {
                class,
                attributes: attributes.to_vec(),
                active,
                region: Some(region.handle()),
            },
        )
        .await
    }

    pub async fn unsubscribe_object_class_with_region(
        &mut self,
        class: ObjectClassHandle,
        region: &Region,
    ) -> Result<()> {
        self.execute(
            MessageKind::DdmUnsubscribeAttributes,
            Payload::ClassAttributes {
                class,
                attributes: Vec::new(),
                active: true,
                region: Some(region.handle()),
            },
        )
        .await
    }

    pub async fn subscribe_interaction_class_with_region(
        &mut self,
        class: InteractionClassHandle,
        region: &Region,
        active: bool,
    ) -> Result<()> {
        self.execute(
            MessageKind::DdmSubscribeInteraction,
            Payload::InteractionClass {
                class,
                active,
                region: Some(region.handle()),
            },
        )
        .await
    }

    pub async fn unsubscribe_interaction_class_with_region(
        &mut self,
        class: InteractionClassHandle,
        region: &Region,
    ) -> Result<()> {
        self.execute(
            MessageKind::DdmUnsubscribeInteraction,
            Payload::InteractionClass {
                class,
                active: true,
                region: Some(region.handle()),
            },
        )
        .await
    }

    pub async fn send_interaction_with_region(
        &mut self,
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        tag: Option<&str>,
        region: &Region,
    ) -> Result<()> {
        let tag = required_tag("sendInteractionWithRegion", tag)?;
        self.execute(
            MessageKind::SendInteraction,
            region_interaction(class, parameters, None, tag, region),
        )
        .await
    }

    pub async fn send_interaction_with_region_at(
        &mut self,
        class: InteractionClassHandle,
        parameters: Vec<ParameterValue>,
        time: FedTime,
        tag: Option<&str>,
        region: &Region,
    ) -> Result<EventRetraction> {
        let tag = required_tag("sendInteractionWithRegion", tag)?;
        self.execute(
            MessageKind::SendInteraction,
            region_interaction(class, parameters, Some(time), tag, region),
        )
        .await
    }

    /// Not supported; always fails without contacting the coordinator
    pub async fn request_class_attribute_value_update_with_region(
        &mut self,
        _class: ObjectClassHandle,
        _attributes: &[AttributeHandle],
        _region: &Region,
    ) -> Result<()> {
        Err(Exception::unimplemented("requestClassAttributeValueUpdateWithRegion"))
    }

    pub fn get_region_token(&self, region: &Region) -> RegionHandle {
        region.handle()
    }

    /// Not supported; always fails without contacting the coordinator
    pub fn get_region(&self, _token: RegionHandle) -> Result<Region> {
        Err(Exception::unimplemented("getRegion"))
    }
}

fn region_interaction(
    class: InteractionClassHandle,
    parameters: Vec<ParameterValue>,
    time: Option<FedTime>,
    tag: &str,
    region: &Region,
) -> Payload {
    Payload::Interaction {
        class,
        parameters,
        time,
        tag: owned_tag(Some(tag)),
        region: Some(region.handle()),
        retraction: None,
    }
}
