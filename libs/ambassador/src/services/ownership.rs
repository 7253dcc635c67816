use hla_core::{AttributeHandle, MessageKind, ObjectHandle, Payload, Result};

use super::required_tag;
use crate::RtiAmbassador;

fn object_attributes(object: ObjectHandle, attributes: &[AttributeHandle], tag: Option<&str>) -> Payload {
    Payload::ObjectAttributes {
        object,
        attributes: attributes.to_vec(),
        tag: tag.map(str::to_owned),
    }
}

impl RtiAmbassador {
    pub async fn unconditional_attribute_ownership_divestiture(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::UnconditionalAttributeOwnershipDivestiture,
            object_attributes(object, attributes, None),
        )
        .await
    }

    pub async fn negotiated_attribute_ownership_divestiture(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
        tag: Option<&str>,
    ) -> Result<()> {
        let tag = required_tag("negotiatedAttributeOwnershipDivestiture", tag)?;
        self.execute(
            MessageKind::NegotiatedAttributeOwnershipDivestiture,
            object_attributes(object, attributes, Some(tag)),
        )
        .await
    }

    pub async fn attribute_ownership_acquisition(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
        tag: Option<&str>,
    ) -> Result<()> {
        let tag = required_tag("attributeOwnershipAcquisition", tag)?;
        self.execute(
            MessageKind::AttributeOwnershipAcquisition,
            object_attributes(object, attributes, Some(tag)),
        )
        .await
    }

    /// Release the requested attributes the federate agrees to give up;
    /// returns those actually released
    pub async fn attribute_ownership_release_response(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<Vec<AttributeHandle>> {
        self.execute(
            MessageKind::AttributeOwnershipReleaseResponse,
            object_attributes(object, attributes, None),
        )
        .await
    }

    pub async fn cancel_negotiated_attribute_ownership_divestiture(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::CancelNegotiatedAttributeOwnershipDivestiture,
            object_attributes(object, attributes, None),
        )
        .await
    }

    pub async fn cancel_attribute_ownership_acquisition(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::CancelAttributeOwnershipAcquisition,
            object_attributes(object, attributes, None),
        )
        .await
    }

    pub async fn attribute_ownership_acquisition_if_available(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
    ) -> Result<()> {
        self.execute(
            MessageKind::AttributeOwnershipAcquisitionIfAvailable,
            object_attributes(object, attributes, None),
        )
        .await
    }

    /// The answer arrives later as an ownership callback
    pub async fn query_attribute_ownership(
        &mut self,
        object: ObjectHandle,
        attribute: AttributeHandle,
    ) -> Result<()> {
        self.execute(
            MessageKind::QueryAttributeOwnership,
            Payload::ObjectAttribute {
                object,
                attribute,
                owner: None,
            },
        )
        .await
    }

    pub async fn is_attribute_owned_by_federate(
        &mut self,
        object: ObjectHandle,
        attribute: AttributeHandle,
    ) -> Result<bool> {
        self.execute(
            MessageKind::IsAttributeOwnedByFederate,
            Payload::ObjectAttribute {
                object,
                attribute,
                owner: None,
            },
        )
        .await
    }
}
