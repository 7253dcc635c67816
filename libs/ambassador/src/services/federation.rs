use hla_core::{Exception, FedTime, FederateHandle, MessageKind, Payload, ResignAction, Result};
use tracing::info;

use super::required_tag;
use crate::RtiAmbassador;

impl RtiAmbassador {
    pub async fn create_federation_execution(&mut self, federation: &str, fed_file: &str) -> Result<()> {
        self.execute(
            MessageKind::CreateFederationExecution,
            Payload::CreateFederation {
                federation: federation.to_owned(),
                fom_modules: vec![fed_file.to_owned()],
            },
        )
        .await
    }

    pub async fn destroy_federation_execution(&mut self, federation: &str) -> Result<()> {
        self.execute(
            MessageKind::DestroyFederationExecution,
            Payload::Federation {
                federation: federation.to_owned(),
            },
        )
        .await
    }

    /// Join `federation` as `federate_name`
    ///
    /// Both names must be non-empty. Log records carry the federate name
    /// from here on.
    pub async fn join_federation_execution(
        &mut self,
        federate_name: &str,
        federation: &str,
    ) -> Result<FederateHandle> {
        if federate_name.is_empty() {
            return Err(Exception::internal("Incorrect or empty federate name"));
        }
        if federation.is_empty() {
            return Err(Exception::internal("Incorrect or empty federation name"));
        }

        let handle: FederateHandle = self
            .execute(
                MessageKind::JoinFederationExecution,
                Payload::Join {
                    federate_name: federate_name.to_owned(),
                    federation: federation.to_owned(),
                },
            )
            .await?;

        self.conn.set_federate_name(federate_name);
        info!(federate = federate_name, %handle, federation, "joined federation");
        Ok(handle)
    }

    pub async fn resign_federation_execution(&mut self, action: ResignAction) -> Result<()> {
        self.execute(MessageKind::ResignFederationExecution, Payload::Resign(action))
            .await
    }

    /// Register a synchronization point involving the whole federation
    pub async fn register_federation_synchronization_point(
        &mut self,
        label: &str,
        tag: Option<&str>,
    ) -> Result<()> {
        let tag = required_tag("registerFederationSynchronizationPoint", tag)?;
        self.register_synchronization_point(label, tag, None).await
    }

    /// Register a synchronization point involving only `federates`
    pub async fn register_federation_synchronization_point_with(
        &mut self,
        label: &str,
        tag: Option<&str>,
        federates: &[FederateHandle],
    ) -> Result<()> {
        let tag = required_tag("registerFederationSynchronizationPoint", tag)?;
        self.register_synchronization_point(label, tag, Some(federates.to_vec()))
            .await
    }

    async fn register_synchronization_point(
        &mut self,
        label: &str,
        tag: &str,
        federates: Option<Vec<FederateHandle>>,
    ) -> Result<()> {
        self.execute(
            MessageKind::RegisterFederationSynchronizationPoint,
            Payload::SynchronizationPoint {
                label: label.to_owned(),
                tag: tag.to_owned(),
                federates,
            },
        )
        .await
    }

    pub async fn synchronization_point_achieved(&mut self, label: &str) -> Result<()> {
        self.execute(
            MessageKind::SynchronizationPointAchieved,
            Payload::Label {
                label: label.to_owned(),
                tag: None,
            },
        )
        .await
    }

    /// Ask for a federation save, now or at `time`
    pub async fn request_federation_save(&mut self, label: &str, time: Option<FedTime>) -> Result<()> {
        self.execute(
            MessageKind::RequestFederationSave,
            Payload::Save {
                label: label.to_owned(),
                time,
            },
        )
        .await
    }

    pub async fn federate_save_begun(&mut self) -> Result<()> {
        self.execute(MessageKind::FederateSaveBegun, Payload::Empty).await
    }

    pub async fn federate_save_complete(&mut self) -> Result<()> {
        self.execute(MessageKind::FederateSaveComplete, Payload::Empty).await
    }

    pub async fn federate_save_not_complete(&mut self) -> Result<()> {
        self.execute(MessageKind::FederateSaveNotComplete, Payload::Empty)
            .await
    }

    pub async fn request_federation_restore(&mut self, label: &str) -> Result<()> {
        self.execute(
            MessageKind::RequestFederationRestore,
            Payload::Label {
                label: label.to_owned(),
                tag: None,
            },
        )
        .await
    }

    pub async fn federate_restore_complete(&mut self) -> Result<()> {
        self.execute(MessageKind::FederateRestoreComplete, Payload::Empty)
            .await
    }

    pub async fn federate_restore_not_complete(&mut self) -> Result<()> {
        self.execute(MessageKind::FederateRestoreNotComplete, Payload::Empty)
            .await
    }
}
