use hla_core::{
    AttributeHandle, EventRetraction, Exception, FedTime, InteractionClassHandle, MessageKind,
    ObjectHandle, OrderingHandle, Payload, Result,
};

use crate::RtiAmbassador;

impl RtiAmbassador {
    pub async fn enable_time_regulation(&mut self, time: FedTime, lookahead: FedTime) -> Result<()> {
        self.execute(
            MessageKind::EnableTimeRegulation,
            Payload::TimeRegulation { time, lookahead },
        )
        .await
    }

    pub async fn disable_time_regulation(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableTimeRegulation, Payload::Empty)
            .await
    }

    pub async fn enable_time_constrained(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableTimeConstrained, Payload::Empty)
            .await
    }

    pub async fn disable_time_constrained(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableTimeConstrained, Payload::Empty)
            .await
    }

    pub async fn time_advance_request(&mut self, time: FedTime) -> Result<()> {
        self.execute(MessageKind::TimeAdvanceRequest, Payload::Time(time))
            .await
    }

    pub async fn time_advance_request_available(&mut self, time: FedTime) -> Result<()> {
        self.execute(MessageKind::TimeAdvanceRequestAvailable, Payload::Time(time))
            .await
    }

    pub async fn next_event_request(&mut self, time: FedTime) -> Result<()> {
        self.execute(MessageKind::NextEventRequest, Payload::Time(time))
            .await
    }

    pub async fn next_event_request_available(&mut self, time: FedTime) -> Result<()> {
        self.execute(MessageKind::NextEventRequestAvailable, Payload::Time(time))
            .await
    }

    /// Not supported; always fails without contacting the coordinator
    pub async fn flush_queue_request(&mut self, _time: FedTime) -> Result<()> {
        Err(Exception::unimplemented("flushQueueRequest"))
    }

    pub async fn enable_asynchronous_delivery(&mut self) -> Result<()> {
        self.execute(MessageKind::EnableAsynchronousDelivery, Payload::Empty)
            .await
    }

    pub async fn disable_asynchronous_delivery(&mut self) -> Result<()> {
        self.execute(MessageKind::DisableAsynchronousDelivery, Payload::Empty)
            .await
    }

    pub async fn query_lbts(&mut self) -> Result<FedTime> {
        self.execute(MessageKind::QueryLbts, Payload::Empty).await
    }

    pub async fn query_federate_time(&mut self) -> Result<FedTime> {
        self.execute(MessageKind::QueryFederateTime, Payload::Empty).await
    }

    pub async fn query_min_next_event_time(&mut self) -> Result<FedTime> {
        self.execute(MessageKind::QueryMinNextEventTime, Payload::Empty)
            .await
    }

    pub async fn modify_lookahead(&mut self, lookahead: FedTime) -> Result<()> {
        self.execute(MessageKind::ModifyLookahead, Payload::Lookahead(lookahead))
            .await
    }

    pub async fn query_lookahead(&mut self) -> Result<FedTime> {
        self.execute(MessageKind::QueryLookahead, Payload::Empty).await
    }

    /// Not supported; always fails without contacting the coordinator
    pub async fn retract(&mut self, _retraction: EventRetraction) -> Result<()> {
        Err(Exception::unimplemented("retract"))
    }

    pub async fn change_attribute_order_type(
        &mut self,
        object: ObjectHandle,
        attributes: &[AttributeHandle],
        ordering: OrderingHandle,
    ) -> Result<()> {
        self.execute(
            MessageKind::ChangeAttributeOrderType,
            Payload::AttributesType {
                object,
                attributes: attributes.to_vec(),
                type_handle: ordering.into(),
            },
        )
        .await
    }

    pub async fn change_interaction_order_type(
        &mut self,
        class: InteractionClassHandle,
        ordering: OrderingHandle,
    ) -> Result<()> {
        self.execute(
            MessageKind::ChangeInteractionOrderType,
            Payload::InteractionType {
                class,
                type_handle: ordering.into(),
            },
        )
        .await
    }
}
