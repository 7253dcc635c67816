mod common;

use common::{ok, opened, service_frames};
use hla_core::{
    AttributeHandle, DimensionHandle, EventRetraction, ExceptionKind, Extent, FedTime,
    FederateHandle, InteractionClassHandle, Message, MessageKind, ObjectClassHandle, ObjectHandle,
    ParameterHandle, Payload, RegionHandle, SpaceHandle,
};

fn region_reply(handle: u32, extents: usize) -> Message {
    Message::response(
        MessageKind::DdmCreateRegion,
        Payload::Region {
            region: RegionHandle(handle),
            extents: vec![Extent::default(); extents],
        },
    )
}

#[tokio::test]
async fn required_tags_are_checked_before_sending() {
    let (mut rti, wire) = opened(vec![region_reply(2, 1)]).await;
    let region = rti.create_region(SpaceHandle(1), 1).await.unwrap();
    let before = service_frames(&wire);

    let object = ObjectHandle(8);
    let attributes = [AttributeHandle(1)];
    let failures = vec![
        rti.register_federation_synchronization_point("ready", None)
            .await
            .unwrap_err(),
        rti.register_federation_synchronization_point_with("ready", None, &[FederateHandle(1)])
            .await
            .unwrap_err(),
        rti.delete_object_instance(object, None).await.unwrap_err(),
        rti.delete_object_instance_at(object, FedTime::new(1.0), None)
            .await
            .unwrap_err(),
        rti.negotiated_attribute_ownership_divestiture(object, &attributes, None)
            .await
            .unwrap_err(),
        rti.attribute_ownership_acquisition(object, &attributes, None)
            .await
            .unwrap_err(),
        rti.send_interaction_with_region(InteractionClassHandle(4), Vec::new(), None, &region)
            .await
            .unwrap_err(),
    ];

    for err in failures {
        assert_eq!(err.kind, ExceptionKind::RtiInternalError);
        assert!(err.reason.contains("Tag NULL"), "{}", err.reason);
    }
    assert_eq!(service_frames(&wire), before);
    assert!(rti.connection().is_open());
}

#[tokio::test]
async fn optional_tags_are_sent_as_absent() {
    let (mut rti, wire) = opened(vec![
        ok(MessageKind::UpdateAttributeValues),
        ok(MessageKind::SendInteraction),
    ])
    .await;

    rti.update_attribute_values(ObjectHandle(1), vec![(AttributeHandle(1), vec![1])], None)
        .await
        .unwrap();
    rti.send_interaction(InteractionClassHandle(2), vec![(ParameterHandle(1), vec![2])], None)
        .await
        .unwrap();

    let sent = wire.messages();
    assert!(matches!(sent[1].payload, Payload::AttributeValues { tag: None, .. }));
    assert!(matches!(sent[2].payload, Payload::Interaction { tag: None, .. }));
}

#[tokio::test]
async fn unimplemented_services_never_reach_the_wire() {
    let (mut rti, wire) = opened(vec![region_reply(5, 1)]).await;
    let region = rti.create_region(SpaceHandle(1), 1).await.unwrap();
    let before = service_frames(&wire);

    let failures = vec![
        rti.local_delete_object_instance(ObjectHandle(1)).await.unwrap_err(),
        rti.flush_queue_request(FedTime::new(3.0)).await.unwrap_err(),
        rti.retract(EventRetraction::default()).await.unwrap_err(),
        rti.request_class_attribute_value_update_with_region(
            ObjectClassHandle(1),
            &[AttributeHandle(1)],
            &region,
        )
        .await
        .unwrap_err(),
        rti.get_region(RegionHandle(5)).err().unwrap(),
    ];

    let reasons: Vec<String> = failures
        .iter()
        .inspect(|e| assert_eq!(e.kind, ExceptionKind::RtiInternalError))
        .map(|e| e.reason.clone())
        .collect();
    assert_eq!(
        reasons,
        vec![
            "unimplemented service localDeleteObjectInstance",
            "unimplemented service flushQueueRequest",
            "unimplemented service retract",
            "unimplemented service requestClassAttributeValueUpdateWithRegion",
            "unimplemented service getRegion",
        ]
    );
    assert_eq!(service_frames(&wire), before);
}

#[tokio::test]
async fn join_rejects_empty_names_locally() {
    let (mut rti, wire) = opened(vec![]).await;

    let err = rti.join_federation_execution("", "demo").await.unwrap_err();
    assert!(err.reason.contains("federate name"));
    let err = rti.join_federation_execution("alpha", "").await.unwrap_err();
    assert!(err.reason.contains("federation name"));
    assert_eq!(service_frames(&wire), 0);
}

#[tokio::test]
async fn join_renames_the_connection_context() {
    let (mut rti, wire) = opened(vec![Message::response(
        MessageKind::JoinFederationExecution,
        Payload::Federate(FederateHandle(7)),
    )])
    .await;

    let handle = rti.join_federation_execution("alpha", "demo").await.unwrap();
    assert_eq!(handle, FederateHandle(7));
    assert_eq!(rti.connection().context().federate(), "alpha");
    assert_eq!(
        wire.last().payload,
        Payload::Join {
            federate_name: "alpha".into(),
            federation: "demo".into()
        }
    );
}

#[tokio::test]
async fn created_region_must_have_requested_extents() {
    let (mut rti, _wire) = opened(vec![region_reply(3, 1)]).await;

    let err = rti.create_region(SpaceHandle(1), 2).await.unwrap_err();
    assert_eq!(err.kind, ExceptionKind::RtiInternalError);
    assert!(err.reason.contains("1 extents, 2 requested"));
}

#[tokio::test]
async fn region_modification_sends_bounds_and_commits() {
    let (mut rti, wire) = opened(vec![
        region_reply(6, 2),
        ok(MessageKind::DdmModifyRegion),
        ok(MessageKind::DdmDeleteRegion),
    ])
    .await;

    let mut region = rti.create_region(SpaceHandle(2), 2).await.unwrap();
    assert_eq!(rti.get_region_token(&region), RegionHandle(6));
    assert_eq!(region.space_handle(), SpaceHandle(2));
    assert_eq!(region.number_of_extents(), 2);

    region.set_range_lower_bound(1, DimensionHandle(1), 10).unwrap();
    region.set_range_upper_bound(1, DimensionHandle(1), 20).unwrap();
    assert!(region.is_modified());

    rti.notify_about_region_modification(&mut region).await.unwrap();
    assert!(!region.is_modified());
    match wire.last().payload {
        Payload::Region { region: handle, extents } => {
            assert_eq!(handle, RegionHandle(6));
            assert_eq!(extents, region.extents());
        }
        other => panic!("unexpected payload {:?}", other),
    }

    rti.delete_region(region).await.unwrap();
    assert_eq!(wire.last().payload, Payload::RegionHandle(RegionHandle(6)));
}

#[tokio::test]
async fn failed_region_modification_keeps_local_edits() {
    let (mut rti, _wire) = opened(vec![
        region_reply(6, 1),
        Message::exception(MessageKind::DdmModifyRegion, ExceptionKind::InvalidExtents, "upper < lower"),
    ])
    .await;

    let mut region = rti.create_region(SpaceHandle(2), 1).await.unwrap();
    region.set_range_lower_bound(0, DimensionHandle(1), 50).unwrap();

    let err = rti
        .notify_about_region_modification(&mut region)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ExceptionKind::InvalidExtents);
    assert!(region.is_modified());
}

#[tokio::test]
async fn register_with_region_sends_associations_in_order() {
    let (mut rti, wire) = opened(vec![
        region_reply(1, 1),
        region_reply(2, 1),
        Message::response(MessageKind::DdmRegisterObject, Payload::Object(ObjectHandle(40))),
    ])
    .await;

    let near = rti.create_region(SpaceHandle(1), 1).await.unwrap();
    let far = rti.create_region(SpaceHandle(1), 1).await.unwrap();
    let object = rti
        .register_object_instance_with_region(
            ObjectClassHandle(3),
            None,
            &[(AttributeHandle(9), &far), (AttributeHandle(4), &near)],
        )
        .await
        .unwrap();

    assert_eq!(object, ObjectHandle(40));
    assert_eq!(
        wire.last().payload,
        Payload::RegisterObject {
            class: ObjectClassHandle(3),
            name: None,
            tag: None,
            regions: vec![
                (AttributeHandle(9), RegionHandle(2)),
                (AttributeHandle(4), RegionHandle(1))
            ],
        }
    );
}

#[tokio::test]
async fn timestamped_update_returns_retraction_handle() {
    let retraction = EventRetraction {
        sending_federate: FederateHandle(2),
        serial_number: 17,
    };
    let (mut rti, wire) = opened(vec![Message::response(
        MessageKind::UpdateAttributeValues,
        Payload::Retraction(retraction),
    )])
    .await;

    let handle = rti
        .update_attribute_values_at(ObjectHandle(1), Vec::new(), FedTime::new(12.0), Some("late"))
        .await
        .unwrap();
    assert_eq!(handle, retraction);
    assert!(matches!(
        wire.last().payload,
        Payload::AttributeValues { time: Some(t), .. } if t == FedTime::new(12.0)
    ));
}

#[tokio::test]
async fn synchronization_point_with_federate_set() {
    let (mut rti, wire) = opened(vec![ok(MessageKind::RegisterFederationSynchronizationPoint)]).await;

    rti.register_federation_synchronization_point_with(
        "checkpoint",
        Some("t0"),
        &[FederateHandle(1), FederateHandle(3)],
    )
    .await
    .unwrap();

    assert_eq!(
        wire.last().payload,
        Payload::SynchronizationPoint {
            label: "checkpoint".into(),
            tag: "t0".into(),
            federates: Some(vec![FederateHandle(1), FederateHandle(3)]),
        }
    );
}

#[tokio::test]
async fn name_lookups_carry_their_scope() {
    let (mut rti, wire) = opened(vec![
        Message::response(MessageKind::GetAttributeHandle, Payload::Handle(11)),
        Message::response(MessageKind::GetDimensionName, Payload::Name("altitude".into())),
    ])
    .await;

    let attribute = rti
        .get_attribute_handle("position", ObjectClassHandle(5))
        .await
        .unwrap();
    assert_eq!(attribute, AttributeHandle(11));
    assert_eq!(
        wire.last().payload,
        Payload::NameLookup {
            name: "position".into(),
            scope: Some(5)
        }
    );

    let name = rti
        .get_dimension_name(DimensionHandle(2), SpaceHandle(1))
        .await
        .unwrap();
    assert_eq!(name, "altitude");
    assert_eq!(
        wire.last().payload,
        Payload::HandleLookup {
            handle: 2,
            scope: Some(1)
        }
    );
}

#[tokio::test]
async fn time_queries_return_federation_time() {
    let (mut rti, wire) = opened(vec![
        ok(MessageKind::EnableTimeRegulation),
        Message::response(MessageKind::QueryLookahead, Payload::Lookahead(FedTime::new(0.5))),
        Message::response(MessageKind::QueryLbts, Payload::Time(FedTime::POSITIVE_INFINITY)),
    ])
    .await;

    rti.enable_time_regulation(FedTime::ZERO, FedTime::new(0.5))
        .await
        .unwrap();
    assert_eq!(
        wire.last().payload,
        Payload::TimeRegulation {
            time: FedTime::ZERO,
            lookahead: FedTime::new(0.5)
        }
    );
    assert_eq!(rti.query_lookahead().await.unwrap(), FedTime::new(0.5));
    assert!(rti.query_lbts().await.unwrap().is_positive_infinity());
}
