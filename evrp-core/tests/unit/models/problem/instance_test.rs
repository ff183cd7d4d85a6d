use super::*;
use crate::helpers::models::TestInstanceBuilder;
use crate::models::common::Location;

fn create_node(id: &str, kind: NodeKind) -> Node {
    Node::new(id, kind, Location::new(0., 0.), 0., 0., 100., 0.)
}

fn create_vehicle() -> VehicleParams {
    VehicleParams::new(100., 200., 1., 1., 1.)
}

#[test]
fn can_add_depot_end_and_dummy_stations() {
    let instance = TestInstanceBuilder::default()
        .station("S1", (10., 0.))
        .station("S2", (0., 10.))
        .simple_customer("C1", (5., 5.))
        .dummies(2)
        .build();

    let ids = instance.nodes().iter().map(|node| node.id.as_str()).collect::<Vec<_>>();

    assert_eq!(ids, vec!["D0", "S1", "S2", "C1", "D0_end", "S_dummy0", "S_dummy1", "S_dummy2", "S_dummy3"]);
    assert_eq!(instance.depot_start(), 0);
    assert_eq!(instance.depot_end(), 4);
    assert_eq!(instance.customers(), &[3]);
    assert_eq!(instance.original_stations(), &[1, 2]);
    assert_eq!(instance.stations(), &[1, 2, 5, 6, 7, 8]);
    assert_eq!(instance.nodes()[4].kind, NodeKind::DepotEnd);
    assert_eq!(instance.nodes()[4].location, instance.nodes()[0].location);
}

#[test]
fn can_group_station_replicas() {
    let instance =
        TestInstanceBuilder::default().station("S1", (10., 0.)).station("S2", (0., 10.)).dummies(2).build();
    let s1 = instance.find("S1").unwrap();
    let s2 = instance.find("S2").unwrap();
    let dummy0 = instance.find("S_dummy0").unwrap();
    let dummy3 = instance.find("S_dummy3").unwrap();

    assert_eq!(instance.station_replicas(s1), &[s1, dummy0, instance.find("S_dummy2").unwrap()]);
    assert_eq!(instance.station_replicas(dummy3), &[s2, instance.find("S_dummy1").unwrap(), dummy3]);
    assert_eq!(instance.station_origin(dummy0), s1);
    assert!(instance.is_station(dummy0));
    assert!(!instance.is_customer(dummy0));
}

#[test]
fn can_group_replicas_of_stations_sharing_location() {
    let instance =
        TestInstanceBuilder::default().station("S1", (10., 0.)).station("S2", (10., 0.)).dummies(1).build();
    let s1 = instance.find("S1").unwrap();
    let s2 = instance.find("S2").unwrap();
    let dummy0 = instance.find("S_dummy0").unwrap();
    let dummy1 = instance.find("S_dummy1").unwrap();

    assert_eq!(instance.station_origin(dummy0), s1);
    assert_eq!(instance.station_origin(dummy1), s2);
    assert_eq!(instance.station_replicas(s1), &[s1, dummy0]);
    assert_eq!(instance.station_replicas(s2), &[s2, dummy1]);
}

parameterized_test! {can_reject_invalid_nodes, (nodes, expected_error), {
    can_reject_invalid_nodes_impl(nodes, expected_error);
}}

can_reject_invalid_nodes! {
    case_01_no_depot: (vec![create_node("C1", NodeKind::Customer)], "expected exactly one depot, got 0"),
    case_02_two_depots: (
        vec![create_node("D0", NodeKind::DepotStart), create_node("D1", NodeKind::DepotStart)],
        "expected exactly one depot, got 2"
    ),
    case_03_duplicate: (
        vec![create_node("D0", NodeKind::DepotStart), create_node("C1", NodeKind::Customer), create_node("C1", NodeKind::Customer)],
        "duplicate node id: 'C1'"
    ),
    case_04_reserved: (
        vec![create_node("D0", NodeKind::DepotStart), create_node("E", NodeKind::DepotEnd)],
        "node 'E' has a kind which is reserved for generated nodes"
    ),
}

fn can_reject_invalid_nodes_impl(nodes: Vec<Node>, expected_error: &str) {
    let result = Instance::new(nodes, create_vehicle(), WirelessCoverage::None, 0);

    assert_eq!(result.err(), Some(GenericError::from(expected_error)));
}

#[test]
fn can_compute_time_window_statistics() {
    let instance = TestInstanceBuilder::default()
        .customer("C1", (1., 0.), 1., (0., 10.), 0.)
        .customer("C2", (2., 0.), 1., (0., 20.), 0.)
        .customer("C3", (3., 0.), 1., (10., 40.), 0.)
        .build();

    assert_eq!(instance.window_mean(), 20.);
    assert_eq!(instance.window_stdev(), 10.);
}

#[test]
fn can_rebuild_arcs_with_another_coverage() {
    let instance = TestInstanceBuilder::default().simple_customer("C1", (10., 0.)).build();
    let high = instance.with_coverage(WirelessCoverage::High);

    assert_eq!(high.coverage(), WirelessCoverage::High);
    assert_eq!(high.arcs().distance(0, 1), instance.arcs().distance(0, 1));
    assert!((high.arcs().net_energy(0, 1).unwrap() - (10. - 0.9 * 0.6 * 10.)).abs() < 1E-9);
}

parameterized_test! {can_parse_wireless_coverage, (value, expected), {
    assert_eq!(value.parse::<WirelessCoverage>().ok(), expected);
}}

can_parse_wireless_coverage! {
    case_01: ("none", Some(WirelessCoverage::None)),
    case_02: ("light", Some(WirelessCoverage::Light)),
    case_03: ("Moderate", Some(WirelessCoverage::Moderate)),
    case_04: ("HIGH", Some(WirelessCoverage::High)),
    case_05: ("full", None),
}
