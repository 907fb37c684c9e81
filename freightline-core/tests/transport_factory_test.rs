use freightline_core::transport::{Ship, Truck};
use freightline_core::{
    create_transport, create_transport_from_selector, Transport, TransportFactory, TransportKind,
    UnknownTransportKind,
};

const TRUCK_TEXT: &str = "Delivering cargo by land in a truck.";
const SHIP_TEXT: &str = "Delivering cargo by sea in a ship.";

#[test]
fn truck_selector_delivers_by_land() {
    let transport = create_transport_from_selector("Truck").expect("Truck is a known kind");
    assert_eq!(transport.deliver(), TRUCK_TEXT);
    assert_eq!(transport.kind(), TransportKind::Truck);
}

#[test]
fn ship_selector_delivers_by_sea() {
    let transport = create_transport_from_selector("Ship").expect("Ship is a known kind");
    assert_eq!(transport.deliver(), SHIP_TEXT);
    assert_eq!(transport.kind(), TransportKind::Ship);
}

#[test]
fn unknown_selector_fails_with_offending_value() {
    let result = create_transport_from_selector("Plane");
    assert!(matches!(
        result,
        Err(UnknownTransportKind(ref value)) if value == "Plane"
    ));
}

#[test]
fn every_kind_maps_to_its_fixed_description() {
    let factory = TransportFactory::new();
    for kind in TransportKind::ALL {
        let expected = match kind {
            TransportKind::Truck => Truck::DESCRIPTION,
            TransportKind::Ship => Ship::DESCRIPTION,
        };
        assert_eq!(factory.create(kind).deliver(), expected);
        assert_eq!(create_transport(kind).deliver(), expected);
    }
}

#[test]
fn deliver_is_idempotent_on_one_instance() {
    let transport = create_transport(TransportKind::Ship);
    let first = transport.deliver().to_string();
    for _ in 0..10 {
        assert_eq!(transport.deliver(), first);
    }
}

#[test]
fn hundred_trucks_yield_identical_descriptions() {
    let outputs: Vec<String> = (0..100)
        .map(|_| create_transport(TransportKind::Truck).deliver().to_string())
        .collect();
    assert_eq!(outputs.len(), 100);
    assert!(outputs.iter().all(|text| text == TRUCK_TEXT));
}

#[test]
fn shared_factory_is_usable_from_many_threads() {
    let factory = TransportFactory::new();
    let results: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let kind = TransportKind::ALL[i % 2];
                scope.spawn(move || factory.create(kind).deliver().to_string())
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    for (i, text) in results.iter().enumerate() {
        let expected = if i % 2 == 0 { TRUCK_TEXT } else { SHIP_TEXT };
        assert_eq!(text, expected);
    }
}

#[test]
fn transports_can_be_held_behind_trait_objects() {
    let fleet: Vec<Box<dyn Transport>> = ["Truck", "Ship", "Truck"]
        .iter()
        .map(|selector| create_transport_from_selector(selector).expect("known kind"))
        .collect();
    let names: Vec<&str> = fleet.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Truck", "Ship", "Truck"]);
}

#[test]
fn selector_match_is_case_and_whitespace_sensitive() {
    for selector in ["truck", "SHIP", " Truck ", "tRuCk\n"] {
        match create_transport_from_selector(selector) {
            Err(UnknownTransportKind(value)) => assert_eq!(value, selector),
            Ok(transport) => panic!("{:?} should be rejected, got {:?}", selector, transport),
        }
    }
}
