use vstfx_component::Component as _;
use vstfx_component::parameters::{Store, to_infos};

use super::{Component, GAIN, PARAMETERS, RELEASE};

fn store() -> Store {
    Store::new(to_infos(&PARAMETERS))
}

#[test]
fn parameter_order_is_stable() {
    let infos = Component::default().parameter_infos();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].unique_id, GAIN);
    assert_eq!(infos[1].unique_id, RELEASE);
}

#[test]
fn names_and_labels() {
    let store = store();
    assert_eq!(store.name(0), Some("Gain"));
    assert_eq!(store.name(1), Some("Release"));
    assert_eq!(store.units(0), Some("dB"));
    assert_eq!(store.units(1), Some("ms"));
}

#[test]
fn gain_displays_literal_value() {
    let store = store();
    assert_eq!(store.display(0).unwrap().as_str(), "0.5");
    store.set(0, 0.8).unwrap();
    assert_eq!(store.display(0).unwrap().as_str(), "0.8");
}

#[test]
fn release_defaults_to_infinite() {
    let store = store();
    assert_eq!(store.get(1), Some(1.0));
    assert_eq!(store.display(1).unwrap().as_str(), "inf");
}

#[test]
fn release_displays_milliseconds_from_rate() {
    let store = store();
    // Normalized 0.5 is a rate of 0.5, which shows as (1.8 - 0.5) * 1000.
    store.set(1, 0.5).unwrap();
    assert_eq!(store.display(1).unwrap().as_str(), "1300.0");
    // Normalized 0 is the fastest rate, 1.0.
    store.set(1, 0.0).unwrap();
    assert_eq!(store.display(1).unwrap().as_str(), "800.0");
    store.set(1, 0.75).unwrap();
    assert_eq!(store.display(1).unwrap().as_str(), "1550.0");
}

#[test]
fn release_round_trips_normalized_value() {
    let store = store();
    for value in [0.0, 0.1, 0.3, 0.5, 0.7, 0.99, 1.0] {
        store.set(1, value).unwrap();
        assert_eq!(store.get(1), Some(value));
    }
}

#[test]
fn release_display_rounds_like_double_precision() {
    let store = store();
    // Raw rates 0.99995 and 0.99955 sit exactly on a rounding boundary.
    store.set(1, 5e-5).unwrap();
    assert_eq!(store.display(1).unwrap().as_str(), "800.1");
    store.set(1, 0.00045).unwrap();
    assert_eq!(store.display(1).unwrap().as_str(), "800.5");
}
