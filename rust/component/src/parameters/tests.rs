use std::fmt::{self, Write as _};

use super::{Display, FixedText, SetError, States, StaticInfoRef, Store, hash_id, to_infos};

fn percent(value: f32, out: &mut dyn fmt::Write) -> fmt::Result {
    write!(out, "{:.0}%", value * 100.0)
}

static PARAMETERS: [StaticInfoRef; 2] = [
    StaticInfoRef {
        unique_id: "level",
        title: "Level",
        units: "dB",
        default: 0.5,
        flags: super::Flags { automatable: true },
        display: Display::Decimal,
    },
    StaticInfoRef {
        unique_id: "mix",
        title: "Mix",
        units: "%",
        default: 0.25,
        flags: super::Flags { automatable: false },
        display: Display::Custom(percent),
    },
];

fn store() -> Store {
    Store::new(to_infos(&PARAMETERS))
}

#[test]
fn starts_at_defaults() {
    let store = store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0), Some(0.5));
    assert_eq!(store.get(1), Some(0.25));
}

#[test]
fn set_then_get_round_trips() {
    let store = store();
    for index in 0..store.len() {
        for value in [0.0, 0.1, 0.25, 0.333, 0.5, 0.9, 1.0] {
            assert_eq!(store.set(index, value), Ok(()));
            assert_eq!(store.get(index), Some(value));
        }
    }
}

#[test]
fn out_of_range_index_rejected() {
    let store = store();
    assert_eq!(store.get(5), None);
    assert_eq!(store.set(5, 0.7), Err(SetError::NotFound));
    assert_eq!(store.get(0), Some(0.5));
    assert_eq!(store.get(1), Some(0.25));
    assert_eq!(store.name(5), None);
    assert_eq!(store.units(5), None);
    assert!(store.display(5).is_none());
}

#[test]
fn nan_rejected_without_change() {
    let store = store();
    assert_eq!(store.set(0, f32::NAN), Err(SetError::InvalidValue));
    assert_eq!(store.get(0), Some(0.5));
}

#[test]
fn values_clamped_to_normalized_range() {
    let store = store();
    store.set(0, 1.5).unwrap();
    assert_eq!(store.get(0), Some(1.0));
    store.set(0, -0.5).unwrap();
    assert_eq!(store.get(0), Some(0.0));
}

#[test]
fn names_and_units() {
    let store = store();
    assert_eq!(store.name(0), Some("Level"));
    assert_eq!(store.units(0), Some("dB"));
    assert_eq!(store.name(1), Some("Mix"));
    assert_eq!(store.units(1), Some("%"));
    assert!(!store.info(1).unwrap().flags.automatable);
}

#[test]
fn decimal_display_has_one_decimal_place() {
    let store = store();
    store.set(0, 0.66).unwrap();
    assert_eq!(store.display(0).unwrap().as_str(), "0.7");
    store.set(0, 1.0).unwrap();
    assert_eq!(store.display(0).unwrap().as_str(), "1.0");
}

#[test]
fn custom_display_receives_normalized_value() {
    let store = store();
    assert_eq!(store.display(1).unwrap().as_str(), "25%");
}

#[test]
fn states_lookup_by_id() {
    let store = store();
    store.set(1, 0.75).unwrap();
    assert_eq!(store.get_numeric("mix"), Some(0.75));
    assert_eq!(store.get_by_hash(hash_id("level")), Some(0.5));
    assert_eq!(store.get_numeric("missing"), None);
}

#[test]
fn fixed_text_truncates_on_char_boundary() {
    let mut text = FixedText::<4>::new();
    write!(text, "abc").unwrap();
    // Two bytes with only one left.
    write!(text, "\u{e9}").unwrap();
    write!(text, "d").unwrap();
    assert_eq!(text.as_str(), "abc");
}

#[test]
fn fixed_text_stops_after_first_overflow() {
    let mut text = FixedText::<3>::new();
    write!(text, "ab\u{e9}").unwrap();
    // Would fit, but nothing is kept after a dropped character.
    write!(text, "c").unwrap();
    assert_eq!(text.as_str(), "ab");
}
