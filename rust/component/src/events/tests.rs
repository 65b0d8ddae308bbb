use super::{Data, NoteData, status};

#[test]
fn channel_nibble_is_ignored_for_type() {
    for channel in 0..16u8 {
        assert_eq!(
            Data::from_midi([status::NOTE_ON | channel, 60, 1]),
            Some(Data::NoteOn {
                data: NoteData {
                    channel,
                    pitch: 60,
                    velocity: 1
                }
            })
        );
    }
}

#[test]
fn zero_velocity_note_on_stays_note_on() {
    assert!(matches!(
        Data::from_midi([status::NOTE_ON, 60, 0]),
        Some(Data::NoteOn {
            data: NoteData { velocity: 0, .. }
        })
    ));
}

#[test]
fn data_bytes_masked_to_seven_bits() {
    assert_eq!(
        Data::from_midi([status::NOTE_OFF, 0xff, 0xc0]),
        Some(Data::NoteOff {
            data: NoteData {
                channel: 0,
                pitch: 0x7f,
                velocity: 0x40
            }
        })
    );
}

#[test]
fn pitch_bend_combines_data_bytes() {
    assert_eq!(
        Data::from_midi([status::PITCH_BEND | 2, 0x00, 0x40]),
        Some(Data::PitchBend {
            channel: 2,
            value: 0x2000
        })
    );
}

#[test]
fn control_change_decoded() {
    assert_eq!(
        Data::from_midi([status::CONTROL_CHANGE, 1, 64]),
        Some(Data::ControlChange {
            channel: 0,
            controller: 1,
            value: 64
        })
    );
}

#[test]
fn unhandled_types_rejected() {
    for status_byte in [
        status::KEY_PRESSURE,
        status::PROGRAM_CHANGE,
        status::CHANNEL_PRESSURE,
        status::SYSTEM,
        0x00,
    ] {
        assert_eq!(Data::from_midi([status_byte, 1, 2]), None);
    }
}
