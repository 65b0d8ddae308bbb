use std::ffi::c_char;

use vstfx_component::events::{Data, NoteData};

use super::{Batch, HostEvent, midi_data};
use crate::abi::{VstEvent, VstEvents, VstMidiEvent, VstMidiSysexEvent, event_types};

fn midi(delta_frames: i32, bytes: [u8; 3]) -> VstMidiEvent {
    VstMidiEvent {
        kind: event_types::MIDI,
        byte_size: size_of::<VstMidiEvent>() as i32,
        delta_frames,
        flags: 0,
        note_length: 0,
        note_offset: 0,
        midi_data: [bytes[0] as c_char, bytes[1] as c_char, bytes[2] as c_char, 0],
        detune: 0,
        note_off_velocity: 0,
        reserved_1: 0,
        reserved_2: 0,
    }
}

fn batch(events: &mut [*mut VstEvent]) -> (Vec<usize>, *const VstEvents) {
    // Lay out a `VstEvents` with as many trailing pointers as we need.
    let words = 2 + events.len().max(2);
    let mut storage = vec![0usize; words];
    let header = storage.as_mut_ptr().cast::<VstEvents>();
    unsafe {
        (*header).num_events = events.len() as i32;
        let first = (&raw mut (*header).events).cast::<*mut VstEvent>();
        for (i, event) in events.iter().enumerate() {
            *first.add(i) = *event;
        }
    }
    (storage, header.cast_const())
}

#[test]
fn decodes_midi_events_in_order() {
    let mut a = midi(0, [0x90, 60, 100]);
    let mut b = midi(12, [0x80, 60, 0]);
    let mut raw = [
        (&raw mut a).cast::<VstEvent>(),
        (&raw mut b).cast::<VstEvent>(),
    ];
    let (_storage, ptr) = batch(&mut raw);
    let batch = unsafe { Batch::from_raw(ptr) }.unwrap();
    let decoded: Vec<_> = batch.iter().collect();
    assert_eq!(
        decoded,
        vec![
            HostEvent::Midi {
                delta_frames: 0,
                data: [0x90, 60, 100]
            },
            HostEvent::Midi {
                delta_frames: 12,
                data: [0x80, 60, 0]
            },
        ]
    );
}

#[test]
fn skips_null_entries() {
    let mut a = midi(0, [0x90, 60, 100]);
    let mut raw = [std::ptr::null_mut(), (&raw mut a).cast::<VstEvent>()];
    let (_storage, ptr) = batch(&mut raw);
    let batch = unsafe { Batch::from_raw(ptr) }.unwrap();
    assert_eq!(batch.iter().count(), 1);
}

#[test]
fn null_batch_rejected() {
    assert!(unsafe { Batch::from_raw(std::ptr::null()) }.is_none());
}

#[test]
fn empty_batch() {
    let (_storage, ptr) = batch(&mut []);
    let batch = unsafe { Batch::from_raw(ptr) }.unwrap();
    assert_eq!(batch.iter().count(), 0);
}

#[test]
fn sysex_and_unknown_events() {
    let mut dump = [0xf0u8, 0x7e, 0x01, 0xf7];
    let mut sysex = VstMidiSysexEvent {
        kind: event_types::SYSEX,
        byte_size: size_of::<VstMidiSysexEvent>() as i32,
        delta_frames: 3,
        flags: 0,
        dump_bytes: dump.len() as i32,
        reserved_1: 0,
        sysex_dump: dump.as_mut_ptr().cast(),
        reserved_2: 0,
    };
    let mut other = VstEvent {
        kind: 3,
        byte_size: size_of::<VstEvent>() as i32,
        delta_frames: 0,
        flags: 0,
        data: [0; 16],
    };
    let mut raw = [
        (&raw mut sysex).cast::<VstEvent>(),
        &raw mut other,
    ];
    let (_storage, ptr) = batch(&mut raw);
    let batch = unsafe { Batch::from_raw(ptr) }.unwrap();
    let decoded: Vec<_> = batch.iter().collect();
    assert_eq!(
        decoded,
        vec![
            HostEvent::SysEx {
                delta_frames: 3,
                dump: &[0xf0, 0x7e, 0x01, 0xf7]
            },
            HostEvent::Other { kind: 3 },
        ]
    );
}

#[test]
fn sysex_event_need_not_be_pointer_aligned() {
    #[repr(C, align(8))]
    struct Storage([u8; 64]);

    let mut dump = [0xf0u8, 0x01, 0xf7];
    let sysex = VstMidiSysexEvent {
        kind: event_types::SYSEX,
        byte_size: size_of::<VstMidiSysexEvent>() as i32,
        delta_frames: 7,
        flags: 0,
        dump_bytes: dump.len() as i32,
        reserved_1: 0,
        sysex_dump: dump.as_mut_ptr().cast(),
        reserved_2: 0,
    };
    let mut storage = Storage([0; 64]);
    // Four bytes in: aligned for the header, not for the pointer fields.
    let event = unsafe { storage.0.as_mut_ptr().add(4) };
    unsafe { event.cast::<VstMidiSysexEvent>().write_unaligned(sysex) };
    let mut raw = [event.cast::<VstEvent>()];
    let (_storage, ptr) = batch(&mut raw);
    let batch = unsafe { Batch::from_raw(ptr) }.unwrap();
    assert_eq!(
        batch.iter().collect::<Vec<_>>(),
        vec![HostEvent::SysEx {
            delta_frames: 7,
            dump: &[0xf0, 0x01, 0xf7]
        }]
    );
}

#[test]
fn midi_data_keeps_only_channel_voice_messages() {
    let events = [
        HostEvent::Other { kind: 3 },
        HostEvent::Midi {
            delta_frames: 0,
            data: [0x91, 64, 90],
        },
        HostEvent::SysEx {
            delta_frames: 0,
            dump: &[],
        },
        // Program change isn't decoded.
        HostEvent::Midi {
            delta_frames: 0,
            data: [0xc0, 5, 0],
        },
    ];
    assert!(midi_data(events).eq([Data::NoteOn {
        data: NoteData {
            channel: 1,
            pitch: 64,
            velocity: 90,
        }
    }]));
}
