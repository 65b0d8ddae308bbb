//! Events the host sends ahead of each block.

use std::marker::PhantomData;

use vstfx_component::events::Data;

use crate::abi::{VstEvent, VstEvents, VstMidiEvent, VstMidiSysexEvent, event_types};

/// An event delivered by the host, decoded from its raw layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent<'a> {
    /// A short MIDI message.
    Midi {
        /// Offset into the next block, in frames.
        delta_frames: i32,
        /// Status byte followed by two data bytes.
        data: [u8; 3],
    },
    /// A system exclusive dump, empty if the host passed no data.
    SysEx {
        /// Offset into the next block, in frames.
        delta_frames: i32,
        /// The raw dump.
        dump: &'a [u8],
    },
    /// Any event type we don't decode.
    Other {
        /// The raw `VstEvent::kind` tag.
        kind: i32,
    },
}

unsafe fn convert_event<'a>(event: *const VstEvent) -> HostEvent<'a> {
    unsafe {
        let kind = (*event).kind;
        match kind {
            event_types::MIDI => {
                let event = &*event.cast::<VstMidiEvent>();
                let [status, data1, data2, _] = event.midi_data.map(|b| b as u8);
                HostEvent::Midi {
                    delta_frames: event.delta_frames,
                    data: [status, data1, data2],
                }
            }
            event_types::SYSEX => {
                // Event records only promise the 4-byte alignment of the
                // shared header, but this one holds pointers.
                let event = event.cast::<VstMidiSysexEvent>().read_unaligned();
                let dump = match usize::try_from(event.dump_bytes) {
                    Ok(len) if !event.sysex_dump.is_null() => std::slice::from_raw_parts(
                        event.sysex_dump.cast_const().cast::<u8>(),
                        len,
                    ),
                    _ => &[],
                };
                HostEvent::SysEx {
                    delta_frames: event.delta_frames,
                    dump,
                }
            }
            _ => HostEvent::Other { kind },
        }
    }
}

/// A host event batch, borrowed for the duration of one dispatch call.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    events: *const VstEvents,
    _lifetime: PhantomData<&'a VstEvents>,
}

impl<'a> Batch<'a> {
    /// Returns `None` if `events` is null.
    ///
    /// # Safety
    ///
    /// `events` must point at a batch whose first `num_events` entries are
    /// null or point at events of the size their `kind` implies, and all of
    /// it must stay alive and unchanged for `'a`.
    pub unsafe fn from_raw(events: *const VstEvents) -> Option<Self> {
        (!events.is_null()).then_some(Self {
            events,
            _lifetime: PhantomData,
        })
    }

    /// Lazily decode the batch.
    ///
    /// Null entries are skipped. A negative count is treated as empty.
    pub fn iter(&self) -> impl Iterator<Item = HostEvent<'a>> + use<'a> {
        let count = usize::try_from(unsafe { (*self.events).num_events }).unwrap_or(0);
        let first = unsafe { (&raw const (*self.events).events).cast::<*const VstEvent>() };
        (0..count).filter_map(move |index| {
            let event = unsafe { *first.add(index) };
            if event.is_null() {
                None
            } else {
                Some(unsafe { convert_event(event) })
            }
        })
    }
}

/// The channel-voice messages in a decoded batch, in order.
pub fn midi_data<'a, I: IntoIterator<Item = HostEvent<'a>>>(
    events: I,
) -> impl Iterator<Item = Data> {
    events.into_iter().filter_map(|event| match event {
        HostEvent::Midi { data, .. } => Data::from_midi(data),
        HostEvent::SysEx { .. } | HostEvent::Other { .. } => None,
    })
}

#[cfg(test)]
mod tests;
