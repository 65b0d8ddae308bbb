//! MIDI channel-voice events.
//!
//! Hosts deliver MIDI as raw 3-byte messages. We decode them once at the
//! protocol boundary into [`Data`], which is what processors consume.

#[cfg(test)]
mod tests;

/// Status bytes of MIDI 1.0 channel-voice messages, with the channel nibble cleared.
pub mod status {
    /// Note Off.
    pub const NOTE_OFF: u8 = 0x80;
    /// Note On.
    pub const NOTE_ON: u8 = 0x90;
    /// Polyphonic key pressure.
    pub const KEY_PRESSURE: u8 = 0xa0;
    /// Control change.
    pub const CONTROL_CHANGE: u8 = 0xb0;
    /// Program change.
    pub const PROGRAM_CHANGE: u8 = 0xc0;
    /// Channel pressure.
    pub const CHANNEL_PRESSURE: u8 = 0xd0;
    /// Pitch bend.
    pub const PITCH_BEND: u8 = 0xe0;
    /// System messages; these have no channel.
    pub const SYSTEM: u8 = 0xf0;
}

/// The note carried by a Note On or Note Off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteData {
    /// The MIDI channel of the note, 0-15.
    pub channel: u8,

    /// Pitch of the note in semitones, where 69 is A4 (440Hz).
    pub pitch: u8,

    /// 7-bit velocity of the note on or off.
    pub velocity: u8,
}

/// A decoded channel-voice message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Data {
    /// Note On. Note that by MIDI convention, a velocity of 0 means Note Off,
    /// it's up to the processor to interpret it that way.
    NoteOn {
        /// The triggered note.
        data: NoteData,
    },
    /// Note Off.
    NoteOff {
        /// The released note. Velocity is the release velocity.
        data: NoteData,
    },
    /// A 7-bit controller change.
    ControlChange {
        /// The MIDI channel, 0-15.
        channel: u8,
        /// Controller number.
        controller: u8,
        /// New controller value.
        value: u8,
    },
    /// 14-bit pitch bend, where 0x2000 is centered.
    PitchBend {
        /// The MIDI channel, 0-15.
        channel: u8,
        /// Bend amount.
        value: u16,
    },
}

impl Data {
    /// Decode a raw 3-byte MIDI message.
    ///
    /// Only the high nibble of the status byte selects the message type; the
    /// low nibble is the channel. Data bytes are masked to 7 bits.
    ///
    /// Returns `None` for message types we don't handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vstfx_component::events::{Data, NoteData};
    /// assert_eq!(
    ///     Data::from_midi([0x93, 69, 100]),
    ///     Some(Data::NoteOn { data: NoteData { channel: 3, pitch: 69, velocity: 100 } })
    /// );
    /// assert_eq!(Data::from_midi([0xc0, 1, 0]), None);
    /// ```
    #[must_use]
    pub fn from_midi(bytes: [u8; 3]) -> Option<Self> {
        let [status_byte, data1, data2] = bytes;
        let channel = status_byte & 0x0f;
        let data1 = data1 & 0x7f;
        let data2 = data2 & 0x7f;
        match status_byte & 0xf0 {
            status::NOTE_ON => Some(Data::NoteOn {
                data: NoteData {
                    channel,
                    pitch: data1,
                    velocity: data2,
                },
            }),
            status::NOTE_OFF => Some(Data::NoteOff {
                data: NoteData {
                    channel,
                    pitch: data1,
                    velocity: data2,
                },
            }),
            status::CONTROL_CHANGE => Some(Data::ControlChange {
                channel,
                controller: data1,
                value: data2,
            }),
            status::PITCH_BEND => Some(Data::PitchBend {
                channel,
                value: (u16::from(data2) << 7) | u16::from(data1),
            }),
            _ => None,
        }
    }
}
