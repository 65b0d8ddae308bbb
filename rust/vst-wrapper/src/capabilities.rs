//! Fixed answers to the host's capability queries.

use crate::abi::plug_categories;

/// Answer to a `canDo` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanDo {
    /// The plug-in supports the capability.
    Yes = 1,
    /// The plug-in doesn't know the capability.
    Unknown = 0,
    /// The plug-in doesn't support the capability.
    No = -1,
}

const SUPPORTED: [&str; 2] = ["receiveVstEvents", "receiveVstMidiEvent"];

/// Answer a `canDo` query. Only receiving MIDI events is supported.
#[must_use]
pub fn can_do(capability: &str) -> CanDo {
    if SUPPORTED.contains(&capability) {
        CanDo::Yes
    } else {
        CanDo::No
    }
}

/// Number of MIDI channels we listen on.
pub const MIDI_INPUT_CHANNELS: isize = 1;

/// Number of MIDI channels we send on.
pub const MIDI_OUTPUT_CHANNELS: isize = 0;

/// We're always an instrument.
pub const PLUG_CATEGORY: isize = plug_categories::SYNTH as isize;

/// Audio inputs; instruments render from nothing.
pub const NUM_INPUTS: i32 = 0;

/// Audio outputs, always stereo.
pub const NUM_OUTPUTS: i32 = 2;
