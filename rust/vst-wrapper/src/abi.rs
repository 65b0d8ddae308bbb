//! Binary layout of the VST 2.4 protocol.
//!
//! Everything here mirrors the C declarations field for field. Names follow
//! Rust conventions; the C name is noted where it isn't obvious.

#![allow(missing_docs)]

use std::ffi::{c_char, c_void};

/// `kEffectMagic`, the four characters "VstP".
pub const EFFECT_MAGIC: i32 = i32::from_be_bytes(*b"VstP");

/// `kVstVersion` for 2.4.
pub const VST_VERSION: i32 = 2400;

/// Buffer sizes for strings passed to the plug-in, including the terminator.
pub mod string_capacity {
    pub const PARAM: usize = 8;
    pub const EFFECT_NAME: usize = 32;
    pub const VENDOR: usize = 64;
    pub const PRODUCT: usize = 64;
}

/// Opcodes the host passes to the plug-in dispatcher (`effXxx`).
pub mod effect_opcodes {
    pub const OPEN: i32 = 0;
    pub const CLOSE: i32 = 1;
    pub const GET_PARAM_LABEL: i32 = 6;
    pub const GET_PARAM_DISPLAY: i32 = 7;
    pub const GET_PARAM_NAME: i32 = 8;
    pub const SET_SAMPLE_RATE: i32 = 10;
    pub const SET_BLOCK_SIZE: i32 = 11;
    pub const MAINS_CHANGED: i32 = 12;
    pub const EDIT_GET_RECT: i32 = 13;
    pub const EDIT_OPEN: i32 = 14;
    pub const EDIT_CLOSE: i32 = 15;
    pub const EDIT_IDLE: i32 = 19;
    pub const PROCESS_EVENTS: i32 = 25;
    pub const CAN_BE_AUTOMATED: i32 = 26;
    pub const GET_PLUG_CATEGORY: i32 = 35;
    pub const GET_EFFECT_NAME: i32 = 45;
    pub const GET_VENDOR_STRING: i32 = 47;
    pub const GET_PRODUCT_STRING: i32 = 48;
    pub const GET_VENDOR_VERSION: i32 = 49;
    pub const CAN_DO: i32 = 51;
    pub const GET_VST_VERSION: i32 = 58;
    pub const GET_NUM_MIDI_INPUT_CHANNELS: i32 = 78;
    pub const GET_NUM_MIDI_OUTPUT_CHANNELS: i32 = 79;
}

/// Opcodes the plug-in passes to the host callback (`audioMasterXxx`).
pub mod host_opcodes {
    pub const GET_PRODUCT_STRING: i32 = 33;
}

/// Bits of [`AEffect::flags`](super::AEffect::flags) (`effFlagsXxx`).
pub mod effect_flags {
    pub const HAS_EDITOR: i32 = 1 << 0;
    pub const CAN_REPLACING: i32 = 1 << 4;
    pub const IS_SYNTH: i32 = 1 << 8;
    pub const CAN_DOUBLE_REPLACING: i32 = 1 << 12;
}

/// Values of [`VstEvent::kind`](super::VstEvent::kind).
pub mod event_types {
    /// `kVstMidiType`
    pub const MIDI: i32 = 1;
    /// `kVstSysExType`
    pub const SYSEX: i32 = 6;
}

/// Answers to `effGetPlugCategory` (`kPlugCategXxx`).
pub mod plug_categories {
    pub const SYNTH: i32 = 2;
}

/// `audioMasterCallback`
pub type HostCallback = unsafe extern "C" fn(
    effect: *mut AEffect,
    opcode: i32,
    index: i32,
    value: isize,
    ptr: *mut c_void,
    opt: f32,
) -> isize;

/// `AEffectDispatcherProc`
pub type DispatcherProc = unsafe extern "C" fn(
    effect: *mut AEffect,
    opcode: i32,
    index: i32,
    value: isize,
    ptr: *mut c_void,
    opt: f32,
) -> isize;

/// `AEffectProcessProc`
pub type ProcessProc = unsafe extern "C" fn(
    effect: *mut AEffect,
    inputs: *mut *mut f32,
    outputs: *mut *mut f32,
    sample_frames: i32,
);

/// `AEffectProcessDoubleProc`
pub type ProcessDoubleProc = unsafe extern "C" fn(
    effect: *mut AEffect,
    inputs: *mut *mut f64,
    outputs: *mut *mut f64,
    sample_frames: i32,
);

/// `AEffectSetParameterProc`
pub type SetParameterProc = unsafe extern "C" fn(effect: *mut AEffect, index: i32, parameter: f32);

/// `AEffectGetParameterProc`
pub type GetParameterProc = unsafe extern "C" fn(effect: *mut AEffect, index: i32) -> f32;

/// The descriptor through which the host reaches a plug-in instance.
#[repr(C)]
pub struct AEffect {
    pub magic: i32,
    pub dispatcher: Option<DispatcherProc>,
    /// Accumulating process call, deprecated in 2.4.
    pub process: Option<ProcessProc>,
    pub set_parameter: Option<SetParameterProc>,
    pub get_parameter: Option<GetParameterProc>,
    pub num_programs: i32,
    pub num_params: i32,
    pub num_inputs: i32,
    pub num_outputs: i32,
    pub flags: i32,
    pub reserved_for_host_1: isize,
    pub reserved_for_host_2: isize,
    pub initial_delay: i32,
    pub real_qualities: i32,
    pub off_qualities: i32,
    pub io_ratio: f32,
    /// Owned by the plug-in.
    pub object: *mut c_void,
    /// Owned by the host.
    pub user: *mut c_void,
    pub unique_id: i32,
    pub version: i32,
    pub process_replacing: Option<ProcessProc>,
    pub process_double_replacing: Option<ProcessDoubleProc>,
    pub future: [c_char; 56],
}

/// Editor geometry in pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ERect {
    pub top: i16,
    pub left: i16,
    pub bottom: i16,
    pub right: i16,
}

/// Header shared by every event type.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VstEvent {
    pub kind: i32,
    pub byte_size: i32,
    pub delta_frames: i32,
    pub flags: i32,
    pub data: [c_char; 16],
}

/// A batch of events. `events` is really `num_events` long.
#[repr(C)]
pub struct VstEvents {
    pub num_events: i32,
    pub reserved: isize,
    pub events: [*mut VstEvent; 2],
}

/// A MIDI event, `kind` is [`event_types::MIDI`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VstMidiEvent {
    pub kind: i32,
    pub byte_size: i32,
    pub delta_frames: i32,
    pub flags: i32,
    pub note_length: i32,
    pub note_offset: i32,
    pub midi_data: [c_char; 4],
    pub detune: c_char,
    pub note_off_velocity: c_char,
    pub reserved_1: c_char,
    pub reserved_2: c_char,
}

/// A system exclusive dump, `kind` is [`event_types::SYSEX`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VstMidiSysexEvent {
    pub kind: i32,
    pub byte_size: i32,
    pub delta_frames: i32,
    pub flags: i32,
    pub dump_bytes: i32,
    pub reserved_1: isize,
    pub sysex_dump: *mut c_char,
    pub reserved_2: isize,
}
