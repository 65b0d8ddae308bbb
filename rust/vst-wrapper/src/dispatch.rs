//! Typed decoding of the host's dispatcher calls.
//!
//! The dispatcher multiplexes every control-thread request through one C
//! function with untyped arguments. Each opcode we answer decodes into a
//! [`Request`] variant carrying only the arguments its handler needs.

use std::ffi::{CStr, c_char, c_void};

use crate::abi::{ERect, effect_opcodes as op, string_capacity};
use crate::events::Batch;


/// Why a dispatcher call could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The opcode needs a pointer payload and the host passed null.
    #[error("opcode {0} requires a non-null pointer")]
    NullPointer(i32),

    /// We don't handle this opcode.
    #[error("unhandled opcode {0}")]
    UnknownOpcode(i32),
}

/// A dispatcher call we know how to answer.
///
/// Buffers named `out` are filled by the plug-in; everything else flows
/// from host to plug-in.
#[derive(Debug)]
pub enum Request<'a> {
    /// The instance has been created and is about to be used.
    Open,

    /// The host is done with the instance. Nothing may touch it afterwards.
    Close,

    /// Unit label of parameter `index`.
    GetParamLabel { index: i32, out: &'a mut [c_char] },

    /// Current value of parameter `index` as text.
    GetParamDisplay { index: i32, out: &'a mut [c_char] },

    /// Name of parameter `index`.
    GetParamName { index: i32, out: &'a mut [c_char] },

    /// The host's new sample rate.
    SetSampleRate { rate: f32 },

    /// The host's maximum block size. Negative sizes decode as 0.
    SetBlockSize { size: usize },

    /// `true` on resume, `false` on suspend.
    MainsChanged { on: bool },

    /// The plug-in stores a pointer to its editor geometry into `out`.
    EditGetRect { out: &'a mut *const ERect },

    /// `parent` is the host's native window handle.
    EditOpen { parent: *mut c_void },

    /// Close the editor, if open.
    EditClose,

    /// Periodic tick while the editor is open.
    EditIdle,

    /// MIDI and other events for the next block.
    ProcessEvents { events: Batch<'a> },

    /// Whether parameter `index` can be automated.
    CanBeAutomated { index: i32 },

    /// The kind of plug-in.
    GetPlugCategory,

    /// Display name of the plug-in.
    GetEffectName { out: &'a mut [c_char] },

    /// The vendor's name.
    GetVendorString { out: &'a mut [c_char] },

    /// The product's name.
    GetProductString { out: &'a mut [c_char] },

    /// Vendor-specific version number.
    GetVendorVersion,

    /// Whether the plug-in supports `capability`.
    CanDo { capability: &'a CStr },

    /// Protocol version the plug-in implements.
    GetVstVersion,

    /// MIDI input channels the plug-in listens to.
    GetNumMidiInputChannels,

    /// MIDI output channels the plug-in sends on.
    GetNumMidiOutputChannels,
}

unsafe fn text_out<'a>(
    opcode: i32,
    ptr: *mut c_void,
    capacity: usize,
) -> Result<&'a mut [c_char], DecodeError> {
    if ptr.is_null() {
        return Err(DecodeError::NullPointer(opcode));
    }
    Ok(unsafe { std::slice::from_raw_parts_mut(ptr.cast::<c_char>(), capacity) })
}

impl Request<'_> {
    /// Decode the arguments of a dispatcher call.
    ///
    /// # Errors
    ///
    ///  - `UnknownOpcode` for opcodes we don't answer.
    ///  - `NullPointer` when an opcode that reads or writes through `ptr` gets null.
    ///
    /// # Safety
    ///
    /// Non-null `ptr` must be what the protocol defines for `opcode`, valid
    /// for the lifetime of the request: a host-owned text buffer of the
    /// protocol's capacity, a `VstEvents` batch, an `ERect**`, a
    /// NUL-terminated capability string, or a native window handle.
    pub unsafe fn decode(
        opcode: i32,
        index: i32,
        value: isize,
        ptr: *mut c_void,
        opt: f32,
    ) -> Result<Self, DecodeError> {
        unsafe {
            Ok(match opcode {
                op::OPEN => Request::Open,
                op::CLOSE => Request::Close,
                op::GET_PARAM_LABEL => Request::GetParamLabel {
                    index,
                    out: text_out(opcode, ptr, string_capacity::PARAM)?,
                },
                op::GET_PARAM_DISPLAY => Request::GetParamDisplay {
                    index,
                    out: text_out(opcode, ptr, string_capacity::PARAM)?,
                },
                op::GET_PARAM_NAME => Request::GetParamName {
                    index,
                    out: text_out(opcode, ptr, string_capacity::PARAM)?,
                },
                op::SET_SAMPLE_RATE => Request::SetSampleRate { rate: opt },
                op::SET_BLOCK_SIZE => Request::SetBlockSize {
                    size: usize::try_from(value).unwrap_or(0),
                },
                op::MAINS_CHANGED => Request::MainsChanged { on: value != 0 },
                op::EDIT_GET_RECT => Request::EditGetRect {
                    out: ptr
                        .cast::<*const ERect>()
                        .as_mut()
                        .ok_or(DecodeError::NullPointer(opcode))?,
                },
                op::EDIT_OPEN => {
                    if ptr.is_null() {
                        return Err(DecodeError::NullPointer(opcode));
                    }
                    Request::EditOpen { parent: ptr }
                }
                op::EDIT_CLOSE => Request::EditClose,
                op::EDIT_IDLE => Request::EditIdle,
                op::PROCESS_EVENTS => Request::ProcessEvents {
                    events: Batch::from_raw(ptr.cast_const().cast())
                        .ok_or(DecodeError::NullPointer(opcode))?,
                },
                op::CAN_BE_AUTOMATED => Request::CanBeAutomated { index },
                op::GET_PLUG_CATEGORY => Request::GetPlugCategory,
                op::GET_EFFECT_NAME => Request::GetEffectName {
                    out: text_out(opcode, ptr, string_capacity::EFFECT_NAME)?,
                },
                op::GET_VENDOR_STRING => Request::GetVendorString {
                    out: text_out(opcode, ptr, string_capacity::VENDOR)?,
                },
                op::GET_PRODUCT_STRING => Request::GetProductString {
                    out: text_out(opcode, ptr, string_capacity::PRODUCT)?,
                },
                op::GET_VENDOR_VERSION => Request::GetVendorVersion,
                op::CAN_DO => {
                    if ptr.is_null() {
                        return Err(DecodeError::NullPointer(opcode));
                    }
                    Request::CanDo {
                        capability: CStr::from_ptr(ptr.cast_const().cast()),
                    }
                }
                op::GET_VST_VERSION => Request::GetVstVersion,
                op::GET_NUM_MIDI_INPUT_CHANNELS => Request::GetNumMidiInputChannels,
                op::GET_NUM_MIDI_OUTPUT_CHANNELS => Request::GetNumMidiOutputChannels,
                _ => return Err(DecodeError::UnknownOpcode(opcode)),
            })
        }
    }
}
