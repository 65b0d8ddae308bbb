//! A live plug-in instance and the C entry points the host calls it through.
//!
//! The host only ever sees the [`AEffect`] descriptor. We allocate it as the
//! first field of a boxed [`Instance`] and point `AEffect::object` back at
//! the box, so each entry point can recover the instance from the
//! descriptor it is handed. The box is released when the host sends the
//! close opcode, after the response has been computed.

use std::{cell::UnsafeCell, ffi::c_void, sync::Arc};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};
use vstfx_component::{
    Component, ProcessingEnvironment,
    audio::{Buffer, BufferMut, ChannelLayout, StackStereo},
    parameters::{SetError, Store},
    synth::Synth,
};

use crate::{
    ClassInfo, ComponentFactory, Info, SynthClass,
    abi::{AEffect, EFFECT_MAGIC, ERect, HostCallback, VST_VERSION, effect_flags},
    capabilities::{self, CanDo},
    dispatch::{DecodeError, Request},
    editor::Editor,
    events, host_info, strings,
};


/// Frames rendered at a time when the host asks for double precision.
const SCRATCH_FRAMES: usize = 64;

struct EditorSlot {
    editor: Box<dyn Editor>,
    open: bool,
}

impl EditorSlot {
    fn close(&mut self) {
        if self.open {
            self.editor.close();
            self.open = false;
        }
    }
}

#[repr(C)]
pub struct Instance<P> {
    // Must stay first. The host writes some of these fields behind our back.
    effect: UnsafeCell<AEffect>,

    processor: P,
    parameters: Arc<Store>,
    editor: Option<Mutex<EditorSlot>>,

    // Handed out to the host by pointer, so it lives as long as we do.
    rect: ERect,

    class: ClassInfo<'static>,
    info: Info<'static>,
}

/// Create an instance and return its descriptor.
///
/// # Safety
///
/// `host` must be null or the host's callback.
pub unsafe fn create<CF>(
    class: &SynthClass<CF>,
    info: Info<'static>,
    host: Option<HostCallback>,
) -> *mut AEffect
where
    CF: ComponentFactory<Component: Component<Processor: Synth>>,
{
    let host_info = unsafe { host_info::get(host) }.unwrap_or_default();
    let component = class.factory.create(&host_info);
    let parameters = Arc::new(Store::new(component.parameter_infos()));
    let processor = component.create_processor(&ProcessingEnvironment::default());
    let editor = class.info.editor.map(|factory| factory(parameters.clone()));
    let rect = editor.as_ref().map_or_else(ERect::default, |editor| {
        let size = editor.size();
        ERect {
            top: 0,
            left: 0,
            bottom: size.height,
            right: size.width,
        }
    });

    let mut flags = effect_flags::IS_SYNTH
        | effect_flags::CAN_REPLACING
        | effect_flags::CAN_DOUBLE_REPLACING;
    if editor.is_some() {
        flags |= effect_flags::HAS_EDITOR;
    }

    let effect = AEffect {
        magic: EFFECT_MAGIC,
        dispatcher: Some(dispatch::<CF::Component>),
        process: None,
        set_parameter: Some(set_parameter::<CF::Component>),
        get_parameter: Some(get_parameter::<CF::Component>),
        num_programs: 0,
        num_params: i32::try_from(parameters.len()).unwrap_or(i32::MAX),
        num_inputs: capabilities::NUM_INPUTS,
        num_outputs: capabilities::NUM_OUTPUTS,
        flags,
        reserved_for_host_1: 0,
        reserved_for_host_2: 0,
        initial_delay: 0,
        real_qualities: 0,
        off_qualities: 0,
        io_ratio: 0.0,
        object: std::ptr::null_mut(),
        user: std::ptr::null_mut(),
        unique_id: i32::from_ne_bytes(class.info.unique_id),
        version: class.info.version,
        process_replacing: Some(process_replacing::<CF::Component>),
        process_double_replacing: Some(process_double_replacing::<CF::Component>),
        future: [0; 56],
    };

    debug!(
        name = class.info.name,
        host = %host_info.name,
        parameters = parameters.len(),
        editor = editor.is_some(),
        "created instance"
    );

    let instance = Box::into_raw(Box::new(Instance {
        effect: UnsafeCell::new(effect),
        processor,
        parameters,
        editor: editor.map(|editor| {
            Mutex::new(EditorSlot {
                editor,
                open: false,
            })
        }),
        rect,
        class: class.info,
        info,
    }));
    unsafe {
        let effect = UnsafeCell::raw_get(&raw const (*instance).effect);
        (*effect).object = instance.cast();
        effect
    }
}

type ProcessorOf<C> = <C as Component>::Processor;

unsafe fn instance<'a, P>(effect: *mut AEffect) -> Option<&'a Instance<P>> {
    if effect.is_null() {
        return None;
    }
    unsafe { (*effect).object.cast::<Instance<P>>().as_ref() }
}

unsafe extern "C" fn dispatch<C: Component<Processor: Synth>>(
    effect: *mut AEffect,
    opcode: i32,
    index: i32,
    value: isize,
    ptr: *mut c_void,
    opt: f32,
) -> isize {
    let Some(instance) = (unsafe { instance::<ProcessorOf<C>>(effect) }) else {
        return 0;
    };
    let request = match unsafe { Request::decode(opcode, index, value, ptr, opt) } {
        Ok(request) => request,
        Err(err @ DecodeError::UnknownOpcode(_)) => {
            trace!("{err}");
            return 0;
        }
        Err(err @ DecodeError::NullPointer(_)) => {
            warn!("{err}");
            return 0;
        }
    };
    let closing = matches!(request, Request::Close);
    let response = instance.handle(request);
    if closing {
        unsafe {
            drop(Box::from_raw(
                (*effect).object.cast::<Instance<ProcessorOf<C>>>(),
            ));
        }
    }
    response
}

unsafe extern "C" fn set_parameter<C: Component<Processor: Synth>>(
    effect: *mut AEffect,
    index: i32,
    value: f32,
) {
    let Some(instance) = (unsafe { instance::<ProcessorOf<C>>(effect) }) else {
        return;
    };
    let result = usize::try_from(index)
        .map_err(|_| SetError::NotFound)
        .and_then(|index| instance.parameters.set(index, value));
    if let Err(err) = result {
        trace!(index, value, ?err, "ignored parameter change");
    }
}

unsafe extern "C" fn get_parameter<C: Component<Processor: Synth>>(
    effect: *mut AEffect,
    index: i32,
) -> f32 {
    let Some(instance) = (unsafe { instance::<ProcessorOf<C>>(effect) }) else {
        return 0.0;
    };
    usize::try_from(index)
        .ok()
        .and_then(|index| instance.parameters.get(index))
        .unwrap_or(0.0)
}

unsafe extern "C" fn process_replacing<C: Component<Processor: Synth>>(
    effect: *mut AEffect,
    _inputs: *mut *mut f32,
    outputs: *mut *mut f32,
    sample_frames: i32,
) {
    let Some(instance) = (unsafe { instance::<ProcessorOf<C>>(effect) }) else {
        return;
    };
    let Some(mut output) = (unsafe { HostOutput::from_raw(outputs, sample_frames) }) else {
        return;
    };
    instance
        .processor
        .process(instance.parameters.as_ref(), &mut output);
}

unsafe extern "C" fn process_double_replacing<C: Component<Processor: Synth>>(
    effect: *mut AEffect,
    _inputs: *mut *mut f64,
    outputs: *mut *mut f64,
    sample_frames: i32,
) {
    let Some(instance) = (unsafe { instance::<ProcessorOf<C>>(effect) }) else {
        return;
    };
    let Some(mut output) = (unsafe { HostOutput::from_raw(outputs, sample_frames) }) else {
        return;
    };
    let mut scratch = StackStereo::<SCRATCH_FRAMES>::default();
    for (left, right) in output
        .left
        .chunks_mut(SCRATCH_FRAMES)
        .zip(output.right.chunks_mut(SCRATCH_FRAMES))
    {
        scratch.set_num_frames(left.len());
        instance
            .processor
            .process(instance.parameters.as_ref(), &mut scratch);
        for (dest, sample) in left.iter_mut().zip(scratch.channel(0)) {
            *dest = f64::from(*sample);
        }
        for (dest, sample) in right.iter_mut().zip(scratch.channel(1)) {
            *dest = f64::from(*sample);
        }
    }
}

/// The host's two output channels.
struct HostOutput<'a, T> {
    left: &'a mut [T],
    right: &'a mut [T],
}

impl<T> HostOutput<'_, T> {
    /// Returns `None` if there's nothing we can render into.
    unsafe fn from_raw(outputs: *mut *mut T, sample_frames: i32) -> Option<Self> {
        let num_frames = usize::try_from(sample_frames).ok().filter(|n| *n > 0)?;
        if outputs.is_null() {
            return None;
        }
        unsafe {
            let left = *outputs;
            let right = *outputs.add(1);
            if left.is_null() || right.is_null() {
                return None;
            }
            Some(Self {
                left: std::slice::from_raw_parts_mut(left, num_frames),
                right: std::slice::from_raw_parts_mut(right, num_frames),
            })
        }
    }
}

impl Buffer for HostOutput<'_, f32> {
    fn channel_layout(&self) -> ChannelLayout {
        ChannelLayout::Stereo
    }

    fn num_frames(&self) -> usize {
        self.left.len()
    }

    fn channel(&self, channel: usize) -> &[f32] {
        match channel {
            0 => &*self.left,
            1 => &*self.right,
            _ => panic!("stereo buffer has no channel {channel}"),
        }
    }
}

impl BufferMut for HostOutput<'_, f32> {
    fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        match channel {
            0 => &mut *self.left,
            1 => &mut *self.right,
            _ => panic!("stereo buffer has no channel {channel}"),
        }
    }
}

impl<P: Synth> Instance<P> {
    fn parameter_index(&self, index: i32) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|index| *index < self.parameters.len())
    }

    fn with_editor(&self, f: impl FnOnce(&mut EditorSlot) -> isize) -> isize {
        self.editor
            .as_ref()
            .map_or(0, |editor| f(&mut editor.lock()))
    }

    fn handle(&self, request: Request<'_>) -> isize {
        match request {
            Request::Open => {
                debug!(name = self.class.name, "open");
                0
            }
            Request::Close => {
                debug!(name = self.class.name, "close");
                self.with_editor(|slot| {
                    slot.close();
                    0
                });
                1
            }
            Request::GetParamLabel { index, out } => {
                let units = self
                    .parameter_index(index)
                    .and_then(|index| self.parameters.units(index));
                strings::write(units.unwrap_or_default(), out);
                0
            }
            Request::GetParamDisplay { index, out } => {
                let text = self
                    .parameter_index(index)
                    .and_then(|index| self.parameters.display(index));
                strings::write(text.as_ref().map_or("", |text| text.as_str()), out);
                0
            }
            Request::GetParamName { index, out } => {
                let name = self
                    .parameter_index(index)
                    .and_then(|index| self.parameters.name(index));
                strings::write(name.unwrap_or_default(), out);
                0
            }
            Request::SetSampleRate { rate } => {
                debug!(rate, "sample rate changed");
                self.processor.set_sampling_rate(rate);
                0
            }
            Request::SetBlockSize { size } => {
                debug!(size, "block size changed");
                0
            }
            Request::MainsChanged { on } => {
                debug!(on, "mains changed");
                self.processor.set_processing(on);
                0
            }
            Request::EditGetRect { out } => self.with_editor(|_| {
                *out = &raw const self.rect;
                1
            }),
            Request::EditOpen { parent } => self.with_editor(|slot| {
                slot.close();
                slot.open = slot.editor.open(parent);
                debug!(open = slot.open, "editor opened");
                isize::from(slot.open)
            }),
            Request::EditClose => self.with_editor(|slot| {
                slot.close();
                debug!("editor closed");
                1
            }),
            Request::EditIdle => self.with_editor(|slot| {
                if slot.open {
                    slot.editor.idle();
                }
                1
            }),
            Request::ProcessEvents { events } => isize::from(self.processor.handle_events(
                events::midi_data(events.iter()),
                self.parameters.as_ref(),
            )),
            Request::CanBeAutomated { index } => isize::from(
                self.parameter_index(index)
                    .and_then(|index| self.parameters.info(index))
                    .is_some_and(|info| info.flags.automatable),
            ),
            Request::GetPlugCategory => capabilities::PLUG_CATEGORY,
            Request::GetEffectName { out } => {
                strings::write(self.class.name, out);
                1
            }
            Request::GetVendorString { out } => {
                strings::write(self.info.vendor, out);
                1
            }
            Request::GetProductString { out } => {
                strings::write(self.class.product, out);
                1
            }
            Request::GetVendorVersion => self.info.vendor_version as isize,
            Request::CanDo { capability } => {
                capability.to_str().map_or(CanDo::No, capabilities::can_do) as isize
            }
            Request::GetVstVersion => VST_VERSION as isize,
            Request::GetNumMidiInputChannels => capabilities::MIDI_INPUT_CHANNELS,
            Request::GetNumMidiOutputChannels => capabilities::MIDI_OUTPUT_CHANNELS,
        }
    }
}
