use std::sync::atomic::Ordering;

use atomic_float::AtomicF32;
use vstfx_component::{
    ProcessingEnvironment, Processor,
    audio::{BufferMut, channels_mut},
    events::Data,
    parameters::{IdHash, States, hash_id},
    synth::Synth as SynthT,
};

use self::{
    env::Envelope,
    osc_utils::{increment, wrap_phase},
};

mod env;
mod osc_utils;


/// A single sine oscillator, retriggered by every note on.
#[derive(Debug)]
pub struct Synth {
    sampling_rate: AtomicF32,

    // Radians per sample.
    increment: AtomicF32,

    // Only written by the audio thread, except on reset.
    phase: AtomicF32,

    envelope: Envelope,

    gain_id: IdHash,
    release_id: IdHash,
}

impl Synth {
    /// A silent synth running at `env`'s sample rate.
    #[must_use]
    pub fn new(env: &ProcessingEnvironment) -> Self {
        Self {
            sampling_rate: AtomicF32::new(env.sampling_rate),
            increment: AtomicF32::new(0.0),
            phase: AtomicF32::new(0.0),
            envelope: Envelope::default(),
            gain_id: hash_id(super::GAIN),
            release_id: hash_id(super::RELEASE),
        }
    }

    fn note_on(&self, pitch: u8) {
        let sampling_rate = self.sampling_rate.load(Ordering::Relaxed);
        self.increment
            .store(increment(f32::from(pitch), sampling_rate), Ordering::Relaxed);
        self.envelope.on();
    }
}

impl Processor for Synth {
    fn set_processing(&self, processing: bool) {
        if !processing {
            self.phase.store(0.0, Ordering::Relaxed);
            self.increment.store(0.0, Ordering::Relaxed);
            self.envelope.reset();
        }
    }

    fn set_sampling_rate(&self, sampling_rate: f32) {
        if sampling_rate.is_finite() && sampling_rate > 0.0 {
            self.sampling_rate.store(sampling_rate, Ordering::Relaxed);
        }
    }
}

impl SynthT for Synth {
    fn handle_events<E: IntoIterator<Item = Data>, P: States>(
        &self,
        events: E,
        _parameters: &P,
    ) -> bool {
        for data in events {
            match data {
                Data::NoteOn { data } if data.velocity > 0 => self.note_on(data.pitch),
                Data::NoteOn { .. } | Data::NoteOff { .. } => self.envelope.off(),
                Data::ControlChange { .. } | Data::PitchBend { .. } => {}
            }
        }
        true
    }

    fn process<P: States, O: BufferMut>(&self, parameters: &P, output: &mut O) {
        let mut phase = self.phase.load(Ordering::Relaxed);
        for frame in 0..output.num_frames() {
            let gain = parameters.get_by_hash(self.gain_id).unwrap_or(0.0);
            let release_rate =
                super::release_rate(parameters.get_by_hash(self.release_id).unwrap_or(1.0));
            let sample = self.envelope.gain() * phase.sin() * gain;
            for channel in channels_mut(output) {
                channel[frame] = sample;
            }
            phase += self.increment.load(Ordering::Relaxed);
            self.envelope
                .advance(release_rate / self.sampling_rate.load(Ordering::Relaxed));
        }
        self.phase.store(wrap_phase(phase), Ordering::Relaxed);
    }
}
