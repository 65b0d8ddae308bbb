use std::f32::consts::{PI, TAU};

/// Phase increment in radians per sample for a MIDI pitch, tuned to A4 = 440Hz.
pub fn increment(midi_pitch: f32, sampling_rate: f32) -> f32 {
    (440f32 * TAU / sampling_rate) * 2.0f32.powf((midi_pitch - 69f32) / 12f32)
}

// Past this, repeated subtraction would take too long on the audio thread.
const MAX_LOOPED_WRAP: f32 = 1024.0 * TAU;

/// Bring a running phase back into `(-π, π]`.
pub fn wrap_phase(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let mut phase = if phase.abs() > MAX_LOOPED_WRAP {
        phase.rem_euclid(TAU)
    } else {
        phase
    };
    while phase > PI {
        phase -= TAU;
    }
    while phase <= -PI {
        phase += TAU;
    }
    phase
}
