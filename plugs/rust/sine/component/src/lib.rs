#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]

//! A monophonic sine instrument with a linear decay envelope.

use std::fmt;

use vstfx_component::parameters::{self, Display, Flags, StaticInfoRef};
use vstfx_component::{Component as ComponentT, ProcessingEnvironment};

mod synth;

#[cfg(test)]
mod tests;

pub use synth::Synth;

/// Unique id of the output gain parameter.
pub const GAIN: &str = "gain";

/// Unique id of the release rate parameter.
pub const RELEASE: &str = "release";

const GAIN_DEFAULT: f32 = 0.5;

// Normalized 1.0 is a release rate of 0, i.e. notes sustain forever.
const RELEASE_DEFAULT: f32 = 1.0;

/// The release parameter is exposed to hosts inverted: normalized 0 is the
/// fastest decay and 1 is none at all. The engine wants the rate.
fn release_rate(normalized: f32) -> f32 {
    1.0 - normalized
}

#[allow(clippy::float_cmp)]
fn display_release(normalized: f32, out: &mut dyn fmt::Write) -> fmt::Result {
    let rate = release_rate(normalized);
    if rate == 0.0 {
        return out.write_str("inf");
    }
    // In double precision, otherwise values ending in .x5 round a tenth low.
    let millis = (1.8f64 - f64::from(rate)) * 1000.0;
    write!(out, "{:.1}", millis.clamp(0.0, 10000.0))
}

/// The instrument's parameters, in host index order.
pub static PARAMETERS: [StaticInfoRef; 2] = [
    StaticInfoRef {
        unique_id: GAIN,
        title: "Gain",
        units: "dB",
        default: GAIN_DEFAULT,
        flags: Flags { automatable: true },
        display: Display::Decimal,
    },
    StaticInfoRef {
        unique_id: RELEASE,
        title: "Release",
        units: "ms",
        default: RELEASE_DEFAULT,
        flags: Flags { automatable: true },
        display: Display::Custom(display_release),
    },
];

/// The sine instrument.
#[derive(Clone, Debug, Default)]
pub struct Component {}

impl ComponentT for Component {
    type Processor = Synth;

    fn parameter_infos(&self) -> Vec<parameters::Info> {
        parameters::to_infos(&PARAMETERS)
    }

    fn create_processor(&self, env: &ProcessingEnvironment) -> Self::Processor {
        Synth::new(env)
    }
}
