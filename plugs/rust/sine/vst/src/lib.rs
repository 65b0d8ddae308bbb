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

//! VST 2.4 build of the sine instrument.

use sine_component::Component;
use vstfx_vst_wrapper::{ClassInfo, HostInfo, Info, SynthClass};

vstfx_vst_wrapper::wrap_plugin!(
    SynthClass {
        info: ClassInfo {
            name: "VSTFXTest",
            product: "VSTFX Test",
            unique_id: *b"SAMP",
            version: 1,
            editor: None,
        },
        factory: |_: &HostInfo| -> Component { Default::default() },
    },
    Info {
        vendor: "Your name here",
        vendor_version: 1000,
    }
);
