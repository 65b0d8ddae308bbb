#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    rustdoc::private_doc_tests,
    rustdoc::unescaped_backticks,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]
#![doc = include_str!("../README.md")]

pub mod audio;
pub mod events;
pub mod parameters;
pub mod synth;

/// Information about the processing environment that the processor will run in.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingEnvironment {
    /// The sample rate of the audio.
    ///
    /// Hosts may change this later through [`Processor::set_sampling_rate`].
    pub sampling_rate: f32,
}

impl Default for ProcessingEnvironment {
    fn default() -> Self {
        Self {
            sampling_rate: 44100.0,
        }
    }
}

/// The main plug-in abstraction.
///
/// [`Component`]s can be wrapped in host plug-in formats for use in audio software.
///
/// [`Component`]s contain information about the parameters of a processor
/// as well as the ability to create a processor.
///
/// A plug-in should only have one `Component` that represents the whole
/// plug-in - to compose _parts_ of the plug-in you should use a different
/// abstraction.
pub trait Component {
    /// The processor that this component creates.
    type Processor;

    /// Get information about the parameters of this component
    ///
    /// This must return the same value every time it is called.
    fn parameter_infos(&self) -> Vec<parameters::Info> {
        Default::default()
    }

    /// Create the processor that will actually process audio.
    ///
    /// Note any state needed to process audio should be allocated here.
    fn create_processor(&self, environment: &ProcessingEnvironment) -> Self::Processor;
}

/// A base trait for audio processors.
///
/// Hosts may call into a processor from their control thread while the audio
/// thread is rendering, so every method takes `&self`. State that crosses
/// between threads must be held in single-word atomics.
pub trait Processor {
    /// Enable or disable processing. Must not allocate or block.
    ///
    /// Processing starts off.
    ///
    /// Toggling this on -> off -> on must generate the _exact_ same output
    /// as the first time we were turned on - i.e., this acts as a reset.
    fn set_processing(&self, processing: bool);

    /// Change the sample rate. Must not allocate or block.
    ///
    /// The new rate applies from the next sample rendered.
    fn set_sampling_rate(&self, sampling_rate: f32);
}
