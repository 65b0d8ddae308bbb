#![doc = include_str!("../README.md")]

pub use editor::{Editor, EditorFactory, Size as UiSize};

/// Contains information about the host.
///
/// You can use this to customize the component based on the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostInfo {
    /// The name of the host, empty if the host didn't say.
    pub name: String,
}

/// A component factory that can create a component.
///
/// This can return a specialized component based on information
/// about the current host
#[allow(clippy::module_name_repetitions)]
pub trait ComponentFactory: Clone {
    /// The type of component that this factory creates
    type Component;

    /// Create a component
    fn create(&self, host: &HostInfo) -> Self::Component;
}

impl<C, F: Fn(&HostInfo) -> C + Clone> ComponentFactory for F {
    type Component = C;
    fn create(&self, host_info: &HostInfo) -> C {
        (self)(host_info)
    }
}

/// Information about a VST instrument
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo<'a> {
    /// User-visible name of the instrument.
    ///
    /// Hosts only show the first 31 bytes.
    pub name: &'a str,

    /// Product name, usually the same as `name`. Hosts only show the first 63 bytes.
    pub product: &'a str,

    /// Four characters that identify the plug-in to the host.
    ///
    /// Hosts use this to find the plug-in again when loading a project, so
    /// it must never change once the plug-in is released.
    pub unique_id: [u8; 4],

    /// Version of the plug-in reported in the descriptor.
    pub version: i32,

    /// Creates the editor. Without one the plug-in reports that it has no editor.
    pub editor: Option<EditorFactory>,
}

/// Information about a synth component
pub struct SynthClass<CF> {
    /// The actual factory.
    pub factory: CF,

    /// Information about the component
    pub info: ClassInfo<'static>,
}

/// General global info about a vst plug-in
#[derive(Debug, Clone, Copy)]
pub struct Info<'a> {
    /// The "vendor" of the plug-in.
    ///
    /// Hosts often present plug-ins grouped by vendor. Hosts only show the first 63 bytes.
    pub vendor: &'a str,

    /// Vendor-specific version number.
    pub vendor_version: i32,
}

use vstfx_component::Component;
use vstfx_component::synth::Synth;

pub mod abi;
pub mod capabilities;
pub mod editor;
pub mod events;

mod dispatch;
mod host_info;
mod instance;
mod strings;

pub use dispatch::DecodeError;

/// Used by [`wrap_plugin!`].
///
/// # Safety
///
/// `host` must be null or the host's callback.
#[doc(hidden)]
pub unsafe fn _create_synth<CF>(
    class: &SynthClass<CF>,
    info: Info<'static>,
    host: Option<abi::HostCallback>,
) -> *mut abi::AEffect
where
    CF: ComponentFactory<Component: Component<Processor: Synth>>,
{
    unsafe { instance::create(class, info, host) }
}

/// Create a VST 2.4-compatible plug-in entry point.
///
/// This must be invoked exactly once in each plug-in binary. Each call of
/// the generated entry point creates a new, independent instance.
///
/// Note that to create a loadable plug-in, you must add this to your
/// `Cargo.toml`:
///
/// ```toml
/// [lib]
/// crate-type = ["cdylib"]
/// ```
///
/// # Example
///
/// ```
/// use vstfx_component::audio::{BufferMut, channels_mut};
/// use vstfx_component::events::Data;
/// use vstfx_component::parameters::{self, Display, Flags, States, StaticInfoRef};
/// use vstfx_component::synth::Synth;
/// use vstfx_component::{Component as ComponentTrait, ProcessingEnvironment, Processor};
/// use vstfx_vst_wrapper::{ClassInfo, HostInfo, Info, SynthClass};
///
/// static PARAMETERS: [StaticInfoRef; 1] = [StaticInfoRef {
///     unique_id: "level",
///     title: "Level",
///     units: "",
///     default: 0.5,
///     flags: Flags { automatable: true },
///     display: Display::Decimal,
/// }];
///
/// #[derive(Clone, Debug, Default)]
/// pub struct Component {}
///
/// #[derive(Debug, Default)]
/// pub struct Silence {}
///
/// impl Processor for Silence {
///     fn set_processing(&self, _processing: bool) {}
///     fn set_sampling_rate(&self, _sampling_rate: f32) {}
/// }
///
/// impl Synth for Silence {
///     fn handle_events<E: IntoIterator<Item = Data>, P: States>(&self, _events: E, _parameters: &P) -> bool {
///         true
///     }
///
///     fn process<P: States, O: BufferMut>(&self, _parameters: &P, output: &mut O) {
///         for channel in channels_mut(output) {
///             channel.fill(0.0);
///         }
///     }
/// }
///
/// impl ComponentTrait for Component {
///     type Processor = Silence;
///
///     fn parameter_infos(&self) -> Vec<parameters::Info> {
///         parameters::to_infos(&PARAMETERS)
///     }
///
///     fn create_processor(&self, _env: &ProcessingEnvironment) -> Self::Processor {
///         Default::default()
///     }
/// }
///
/// vstfx_vst_wrapper::wrap_plugin!(
///     SynthClass {
///         factory: |_: &HostInfo| -> Component { Default::default() },
///         info: ClassInfo {
///             name: "Silence",
///             product: "Silence",
///             unique_id: *b"SLNC",
///             version: 1,
///             editor: None,
///         },
///     },
///     Info {
///         vendor: "My vendor name",
///         vendor_version: 1000,
///     }
/// );
/// ```
#[macro_export]
macro_rules! wrap_plugin {
    ($CLASS:expr, $INFO:expr) => {
        #[unsafe(no_mangle)]
        #[allow(non_snake_case, clippy::missing_safety_doc)]
        pub unsafe extern "C" fn VSTPluginMain(
            host: Option<$crate::abi::HostCallback>,
        ) -> *mut $crate::abi::AEffect {
            unsafe { $crate::_create_synth(&$CLASS, $INFO, host) }
        }

        /// Older macOS hosts look for this name instead.
        #[cfg(target_os = "macos")]
        #[unsafe(no_mangle)]
        #[allow(non_snake_case, clippy::missing_safety_doc)]
        pub unsafe extern "C" fn main_macho(
            host: Option<$crate::abi::HostCallback>,
        ) -> *mut $crate::abi::AEffect {
            unsafe { VSTPluginMain(host) }
        }
    };
}
