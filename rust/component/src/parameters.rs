//! Code related to the _parameters_ of a processor.
//!
//! A processor has a fixed number of _parameters_ that can be changed over time,
//! either by the hosting application or by an editor UI. Every parameter is a
//! _normalized_ value in `0.0..=1.0`; how that value is shown to the user is
//! decided by the parameter's [`Display`] rule.
//!
//! Components tell the wrapper which parameters exist in their
//! [`crate::Component::parameter_infos`] method. The wrapper then owns a
//! [`Store`] holding the current values, and hands it to the processor as
//! [`States`] during processing.
use std::fmt;

use arrayvec::ArrayString;

mod store;

#[cfg(test)]
mod tests;

pub use store::{DISPLAY_CAPACITY, SetError, Store};

/// Metadata about a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Whether the parameter can be automated.
    ///
    /// In some hosting applications, parameters can be _automated_,
    /// that is, users are provided with a UI to program the parameter
    /// to change over time. If this is `true` (the default), then
    /// this parameter will appear in the automation UI.
    pub automatable: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Flags { automatable: true }
    }
}

/// A custom rule for turning a normalized value into display text.
pub type DisplayFn = fn(f32, &mut dyn fmt::Write) -> fmt::Result;

/// How a parameter's value is converted to text for the host.
#[derive(Debug, Clone, Copy)]
pub enum Display {
    /// The normalized value itself, with one decimal place.
    Decimal,

    /// A parameter-specific rule. It receives the normalized value.
    Custom(DisplayFn),
}

impl Display {
    /// Write `value` as text according to this rule.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write(&self, value: f32, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Display::Decimal => write!(out, "{value:.1}"),
            Display::Custom(f) => f(value, out),
        }
    }
}

macro_rules! unique_id_doc {
    () => {
        "The unique ID of the parameter.

As the name implies, each parameter's id must be unique within
the component's parameters.

Note that this ID will not be presented to the user, it is only
used to refer to the parameter in code."
    };
}

macro_rules! title_doc {
    () => {
        "Human-readable title of the parameter. Hosts show this as the parameter name."
    };
}

macro_rules! units_doc {
    () => {
        "The unit label of the parameter, e.g. \"ms\". Empty for unitless values."
    };
}

macro_rules! default_doc {
    () => {
        "The default normalized value. This _must_ be within `0.0..=1.0`."
    };
}

/// Information about a parameter.
///
/// This is a non-owning reference type, pointing to data with lifetime `'a`.
#[derive(Debug, Clone)]
pub struct InfoRef<'a> {
    #[doc = unique_id_doc!()]
    pub unique_id: &'a str,

    #[doc = title_doc!()]
    pub title: &'a str,

    #[doc = units_doc!()]
    pub units: &'a str,

    #[doc = default_doc!()]
    pub default: f32,

    /// Metadata about the parameter
    pub flags: Flags,

    /// How to present the value as text.
    pub display: Display,
}

/// [`InfoRef`] of static data
pub type StaticInfoRef = InfoRef<'static>;

/// Owning version of [`InfoRef`].
#[derive(Debug, Clone)]
pub struct Info {
    #[doc = unique_id_doc!()]
    pub unique_id: String,

    #[doc = title_doc!()]
    pub title: String,

    #[doc = units_doc!()]
    pub units: String,

    #[doc = default_doc!()]
    pub default: f32,

    /// Metadata about the parameter
    pub flags: Flags,

    /// How to present the value as text.
    pub display: Display,
}

impl<'a> From<&'a InfoRef<'a>> for Info {
    fn from(v: &'a InfoRef<'a>) -> Self {
        Info {
            unique_id: v.unique_id.to_string(),
            title: v.title.to_string(),
            units: v.units.to_string(),
            default: v.default,
            flags: v.flags.clone(),
            display: v.display,
        }
    }
}

/// Converts a slice of [`InfoRef`]s to a vector of [`Info`]s.
///
/// # Examples
///
/// ```
/// # use vstfx_component::parameters::{Display, StaticInfoRef, Info, to_infos};
/// let infos: Vec<Info> = to_infos(&[StaticInfoRef {
///     unique_id: "gain",
///     title: "Gain",
///     units: "",
///     default: 0.5,
///     flags: Default::default(),
///     display: Display::Decimal,
/// }]);
/// assert_eq!(infos[0].title, "Gain");
/// ```
pub fn to_infos(v: &[InfoRef<'_>]) -> Vec<Info> {
    v.iter().map(Into::into).collect()
}

/// A numeric hash of a parameter's ID.
///
/// In contexts where performance is critical, we refer to parameters
/// by a numeric hash of their `unique_id`.
#[derive(Eq, Hash, PartialEq, Clone, Copy, Debug)]
pub struct IdHash {
    internal_hash: u32,
}

/// Creates a hash from a unique ID.
///
/// # Examples
///
/// ```
/// use vstfx_component::parameters::hash_id;
/// assert_eq!(hash_id("gain"), hash_id("gain"));
/// assert_ne!(hash_id("gain"), hash_id("release"));
/// ```
#[must_use]
pub fn hash_id(unique_id: &str) -> IdHash {
    IdHash {
        internal_hash: fxhash::hash32(unique_id) & 0x7fff_ffff,
    }
}

/// Read access to the current value of every parameter.
///
/// Processors receive this during [`crate::synth::Synth::process`]. Values
/// may change between two reads, since the host can write parameters from
/// another thread while audio is rendering.
pub trait States {
    /// Get the current normalized value of a parameter by its hashed unique ID.
    ///
    /// You can get the hash of a unique ID using [`hash_id`].
    fn get_by_hash(&self, id_hash: IdHash) -> Option<f32>;

    /// Get the current normalized value of a parameter by its unique ID.
    fn get_numeric(&self, unique_id: &str) -> Option<f32> {
        self.get_by_hash(hash_id(unique_id))
    }
}

/// Text with a fixed capacity of `N` bytes.
///
/// Writing past the capacity silently truncates at a character boundary,
/// it never overflows or allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedText<const N: usize> {
    text: ArrayString<N>,
    truncated: bool,
}

impl<const N: usize> FixedText<N> {
    /// Create empty text.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: ArrayString::new(),
            truncated: false,
        }
    }

    /// Create text from `s`, truncating to capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vstfx_component::parameters::FixedText;
    /// assert_eq!(FixedText::<4>::from_truncated("Release").as_str(), "Rele");
    /// ```
    #[must_use]
    pub fn from_truncated(s: &str) -> Self {
        let mut text = Self::new();
        text.push_truncated(s);
        text
    }

    /// The text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    fn push_truncated(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        for c in s.chars() {
            if self.text.try_push(c).is_err() {
                self.truncated = true;
                return;
            }
        }
    }
}

impl<const N: usize> fmt::Write for FixedText<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_truncated(s);
        Ok(())
    }
}

impl<const N: usize> AsRef<str> for FixedText<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
