//! Optional editor windows.
//!
//! The host owns the window; an [`Editor`] only draws into a child of the
//! native parent handle it is given. Editors see the same parameter
//! [`Store`] that the host automates, so changes made in the UI are picked
//! up by the processor like any other parameter change.

use std::{ffi::c_void, sync::Arc};

use vstfx_component::parameters::Store;

/// Size of an editor in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Width of the editor
    pub width: i16,
    /// Height of the editor
    pub height: i16,
}

/// A plug-in editor.
///
/// All methods are called from the host's UI thread.
pub trait Editor: Send {
    /// The fixed size of the editor.
    fn size(&self) -> Size;

    /// Attach to the host's native window handle.
    ///
    /// Returns whether the editor could be opened.
    fn open(&mut self, parent: *mut c_void) -> bool;

    /// Called periodically while the editor is open.
    fn idle(&mut self) {}

    /// Detach from the host's window.
    fn close(&mut self);
}

/// Creates the editor for a new instance.
pub type EditorFactory = fn(parameters: Arc<Store>) -> Box<dyn Editor>;
