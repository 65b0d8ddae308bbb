use std::sync::atomic::Ordering;

use atomic_float::AtomicF32;

use super::{FixedText, IdHash, Info, States, hash_id};

/// Capacity of the text produced by [`Store::display`].
///
/// Wrappers truncate further to whatever their host protocol allows.
pub const DISPLAY_CAPACITY: usize = 32;

/// Why [`Store::set`] refused a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// No parameter has this index.
    NotFound,

    /// The value was NaN.
    InvalidValue,
}

/// The current normalized value of every parameter of a component.
///
/// The table is fixed at construction. Each value is an independent atomic,
/// so the store can be shared between a host's control thread, an editor and
/// the audio thread without locks. There is no cross-parameter atomicity:
/// a reader may observe one parameter's new value and another's old one.
#[derive(Debug)]
pub struct Store {
    infos: Vec<Info>,
    hashes: Vec<IdHash>,
    values: Vec<AtomicF32>,
}

impl Store {
    /// Create a store holding each parameter's default value.
    #[must_use]
    pub fn new(infos: Vec<Info>) -> Self {
        let hashes = infos.iter().map(|info| hash_id(&info.unique_id)).collect();
        let values = infos
            .iter()
            .map(|info| AtomicF32::new(info.default.clamp(0.0, 1.0)))
            .collect();
        Self {
            infos,
            hashes,
            values,
        }
    }

    /// The number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Metadata of the parameter at `index`.
    #[must_use]
    pub fn info(&self, index: usize) -> Option<&Info> {
        self.infos.get(index)
    }

    /// The current normalized value, or `None` if `index` is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).map(|v| v.load(Ordering::Relaxed))
    }

    /// Set a parameter's normalized value.
    ///
    /// Values outside of `0.0..=1.0` are clamped.
    ///
    /// # Errors
    ///
    ///  - Returns `NotFound` if `index` is out of range.
    ///  - Returns `InvalidValue` if `value` is NaN.
    ///
    /// In both cases the table is left unchanged.
    pub fn set(&self, index: usize, value: f32) -> Result<(), SetError> {
        let slot = self.values.get(index).ok_or(SetError::NotFound)?;
        if value.is_nan() {
            return Err(SetError::InvalidValue);
        }
        slot.store(value.clamp(0.0, 1.0), Ordering::Relaxed);
        Ok(())
    }

    /// The parameter's name, as shown by hosts.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.info(index).map(|info| info.title.as_str())
    }

    /// The parameter's unit label.
    #[must_use]
    pub fn units(&self, index: usize) -> Option<&str> {
        self.info(index).map(|info| info.units.as_str())
    }

    /// The current value of the parameter as human-readable text.
    #[must_use]
    pub fn display(&self, index: usize) -> Option<FixedText<DISPLAY_CAPACITY>> {
        let info = self.info(index)?;
        let value = self.get(index)?;
        let mut text = FixedText::new();
        // `FixedText` truncates rather than failing, so only a broken custom
        // rule can error here, and then we show whatever it managed to write.
        let _ = info.display.write(value, &mut text);
        Some(text)
    }
}

impl States for Store {
    fn get_by_hash(&self, id_hash: IdHash) -> Option<f32> {
        let index = self.hashes.iter().position(|h| *h == id_hash)?;
        self.get(index)
    }
}
