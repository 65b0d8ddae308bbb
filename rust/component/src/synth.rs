//! Abstractions for processors that generate audio.

use crate::{Processor, audio::BufferMut, events::Data, parameters::States};

/// A trait for synthesizers
///
/// A synthesizer is a processor that creates audio from a series of _events_,
/// such as Note On, or Note Off.
///
/// Events are applied at buffer granularity: the host delivers a batch of
/// events, then asks for the next buffer of audio. Both calls may come from
/// different threads, and `handle_events` may even run while `process` is
/// still rendering the previous buffer.
pub trait Synth: Processor {
    /// Handle a batch of events, in order. Must not allocate or block.
    ///
    /// Returns whether the events were accepted. Processors that can't
    /// fail to consume events should always return `true`.
    fn handle_events<E: IntoIterator<Item = Data>, P: States>(
        &self,
        events: E,
        parameters: &P,
    ) -> bool;

    /// Render a buffer of audio. Must not allocate or block.
    ///
    /// `output` will be received in an undetermined state and must
    /// be filled with audio by the processor during this call.
    ///
    /// `output` may be any length, including empty.
    fn process<P: States, O: BufferMut>(&self, parameters: &P, output: &mut O);
}
