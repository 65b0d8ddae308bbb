//! Types and utilities for Audio Buffers.
//!
//! Components render audio in buffers. Buffers are groups of samples
//! arranged into channels, and each channel is represented by a `&[f32]`.


/// Defines the layout of the channels in a buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChannelLayout {
    /// A single channel buffer.
    Mono,

    /// A two channel buffer.
    ///
    /// Channel 0 is the left channel, and channel 1 is the right channel.
    Stereo,
}

impl ChannelLayout {
    /// The number of channels in the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vstfx_component::audio::ChannelLayout;
    /// assert_eq!(ChannelLayout::Mono.num_channels(), 1);
    /// assert_eq!(ChannelLayout::Stereo.num_channels(), 2);
    /// ```
    #[must_use]
    pub fn num_channels(self) -> usize {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }
}

/// Represents a (potentially multi-channel) buffer of audio samples
///
/// A [Buffer] doesn't specify the exact storage format of the samples, but
/// each channel must be a contiguous slice of samples. All channels must have
/// the same number of samples, that is, [`Buffer::num_frames`].
pub trait Buffer {
    /// The layout of the channels in the buffer.
    fn channel_layout(&self) -> ChannelLayout;

    /// The number of channels in the buffer.
    fn num_channels(&self) -> usize {
        self.channel_layout().num_channels()
    }

    /// The number of frames in the buffer.
    ///
    /// Each channel will contain this many samples.
    fn num_frames(&self) -> usize;

    /// Get a channel from the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is greater than or equal to [`Self::num_channels()`].
    fn channel(&self, channel: usize) -> &[f32];
}

/// Iterates over the channels of a buffer.
///
/// # Examples
/// ```
/// # use vstfx_component::audio::{BufferData, Buffer, channels};
/// let buffer = BufferData::new_stereo([1.0, 2.0], [3.0, 4.0]);
/// assert!(channels(&buffer).eq([[1.0, 2.0], [3.0, 4.0]]));
/// ```
pub fn channels<B: Buffer>(buffer: &B) -> impl Iterator<Item = &[f32]> {
    (0..buffer.num_channels()).map(move |channel| buffer.channel(channel))
}

/// A mutable buffer of audio samples.
pub trait BufferMut: Buffer {
    /// Get a mutable channel from the buffer.
    ///
    /// # Panics
    ///
    /// Panics if `channel` is greater than or equal to [`Buffer::num_channels()`].
    fn channel_mut(&mut self, channel: usize) -> &mut [f32];
}

/// Iterates over the mutable channels of a buffer.
pub fn channels_mut<B: BufferMut>(buffer: &mut B) -> impl Iterator<Item = &mut [f32]> {
    let num_frames = buffer.num_frames();
    (0..buffer.num_channels()).map(move |channel| {
        let channel = buffer.channel_mut(channel);
        // Each channel is a distinct slice, so handing them out together is sound.
        unsafe { std::slice::from_raw_parts_mut(channel.as_mut_ptr(), num_frames) }
    })
}

/// An owned buffer, with all channels stored contiguously.
#[derive(Debug, Clone)]
pub struct BufferData {
    channel_layout: ChannelLayout,
    num_frames: usize,
    data: Vec<f32>,
}

impl BufferData {
    /// Create a silent buffer.
    #[must_use]
    pub fn new(channel_layout: ChannelLayout, num_frames: usize) -> Self {
        Self {
            channel_layout,
            num_frames,
            data: vec![0f32; channel_layout.num_channels() * num_frames],
        }
    }

    /// Create a stereo buffer from two channels of equal length.
    ///
    /// # Panics
    ///
    /// Panics if the channels have different lengths.
    #[must_use]
    pub fn new_stereo<L: IntoIterator<Item = f32>, R: IntoIterator<Item = f32>>(
        left: L,
        right: R,
    ) -> BufferData {
        let mut data: Vec<_> = left.into_iter().collect();
        let left_len = data.len();
        data.extend(right);
        assert_eq!(left_len * 2, data.len());
        Self {
            channel_layout: ChannelLayout::Stereo,
            num_frames: left_len,
            data,
        }
    }
}

impl Buffer for BufferData {
    fn channel_layout(&self) -> ChannelLayout {
        self.channel_layout
    }

    fn num_frames(&self) -> usize {
        self.num_frames
    }

    fn channel(&self, channel: usize) -> &[f32] {
        &self.data[channel * self.num_frames..(channel + 1) * self.num_frames]
    }
}

impl BufferMut for BufferData {
    fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        &mut self.data[channel * self.num_frames..(channel + 1) * self.num_frames]
    }
}

/// A fixed-capacity stereo buffer that lives on the stack.
///
/// Used where a scratch buffer is needed on the audio thread, where we
/// can't allocate.
#[derive(Debug, Clone)]
pub struct StackStereo<const N: usize> {
    num_frames: usize,
    left: [f32; N],
    right: [f32; N],
}

impl<const N: usize> Default for StackStereo<N> {
    fn default() -> Self {
        Self {
            num_frames: N,
            left: [0f32; N],
            right: [0f32; N],
        }
    }
}

impl<const N: usize> StackStereo<N> {
    /// Shrink or grow the active region of the buffer, up to `N` frames.
    pub fn set_num_frames(&mut self, num_frames: usize) {
        self.num_frames = num_frames.min(N);
    }
}

impl<const N: usize> Buffer for StackStereo<N> {
    fn channel_layout(&self) -> ChannelLayout {
        ChannelLayout::Stereo
    }

    fn num_frames(&self) -> usize {
        self.num_frames
    }

    fn channel(&self, channel: usize) -> &[f32] {
        match channel {
            0 => &self.left[..self.num_frames],
            1 => &self.right[..self.num_frames],
            _ => panic!("stereo buffer has no channel {channel}"),
        }
    }
}

impl<const N: usize> BufferMut for StackStereo<N> {
    fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        match channel {
            0 => &mut self.left[..self.num_frames],
            1 => &mut self.right[..self.num_frames],
            _ => panic!("stereo buffer has no channel {channel}"),
        }
    }
}
