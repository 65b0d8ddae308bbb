//! C string plumbing for host-owned buffers.

use std::ffi::c_char;

/// The longest prefix of `text` that fits in `max_bytes`, cut on a character boundary.
pub fn truncate(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Copy `text` into a host buffer, always NUL-terminated.
///
/// Text that doesn't fit is truncated. Nothing is written into an empty buffer.
pub fn write(text: &str, out: &mut [c_char]) {
    let Some(max_bytes) = out.len().checked_sub(1) else {
        return;
    };
    let text = truncate(text, max_bytes);
    for (dest, byte) in out.iter_mut().zip(text.bytes()) {
        *dest = byte as c_char;
    }
    out[text.len()] = 0;
}

/// Read the string in a fixed buffer the host filled, up to the first NUL.
pub fn read_buffer(buffer: &[c_char]) -> Option<String> {
    let len = buffer.iter().position(|c| *c == 0)?;
    let bytes: Vec<u8> = buffer[..len].iter().map(|c| *c as u8).collect();
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests;
