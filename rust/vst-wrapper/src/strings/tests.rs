use std::ffi::c_char;

use super::{read_buffer, truncate, write};

#[test]
fn truncate_on_char_boundary() {
    assert_eq!(truncate("Release", 7), "Release");
    assert_eq!(truncate("Release", 4), "Rele");
    // "é" is two bytes.
    assert_eq!(truncate("caf\u{e9}", 4), "caf");
    assert_eq!(truncate("", 0), "");
}

#[test]
fn write_fits_terminator_in_capacity() {
    let mut out = [0x55 as c_char; 8];
    write("1300.0", &mut out);
    assert_eq!(read_buffer(&out).as_deref(), Some("1300.0"));

    write("12345678", &mut out);
    assert_eq!(read_buffer(&out).as_deref(), Some("1234567"));
    assert_eq!(out[7], 0);
}

#[test]
fn write_leaves_bytes_past_terminator() {
    let mut out = [0x55 as c_char; 8];
    write("dB", &mut out);
    assert_eq!(out[2], 0);
    assert_eq!(out[3], 0x55);
}

#[test]
fn write_to_empty_buffer_is_noop() {
    let mut out: [c_char; 0] = [];
    write("anything", &mut out);
}

#[test]
fn read_requires_terminator() {
    let unterminated = [b'a' as c_char; 4];
    assert_eq!(read_buffer(&unterminated), None);
}
