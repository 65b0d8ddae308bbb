use std::ffi::c_char;

use crate::HostInfo;
use crate::abi::{AEffect, HostCallback, host_opcodes, string_capacity};
use crate::strings;

unsafe fn get_name(host: HostCallback) -> Option<String> {
    // One spare byte in case the host writes the full capacity plus a terminator.
    let mut name_buffer = [0 as c_char; string_capacity::PRODUCT + 1];
    let res = unsafe {
        host(
            std::ptr::null_mut::<AEffect>(),
            host_opcodes::GET_PRODUCT_STRING,
            0,
            0,
            name_buffer.as_mut_ptr().cast(),
            0.0,
        )
    };
    if res == 0 {
        return None;
    }
    strings::read_buffer(&name_buffer)
}

/// Ask the host who it is. Note that this calls back into the host!
///
/// # Safety
///
/// `host` must be the host's callback.
pub unsafe fn get(host: Option<HostCallback>) -> Option<HostInfo> {
    let name = unsafe { get_name(host?) }?;
    Some(HostInfo { name })
}
