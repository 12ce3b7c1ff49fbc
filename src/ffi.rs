//! C ABI for host runtime bindings.
//!
//! Status codes are stable: `0` on success, a negative [`BufxorStatus`] naming
//! the cause otherwise. Every non-zero status is the same invalid-argument
//! failure and `out` is left untouched.

use core::ffi::c_char;

use crate::buffer::{BufferFlags, HostBuffer};
use crate::config::MODULE_NAME_NUL;
use crate::error::{Arg, InvalidArgument};
use crate::ops::{xor_host, xor_to_host};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufxorStatus {
    Ok = 0,
    OutNotABuffer = -1,
    InputNotABuffer = -2,
    InputTooShort = -3,
    Overlap = -4,
}

impl From<InvalidArgument> for BufxorStatus {
    fn from(e: InvalidArgument) -> Self {
        match e {
            InvalidArgument::NotABuffer { arg: Arg::Out } => BufxorStatus::OutNotABuffer,
            InvalidArgument::NotABuffer { .. } => BufxorStatus::InputNotABuffer,
            InvalidArgument::InputTooShort { .. } => BufxorStatus::InputTooShort,
            InvalidArgument::Overlap { .. } => BufxorStatus::Overlap,
            // Arity is fixed by the C signatures.
            InvalidArgument::ArgCount { .. } => BufxorStatus::InputNotABuffer,
        }
    }
}

fn status(result: Result<(), InvalidArgument>) -> i32 {
    match result {
        Ok(()) => BufxorStatus::Ok as i32,
        Err(e) => {
            log::warn!("bufxor: rejected call: {}", e);
            BufxorStatus::from(e) as i32
        }
    }
}

/// In-place XOR of `in` into `out` over `out_len` bytes.
///
/// # Safety
/// `out` must be valid for reads and writes of `out_len` bytes and `input`
/// valid for reads of `in_len` bytes, for the duration of the call. Either
/// pointer may be null only with a zero length.
#[no_mangle]
pub unsafe extern "C" fn bufxor_xor(
    out: *mut u8,
    out_len: usize,
    input: *const u8,
    in_len: usize,
) -> i32 {
    let mut out = HostBuffer::from_raw_parts(out, out_len, BufferFlags::WRITE);
    let input = HostBuffer::from_raw_read(input, in_len);
    status(xor_host(&mut out, &input))
}

/// Three-operand XOR: `out[i] = a[i] ^ b[i]` over `out_len` bytes. Either
/// operand may start at `out` itself; any other overlap with `out` is rejected.
///
/// # Safety
/// As [`bufxor_xor`], for each of the three buffers.
#[no_mangle]
pub unsafe extern "C" fn bufxor_xor_to(
    out: *mut u8,
    out_len: usize,
    a: *const u8,
    a_len: usize,
    b: *const u8,
    b_len: usize,
) -> i32 {
    let mut out = HostBuffer::from_raw_parts(out, out_len, BufferFlags::WRITE);
    let a = HostBuffer::from_raw_read(a, a_len);
    let b = HostBuffer::from_raw_read(b, b_len);
    status(xor_to_host(&mut out, &a, &b))
}

/// Static, NUL-terminated description of a status code.
#[no_mangle]
pub extern "C" fn bufxor_strerror(code: i32) -> *const c_char {
    let msg: &'static [u8] = match code {
        0 => b"ok\0",
        -1 => b"invalid argument: 'out' is not a writable byte buffer\0",
        -2 => b"invalid argument: input is not a readable byte buffer\0",
        -3 => b"invalid argument: input shorter than 'out'\0",
        -4 => b"invalid argument: input overlaps 'out'\0",
        _ => b"unknown status\0",
    };
    msg.as_ptr() as *const c_char
}

/// NUL-terminated module name.
#[no_mangle]
pub extern "C" fn bufxor_module_name() -> *const c_char {
    MODULE_NAME_NUL.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn bufxor_version() -> u32 {
    0x000100
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::CStr;

    #[test]
    fn test_xor_ok() {
        let mut a = [0x01u8, 0xFF, 0x00];
        let b = [0x01u8, 0x0F, 0xAA];
        let rc = unsafe { bufxor_xor(a.as_mut_ptr(), a.len(), b.as_ptr(), b.len()) };
        assert_eq!(rc, 0);
        assert_eq!(a, [0x00, 0xF0, 0xAA]);
    }

    #[test]
    fn test_xor_empty() {
        let rc = unsafe { bufxor_xor(core::ptr::null_mut(), 0, core::ptr::null(), 0) };
        assert_eq!(rc, 0);
    }

    #[test]
    fn test_xor_short_input() {
        let mut a = [1u8, 2, 3];
        let b = [1u8, 2];
        let rc = unsafe { bufxor_xor(a.as_mut_ptr(), 3, b.as_ptr(), 2) };
        assert_eq!(rc, BufxorStatus::InputTooShort as i32);
        assert_eq!(a, [1, 2, 3]);
    }

    #[test]
    fn test_xor_null_buffers() {
        let mut a = [1u8; 4];
        let rc = unsafe { bufxor_xor(a.as_mut_ptr(), 4, core::ptr::null(), 4) };
        assert_eq!(rc, BufxorStatus::InputNotABuffer as i32);
        let rc = unsafe { bufxor_xor(core::ptr::null_mut(), 4, a.as_ptr(), 4) };
        assert_eq!(rc, BufxorStatus::OutNotABuffer as i32);
        assert_eq!(a, [1u8; 4]);
    }

    #[test]
    fn test_xor_to_aliased_display() {
        let mut display = [0b1010_1010u8; 12];
        let mask = [0xFFu8; 12];
        let ptr = display.as_mut_ptr();
        let rc = unsafe { bufxor_xor_to(ptr, 12, ptr, 12, mask.as_ptr(), 12) };
        assert_eq!(rc, 0);
        assert_eq!(display, [0b0101_0101u8; 12]);
    }

    #[test]
    fn test_xor_to_aliased_second_operand() {
        let mut data = [0xF0u8, 0x0F, 0x33];
        let a = [0xFFu8, 0xFF, 0x11];
        let ptr = data.as_mut_ptr();
        let rc = unsafe { bufxor_xor_to(ptr, 3, a.as_ptr(), 3, ptr, 3) };
        assert_eq!(rc, 0);
        assert_eq!(data, [0x0F, 0xF0, 0x22]);
    }

    #[test]
    fn test_xor_to_partial_overlap() {
        let mut data = [5u8; 10];
        let mask = [0xFFu8; 8];
        let ptr = data.as_mut_ptr();
        let rc = unsafe { bufxor_xor_to(ptr, 8, mask.as_ptr(), 8, ptr.wrapping_add(2), 8) };
        assert_eq!(rc, BufxorStatus::Overlap as i32);
        assert_eq!(data, [5u8; 10]);
    }

    #[test]
    fn test_generated_header_is_prefixed() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/include/bufxor.h");
        let header = match std::fs::read_to_string(path) {
            Ok(header) => header,
            // build.rs only warns when it cannot write the header
            Err(_) => return,
        };
        assert!(header.contains("BufxorStatus_Ok = 0"));
        assert!(header.contains("BufxorStatus_Overlap = -4"));
        assert!(!header.contains("BufferFlags"));
        assert!(header.contains("bufxor_xor_to"));
    }

    #[test]
    fn test_xor_overlap() {
        let mut data = [9u8; 10];
        let ptr = data.as_mut_ptr();
        let rc = unsafe { bufxor_xor(ptr.wrapping_add(1), 8, ptr, 10) };
        assert_eq!(rc, BufxorStatus::Overlap as i32);
        assert_eq!(data, [9u8; 10]);
    }

    #[test]
    fn test_strerror_and_name() {
        let msg = unsafe { CStr::from_ptr(bufxor_strerror(-3)) };
        assert_eq!(msg.to_str().unwrap(), "invalid argument: input shorter than 'out'");
        let unknown = unsafe { CStr::from_ptr(bufxor_strerror(42)) };
        assert_eq!(unknown.to_str().unwrap(), "unknown status");
        let name = unsafe { CStr::from_ptr(bufxor_module_name()) };
        assert_eq!(name.to_str().unwrap(), crate::config::MODULE_NAME);
        assert_eq!(bufxor_version(), 0x000100);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            BufxorStatus::from(InvalidArgument::NotABuffer { arg: Arg::B }),
            BufxorStatus::InputNotABuffer
        );
        assert_eq!(
            BufxorStatus::from(InvalidArgument::Overlap { arg: Arg::In }),
            BufxorStatus::Overlap
        );
    }
}
