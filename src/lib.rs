//! In-place XOR of byte buffers, for embedding as a native interpreter module.
//!
//! The host runtime loads the module, calls [`module::init`] (or links the C
//! ABI in [`ffi`]) and exposes `bufxor.xor(out, in)`, which computes
//! `out[i] ^= in[i]` for every byte of `out` without allocating.
//!
//! ```
//! let mut a = [0x01u8, 0xFF, 0x00];
//! bufxor::xor(&mut a, &[0x01u8, 0x0F, 0xAA]).unwrap();
//! assert_eq!(a, [0x00, 0xF0, 0xAA]);
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(all(not(feature = "std"), not(test)))]
#[panic_handler]
fn panic(_info: &::core::panic::PanicInfo) -> ! {
    loop {}
}

pub mod buffer;
pub mod config;
pub mod core;
pub mod error;
pub mod ffi;
pub mod module;
pub mod ops;

pub use buffer::{BufferFlags, HostBuffer, ReadBuffer, WriteBuffer};
pub use config::ModuleConfig;
pub use error::{Arg, ErrorKind, InvalidArgument};
pub use ops::{xor, xor_host, xor_to, xor_to_host};
