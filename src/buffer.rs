//! Buffer capability model.
//!
//! A host runtime hands over objects that may or may not expose their storage
//! as contiguous bytes, and may expose it read-only. [`ReadBuffer`] and
//! [`WriteBuffer`] express that capability: returning `None` means "this value
//! cannot be viewed as a byte buffer for that access", which the checked
//! operations turn into [`InvalidArgument::NotABuffer`](crate::InvalidArgument).
//!
//! Views are always borrowed. Nothing here allocates or copies.

use core::marker::PhantomData;

use crate::error::{Arg, InvalidArgument};

/// Access requested from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferFlags(u8);

impl BufferFlags {
    pub const NONE: BufferFlags = BufferFlags(0);
    pub const READ: BufferFlags = BufferFlags(1);
    /// Writable storage is always readable too.
    pub const WRITE: BufferFlags = BufferFlags(1 | 2);

    pub const fn contains(self, other: BufferFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// A value that can be viewed as readable bytes.
pub trait ReadBuffer {
    fn read_bytes(&self) -> Option<&[u8]>;
}

/// A value that can be viewed as writable bytes.
pub trait WriteBuffer {
    fn write_bytes(&mut self) -> Option<&mut [u8]>;
}

impl ReadBuffer for [u8] {
    fn read_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl WriteBuffer for [u8] {
    fn write_bytes(&mut self) -> Option<&mut [u8]> {
        Some(self)
    }
}

impl<const N: usize> ReadBuffer for [u8; N] {
    fn read_bytes(&self) -> Option<&[u8]> {
        Some(&self[..])
    }
}

impl<const N: usize> WriteBuffer for [u8; N] {
    fn write_bytes(&mut self) -> Option<&mut [u8]> {
        Some(&mut self[..])
    }
}

#[cfg(any(feature = "std", test))]
impl ReadBuffer for std::vec::Vec<u8> {
    fn read_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

#[cfg(any(feature = "std", test))]
impl WriteBuffer for std::vec::Vec<u8> {
    fn write_bytes(&mut self) -> Option<&mut [u8]> {
        Some(self.as_mut_slice())
    }
}

impl<T: ReadBuffer + ?Sized> ReadBuffer for &T {
    fn read_bytes(&self) -> Option<&[u8]> {
        (**self).read_bytes()
    }
}

impl<T: ReadBuffer + ?Sized> ReadBuffer for &mut T {
    fn read_bytes(&self) -> Option<&[u8]> {
        (**self).read_bytes()
    }
}

impl<T: WriteBuffer + ?Sized> WriteBuffer for &mut T {
    fn write_bytes(&mut self) -> Option<&mut [u8]> {
        (**self).write_bytes()
    }
}

/// Raw storage handed over by a host runtime: a pointer, a length and the
/// capabilities the host grants on it.
///
/// Two `HostBuffer`s may describe overlapping memory. The generic operations in
/// [`crate::ops`] assume they do not; use [`crate::ops::xor_host`] and
/// [`crate::ops::xor_to_host`], which check for overlap first.
#[derive(Debug)]
pub struct HostBuffer<'a> {
    ptr: *mut u8,
    len: usize,
    flags: BufferFlags,
    _storage: PhantomData<&'a mut [u8]>,
}

impl<'a> HostBuffer<'a> {
    /// Wraps host storage.
    ///
    /// # Safety
    /// If `ptr` is non-null, it must be valid for reads of `len` bytes for
    /// `'a`, and valid for writes too when `flags` contains `WRITE`. No other
    /// Rust reference may access that memory while a view returned by this
    /// buffer is alive.
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize, flags: BufferFlags) -> Self {
        HostBuffer { ptr, len, flags, _storage: PhantomData }
    }

    /// Wraps read-only host storage.
    ///
    /// # Safety
    /// As [`HostBuffer::from_raw_parts`]; the memory is never written.
    pub unsafe fn from_raw_read(ptr: *const u8, len: usize) -> Self {
        HostBuffer::from_raw_parts(ptr as *mut u8, len, BufferFlags::READ)
    }

    /// A buffer over a mutable slice, granting read and write access.
    pub fn from_mut_slice(bytes: &'a mut [u8]) -> Self {
        HostBuffer {
            ptr: bytes.as_mut_ptr(),
            len: bytes.len(),
            flags: BufferFlags::WRITE,
            _storage: PhantomData,
        }
    }

    /// A read-only buffer over a slice.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        HostBuffer {
            ptr: bytes.as_ptr() as *mut u8,
            len: bytes.len(),
            flags: BufferFlags::READ,
            _storage: PhantomData,
        }
    }

    /// A value the host could not express as a buffer at all.
    pub fn invalid() -> Self {
        HostBuffer {
            ptr: core::ptr::null_mut(),
            len: 0,
            flags: BufferFlags::NONE,
            _storage: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks that the buffer grants `need` and returns its length.
    pub fn check(&self, need: BufferFlags, arg: Arg) -> Result<usize, InvalidArgument> {
        let backed = !self.ptr.is_null() || self.len == 0;
        if backed && need != BufferFlags::NONE && self.flags.contains(need) {
            Ok(self.len)
        } else {
            Err(InvalidArgument::NotABuffer { arg })
        }
    }

    /// Whether the first `len` bytes of both buffers start at the same address.
    pub(crate) fn same_start(&self, other: &HostBuffer<'_>) -> bool {
        self.ptr as usize == other.ptr as usize
    }

    /// Whether the first `a_len` bytes of `self` intersect the first `b_len`
    /// bytes of `other`.
    pub(crate) fn overlaps(&self, a_len: usize, other: &HostBuffer<'_>, b_len: usize) -> bool {
        if a_len == 0 || b_len == 0 {
            return false;
        }
        let a = self.ptr as usize;
        let b = other.ptr as usize;
        a < b.saturating_add(b_len) && b < a.saturating_add(a_len)
    }
}

impl ReadBuffer for HostBuffer<'_> {
    fn read_bytes(&self) -> Option<&[u8]> {
        self.check(BufferFlags::READ, Arg::In).ok()?;
        if self.len == 0 {
            return Some(&[]);
        }
        // SAFETY: non-null, readable for `len` bytes per `from_raw_parts`.
        Some(unsafe { core::slice::from_raw_parts(self.ptr, self.len) })
    }
}

impl WriteBuffer for HostBuffer<'_> {
    fn write_bytes(&mut self) -> Option<&mut [u8]> {
        self.check(BufferFlags::WRITE, Arg::Out).ok()?;
        if self.len == 0 {
            return Some(&mut []);
        }
        // SAFETY: non-null, writable for `len` bytes per `from_raw_parts`;
        // `&mut self` keeps this the only view handed out by this buffer.
        Some(unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) })
    }
}
