//! Checked XOR operations.
//!
//! Each operation validates every argument before touching `out`: on error the
//! caller's output bytes are exactly as they were.

use crate::buffer::{BufferFlags, HostBuffer, ReadBuffer, WriteBuffer};
use crate::core::xor::{xor_in_place, xor_into};
use crate::error::{Arg, InvalidArgument};

fn check_len(arg: Arg, out_len: usize, in_len: usize) -> Result<(), InvalidArgument> {
    if in_len < out_len {
        return Err(InvalidArgument::InputTooShort { arg, out_len, in_len });
    }
    Ok(())
}

/// In-place XOR: `out[i] ^= input[i]` for every index of `out`.
///
/// `input` may be longer than `out`; the extra bytes are ignored. Applying the
/// same `input` twice restores `out`.
///
/// # Errors
/// [`InvalidArgument`] if either value is not a byte buffer with the needed
/// access, or if `input` is shorter than `out`.
pub fn xor<W, R>(out: &mut W, input: &R) -> Result<(), InvalidArgument>
where
    W: WriteBuffer + ?Sized,
    R: ReadBuffer + ?Sized,
{
    let input = input.read_bytes().ok_or(InvalidArgument::NotABuffer { arg: Arg::In })?;
    let out = out.write_bytes().ok_or(InvalidArgument::NotABuffer { arg: Arg::Out })?;
    check_len(Arg::In, out.len(), input.len())?;

    log::trace!("xor {} bytes in place", out.len());
    xor_in_place(out, input);
    Ok(())
}

/// Three-operand XOR: `out[i] = a[i] ^ b[i]` for every index of `out`.
///
/// # Errors
/// [`InvalidArgument`] if any value is not a byte buffer with the needed
/// access, or if `a` or `b` is shorter than `out`.
pub fn xor_to<W, A, B>(out: &mut W, a: &A, b: &B) -> Result<(), InvalidArgument>
where
    W: WriteBuffer + ?Sized,
    A: ReadBuffer + ?Sized,
    B: ReadBuffer + ?Sized,
{
    let a = a.read_bytes().ok_or(InvalidArgument::NotABuffer { arg: Arg::In })?;
    let b = b.read_bytes().ok_or(InvalidArgument::NotABuffer { arg: Arg::B })?;
    let out = out.write_bytes().ok_or(InvalidArgument::NotABuffer { arg: Arg::Out })?;
    check_len(Arg::In, out.len(), a.len())?;
    check_len(Arg::B, out.len(), b.len())?;

    log::trace!("xor {} bytes into out", out.len());
    xor_into(out, a, b);
    Ok(())
}

/// [`xor`] over host storage that may alias.
///
/// `input` starting at the same address as `out` is allowed (the result is all
/// zeros). Any other overlap is rejected.
pub fn xor_host(out: &mut HostBuffer<'_>, input: &HostBuffer<'_>) -> Result<(), InvalidArgument> {
    let out_len = out.check(BufferFlags::WRITE, Arg::Out)?;
    let in_len = input.check(BufferFlags::READ, Arg::In)?;
    check_len(Arg::In, out_len, in_len)?;

    if out_len > 0 && out.same_start(input) {
        log::trace!("xor {} bytes with itself", out_len);
        if let Some(bytes) = out.write_bytes() {
            bytes.fill(0);
        }
        return Ok(());
    }
    if out.overlaps(out_len, input, out_len) {
        return Err(InvalidArgument::Overlap { arg: Arg::In });
    }
    xor(out, input)
}

/// [`xor_to`] over host storage that may alias.
///
/// An operand starting at the same address as `out` turns the call into the
/// in-place [`xor_host`] with the other operand. Any other overlap with `out`
/// is rejected. The operands may overlap each other freely.
pub fn xor_to_host(
    out: &mut HostBuffer<'_>,
    a: &HostBuffer<'_>,
    b: &HostBuffer<'_>,
) -> Result<(), InvalidArgument> {
    let out_len = out.check(BufferFlags::WRITE, Arg::Out)?;
    let a_len = a.check(BufferFlags::READ, Arg::In)?;
    let b_len = b.check(BufferFlags::READ, Arg::B)?;
    check_len(Arg::In, out_len, a_len)?;
    check_len(Arg::B, out_len, b_len)?;

    if out_len > 0 && out.same_start(a) {
        return xor_host(out, b).map_err(|e| match e {
            InvalidArgument::Overlap { .. } => InvalidArgument::Overlap { arg: Arg::B },
            other => other,
        });
    }
    if out_len > 0 && out.same_start(b) {
        return xor_host(out, a);
    }
    if out.overlaps(out_len, a, out_len) {
        return Err(InvalidArgument::Overlap { arg: Arg::In });
    }
    if out.overlaps(out_len, b, out_len) {
        return Err(InvalidArgument::Overlap { arg: Arg::B });
    }
    xor_to(out, a, b)
}
