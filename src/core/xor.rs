#![forbid(unsafe_code)]
// Word-at-a-time XOR engine.
// - Processes data in 32-byte blocks, then 8-byte words, then a byte tail.
// - No unsafe; length checks are enforced by callers in `ops`.
// - Only indices `0..out.len()` of every operand are touched.

const WORD: usize = 8;
const BLOCK: usize = 4 * WORD;

#[inline(always)]
fn word(bytes: &[u8]) -> u64 {
    let mut w = [0u8; WORD];
    w.copy_from_slice(bytes);
    u64::from_ne_bytes(w)
}

/// In-place XOR: `out[i] ^= input[i]` for every `i < out.len()`.
/// Requires: `input.len() >= out.len()`.
///
/// # Panics
/// If `input` is shorter than `out`.
#[inline(always)]
pub(crate) fn xor_in_place(out: &mut [u8], input: &[u8]) {
    let len = out.len();
    let input = &input[..len];
    let mut i = 0;

    while i + BLOCK <= len {
        for j in (i..i + BLOCK).step_by(WORD) {
            let x = word(&out[j..j + WORD]) ^ word(&input[j..j + WORD]);
            out[j..j + WORD].copy_from_slice(&x.to_ne_bytes());
        }
        i += BLOCK;
    }

    while i + WORD <= len {
        let x = word(&out[i..i + WORD]) ^ word(&input[i..i + WORD]);
        out[i..i + WORD].copy_from_slice(&x.to_ne_bytes());
        i += WORD;
    }

    for (o, &b) in out[i..].iter_mut().zip(&input[i..]) {
        *o ^= b;
    }
}

/// Three-operand XOR: `out[i] = a[i] ^ b[i]` for every `i < out.len()`.
/// Requires: `a.len() >= out.len()` and `b.len() >= out.len()`.
///
/// # Panics
/// If `a` or `b` is shorter than `out`.
#[inline(always)]
pub(crate) fn xor_into(out: &mut [u8], a: &[u8], b: &[u8]) {
    let len = out.len();
    let (a, b) = (&a[..len], &b[..len]);
    let mut i = 0;

    while i + BLOCK <= len {
        for j in (i..i + BLOCK).step_by(WORD) {
            let x = word(&a[j..j + WORD]) ^ word(&b[j..j + WORD]);
            out[j..j + WORD].copy_from_slice(&x.to_ne_bytes());
        }
        i += BLOCK;
    }

    while i + WORD <= len {
        let x = word(&a[i..i + WORD]) ^ word(&b[i..i + WORD]);
        out[i..i + WORD].copy_from_slice(&x.to_ne_bytes());
        i += WORD;
    }

    for ((o, &x), &y) in out[i..].iter_mut().zip(&a[i..]).zip(&b[i..]) {
        *o = x ^ y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(a: &[u8], b: &[u8]) -> Vec<u8> {
        a.iter().zip(b).map(|(x, y)| x ^ y).collect()
    }

    #[test]
    fn test_in_place_matches_bytewise_across_block_boundaries() {
        for len in [0usize, 1, 7, 8, 9, 31, 32, 33, 63, 64, 65, 100] {
            let a = (0..len).map(|i| i as u8).collect::<Vec<u8>>();
            let b = (0..len).map(|i| (i as u8).wrapping_mul(7).wrapping_add(3)).collect::<Vec<u8>>();
            let mut out = a.clone();
            xor_in_place(&mut out, &b);
            assert_eq!(out, naive(&a, &b), "len {}", len);
        }
    }

    #[test]
    fn test_in_place_ignores_trailing_input() {
        let mut out = [0x0Fu8; 10];
        let input = [0xFFu8; 16];
        xor_in_place(&mut out, &input);
        assert_eq!(out, [0xF0u8; 10]);
    }

    #[test]
    fn test_into_matches_bytewise() {
        for len in [0usize, 3, 8, 17, 31, 32, 33, 40, 64, 71, 100] {
            let a = (0..len).map(|i| (i as u8) ^ 0x5A).collect::<Vec<u8>>();
            let b = (0..len + 4).map(|i| (i as u8).wrapping_mul(13)).collect::<Vec<u8>>();
            let mut out = vec![0xEEu8; len];
            xor_into(&mut out, &a, &b);
            assert_eq!(out, naive(&a, &b), "len {}", len);
        }
    }
}
