//! Conversions between bit strings, integers and octet strings.
//!
//! These follow RFC 6979 Section 2.3 to the bit. Lengths are never
//! validated: oversized inputs are truncated and short inputs are padded,
//! exactly as the RFC prescribes.

use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use num_bigint::BigUint;

/// `bits2int` as defined in [RFC6979 § 2.3.2].
///
/// Interprets `input` as a big endian integer and keeps only its `qlen`
/// leftmost bits. This is a truncation, not a modular reduction.
///
/// [RFC6979 § 2.3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.2
pub fn bits2int(input: &[u8], qlen: u64) -> BigUint {
    let vlen = input.len() as u64 * 8;
    let v = BigUint::from_bytes_be(input);

    if vlen > qlen {
        v >> (vlen - qlen)
    } else {
        v
    }
}

/// `int2octets` as defined in [RFC6979 § 2.3.3].
///
/// Big endian encoding of `value` over exactly `rolen` bytes. Short values
/// are left-padded with zeroes; long values lose their most significant
/// bytes.
///
/// [RFC6979 § 2.3.3]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.3
pub fn int2octets(value: &BigUint, rolen: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    // `to_bytes_be` encodes zero as a single zero byte
    let bytes = if bytes == [0] { &[][..] } else { &bytes[..] };

    match bytes.len().cmp(&rolen) {
        Ordering::Equal => bytes.to_vec(),
        Ordering::Less => {
            let mut out = vec![0u8; rolen];
            out[rolen - bytes.len()..].copy_from_slice(bytes);
            out
        }
        Ordering::Greater => bytes[bytes.len() - rolen..].to_vec(),
    }
}

/// `bits2octets` as defined in [RFC6979 § 2.3.4].
///
/// Brings a message digest into `[0, q)` with a single conditional
/// subtraction of `q` and encodes the result over `rolen` bytes.
///
/// [RFC6979 § 2.3.4]: https://datatracker.ietf.org/doc/html/rfc6979#section-2.3.4
pub fn bits2octets(input: &[u8], q: &BigUint, qlen: u64, rolen: usize) -> Vec<u8> {
    let z1 = bits2int(input, qlen);

    if z1 < *q {
        int2octets(&z1, rolen)
    } else {
        int2octets(&(z1 - q), rolen)
    }
}
