#![no_std]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

//! ## Usage
//!
//! See also: the documentation for the [`generate_secret`] function.
//!
//! ```
//! use num_bigint::BigUint;
//! use sha2::{Digest, Sha256};
//!
//! // DSA 1024-bit example from RFC 6979 Appendix A.2.1
//! let q = BigUint::parse_bytes(b"996F967F6C8E388D9E28D01E205FBA957A5698B1", 16).unwrap();
//! let x = BigUint::parse_bytes(b"411602CB19A6CCC34494D79D98EF1E7ED5AF25F7", 16).unwrap();
//! let h = Sha256::digest(b"sample");
//!
//! let mut k = None;
//! rfc6979::generate_secret::<Sha256, _>(&q, &x, &h[..20], |candidate| {
//!     k = Some(candidate.clone());
//!     true
//! });
//!
//! assert_eq!(k, BigUint::parse_bytes(b"519BA0546D0C39202A7D34D7DFA5E760B318BCFB", 16));
//! ```

extern crate alloc;

pub mod convert;
pub mod hmac_drbg;

#[cfg(feature = "dsa")]
pub mod dsa;
#[cfg(feature = "ecdsa")]
pub mod ecdsa;

mod error;
mod sig;

pub use crate::{
    error::{Error, Result},
    hmac_drbg::HmacDrbg,
    sig::Signature,
};
pub use digest;
pub use hmac;
pub use num_bigint;
pub use signature;

use crate::convert::{bits2int, bits2octets, int2octets};
use alloc::vec::Vec;
use digest::{core_api::BlockSizeUser, Digest};
use num_bigint::BigUint;
use num_traits::One;
use zeroize::Zeroizing;

/// Deterministically derive the ephemeral scalar `k` using the method
/// described in [RFC6979 § 3.2].
///
/// - `q`: order of the group in which signatures are computed.
/// - `x`: secret scalar, in `[1, q - 1]`.
/// - `digest`: hash of the signed message. It is used as is; truncating it
///   to the byte length of `q` when the calling standard requires so is up
///   to the caller.
/// - `accept`: called with every candidate `k` in `[1, q - 1]`. Returning
///   `true` ends the search. Returning `false` rejects the candidate and a
///   fresh one is drawn.
///
/// The function returns once a candidate has been accepted. Everything
/// derived from the accepted `k` (usually the signature itself) has to be
/// captured by `accept`.
///
/// A predicate which never accepts makes this function loop forever.
///
/// [RFC6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2
pub fn generate_secret<D, F>(q: &BigUint, x: &BigUint, digest: &[u8], accept: F)
where
    D: Digest + BlockSizeUser,
    F: FnMut(&BigUint) -> bool,
{
    generate_secret_with_data::<D, F>(q, x, digest, &[], accept)
}

/// Variant of [`generate_secret`] mixing `additional_data` into the seed, as
/// described in [RFC6979 § 3.6].
///
/// With empty `additional_data` both functions produce the same candidates.
///
/// [RFC6979 § 3.6]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.6
pub fn generate_secret_with_data<D, F>(
    q: &BigUint,
    x: &BigUint,
    digest: &[u8],
    additional_data: &[u8],
    mut accept: F,
) where
    D: Digest + BlockSizeUser,
    F: FnMut(&BigUint) -> bool,
{
    debug_assert!(q.bits() >= 8, "group order is too small");

    // Step A
    let qlen = q.bits();
    let rolen = qlen.div_ceil(8) as usize;

    // Steps B through G
    let mut drbg = {
        let x_octets = Zeroizing::new(int2octets(x, rolen));
        let h_octets = bits2octets(digest, q, qlen, rolen);
        HmacDrbg::<D>::new(&x_octets, &h_octets, additional_data)
    };

    // Step H
    let tlen = (qlen / 8) as usize;
    let mut t = Zeroizing::new(Vec::new());
    let one = BigUint::one();

    for iteration in 1usize.. {
        drbg.fill_blocks(&mut t, tlen);
        let candidate = bits2int(&t, qlen);

        if candidate >= one && candidate < *q {
            if accept(&candidate) {
                tracing::debug!(iteration, "accepted nonce candidate");
                return;
            }

            tracing::trace!(iteration, "nonce candidate rejected by predicate");
        } else {
            tracing::trace!(iteration, "nonce candidate out of range");
        }

        drbg.reject();
    }
}
