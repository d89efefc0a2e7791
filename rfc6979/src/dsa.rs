//! Deterministic DSA over caller-supplied domain parameters.
//!
//! The ephemeral `k` comes from [`generate_secret`](crate::generate_secret);
//! the acceptance test computes `r = (g^k mod p) mod q` and
//! `s = k⁻¹ · (z + x·r) mod q` and rejects the candidate if either is zero.
//!
//! [`SigningKey::sign_prehash`] takes the digest as is. FIPS 186-3 § 4.6
//! requires it to be truncated to the byte length of `q` first, which
//! [`SigningKey::sign_message`] and the [`DigestSigner`](signature::DigestSigner)
//! impl do.

mod components;
mod signing_key;
mod verifying_key;

pub use self::{components::Components, signing_key::SigningKey, verifying_key::VerifyingKey};
pub use crate::Signature;

use core::cmp::min;
use num_bigint::BigUint;

/// Leftmost `min(N, outlen)` bytes of `hash`, `N` being the byte length of `q`
fn truncate_hash<'a>(q: &BigUint, hash: &'a [u8]) -> &'a [u8] {
    let n = (q.bits() / 8) as usize;
    &hash[..min(n, hash.len())]
}
