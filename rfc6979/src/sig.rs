//!
//! Module containing the definition of the Signature container
//!

use crate::convert::int2octets;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// Container of a DSA or ECDSA signature `(r, s)`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub struct Signature {
    /// Signature part r
    r: BigUint,

    /// Signature part s
    s: BigUint,
}

impl Signature {
    /// Create a new Signature container from its components
    ///
    /// Returns `None` if either component is zero.
    pub fn from_components(r: BigUint, s: BigUint) -> Option<Self> {
        if r.is_zero() || s.is_zero() {
            return None;
        }

        Some(Self { r, s })
    }

    /// Signature part r
    #[must_use]
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s
    #[must_use]
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Fixed-width `r || s` encoding, each half over `len` bytes.
    #[must_use]
    pub fn to_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = int2octets(&self.r, len);
        out.extend_from_slice(&int2octets(&self.s, len));
        out
    }
}
