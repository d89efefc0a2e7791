//!
//! Module containing the definition of the common components container
//!

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::One;

/// The common components of an DSA keypair
///
/// (the prime p, quotient q and generator g)
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Components {
    /// Prime p
    p: BigUint,

    /// Quotient q
    q: BigUint,

    /// Generator g
    g: BigUint,
}

impl Components {
    /// Construct the common components container from its inner values (p, q and g)
    ///
    /// Only the basic range checks of [`Components::is_valid`] are applied;
    /// primality of `p` and `q` is not verified.
    pub fn from_components(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        let components = Self { p, q, g };

        if !components.is_valid() {
            return Err(Error::InvalidDomainParameters);
        }

        Ok(components)
    }

    /// DSA prime p
    #[must_use]
    pub const fn p(&self) -> &BigUint {
        &self.p
    }

    /// DSA quotient q
    #[must_use]
    pub const fn q(&self) -> &BigUint {
        &self.q
    }

    /// DSA generator g
    #[must_use]
    pub const fn g(&self) -> &BigUint {
        &self.g
    }

    /// Check whether the components are valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let two = BigUint::from(2u8);

        self.p >= two && self.q >= two && self.g >= BigUint::one() && self.g < self.p
    }

    /// Whether the bit length of `q` is a multiple of 8, as the hash
    /// truncation rule of FIPS 186-3 assumes.
    #[must_use]
    pub fn is_byte_aligned(&self) -> bool {
        self.q.bits() % 8 == 0
    }
}
