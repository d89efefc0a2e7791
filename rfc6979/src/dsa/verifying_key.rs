//!
//! Module containing the definition of the public key container
//!

use super::{truncate_hash, Components};
use crate::{Error, Result, Signature};
use digest::Digest;
use num_bigint::BigUint;
use num_traits::One;
use signature::DigestVerifier;

/// DSA public key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct VerifyingKey {
    /// common components
    components: Components,

    /// Public component y
    y: BigUint,
}

impl VerifyingKey {
    /// Construct a new public key from the common components and the public component
    ///
    /// `y` must be an element of the order-`q` subgroup of `Z/pZ`.
    pub fn from_components(components: Components, y: BigUint) -> Result<Self> {
        let two = BigUint::from(2u8);

        let (p, q) = (components.p(), components.q());

        if y < two || y >= *p || !y.modpow(q, p).is_one() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { components, y })
    }

    /// Derive the public key `y = g^x mod p` of the private component `x`
    pub(crate) fn from_private(components: Components, x: &BigUint) -> Self {
        let y = components.g().modpow(x, components.p());
        Self { components, y }
    }

    /// DSA common components
    pub const fn components(&self) -> &Components {
        &self.components
    }

    /// DSA public component
    #[must_use]
    pub const fn y(&self) -> &BigUint {
        &self.y
    }

    /// Verify a signature over a pre-hashed message.
    ///
    /// Only the leftmost bytes of `hash` up to the byte length of `q` are
    /// used, as in FIPS 186-3.
    pub fn verify_prehash(&self, hash: &[u8], signature: &Signature) -> Result<()> {
        let components = self.components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let (r, s) = (signature.r(), signature.s());

        if r >= q || s >= q {
            return Err(Error::InvalidSignature);
        }

        let w = s.modinv(q).ok_or(Error::InvalidSignature)?;
        let z = BigUint::from_bytes_be(truncate_hash(q, hash));

        let u1 = (z * &w) % q;
        let u2 = (r * &w) % q;

        let v = (g.modpow(&u1, p) * self.y.modpow(&u2, p)) % p % q;

        if v == *r {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

impl<D> DigestVerifier<D, Signature> for VerifyingKey
where
    D: Digest,
{
    fn verify_digest(&self, digest: D, signature: &Signature) -> signature::Result<()> {
        let hash = digest.finalize();
        Ok(self.verify_prehash(&hash, signature)?)
    }
}
