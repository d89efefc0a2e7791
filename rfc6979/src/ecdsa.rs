//! Deterministic ECDSA over any prime-order curve.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! The curve arithmetic is supplied by the caller through the
//! [`PrimeCurve`] trait. A broken implementation (e.g. one that never
//! returns a point) makes signing loop forever.

use crate::{convert::bits2int, Error, Result, Signature};
use core::cmp::min;
use digest::{core_api::BlockSizeUser, Digest};
use num_bigint::BigUint;
use num_traits::Zero;
use signature::DigestSigner;

/// Group arithmetic needed to produce ECDSA signatures.
pub trait PrimeCurve {
    /// Order `n` of the base point `G`.
    fn order(&self) -> &BigUint;

    /// Affine x-coordinate of `k×G`, or `None` if it is the point at
    /// infinity.
    ///
    /// `k` is always in `[1, n - 1]`.
    fn mul_base_x(&self, k: &BigUint) -> Option<BigUint>;

    /// Convert a message digest into the integer `e` of the signing
    /// equation.
    ///
    /// The default keeps the leftmost bits of `hash` up to the bit length
    /// of the curve order (SEC1 § 4.1.3 step 5), independently of how the
    /// nonce generator truncates the same digest.
    fn hash_to_int(&self, hash: &[u8]) -> BigUint {
        let order_bits = self.order().bits();
        let order_bytes = order_bits.div_ceil(8) as usize;

        bits2int(&hash[..min(hash.len(), order_bytes)], order_bits)
    }
}

/// ECDSA private key.
#[derive(Clone)]
#[must_use]
pub struct SigningKey<C>
where
    C: PrimeCurve,
{
    /// Curve the key belongs to
    curve: C,

    /// Secret scalar d
    d: BigUint,
}

impl<C> core::fmt::Debug for SigningKey<C>
where
    C: PrimeCurve,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

impl<C> SigningKey<C>
where
    C: PrimeCurve,
{
    /// Construct a private key from its secret scalar `d`, which must be in
    /// `[1, n - 1]`.
    pub fn from_scalar(curve: C, d: BigUint) -> Result<Self> {
        if d.is_zero() || d >= *curve.order() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self { curve, d })
    }

    /// Curve the key belongs to
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Secret scalar d
    #[must_use]
    pub fn scalar(&self) -> &BigUint {
        &self.d
    }

    /// Sign a pre-hashed message.
    ///
    /// The digest seeds the nonce generator untouched and is converted into
    /// `e` with [`PrimeCurve::hash_to_int`].
    pub fn sign_prehash<D>(&self, hash: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        self.sign_prehash_with_data::<D>(hash, &[])
    }

    /// Sign a pre-hashed message, mixing `additional_data` into the nonce
    /// derivation (RFC 6979 § 3.6).
    pub fn sign_prehash_with_data<D>(
        &self,
        hash: &[u8],
        additional_data: &[u8],
    ) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        let n = self.curve.order();
        let d = &self.d;
        let mut signature = None;

        crate::generate_secret_with_data::<D, _>(n, d, hash, additional_data, |k| {
            let Some(k_inv) = k.modinv(n) else {
                return false;
            };

            // Compute 𝑹 = 𝑘×𝑮 and reduce its x-coordinate modulo n
            let Some(x) = self.curve.mul_base_x(k) else {
                return false;
            };

            let r = x % n;
            if r.is_zero() {
                return false;
            }

            let e = self.curve.hash_to_int(hash);
            let s = ((d * &r + e) * k_inv) % n;

            signature = Signature::from_components(r, s);
            signature.is_some()
        });

        // the generator only returns once a signature has been accepted
        signature.ok_or(Error::InvalidSignature)
    }

    /// Hash `msg` with `D` and sign the digest.
    pub fn sign_message<D>(&self, msg: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        self.sign_prehash::<D>(&D::digest(msg))
    }
}

impl<C, D> DigestSigner<D, Signature> for SigningKey<C>
where
    C: PrimeCurve,
    D: Digest + BlockSizeUser,
{
    fn try_sign_digest(&self, digest: D) -> signature::Result<Signature> {
        Ok(self.sign_prehash::<D>(&digest.finalize())?)
    }
}
