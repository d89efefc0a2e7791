//!
//! Module containing the definition of the private key container
//!

use super::{truncate_hash, Components, VerifyingKey};
use crate::{Error, Result, Signature};
use digest::{core_api::BlockSizeUser, Digest};
use num_bigint::BigUint;
use num_traits::Zero;
use signature::DigestSigner;

/// DSA private key.
///
/// Signatures are deterministic: the ephemeral `k` is derived from `x` and
/// the message digest as described in RFC 6979.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct SigningKey {
    /// Public key
    verifying_key: VerifyingKey,

    /// Private component x
    x: BigUint,
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl SigningKey {
    /// Construct a new private key from the public key and private component
    pub fn from_components(verifying_key: VerifyingKey, x: BigUint) -> Result<Self> {
        let components = verifying_key.components();

        if x.is_zero() || x >= *components.q() {
            return Err(Error::InvalidPrivateKey);
        }

        if *verifying_key.y() != components.g().modpow(&x, components.p()) {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self { verifying_key, x })
    }

    /// Construct a new private key from the common components and the
    /// private component, deriving the public key.
    pub fn from_private(components: Components, x: BigUint) -> Result<Self> {
        if x.is_zero() || x >= *components.q() {
            return Err(Error::InvalidPrivateKey);
        }

        let verifying_key = VerifyingKey::from_private(components, &x);
        Ok(Self { verifying_key, x })
    }

    /// DSA public key
    pub const fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// DSA private component
    #[must_use]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Sign a pre-hashed message.
    ///
    /// `hash` is used without truncation, both to seed the nonce generator
    /// and as the integer `z`. Callers following FIPS 186-3 must truncate it
    /// to the byte length of `q` beforehand.
    ///
    /// Fails with [`Error::InvalidDomainParameters`] if the bit length of
    /// `q` is not a multiple of 8.
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
        let components = self.verifying_key().components();
        let (p, q, g) = (components.p(), components.q(), components.g());
        let x = self.x();

        if !components.is_byte_aligned() {
            tracing::warn!(qlen = q.bits(), "DSA subgroup order is not byte aligned");
            return Err(Error::InvalidDomainParameters);
        }

        let z = BigUint::from_bytes_be(hash);
        let mut signature = None;

        crate::generate_secret_with_data::<D, _>(q, x, hash, additional_data, |k| {
            let Some(k_inv) = k.modinv(q) else {
                return false;
            };

            let r = g.modpow(k, p) % q;
            if r.is_zero() {
                return false;
            }

            let s = (((x * &r) + &z) % q * k_inv) % q;

            // r or s might be 0 (very unlikely but possible)
            signature = Signature::from_components(r, s);
            signature.is_some()
        });

        // the generator only returns once a signature has been accepted
        signature.ok_or(Error::InvalidSignature)
    }

    /// Hash `msg` with `D`, truncate the digest to the byte length of `q`
    /// and sign it.
    pub fn sign_message<D>(&self, msg: &[u8]) -> Result<Signature>
    where
        D: Digest + BlockSizeUser,
    {
        let hash = D::digest(msg);
        self.sign_prehash::<D>(truncate_hash(self.verifying_key.components().q(), &hash))
    }
}

impl<D> DigestSigner<D, Signature> for SigningKey
where
    D: Digest + BlockSizeUser,
{
    fn try_sign_digest(&self, digest: D) -> signature::Result<Signature> {
        let hash = digest.finalize();
        let q = self.verifying_key.components().q();

        Ok(self.sign_prehash::<D>(truncate_hash(q, &hash))?)
    }
}
