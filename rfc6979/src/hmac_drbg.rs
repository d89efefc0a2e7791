use alloc::vec::Vec;
use digest::{core_api::BlockSizeUser, Digest, Output};
use hmac::{Mac, SimpleHmac};
use zeroize::Zeroize;

/// Internal implementation of `HMAC_DRBG` as described in NIST SP800-90A:
/// <https://csrc.nist.gov/publications/detail/sp/800-90a/rev-1/final>
///
/// This is a HMAC-based deterministic random bit generator used internally
/// to compute a deterministic DSA or ECDSA ephemeral scalar `k`. It is the
/// specialization of Section 3.2 of RFC 6979: the state is seeded once from
/// the private key and the message digest, then stepped forward after
/// every rejected candidate.
pub struct HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// HMAC key `K` (see RFC 6979 Section 3.2.c)
    k: Output<D>,

    /// Chaining value `V` (see RFC 6979 Section 3.2.b)
    v: Output<D>,
}

impl<D> HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    /// Initialize `HMAC_DRBG`
    ///
    /// `entropy_input` is `int2octets(x)`, `nonce` is `bits2octets(h1)` and
    /// `additional_data` is the optional `k'` of RFC 6979 Section 3.6.
    pub fn new(entropy_input: &[u8], nonce: &[u8], additional_data: &[u8]) -> Self {
        let mut k = Output::<D>::default();
        let mut v = Output::<D>::default();

        for b in &mut v {
            *b = 0x01;
        }

        for i in 0..=1 {
            // Steps 3.2.d,f: K = HMAC_K(V || i || int2octets(x) || bits2octets(h1) || k')
            k = mac::<D>(
                &k,
                &[v.as_slice(), &[i], entropy_input, nonce, additional_data],
            );

            // Steps 3.2.e,g: V = HMAC_K(V)
            v = mac::<D>(&k, &[v.as_slice()]);
        }

        Self { k, v }
    }

    /// Refill `t` with whole `V` blocks until it holds at least `len` bytes
    /// (steps 3.2.h.1 and 3.2.h.2).
    pub fn fill_blocks(&mut self, t: &mut Vec<u8>, len: usize) {
        t.zeroize();
        t.clear();

        while t.len() < len {
            self.v = mac::<D>(&self.k, &[self.v.as_slice()]);
            t.extend_from_slice(&self.v);
        }
    }

    /// Step the state forward after a rejected candidate (step 3.2.h.3).
    pub fn reject(&mut self) {
        self.k = mac::<D>(&self.k, &[self.v.as_slice(), &[0x00]]);
        self.v = mac::<D>(&self.k, &[self.v.as_slice()]);
    }
}

impl<D> Drop for HmacDrbg<D>
where
    D: Digest + BlockSizeUser,
{
    fn drop(&mut self) {
        self.k.as_mut_slice().zeroize();
        self.v.as_mut_slice().zeroize();
    }
}

/// `HMAC_K(parts[0] || parts[1] || ...)`
fn mac<D>(key: &[u8], parts: &[&[u8]]) -> Output<D>
where
    D: Digest + BlockSizeUser,
{
    let mut hmac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .expect("HMAC can take a key of any size");

    for part in parts {
        hmac.update(part);
    }

    hmac.finalize().into_bytes()
}
