//! Error types

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the signers.
///
/// Rejected nonce candidates are never reported here: they are retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The group parameters cannot be used, e.g. a DSA subgroup order whose
    /// bit length is not a multiple of 8.
    #[error("invalid domain parameters")]
    InvalidDomainParameters,

    /// The private scalar is not in `[1, q - 1]`.
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// The public component is not an element of the order-`q` subgroup.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The signature does not verify, or one of its halves is out of range.
    #[error("invalid signature")]
    InvalidSignature,
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}
