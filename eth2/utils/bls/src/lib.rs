#[macro_use]
mod macros;

mod aggregate_public_key;
mod backend;
mod public_key_bytes;
mod signature_bytes;
mod testing_backend;

pub use aggregate_public_key::AggregatePublicKey;
pub use backend::BlsBackend;
pub use public_key_bytes::PublicKeyBytes;
pub use signature_bytes::SignatureBytes;
pub use testing_backend::TestingBlsBackend;

/// The byte-size of a compressed BLS12-381 public key.
pub const PUBLIC_KEY_BYTES_LEN: usize = 48;

/// The byte-size of a compressed BLS12-381 signature.
pub const SIGNATURE_BYTES_LEN: usize = 96;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    InvalidByteLength { got: usize, expected: usize },
}
