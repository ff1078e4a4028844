use crate::{AggregatePublicKey, PublicKeyBytes, SignatureBytes};

/// Signature verification, supplied by the consumer.
///
/// The state transition never constructs curve points itself; it assembles
/// messages, domains and key sets and defers the pairing checks to whichever
/// backend the node embeds. Implementations must be stateless and reentrant.
pub trait BlsBackend {
    /// Verify `signature` over `message` by the holder of `pubkey`.
    fn verify(
        &self,
        pubkey: &PublicKeyBytes,
        message: &[u8],
        domain: u64,
        signature: &SignatureBytes,
    ) -> bool;

    /// Verify an aggregate `signature` over several `messages`, where
    /// `pubkeys[i]` aggregates the keys that signed `messages[i]`.
    ///
    /// `messages` and `pubkeys` must pair up one-to-one.
    fn verify_multiple(
        &self,
        messages: &[&[u8]],
        domain: u64,
        pubkeys: &[&AggregatePublicKey],
        signature: &SignatureBytes,
    ) -> bool;
}
