use crate::{
    AggregatePublicKey, BlsBackend, PublicKeyBytes, SignatureBytes, SIGNATURE_BYTES_LEN,
};
use hashing::hash;

/// A deterministic stand-in for a real pairing backend.
///
/// A "signature" is a keccak commitment to the exact `(messages, domain,
/// pubkeys)` tuple, so verification accepts precisely the bytes produced by
/// `sign`/`sign_multiple` for the same inputs and rejects everything else.
/// This gives tests working accept *and* reject paths without any curve
/// arithmetic.
///
/// This struct should **never be used for production purposes.**
#[derive(Debug, Clone, Copy, Default)]
pub struct TestingBlsBackend;

impl TestingBlsBackend {
    /// Produce the signature `verify` will accept for a single signer.
    pub fn sign(&self, pubkey: &PublicKeyBytes, message: &[u8], domain: u64) -> SignatureBytes {
        let mut aggregate = AggregatePublicKey::new();
        aggregate.add(pubkey);
        self.sign_multiple(&[message], domain, &[&aggregate])
    }

    /// Produce the signature `verify_multiple` will accept for the given
    /// message/key-set pairing.
    pub fn sign_multiple(
        &self,
        messages: &[&[u8]],
        domain: u64,
        pubkeys: &[&AggregatePublicKey],
    ) -> SignatureBytes {
        let commitment = commitment(messages, domain, pubkeys);

        let mut bytes = [0; SIGNATURE_BYTES_LEN];
        for chunk in bytes.chunks_mut(32) {
            chunk.copy_from_slice(&commitment);
        }
        SignatureBytes::from(bytes)
    }
}

impl BlsBackend for TestingBlsBackend {
    fn verify(
        &self,
        pubkey: &PublicKeyBytes,
        message: &[u8],
        domain: u64,
        signature: &SignatureBytes,
    ) -> bool {
        *signature == self.sign(pubkey, message, domain)
    }

    fn verify_multiple(
        &self,
        messages: &[&[u8]],
        domain: u64,
        pubkeys: &[&AggregatePublicKey],
        signature: &SignatureBytes,
    ) -> bool {
        if messages.is_empty() || messages.len() != pubkeys.len() {
            return false;
        }
        *signature == self.sign_multiple(messages, domain, pubkeys)
    }
}

fn commitment(messages: &[&[u8]], domain: u64, pubkeys: &[&AggregatePublicKey]) -> Vec<u8> {
    let mut preimage = vec![];
    preimage.extend_from_slice(&domain.to_le_bytes());

    for (message, aggregate) in messages.iter().zip(pubkeys.iter()) {
        preimage.extend_from_slice(&hash(message));
        for pubkey in aggregate.pubkeys() {
            preimage.extend_from_slice(&pubkey.serialize());
        }
    }

    hash(&preimage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pubkey(byte: u8) -> PublicKeyBytes {
        PublicKeyBytes::from([byte; 48])
    }

    #[test]
    fn accepts_own_signature() {
        let backend = TestingBlsBackend;
        let pk = pubkey(1);

        let signature = backend.sign(&pk, b"message", 42);

        assert!(backend.verify(&pk, b"message", 42, &signature));
    }

    #[test]
    fn rejects_other_message_domain_or_key() {
        let backend = TestingBlsBackend;
        let pk = pubkey(1);

        let signature = backend.sign(&pk, b"message", 42);

        assert!(!backend.verify(&pk, b"other message", 42, &signature));
        assert!(!backend.verify(&pk, b"message", 43, &signature));
        assert!(!backend.verify(&pubkey(2), b"message", 42, &signature));
    }

    #[test]
    fn verify_multiple_requires_pairing() {
        let backend = TestingBlsBackend;

        let mut aggregate = AggregatePublicKey::new();
        aggregate.add(&pubkey(1));
        aggregate.add(&pubkey(2));

        let messages: [&[u8]; 2] = [b"zero", b"one"];
        let signature = backend.sign_multiple(&messages, 7, &[&aggregate, &aggregate]);

        assert!(backend.verify_multiple(&messages, 7, &[&aggregate, &aggregate], &signature));
        // Mismatched pairing arity is never valid.
        assert!(!backend.verify_multiple(&messages, 7, &[&aggregate], &signature));
        assert!(!backend.verify_multiple(&[], 7, &[], &signature));
    }
}
