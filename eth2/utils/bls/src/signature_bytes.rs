use crate::{Error, SIGNATURE_BYTES_LEN};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_utils::hex::{encode as hex_encode, PrefixedHexVisitor};
use ssz::{Decode, Encode};
use std::fmt;
use tree_hash::TreeHash;

/// A BLS signature (possibly aggregate) in its compressed, serialized form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureBytes {
    bytes: [u8; SIGNATURE_BYTES_LEN],
}

impl SignatureBytes {
    /// The all-zero "empty" signature, used as a placeholder in messages that
    /// are hashed without their signature field.
    pub fn empty() -> Self {
        Self {
            bytes: [0; SIGNATURE_BYTES_LEN],
        }
    }

    pub fn serialize(&self) -> [u8; SIGNATURE_BYTES_LEN] {
        self.bytes
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == SIGNATURE_BYTES_LEN {
            let mut sig_bytes = [0; SIGNATURE_BYTES_LEN];
            sig_bytes[..].copy_from_slice(bytes);
            Ok(Self { bytes: sig_bytes })
        } else {
            Err(Error::InvalidByteLength {
                got: bytes.len(),
                expected: SIGNATURE_BYTES_LEN,
            })
        }
    }
}

impl From<[u8; SIGNATURE_BYTES_LEN]> for SignatureBytes {
    fn from(bytes: [u8; SIGNATURE_BYTES_LEN]) -> Self {
        Self { bytes }
    }
}

impl Encode for SignatureBytes {
    impl_ssz_encode!(SIGNATURE_BYTES_LEN);
}

impl Decode for SignatureBytes {
    impl_ssz_decode!(SIGNATURE_BYTES_LEN);
}

impl TreeHash for SignatureBytes {
    impl_tree_hash!(SIGNATURE_BYTES_LEN);
}

impl Serialize for SignatureBytes {
    impl_serde_serialize!();
}

impl<'de> Deserialize<'de> for SignatureBytes {
    impl_serde_deserialize!();
}

impl fmt::Debug for SignatureBytes {
    impl_debug!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssz_round_trip() {
        let original = SignatureBytes::from([7; SIGNATURE_BYTES_LEN]);

        let bytes = original.as_ssz_bytes();
        let decoded = SignatureBytes::from_ssz_bytes(&bytes).unwrap();

        assert_eq!(original, decoded);
    }
}
