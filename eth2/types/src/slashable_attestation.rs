use crate::{AttestationData, ChainSpec, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// An attestation addressed by explicit validator registry indices, as carried
/// inside an `AttesterSlashing`.
///
/// `validator_indices` must be strictly ascending; `custody_bitfield` packs
/// one bit per index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct SlashableAttestation {
    pub validator_indices: Vec<u64>,
    pub data: AttestationData,
    pub custody_bitfield: Vec<u8>,
    pub aggregate_signature: SignatureBytes,
}

impl SlashableAttestation {
    /// Check if `self` and `other` vote for the same target epoch.
    pub fn is_double_vote(&self, other: &SlashableAttestation, spec: &ChainSpec) -> bool {
        self.data.slot.epoch(spec.epoch_length) == other.data.slot.epoch(spec.epoch_length)
    }

    /// Check if `self` surrounds `other`: `self`'s justified/target interval
    /// strictly contains `other`'s.
    pub fn is_surround_vote(&self, other: &SlashableAttestation, spec: &ChainSpec) -> bool {
        let source_epoch_1 = self.data.justified_epoch;
        let source_epoch_2 = other.data.justified_epoch;
        let target_epoch_1 = self.data.slot.epoch(spec.epoch_length);
        let target_epoch_2 = other.data.slot.epoch(spec.epoch_length);

        source_epoch_1 < source_epoch_2 && target_epoch_2 < target_epoch_1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Epoch, Slot};

    fn slashable_attestation(
        target_epoch: u64,
        source_epoch: u64,
        spec: &ChainSpec,
    ) -> SlashableAttestation {
        SlashableAttestation {
            validator_indices: vec![0],
            data: AttestationData {
                slot: Epoch::new(target_epoch).start_slot(spec.epoch_length),
                justified_epoch: Epoch::new(source_epoch),
                ..AttestationData::default()
            },
            custody_bitfield: vec![1],
            aggregate_signature: SignatureBytes::empty(),
        }
    }

    #[test]
    fn double_vote_same_target_epoch() {
        let spec = ChainSpec::few_validators();

        let a = slashable_attestation(3, 1, &spec);
        let mut b = slashable_attestation(3, 2, &spec);
        // Different slot, same epoch.
        b.data.slot = b.data.slot + Slot::new(1);

        assert!(a.is_double_vote(&b, &spec));
    }

    #[test]
    fn double_vote_different_target_epoch() {
        let spec = ChainSpec::few_validators();

        let a = slashable_attestation(1, 1, &spec);
        let b = slashable_attestation(2, 1, &spec);

        assert!(!a.is_double_vote(&b, &spec));
    }

    #[test]
    fn surround_vote_true() {
        let spec = ChainSpec::few_validators();

        let a = slashable_attestation(10, 2, &spec);
        let b = slashable_attestation(8, 4, &spec);

        assert!(a.is_surround_vote(&b, &spec));
    }

    #[test]
    fn surround_vote_false_source_epoch_fails() {
        let spec = ChainSpec::few_validators();

        let a = slashable_attestation(10, 4, &spec);
        let b = slashable_attestation(8, 4, &spec);

        assert!(!a.is_surround_vote(&b, &spec));
    }

    #[test]
    fn surround_vote_false_target_epoch_fails() {
        let spec = ChainSpec::few_validators();

        let a = slashable_attestation(8, 2, &spec);
        let b = slashable_attestation(8, 4, &spec);

        assert!(!a.is_surround_vote(&b, &spec));
    }
}
