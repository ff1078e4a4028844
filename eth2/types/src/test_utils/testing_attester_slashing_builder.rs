use crate::beacon_state::helpers::bitfield_bit;
use crate::*;
use tree_hash::TreeHash;

/// Aggregate-sign a `SlashableAttestation` over its custody partition,
/// producing the signature the pipeline's verification accepts.
pub fn sign_slashable_attestation(
    state: &BeaconState,
    slashable_attestation: &SlashableAttestation,
    backend: &TestingBlsBackend,
    spec: &ChainSpec,
) -> SignatureBytes {
    let mut aggregate_pubs = vec![AggregatePublicKey::new(); 2];
    let mut message_exists = vec![false; 2];

    for (i, validator_index) in slashable_attestation.validator_indices.iter().enumerate() {
        let custody_bit = bitfield_bit(&slashable_attestation.custody_bitfield, i)
            .expect("custody bitfield covers the validator indices");

        message_exists[custody_bit as usize] = true;
        aggregate_pubs[custody_bit as usize]
            .add(&state.validator_registry[*validator_index as usize].pubkey);
    }

    let message_0 = AttestationDataAndCustodyBit {
        data: slashable_attestation.data.clone(),
        custody_bit: false,
    }
    .tree_hash_root();
    let message_1 = AttestationDataAndCustodyBit {
        data: slashable_attestation.data.clone(),
        custody_bit: true,
    }
    .tree_hash_root();

    let mut messages: Vec<&[u8]> = vec![];
    let mut keys = vec![];

    if message_exists[0] {
        messages.push(message_0.as_bytes());
        keys.push(&aggregate_pubs[0]);
    }
    if message_exists[1] {
        messages.push(message_1.as_bytes());
        keys.push(&aggregate_pubs[1]);
    }

    let domain = spec.get_domain(
        slashable_attestation.data.slot.epoch(spec.epoch_length),
        Domain::Attestation,
        &state.fork,
    );

    backend.sign_multiple(&messages, domain, &keys)
}

/// Builds an `AttesterSlashing`.
///
/// This struct should **never be used for production purposes.**
pub struct TestingAttesterSlashingBuilder();

impl TestingAttesterSlashingBuilder {
    /// Two attestations for the same target epoch with different data and the
    /// given common validator indices.
    pub fn double_vote(
        state: &BeaconState,
        validator_indices: &[u64],
        backend: Option<&TestingBlsBackend>,
        spec: &ChainSpec,
    ) -> AttesterSlashing {
        let slot = Slot::new(1);

        let data_1 = AttestationData {
            slot,
            shard: 0,
            justified_epoch: Epoch::new(0),
            justified_block_root: Hash256::from_low_u64_le(1),
            latest_crosslink_root: Hash256::zero(),
            shard_block_root: Hash256::zero(),
        };
        let data_2 = AttestationData {
            justified_block_root: Hash256::from_low_u64_le(2),
            ..data_1.clone()
        };

        Self::build(state, validator_indices, data_1, data_2, backend, spec)
    }

    /// `attestation_1` surrounds `attestation_2`: its justified/target epoch
    /// interval strictly contains the other's.
    pub fn surround_vote(
        state: &BeaconState,
        validator_indices: &[u64],
        backend: Option<&TestingBlsBackend>,
        spec: &ChainSpec,
    ) -> AttesterSlashing {
        let data_1 = AttestationData {
            slot: Epoch::new(10).start_slot(spec.epoch_length),
            shard: 0,
            justified_epoch: Epoch::new(2),
            justified_block_root: Hash256::from_low_u64_le(1),
            latest_crosslink_root: Hash256::zero(),
            shard_block_root: Hash256::zero(),
        };
        let data_2 = AttestationData {
            slot: Epoch::new(8).start_slot(spec.epoch_length),
            justified_epoch: Epoch::new(4),
            ..data_1.clone()
        };

        Self::build(state, validator_indices, data_1, data_2, backend, spec)
    }

    fn build(
        state: &BeaconState,
        validator_indices: &[u64],
        data_1: AttestationData,
        data_2: AttestationData,
        backend: Option<&TestingBlsBackend>,
        spec: &ChainSpec,
    ) -> AttesterSlashing {
        let make_attestation = |data: AttestationData| {
            // Not all zero: the first participant carries custody bit 1.
            let mut custody_bitfield = vec![0; (validator_indices.len() + 7) >> 3];
            if let Some(byte) = custody_bitfield.first_mut() {
                *byte |= 1;
            }

            let mut attestation = SlashableAttestation {
                validator_indices: validator_indices.to_vec(),
                data,
                custody_bitfield,
                aggregate_signature: SignatureBytes::empty(),
            };

            if let Some(backend) = backend {
                attestation.aggregate_signature =
                    sign_slashable_attestation(state, &attestation, backend, spec);
            }

            attestation
        };

        AttesterSlashing {
            slashable_attestation_1: make_attestation(data_1),
            slashable_attestation_2: make_attestation(data_2),
        }
    }
}
