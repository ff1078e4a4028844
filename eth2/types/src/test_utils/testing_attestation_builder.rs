use crate::beacon_state::helpers::bitfield_bit;
use crate::*;
use tree_hash::TreeHash;

/// Builds an attestation consistent with some `BeaconState`: matching
/// justified epoch and root, matching crosslink, zero shard block root, and
/// bitfields sized to the shard committee.
///
/// This struct should **never be used for production purposes.**
pub struct TestingAttestationBuilder {
    committee: Vec<usize>,
    attestation: Attestation,
}

impl TestingAttestationBuilder {
    pub fn new(state: &BeaconState, slot: Slot, shard: u64, spec: &ChainSpec) -> Self {
        let current_epoch_start = state
            .current_epoch(spec)
            .start_slot(spec.epoch_length);

        let justified_epoch = if slot >= current_epoch_start {
            state.justified_epoch
        } else {
            state.previous_justified_epoch
        };

        let justified_block_root = state
            .get_block_root(justified_epoch.start_slot(spec.epoch_length), spec)
            .cloned()
            .unwrap_or(spec.zero_hash);

        let committee = state
            .get_shard_committee(slot, shard, spec)
            .expect("builder shard is within spec.shard_count");

        let bitfield_len = (committee.len() + 7) >> 3;
        let mut aggregation_bitfield = vec![0; bitfield_len];
        for i in 0..committee.len() {
            aggregation_bitfield[i / 8] |= 1 << (i % 8);
        }

        let attestation = Attestation {
            data: AttestationData {
                slot,
                shard,
                justified_epoch,
                justified_block_root,
                latest_crosslink_root: state.latest_crosslinks[shard as usize].shard_block_root,
                shard_block_root: spec.zero_hash,
            },
            aggregation_bitfield,
            custody_bitfield: vec![0; bitfield_len],
            aggregate_signature: SignatureBytes::empty(),
        };

        Self {
            committee,
            attestation,
        }
    }

    pub fn data_mut(&mut self) -> &mut AttestationData {
        &mut self.attestation.data
    }

    /// Aggregate-sign over the custody partition of the committee.
    pub fn sign(
        &mut self,
        state: &BeaconState,
        backend: &TestingBlsBackend,
        spec: &ChainSpec,
    ) -> &mut Self {
        let mut aggregate_pubs = vec![AggregatePublicKey::new(); 2];
        let mut message_exists = vec![false; 2];

        for (i, validator_index) in self.committee.iter().enumerate() {
            if !bitfield_bit(&self.attestation.aggregation_bitfield, i).unwrap_or(false) {
                continue;
            }
            let custody_bit = bitfield_bit(&self.attestation.custody_bitfield, i)
                .expect("custody bitfield covers the committee");

            message_exists[custody_bit as usize] = true;
            aggregate_pubs[custody_bit as usize]
                .add(&state.validator_registry[*validator_index].pubkey);
        }

        let message_0 = AttestationDataAndCustodyBit {
            data: self.attestation.data.clone(),
            custody_bit: false,
        }
        .tree_hash_root();
        let message_1 = AttestationDataAndCustodyBit {
            data: self.attestation.data.clone(),
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
            self.attestation.data.slot.epoch(spec.epoch_length),
            Domain::Attestation,
            &state.fork,
        );

        self.attestation.aggregate_signature = backend.sign_multiple(&messages, domain, &keys);
        self
    }

    pub fn build(self) -> Attestation {
        self.attestation
    }
}
