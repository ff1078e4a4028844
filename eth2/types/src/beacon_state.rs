use crate::{
    ChainSpec, Crosslink, Epoch, Eth1Data, Eth1DataVote, Fork, Hash256, PendingAttestation, Slot,
    Validator,
};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

pub mod helpers;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    /// A referenced validator index is not in the registry.
    UnknownValidator,
    /// There are no active validators to select from.
    InsufficientValidators,
    /// The requested slot is outside the block-root ring buffer window.
    InsufficientBlockRoots,
    /// The randao mix ring buffer is shorter than the configured length.
    InsufficientRandaoMixes,
    ShardOutOfBounds,
}

/// The state of the beacon chain, mutated by each processed block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct BeaconState {
    // Misc
    pub slot: Slot,
    pub genesis_time: u64,
    pub fork: Fork,

    // Validator registry
    pub validator_registry: Vec<Validator>,
    pub validator_balances: Vec<u64>,

    // Randomness
    pub latest_randao_mixes: Vec<Hash256>,

    // Finality
    pub previous_justified_epoch: Epoch,
    pub justified_epoch: Epoch,

    // Recent state
    pub latest_crosslinks: Vec<Crosslink>,
    pub latest_block_roots: Vec<Hash256>,
    pub latest_attestations: Vec<PendingAttestation>,

    // Ethereum 1.0 chain data
    pub latest_eth1_data: Eth1Data,
    pub eth1_data_votes: Vec<Eth1DataVote>,
}

impl BeaconState {
    /// The epoch corresponding to `self.slot`.
    pub fn current_epoch(&self, spec: &ChainSpec) -> Epoch {
        self.slot.epoch(spec.epoch_length)
    }

    /// Registry indices of all validators active in `epoch`, ascending.
    pub fn get_active_validator_indices(&self, epoch: Epoch) -> Vec<usize> {
        self.validator_registry
            .iter()
            .enumerate()
            .filter(|(_, validator)| validator.is_active_at(epoch))
            .map(|(i, _)| i)
            .collect()
    }

    /// The validator expected to propose the beacon block at `slot`.
    ///
    /// Selection rotates through the active validator set; full proposer
    /// shuffling is performed a layer above this crate.
    pub fn get_beacon_proposer_index(
        &self,
        slot: Slot,
        spec: &ChainSpec,
    ) -> Result<usize, Error> {
        let active_indices = self.get_active_validator_indices(slot.epoch(spec.epoch_length));
        if active_indices.is_empty() {
            return Err(Error::InsufficientValidators);
        }
        Ok(active_indices[slot.as_usize() % active_indices.len()])
    }

    /// The validators attesting for `shard` at `slot`.
    ///
    /// Assignment rotates the active validator set across shards; full
    /// committee shuffling is performed a layer above this crate.
    pub fn get_shard_committee(
        &self,
        slot: Slot,
        shard: u64,
        spec: &ChainSpec,
    ) -> Result<Vec<usize>, Error> {
        if shard >= spec.shard_count {
            return Err(Error::ShardOutOfBounds);
        }
        Ok(self
            .get_active_validator_indices(slot.epoch(spec.epoch_length))
            .into_iter()
            .filter(|i| *i as u64 % spec.shard_count == shard)
            .collect())
    }

    /// The block root at `slot`, if it is still covered by the ring buffer.
    pub fn get_block_root(&self, slot: Slot, spec: &ChainSpec) -> Option<&Hash256> {
        if slot >= self.slot || self.slot > slot + spec.latest_block_roots_length as u64 {
            return None;
        }
        self.latest_block_roots
            .get(slot.as_usize() % spec.latest_block_roots_length)
    }

    /// The randao mix at `slot`'s position in the ring buffer.
    pub fn get_randao_mix(&self, slot: Slot, spec: &ChainSpec) -> Option<&Hash256> {
        self.latest_randao_mixes
            .get(slot.as_usize() % spec.latest_randao_mixes_length)
    }

    /// XOR `reveal` into the randao mix at `slot`'s position.
    ///
    /// The ring buffer never changes size; only the addressed entry mutates.
    pub fn update_randao_mix(
        &mut self,
        slot: Slot,
        reveal: Hash256,
        spec: &ChainSpec,
    ) -> Result<(), Error> {
        let index = slot.as_usize() % spec.latest_randao_mixes_length;
        let mix = self
            .latest_randao_mixes
            .get_mut(index)
            .ok_or(Error::InsufficientRandaoMixes)?;

        for (mix_byte, reveal_byte) in mix.as_bytes_mut().iter_mut().zip(reveal.as_bytes()) {
            *mix_byte ^= reveal_byte;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestingBeaconStateBuilder;

    #[test]
    fn block_root_window() {
        let spec = ChainSpec::few_validators();
        let mut builder = TestingBeaconStateBuilder::new(4, &spec);
        builder.teleport_to_slot(Slot::new(100));
        let mut state = builder.build();

        state.latest_block_roots[99 % spec.latest_block_roots_length] =
            Hash256::from_low_u64_le(99);

        // Current and future slots have no root yet.
        assert_eq!(state.get_block_root(Slot::new(100), &spec), None);
        assert_eq!(state.get_block_root(Slot::new(101), &spec), None);
        // The most recent slot does.
        assert_eq!(
            state.get_block_root(Slot::new(99), &spec),
            Some(&Hash256::from_low_u64_le(99))
        );
        // A slot older than the ring buffer does not.
        let stale = Slot::new(100) - spec.latest_block_roots_length as u64 - 1;
        assert_eq!(state.get_block_root(stale, &spec), None);
    }

    #[test]
    fn update_randao_mix_is_xor() {
        let spec = ChainSpec::few_validators();
        let mut builder = TestingBeaconStateBuilder::new(4, &spec);
        builder.teleport_to_slot(Slot::new(9));
        let mut state = builder.build();

        let reveal = Hash256::from_low_u64_le(0xDEAD_BEEF);
        let original = *state.get_randao_mix(state.slot, &spec).unwrap();

        state.update_randao_mix(state.slot, reveal, &spec).unwrap();
        assert_ne!(state.get_randao_mix(state.slot, &spec), Some(&original));

        // XOR is self-inverse.
        state.update_randao_mix(state.slot, reveal, &spec).unwrap();
        assert_eq!(state.get_randao_mix(state.slot, &spec), Some(&original));
    }

    #[test]
    fn proposer_rotates_through_active_validators() {
        let spec = ChainSpec::few_validators();
        let builder = TestingBeaconStateBuilder::new(4, &spec);
        let state = builder.build();

        assert_eq!(state.get_beacon_proposer_index(Slot::new(0), &spec), Ok(0));
        assert_eq!(state.get_beacon_proposer_index(Slot::new(5), &spec), Ok(1));
    }

    #[test]
    fn proposer_requires_active_validators() {
        let spec = ChainSpec::few_validators();
        let state = BeaconState {
            validator_registry: vec![],
            ..TestingBeaconStateBuilder::new(1, &spec).build()
        };

        assert_eq!(
            state.get_beacon_proposer_index(Slot::new(0), &spec),
            Err(Error::InsufficientValidators)
        );
    }
}
