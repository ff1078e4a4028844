use crate::*;
use hashing::hash;

/// A deterministic public key for the validator at `index`.
///
/// Test pubkeys only need to be distinct and reproducible; the testing BLS
/// backend treats them as opaque bytes.
pub fn pubkey_for_validator(index: u64) -> PublicKeyBytes {
    let seed = hash(&index.to_le_bytes());
    let tail = hash(&seed);

    let mut bytes = [0; 48];
    bytes[..32].copy_from_slice(&seed);
    bytes[32..].copy_from_slice(&tail[..16]);
    PublicKeyBytes::from(bytes)
}

/// Builds a `BeaconState` with a registry of active validators and all ring
/// buffers sized to the given spec.
///
/// This struct should **never be used for production purposes.**
pub struct TestingBeaconStateBuilder {
    state: BeaconState,
}

impl TestingBeaconStateBuilder {
    pub fn new(validator_count: usize, spec: &ChainSpec) -> Self {
        let genesis_epoch = spec.genesis_slot.epoch(spec.epoch_length);

        let validator_registry = (0..validator_count)
            .map(|i| {
                let pubkey = pubkey_for_validator(i as u64);
                Validator {
                    pubkey,
                    withdrawal_credentials: Hash256::from_slice(&hash(&pubkey.serialize())),
                    randao_commitment: Hash256::zero(),
                    randao_layers: 0,
                    activation_epoch: genesis_epoch,
                    exit_epoch: spec.far_future_epoch,
                    withdrawal_epoch: spec.far_future_epoch,
                    penalized_epoch: spec.far_future_epoch,
                }
            })
            .collect();

        let state = BeaconState {
            slot: spec.genesis_slot,
            genesis_time: 0,
            fork: Fork {
                previous_version: spec.genesis_fork_version,
                current_version: spec.genesis_fork_version,
                epoch: genesis_epoch,
            },
            validator_registry,
            validator_balances: vec![32_000_000_000; validator_count],
            latest_randao_mixes: vec![spec.zero_hash; spec.latest_randao_mixes_length],
            previous_justified_epoch: genesis_epoch,
            justified_epoch: genesis_epoch,
            latest_crosslinks: vec![Crosslink::default(); spec.shard_count as usize],
            latest_block_roots: vec![spec.zero_hash; spec.latest_block_roots_length],
            latest_attestations: vec![],
            latest_eth1_data: Eth1Data::default(),
            eth1_data_votes: vec![],
        };

        Self { state }
    }

    pub fn teleport_to_slot(&mut self, slot: Slot) -> &mut Self {
        self.state.slot = slot;
        self
    }

    /// Arm the proposer for `slot` with a randao commitment opening to
    /// `reveal` at the given layer count.
    pub fn set_randao_commitment(
        &mut self,
        slot: Slot,
        reveal: Hash256,
        layers: u64,
        spec: &ChainSpec,
    ) -> &mut Self {
        let proposer_index = self
            .state
            .get_beacon_proposer_index(slot, spec)
            .expect("builder state has active validators");

        let commitment = hashing::repeat_hash(reveal.to_fixed_bytes(), layers);
        self.state.validator_registry[proposer_index].randao_commitment =
            Hash256::from(commitment);
        self.state.validator_registry[proposer_index].randao_layers = layers;
        self
    }

    pub fn build(self) -> BeaconState {
        self.state
    }
}
