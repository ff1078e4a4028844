mod testing_attestation_builder;
mod testing_attester_slashing_builder;
mod testing_beacon_state_builder;
mod testing_deposit_builder;
mod testing_proposer_slashing_builder;

pub use testing_attestation_builder::TestingAttestationBuilder;
pub use testing_attester_slashing_builder::{
    sign_slashable_attestation, TestingAttesterSlashingBuilder,
};
pub use testing_beacon_state_builder::{pubkey_for_validator, TestingBeaconStateBuilder};
pub use testing_deposit_builder::{merkle_root_from_branch, TestingDepositBuilder};
pub use testing_proposer_slashing_builder::TestingProposerSlashingBuilder;
