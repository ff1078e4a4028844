use crate::*;
use tree_hash::TreeHash;

/// Builds a `ProposerSlashing`.
///
/// This struct should **never be used for production purposes.**
pub struct TestingProposerSlashingBuilder();

impl TestingProposerSlashingBuilder {
    /// Two distinct proposals at the same slot and shard, signed by the
    /// proposer's key.
    pub fn double_proposal(
        proposer_index: u64,
        slot: Slot,
        shard: u64,
        pubkey: &PublicKeyBytes,
        fork: &Fork,
        backend: &TestingBlsBackend,
        spec: &ChainSpec,
    ) -> ProposerSlashing {
        let proposal_data_1 = ProposalSignedData {
            slot,
            shard,
            block_root: Hash256::from_low_u64_le(1),
        };
        let proposal_data_2 = ProposalSignedData {
            slot,
            shard,
            block_root: Hash256::from_low_u64_le(2),
        };

        let domain = spec.get_domain(slot.epoch(spec.epoch_length), Domain::Proposal, fork);

        let proposal_signature_1 =
            backend.sign(pubkey, proposal_data_1.tree_hash_root().as_bytes(), domain);
        let proposal_signature_2 =
            backend.sign(pubkey, proposal_data_2.tree_hash_root().as_bytes(), domain);

        ProposerSlashing {
            proposer_index,
            proposal_data_1,
            proposal_signature_1,
            proposal_data_2,
            proposal_signature_2,
        }
    }
}
