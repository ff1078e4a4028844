use super::errors::{ProposerSlashingInvalid as Invalid, ProposerSlashingValidationError as Error};
use crate::VerifySignatures;
use tree_hash::TreeHash;
use types::*;

/// Indicates if a `ProposerSlashing` is valid to be included in a block in the
/// current epoch of the given state.
///
/// Returns `Ok(())` if the `ProposerSlashing` is valid, otherwise indicates
/// the reason for invalidity.
pub fn verify_proposer_slashing<B: BlsBackend>(
    proposer_slashing: &ProposerSlashing,
    state: &BeaconState,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), Error> {
    let proposer = state
        .validator_registry
        .get(proposer_slashing.proposer_index as usize)
        .ok_or_else(|| {
            Error::Invalid(Invalid::ProposerUnknown(proposer_slashing.proposer_index))
        })?;

    let data_1 = &proposer_slashing.proposal_data_1;
    let data_2 = &proposer_slashing.proposal_data_2;

    verify!(
        data_1.slot == data_2.slot,
        Invalid::ProposalSlotMismatch(data_1.slot, data_2.slot)
    );

    verify!(
        data_1.shard == data_2.shard,
        Invalid::ProposalShardMismatch(data_1.shard, data_2.shard)
    );

    // Two proposals for the same block are not conflicting.
    verify!(
        data_1.block_root != data_2.block_root,
        Invalid::ProposalsIdentical
    );

    if verify_signatures.is_true() {
        verify!(
            verify_proposal_signature(
                data_1,
                &proposer_slashing.proposal_signature_1,
                &proposer.pubkey,
                &state.fork,
                backend,
                spec
            ),
            Invalid::BadProposal1Signature
        );
        verify!(
            verify_proposal_signature(
                data_2,
                &proposer_slashing.proposal_signature_2,
                &proposer.pubkey,
                &state.fork,
                backend,
                spec
            ),
            Invalid::BadProposal2Signature
        );
    }

    Ok(())
}

/// Verifies the signature of a proposal.
///
/// Returns `true` if the signature is valid.
fn verify_proposal_signature<B: BlsBackend>(
    proposal: &ProposalSignedData,
    signature: &SignatureBytes,
    pubkey: &PublicKeyBytes,
    fork: &Fork,
    backend: &B,
    spec: &ChainSpec,
) -> bool {
    let message = proposal.tree_hash_root();
    let domain = spec.get_domain(
        proposal.slot.epoch(spec.epoch_length),
        Domain::Proposal,
        fork,
    );
    backend.verify(pubkey, message.as_bytes(), domain, signature)
}
