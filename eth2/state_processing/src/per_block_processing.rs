use crate::common::{initiate_validator_exit, penalize_validator, process_deposit};
use errors::{BlockProcessingError, IntoWithIndex, OperationKind};
use hashing::repeat_hash;
use ssz::Encode;
use types::*;

pub use self::verify_attester_slashing::{gather_slashable_indices, verify_attester_slashing};
pub use self::verify_proposer_slashing::verify_proposer_slashing;
pub use self::verify_slashable_attestation::verify_slashable_attestation;
pub use verify_attestation::verify_attestation;
pub use verify_deposit::{
    decode_deposit_input, deposit_value, validator_index_map, verify_deposit_merkle_proof,
};
pub use verify_exit::verify_exit;

pub mod errors;
mod verify_attestation;
mod verify_attester_slashing;
mod verify_deposit;
mod verify_exit;
mod verify_proposer_slashing;
mod verify_slashable_attestation;


/// The strategy to be used when validating the block's signatures.
#[derive(PartialEq, Clone, Copy)]
pub enum VerifySignatures {
    /// Validate all signatures encountered.
    True,
    /// Do not validate any signature. Use with caution.
    False,
}

impl VerifySignatures {
    pub fn is_true(self) -> bool {
        self == VerifySignatures::True
    }
}

/// Updates the state for a new block, whilst validating that the block is
/// valid, optionally checking each signature against `backend`.
///
/// Returns `Ok(())` if the block is valid and the state was successfully
/// updated. Otherwise returns an error describing why the block was invalid or
/// how the function failed to execute. On error the state may be partially
/// mutated and must be discarded.
pub fn per_block_processing<B: BlsBackend>(
    state: &mut BeaconState,
    block: &BeaconBlock,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    if verify_signatures.is_true() {
        verify_block_signature(state, block, backend, spec)?;
    }

    process_eth1_data(state, &block.eth1_data);
    process_randao(state, block, spec)?;
    process_proposer_slashings(
        state,
        &block.body.proposer_slashings,
        verify_signatures,
        backend,
        spec,
    )?;
    process_attester_slashings(
        state,
        &block.body.attester_slashings,
        verify_signatures,
        backend,
        spec,
    )?;
    process_attestations(
        state,
        &block.body.attestations,
        verify_signatures,
        backend,
        spec,
    )?;
    process_deposits(state, &block.body.deposits, spec)?;
    process_exits(state, &block.body.exits, verify_signatures, backend, spec)?;

    Ok(())
}

/// Verifies the proposer's signature over the block.
pub fn verify_block_signature<B: BlsBackend>(
    state: &BeaconState,
    block: &BeaconBlock,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let proposer_index = state.get_beacon_proposer_index(block.slot, spec)?;
    let proposer = state
        .validator_registry
        .get(proposer_index)
        .ok_or(BeaconStateError::UnknownValidator)?;

    let domain = spec.get_domain(
        block.slot.epoch(spec.epoch_length),
        Domain::Proposal,
        &state.fork,
    );

    block_verify!(
        backend.verify(
            &proposer.pubkey,
            block.signed_root().as_bytes(),
            domain,
            &block.signature
        ),
        BlockProcessingError::ProposalSignatureInvalid
    );

    Ok(())
}

/// Update the `state.eth1_data_votes` tallies based upon the `eth1_data`
/// carried by a block.
///
/// Increments the first tally whose data is byte-identical, otherwise appends
/// a new tally with count 1. Insertion order is preserved and this never
/// fails.
pub fn process_eth1_data(state: &mut BeaconState, eth1_data: &Eth1Data) {
    for vote in state.eth1_data_votes.iter_mut() {
        if ssz_bytes_eq(&vote.eth1_data, eth1_data) {
            vote.vote_count += 1;
            return;
        }
    }

    state.eth1_data_votes.push(Eth1DataVote {
        eth1_data: eth1_data.clone(),
        vote_count: 1,
    });
}

/// Verifies the block's `randao_reveal` opens the proposer's commitment and
/// folds the reveal into `state.latest_randao_mixes`.
///
/// On success the proposer's commitment becomes the reveal itself, at zero
/// layers.
pub fn process_randao(
    state: &mut BeaconState,
    block: &BeaconBlock,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    let slot = state.slot;
    let proposer_index = state.get_beacon_proposer_index(slot, spec)?;

    let proposer = &state.validator_registry[proposer_index];
    let hashed_reveal = Hash256::from(repeat_hash(
        block.randao_reveal.to_fixed_bytes(),
        proposer.randao_layers,
    ));
    block_verify!(
        hashed_reveal == proposer.randao_commitment,
        BlockProcessingError::RandaoCommitmentMismatch {
            commitment: proposer.randao_commitment,
            hashed_reveal,
        }
    );

    state.update_randao_mix(slot, block.randao_reveal, spec)?;

    let proposer = &mut state.validator_registry[proposer_index];
    proposer.randao_commitment = block.randao_reveal;
    proposer.randao_layers = 0;

    Ok(())
}

/// Validates each `ProposerSlashing` and updates the state, short-circuiting
/// on an invalid object.
///
/// Verification and application are interleaved in series: a block may carry
/// two slashings for the same proposer and the second must observe the first
/// penalization.
pub fn process_proposer_slashings<B: BlsBackend>(
    state: &mut BeaconState,
    proposer_slashings: &[ProposerSlashing],
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    block_verify!(
        proposer_slashings.len() as u64 <= spec.max_proposer_slashings,
        BlockProcessingError::LimitExceeded {
            op_kind: OperationKind::ProposerSlashing,
            count: proposer_slashings.len(),
            max: spec.max_proposer_slashings,
        }
    );

    for (i, proposer_slashing) in proposer_slashings.iter().enumerate() {
        verify_proposer_slashing(proposer_slashing, state, verify_signatures, backend, spec)
            .map_err(|e| e.into_with_index(i))?;

        // An already-penalized proposer yields a valid record but no further
        // state change.
        let proposer = &state.validator_registry[proposer_slashing.proposer_index as usize];
        if proposer.penalized_epoch > state.current_epoch(spec) {
            penalize_validator(state, proposer_slashing.proposer_index as usize, spec)?;
        }
    }

    Ok(())
}

/// Validates each `AttesterSlashing` and updates the state, short-circuiting
/// on an invalid object.
pub fn process_attester_slashings<B: BlsBackend>(
    state: &mut BeaconState,
    attester_slashings: &[AttesterSlashing],
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    block_verify!(
        attester_slashings.len() as u64 <= spec.max_attester_slashings,
        BlockProcessingError::LimitExceeded {
            op_kind: OperationKind::AttesterSlashing,
            count: attester_slashings.len(),
            max: spec.max_attester_slashings,
        }
    );

    for (i, attester_slashing) in attester_slashings.iter().enumerate() {
        verify_attester_slashing(state, attester_slashing, verify_signatures, backend, spec)
            .map_err(|e| e.into_with_index(i))?;

        let slashable_indices = gather_slashable_indices(state, attester_slashing, spec)
            .map_err(|e| e.into_with_index(i))?;

        for index in slashable_indices {
            penalize_validator(state, index as usize, spec)?;
        }
    }

    Ok(())
}

/// Validates each `Attestation`, then replaces `state.latest_attestations`
/// with the block's pending attestation records, in block order.
pub fn process_attestations<B: BlsBackend>(
    state: &mut BeaconState,
    attestations: &[Attestation],
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    block_verify!(
        attestations.len() as u64 <= spec.max_attestations,
        BlockProcessingError::LimitExceeded {
            op_kind: OperationKind::Attestation,
            count: attestations.len(),
            max: spec.max_attestations,
        }
    );

    let mut pending_attestations = Vec::with_capacity(attestations.len());
    for (i, attestation) in attestations.iter().enumerate() {
        verify_attestation(state, attestation, verify_signatures, backend, spec)
            .map_err(|e| e.into_with_index(i))?;

        pending_attestations.push(PendingAttestation {
            data: attestation.data.clone(),
            aggregation_bitfield: attestation.aggregation_bitfield.clone(),
            custody_bitfield: attestation.custody_bitfield.clone(),
            slot_included: state.slot,
        });
    }

    state.latest_attestations = pending_attestations;

    Ok(())
}

/// Validates each `Deposit` and updates the validator registry,
/// short-circuiting on an invalid object.
///
/// Deposits apply in block order: a later deposit for a pubkey introduced by
/// an earlier one tops up the freshly-created validator.
pub fn process_deposits(
    state: &mut BeaconState,
    deposits: &[Deposit],
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    block_verify!(
        deposits.len() as u64 <= spec.max_deposits,
        BlockProcessingError::LimitExceeded {
            op_kind: OperationKind::Deposit,
            count: deposits.len(),
            max: spec.max_deposits,
        }
    );

    let mut index_map = validator_index_map(state);

    for (i, deposit) in deposits.iter().enumerate() {
        let deposit_input =
            decode_deposit_input(&deposit.deposit_data).map_err(|e| e.into_with_index(i))?;

        verify_deposit_merkle_proof(state, deposit, spec).map_err(|e| e.into_with_index(i))?;

        let amount = deposit_value(&deposit.deposit_data).map_err(|e| e.into_with_index(i))?;

        process_deposit(
            state,
            &mut index_map,
            deposit_input.pubkey,
            amount,
            deposit_input.proof_of_possession,
            deposit_input.withdrawal_credentials,
            spec,
        )
        .map_err(|e| e.into_with_index(i))?;
    }

    Ok(())
}

/// Validates each `VoluntaryExit` and initiates the exits, short-circuiting on
/// an invalid object.
pub fn process_exits<B: BlsBackend>(
    state: &mut BeaconState,
    exits: &[VoluntaryExit],
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), BlockProcessingError> {
    block_verify!(
        exits.len() as u64 <= spec.max_exits,
        BlockProcessingError::LimitExceeded {
            op_kind: OperationKind::VoluntaryExit,
            count: exits.len(),
            max: spec.max_exits,
        }
    );

    for (i, exit) in exits.iter().enumerate() {
        verify_exit(state, exit, verify_signatures, backend, spec)
            .map_err(|e| e.into_with_index(i))?;

        initiate_validator_exit(state, exit.validator_index as usize, spec)?;
    }

    Ok(())
}

/// Equality over the canonical SSZ encoding, rather than `PartialEq`.
///
/// Consensus-observable comparisons must follow the wire bytes exactly.
pub(crate) fn ssz_bytes_eq<T: Encode>(a: &T, b: &T) -> bool {
    a.as_ssz_bytes() == b.as_ssz_bytes()
}
