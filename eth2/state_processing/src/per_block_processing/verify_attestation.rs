use super::errors::{AttestationInvalid as Invalid, AttestationValidationError as Error};
use crate::VerifySignatures;
use tree_hash::TreeHash;
use types::beacon_state::helpers::bitfield_bit;
use types::*;

/// Indicates if an `Attestation` is valid to be included in a block in the
/// current epoch of the given state.
///
/// Returns `Ok(())` if the `Attestation` is valid, otherwise indicates the
/// reason for invalidity.
pub fn verify_attestation<B: BlsBackend>(
    state: &BeaconState,
    attestation: &Attestation,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), Error> {
    // Verify that `attestation.data.slot + MIN_ATTESTATION_INCLUSION_DELAY <= state.slot`.
    verify!(
        attestation.data.slot + spec.min_attestation_inclusion_delay <= state.slot,
        Invalid::IncludedTooEarly {
            state: state.slot,
            delay: spec.min_attestation_inclusion_delay,
            attestation: attestation.data.slot,
        }
    );

    // Verify that `attestation.data.slot + EPOCH_LENGTH >= state.slot`.
    verify!(
        attestation.data.slot + spec.epoch_length >= state.slot,
        Invalid::IncludedTooLate {
            state: state.slot,
            attestation: attestation.data.slot,
        }
    );

    // Attestations for the current epoch must cite the current justified
    // epoch, older attestations the previous one.
    if attestation.data.slot >= state.current_epoch(spec).start_slot(spec.epoch_length) {
        verify!(
            attestation.data.justified_epoch == state.justified_epoch,
            Invalid::WrongJustifiedEpoch {
                state: state.justified_epoch,
                attestation: attestation.data.justified_epoch,
                is_current: true,
            }
        );
    } else {
        verify!(
            attestation.data.justified_epoch == state.previous_justified_epoch,
            Invalid::WrongJustifiedEpoch {
                state: state.previous_justified_epoch,
                attestation: attestation.data.justified_epoch,
                is_current: false,
            }
        );
    }

    // Verify that `attestation.data.justified_block_root` matches the block
    // root at the justified epoch's start slot.
    let state_block_root = *state
        .get_block_root(
            attestation
                .data
                .justified_epoch
                .start_slot(spec.epoch_length),
            spec,
        )
        .ok_or(BeaconStateError::InsufficientBlockRoots)?;

    verify!(
        attestation.data.justified_block_root == state_block_root,
        Invalid::WrongJustifiedRoot {
            state: state_block_root,
            attestation: attestation.data.justified_block_root,
        }
    );

    // Verify that either the attestation's crosslink root or its shard block
    // root matches the state's crosslink for the shard.
    let state_shard_block_root = state
        .latest_crosslinks
        .get(attestation.data.shard as usize)
        .ok_or(BeaconStateError::ShardOutOfBounds)?
        .shard_block_root;

    verify!(
        (attestation.data.latest_crosslink_root == state_shard_block_root)
            | (attestation.data.shard_block_root == state_shard_block_root),
        Invalid::BadLatestCrosslinkRoot
    );

    // Verify that `attestation.data.shard_block_root == ZERO_HASH`.
    // [TO BE REMOVED IN PHASE 1]
    verify!(
        attestation.data.shard_block_root == spec.zero_hash,
        Invalid::ShardBlockRootNotZero
    );

    if verify_signatures.is_true() {
        let committee =
            state.get_shard_committee(attestation.data.slot, attestation.data.shard, spec)?;
        verify!(
            verify_attestation_signature(state, &committee, attestation, backend, spec),
            Invalid::BadSignature
        );
    }

    Ok(())
}

/// Verifies the aggregate signature over the custody partition of the
/// attesting committee, returning `true` if it is valid.
///
/// Returns `false` if:
///  - The custody bitfield does not cover every participant.
///  - A participating validator index is not in the registry.
///  - The signature itself does not verify.
fn verify_attestation_signature<B: BlsBackend>(
    state: &BeaconState,
    committee: &[usize],
    attestation: &Attestation,
    backend: &B,
    spec: &ChainSpec,
) -> bool {
    let mut aggregate_pubs = vec![AggregatePublicKey::new(); 2];
    let mut message_exists = vec![false; 2];

    for (i, v) in committee.iter().enumerate() {
        if !bitfield_bit(&attestation.aggregation_bitfield, i).unwrap_or(false) {
            continue;
        }

        let custody_bit = match bitfield_bit(&attestation.custody_bitfield, i) {
            Some(bit) => bit,
            // Invalidate the signature if the custody bitfield is too short.
            None => return false,
        };

        message_exists[custody_bit as usize] = true;

        match state.validator_registry.get(*v) {
            Some(validator) => {
                aggregate_pubs[custody_bit as usize].add(&validator.pubkey);
            }
            // Invalidate the signature if a validator index is unknown.
            None => return false,
        };
    }

    // Message when the custody bit is `false`.
    let message_0 = AttestationDataAndCustodyBit {
        data: attestation.data.clone(),
        custody_bit: false,
    }
    .tree_hash_root();

    // Message when the custody bit is `true`.
    let message_1 = AttestationDataAndCustodyBit {
        data: attestation.data.clone(),
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
        attestation.data.slot.epoch(spec.epoch_length),
        Domain::Attestation,
        &state.fork,
    );

    backend.verify_multiple(&messages, domain, &keys, &attestation.aggregate_signature)
}
