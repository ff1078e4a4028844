use super::errors::{AttesterSlashingInvalid as Invalid, AttesterSlashingValidationError as Error};
use super::ssz_bytes_eq;
use super::verify_slashable_attestation::verify_slashable_attestation;
use crate::VerifySignatures;
use types::*;

/// Indicates if an `AttesterSlashing` is valid to be included in a block in
/// the current epoch of the given state.
///
/// Returns `Ok(())` if the `AttesterSlashing` is valid, otherwise indicates
/// the reason for invalidity.
pub fn verify_attester_slashing<B: BlsBackend>(
    state: &BeaconState,
    attester_slashing: &AttesterSlashing,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), Error> {
    let slashable_attestation_1 = &attester_slashing.slashable_attestation_1;
    let slashable_attestation_2 = &attester_slashing.slashable_attestation_2;

    // Identical data means both votes are the same vote; nothing conflicts.
    verify!(
        !ssz_bytes_eq(&slashable_attestation_1.data, &slashable_attestation_2.data),
        Invalid::AttestationDataIdentical
    );

    verify!(
        slashable_attestation_1.is_double_vote(slashable_attestation_2, spec)
            | slashable_attestation_1.is_surround_vote(slashable_attestation_2, spec),
        Invalid::NotSlashable
    );

    verify_slashable_attestation(state, slashable_attestation_1, verify_signatures, backend, spec)
        .map_err(|e| Error::Invalid(Invalid::SlashableAttestation1Invalid(e)))?;
    verify_slashable_attestation(state, slashable_attestation_2, verify_signatures, backend, spec)
        .map_err(|e| Error::Invalid(Invalid::SlashableAttestation2Invalid(e)))?;

    Ok(())
}

/// For a given attester slashing, return the indices that can be penalized:
/// those attesting in both votes and not already penalized.
///
/// Returns `Ok(indices)` only if `indices` is non-empty.
pub fn gather_slashable_indices(
    state: &BeaconState,
    attester_slashing: &AttesterSlashing,
    spec: &ChainSpec,
) -> Result<Vec<u64>, Error> {
    let slashable_attestation_1 = &attester_slashing.slashable_attestation_1;
    let slashable_attestation_2 = &attester_slashing.slashable_attestation_2;
    let current_epoch = state.current_epoch(spec);

    let mut slashable_indices = vec![];
    for i in &slashable_attestation_1.validator_indices {
        let validator = state
            .validator_registry
            .get(*i as usize)
            .ok_or_else(|| Error::Invalid(Invalid::UnknownValidator(*i)))?;

        if slashable_attestation_2.validator_indices.contains(i)
            && validator.penalized_epoch > current_epoch
        {
            slashable_indices.push(*i);
        }
    }

    verify!(!slashable_indices.is_empty(), Invalid::NoSlashableIndices);

    Ok(slashable_indices)
}
