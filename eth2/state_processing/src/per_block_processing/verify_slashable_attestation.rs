use super::errors::{
    SlashableAttestationInvalid as Invalid, SlashableAttestationValidationError as Error,
};
use crate::VerifySignatures;
use tree_hash::TreeHash;
use types::beacon_state::helpers::{bitfield_bit, bitfield_is_zero, verify_bitfield_length};
use types::*;

/// Indicates if a `SlashableAttestation` is valid to be included in a block in
/// the current epoch of the given state.
///
/// Returns `Ok(())` if the `SlashableAttestation` is valid, otherwise
/// indicates the reason for invalidity.
pub fn verify_slashable_attestation<B: BlsBackend>(
    state: &BeaconState,
    slashable_attestation: &SlashableAttestation,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), Error> {
    if bitfield_is_zero(&slashable_attestation.custody_bitfield) {
        invalid!(Invalid::CustodyBitfieldAllZero);
    }

    if slashable_attestation.validator_indices.is_empty() {
        invalid!(Invalid::NoValidatorIndices);
    }

    for i in 0..(slashable_attestation.validator_indices.len() - 1) {
        if slashable_attestation.validator_indices[i]
            >= slashable_attestation.validator_indices[i + 1]
        {
            invalid!(Invalid::BadValidatorIndicesOrdering(i));
        }
    }

    if !verify_bitfield_length(
        &slashable_attestation.custody_bitfield,
        slashable_attestation.validator_indices.len(),
    ) {
        invalid!(Invalid::BadCustodyBitfieldLength {
            validator_indices_len: slashable_attestation.validator_indices.len(),
            bitfield_len: slashable_attestation.custody_bitfield.len(),
        });
    }

    if slashable_attestation.validator_indices.len() as u64 > spec.max_indices_per_slashable_vote {
        invalid!(Invalid::MaxIndicesExceed {
            max: spec.max_indices_per_slashable_vote,
            found: slashable_attestation.validator_indices.len(),
        });
    }

    if verify_signatures.is_true() {
        let mut aggregate_pubs = vec![AggregatePublicKey::new(); 2];
        let mut message_exists = vec![false; 2];

        for (i, v) in slashable_attestation.validator_indices.iter().enumerate() {
            // Bitfield length has been verified against the indices above.
            let custody_bit =
                bitfield_bit(&slashable_attestation.custody_bitfield, i).unwrap_or(false);

            message_exists[custody_bit as usize] = true;

            match state.validator_registry.get(*v as usize) {
                Some(validator) => {
                    aggregate_pubs[custody_bit as usize].add(&validator.pubkey);
                }
                None => invalid!(Invalid::UnknownValidator(*v)),
            };
        }

        // Message when the custody bit is `false`.
        let message_0 = AttestationDataAndCustodyBit {
            data: slashable_attestation.data.clone(),
            custody_bit: false,
        }
        .tree_hash_root();

        // Message when the custody bit is `true`.
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

        let domain = {
            let epoch = slashable_attestation.data.slot.epoch(spec.epoch_length);
            spec.get_domain(epoch, Domain::Attestation, &state.fork)
        };

        verify!(
            backend.verify_multiple(
                &messages,
                domain,
                &keys,
                &slashable_attestation.aggregate_signature
            ),
            Invalid::BadSignature
        );
    }

    Ok(())
}
