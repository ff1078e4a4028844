use super::errors::{ExitInvalid as Invalid, ExitValidationError as Error};
use crate::VerifySignatures;
use types::*;

/// Indicates if a `VoluntaryExit` is valid to be included in a block in the
/// current epoch of the given state.
///
/// Returns `Ok(())` if the `VoluntaryExit` is valid, otherwise indicates the
/// reason for invalidity.
pub fn verify_exit<B: BlsBackend>(
    state: &BeaconState,
    exit: &VoluntaryExit,
    verify_signatures: VerifySignatures,
    backend: &B,
    spec: &ChainSpec,
) -> Result<(), Error> {
    let validator = state
        .validator_registry
        .get(exit.validator_index as usize)
        .ok_or_else(|| Error::Invalid(Invalid::ValidatorUnknown(exit.validator_index)))?;

    let current_epoch = state.current_epoch(spec);

    // Verify the validator has not already been scheduled to exit.
    verify!(
        validator.exit_epoch > spec.entry_exit_effect_epoch(current_epoch),
        Invalid::AlreadyExited(exit.validator_index)
    );

    // Exits specify an epoch at which they become valid; they are not valid
    // before then.
    verify!(
        current_epoch >= exit.epoch,
        Invalid::FutureEpoch {
            state: current_epoch,
            exit: exit.epoch,
        }
    );

    if verify_signatures.is_true() {
        let message = exit.signed_root();
        let domain = spec.get_domain(exit.epoch, Domain::Exit, &state.fork);
        verify!(
            backend.verify(&validator.pubkey, message.as_bytes(), domain, &exit.signature),
            Invalid::BadSignature
        );
    }

    Ok(())
}
