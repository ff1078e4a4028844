use types::{BeaconState, BeaconStateError, ChainSpec};

/// Initiate the exit of the validator of the given `index`.
///
/// The exit is scheduled for the entry/exit effect epoch of the current epoch;
/// a validator already scheduled to leave earlier is left untouched.
pub fn initiate_validator_exit(
    state: &mut BeaconState,
    index: usize,
    spec: &ChainSpec,
) -> Result<(), BeaconStateError> {
    let entry_exit_effect_epoch = spec.entry_exit_effect_epoch(state.current_epoch(spec));

    let validator = state
        .validator_registry
        .get_mut(index)
        .ok_or(BeaconStateError::UnknownValidator)?;

    if validator.exit_epoch > entry_exit_effect_epoch {
        validator.exit_epoch = entry_exit_effect_epoch;
    }

    Ok(())
}
