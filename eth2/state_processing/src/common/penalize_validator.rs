use crate::common::initiate_validator_exit;
use types::{BeaconState, BeaconStateError, ChainSpec};

/// Penalize the validator of the given `index`.
///
/// Initiates the validator's exit, records the penalization epoch and moves
/// the whistleblower reward from the penalized validator to the current block
/// proposer. Callers must check the validator has not already been penalized;
/// this function penalizes unconditionally.
pub fn penalize_validator(
    state: &mut BeaconState,
    index: usize,
    spec: &ChainSpec,
) -> Result<(), BeaconStateError> {
    if index >= state.validator_registry.len() || index >= state.validator_balances.len() {
        return Err(BeaconStateError::UnknownValidator);
    }

    initiate_validator_exit(state, index, spec)?;

    state.validator_registry[index].penalized_epoch = state.current_epoch(spec);

    let whistleblower_index = state.get_beacon_proposer_index(state.slot, spec)?;
    let whistleblower_reward =
        state.validator_balances[index] / spec.whistleblower_reward_quotient;

    state.validator_balances[whistleblower_index] =
        state.validator_balances[whistleblower_index].saturating_add(whistleblower_reward);
    state.validator_balances[index] =
        state.validator_balances[index].saturating_sub(whistleblower_reward);

    Ok(())
}
