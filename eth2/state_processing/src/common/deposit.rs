use crate::per_block_processing::errors::{DepositInvalid, DepositValidationError};
use std::collections::HashMap;
use types::*;

/// Apply a verified deposit to the registry.
///
/// A known pubkey receives a balance top-up; a fresh pubkey appends a new
/// validator awaiting activation. New validators are registered in
/// `validator_index_map` so that later deposits in the same block observe
/// them.
pub fn process_deposit(
    state: &mut BeaconState,
    validator_index_map: &mut HashMap<PublicKeyBytes, u64>,
    pubkey: PublicKeyBytes,
    amount: u64,
    _proof_of_possession: SignatureBytes,
    withdrawal_credentials: Hash256,
    spec: &ChainSpec,
) -> Result<(), DepositValidationError> {
    if let Some(&index) = validator_index_map.get(&pubkey) {
        let index = index as usize;

        verify!(
            state.validator_registry[index].withdrawal_credentials == withdrawal_credentials,
            DepositInvalid::BadWithdrawalCredentials
        );

        state.validator_balances[index] =
            state.validator_balances[index].saturating_add(amount);
    } else {
        let validator = Validator {
            pubkey,
            withdrawal_credentials,
            randao_commitment: spec.zero_hash,
            randao_layers: 0,
            activation_epoch: spec.far_future_epoch,
            exit_epoch: spec.far_future_epoch,
            withdrawal_epoch: spec.far_future_epoch,
            penalized_epoch: spec.far_future_epoch,
        };

        state.validator_registry.push(validator);
        state.validator_balances.push(amount);
        validator_index_map.insert(pubkey, (state.validator_registry.len() - 1) as u64);
    }

    Ok(())
}
