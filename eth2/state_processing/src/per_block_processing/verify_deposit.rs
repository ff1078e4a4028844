use super::errors::{DepositInvalid as Invalid, DepositValidationError as Error};
use hashing::hash;
use ssz::Decode;
use std::collections::HashMap;
use types::*;

/// Bytes preceding the serialized `DepositInput` in a deposit data blob:
/// 8 bytes big-endian value, then 8 bytes big-endian timestamp.
const DEPOSIT_DATA_PREFIX_LEN: usize = 16;

/// Decode the `DepositInput` embedded in a raw deposit data blob.
pub fn decode_deposit_input(deposit_data: &[u8]) -> Result<DepositInput, Error> {
    if deposit_data.len() < DEPOSIT_DATA_PREFIX_LEN {
        invalid!(Invalid::DepositDataTooShort {
            len: deposit_data.len(),
        });
    }

    DepositInput::from_ssz_bytes(&deposit_data[DEPOSIT_DATA_PREFIX_LEN..])
        .map_err(|e| Error::invalid(Invalid::BadDepositInputSsz(e)))
}

/// The deposited value in Gwei: the big-endian u64 leading the blob.
pub fn deposit_value(deposit_data: &[u8]) -> Result<u64, Error> {
    let bytes: [u8; 8] = deposit_data
        .get(0..8)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| {
            Error::invalid(Invalid::DepositDataTooShort {
                len: deposit_data.len(),
            })
        })?;

    Ok(u64::from_be_bytes(bytes))
}

/// Verify that a deposit is included under the state's Eth1 deposit root.
pub fn verify_deposit_merkle_proof(
    state: &BeaconState,
    deposit: &Deposit,
    spec: &ChainSpec,
) -> Result<(), Error> {
    let deposit_root = state.latest_eth1_data.deposit_root;

    verify!(
        deposit.merkle_branch.len() == spec.deposit_contract_tree_depth as usize,
        Invalid::BadMerkleBranchLength {
            expected: spec.deposit_contract_tree_depth,
            found: deposit.merkle_branch.len(),
        }
    );

    verify!(
        verify_merkle_branch(
            Hash256::from_slice(&hash(&deposit.deposit_data)),
            &deposit.merkle_branch,
            spec.deposit_contract_tree_depth,
            deposit.merkle_tree_index,
            deposit_root,
        ),
        Invalid::BadMerkleProof { deposit_root }
    );

    Ok(())
}

/// Fold `branch` up from `leaf`; bit `i` of `index` picks the concatenation
/// order at depth `i`. Returns `true` if the resulting root is `root`.
fn verify_merkle_branch(
    leaf: Hash256,
    branch: &[Hash256],
    depth: u64,
    index: u64,
    root: Hash256,
) -> bool {
    let mut value = leaf.to_fixed_bytes().to_vec();

    for (i, sibling) in branch.iter().take(depth as usize).enumerate() {
        let preimage = if (index >> i) & 1 == 1 {
            [sibling.as_bytes(), &value[..]].concat()
        } else {
            [&value[..], sibling.as_bytes()].concat()
        };
        value = hash(&preimage);
    }

    value == root.as_bytes()
}

/// Map each registry pubkey to its validator index.
///
/// Computed once per block so deposit application is amortized over the
/// registry scan.
pub fn validator_index_map(state: &BeaconState) -> HashMap<PublicKeyBytes, u64> {
    state
        .validator_registry
        .iter()
        .enumerate()
        .map(|(i, validator)| (validator.pubkey, i as u64))
        .collect()
}
