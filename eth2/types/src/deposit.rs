use crate::Hash256;

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// A deposit made in the Eth1 deposit contract, with the Merkle branch
/// proving its inclusion under the contract's deposit root.
///
/// `deposit_data` is the contract's raw byte blob: 8 bytes big-endian value,
/// 8 bytes big-endian timestamp, then a serialized `DepositInput`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Deposit {
    /// Leaf-to-root siblings, `DEPOSIT_CONTRACT_TREE_DEPTH` of them.
    pub merkle_branch: Vec<Hash256>,
    pub merkle_tree_index: u64,
    pub deposit_data: Vec<u8>,
}
