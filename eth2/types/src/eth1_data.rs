use crate::Hash256;

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Contains data obtained from the Eth1 chain.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Eth1Data {
    /// Root of the deposit contract's Merkle tree, anchoring deposit
    /// inclusion proofs.
    pub deposit_root: Hash256,
    pub block_hash: Hash256,
}
