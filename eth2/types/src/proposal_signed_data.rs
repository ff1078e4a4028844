use crate::{Hash256, Slot};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The block-proposal commitment a proposer signs.
///
/// Its tree hash root is the message covered by a proposal signature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct ProposalSignedData {
    pub slot: Slot,
    pub shard: u64,
    pub block_root: Hash256,
}
