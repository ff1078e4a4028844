use crate::{Epoch, Hash256};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The last shard block accepted into the beacon chain for one shard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Crosslink {
    pub epoch: Epoch,
    pub shard_block_root: Hash256,
}
