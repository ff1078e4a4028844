use crate::{Epoch, Hash256, Slot};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The data upon which an attestation is based.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Hash, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct AttestationData {
    pub slot: Slot,
    pub shard: u64,

    // FFG vote
    pub justified_epoch: Epoch,
    pub justified_block_root: Hash256,

    // Crosslink vote
    pub latest_crosslink_root: Hash256,
    pub shard_block_root: Hash256,
}
