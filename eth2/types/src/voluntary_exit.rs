use crate::{Epoch, Hash256, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// An exit voluntarily submitted by a validator who wishes to withdraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct VoluntaryExit {
    /// Earliest epoch when this exit can be processed.
    pub epoch: Epoch,
    pub validator_index: u64,
    pub signature: SignatureBytes,
}

impl VoluntaryExit {
    /// The message the validator signs: the tree hash root of this exit with
    /// an empty signature in place of the real one.
    pub fn signed_root(&self) -> Hash256 {
        VoluntaryExit {
            signature: SignatureBytes::empty(),
            ..self.clone()
        }
        .tree_hash_root()
    }
}
