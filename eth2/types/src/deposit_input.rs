use crate::{Hash256, PublicKeyBytes, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// The validator-supplied portion of a deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct DepositInput {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    pub proof_of_possession: SignatureBytes,
}
