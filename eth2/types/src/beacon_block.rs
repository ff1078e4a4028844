use crate::{BeaconBlockBody, Eth1Data, Hash256, SignatureBytes, Slot};

use serde::{Deserialize, Serialize};
use ssz::Encode;
use ssz_derive::{Decode, Encode};

/// A block of the beacon chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct BeaconBlock {
    pub slot: Slot,
    pub parent_root: Hash256,
    pub state_root: Hash256,
    /// Preimage of the proposer's randao commitment at the current layer.
    pub randao_reveal: Hash256,
    pub eth1_data: Eth1Data,
    pub signature: SignatureBytes,
    pub body: BeaconBlockBody,
}

impl BeaconBlock {
    /// Returns an empty block at `slot`, to be filled in by a proposer.
    pub fn empty(slot: Slot) -> BeaconBlock {
        BeaconBlock {
            slot,
            parent_root: Hash256::zero(),
            state_root: Hash256::zero(),
            randao_reveal: Hash256::zero(),
            eth1_data: Eth1Data::default(),
            signature: SignatureBytes::empty(),
            body: BeaconBlockBody::default(),
        }
    }

    /// Hash of the block's canonical SSZ encoding, including the signature.
    pub fn canonical_root(&self) -> Hash256 {
        Hash256::from_slice(&hashing::hash(&self.as_ssz_bytes()))
    }

    /// The message the proposer signs: the canonical root of this block with
    /// an empty signature in place of the real one.
    pub fn signed_root(&self) -> Hash256 {
        BeaconBlock {
            signature: SignatureBytes::empty(),
            ..self.clone()
        }
        .canonical_root()
    }
}
