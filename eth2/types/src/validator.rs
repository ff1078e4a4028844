use crate::{Epoch, Hash256, PublicKeyBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

/// Information about a beacon chain validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Validator {
    pub pubkey: PublicKeyBytes,
    pub withdrawal_credentials: Hash256,
    /// Commitment the validator's next randao reveal must hash to.
    pub randao_commitment: Hash256,
    /// How many hash layers currently separate the reveal from the commitment.
    pub randao_layers: u64,
    pub activation_epoch: Epoch,
    pub exit_epoch: Epoch,
    pub withdrawal_epoch: Epoch,
    pub penalized_epoch: Epoch,
}

impl Validator {
    /// Returns `true` if the validator is considered active at some epoch.
    pub fn is_active_at(&self, epoch: Epoch) -> bool {
        self.activation_epoch <= epoch && epoch < self.exit_epoch
    }

    /// Returns `true` if the validator has been penalized at or before some
    /// epoch.
    pub fn is_penalized_at(&self, epoch: Epoch) -> bool {
        self.penalized_epoch <= epoch
    }
}

impl Default for Validator {
    /// Yields a "default" `Validator`. Primarily used for testing.
    fn default() -> Self {
        Self {
            pubkey: PublicKeyBytes::empty(),
            withdrawal_credentials: Hash256::zero(),
            randao_commitment: Hash256::zero(),
            randao_layers: 0,
            activation_epoch: Epoch::max_value(),
            exit_epoch: Epoch::max_value(),
            withdrawal_epoch: Epoch::max_value(),
            penalized_epoch: Epoch::max_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let v = Validator::default();

        let epoch = Epoch::new(0);

        assert!(!v.is_active_at(epoch));
        assert!(!v.is_penalized_at(epoch));
    }

    #[test]
    fn is_active_at() {
        let epoch = Epoch::new(10);

        let v = Validator {
            activation_epoch: epoch,
            ..Validator::default()
        };

        assert!(!v.is_active_at(epoch - 1));
        assert!(v.is_active_at(epoch));
        assert!(v.is_active_at(epoch + 1));
    }

    #[test]
    fn is_penalized_at() {
        let epoch = Epoch::new(10);

        let v = Validator {
            penalized_epoch: epoch,
            ..Validator::default()
        };

        assert!(!v.is_penalized_at(epoch - 1));
        assert!(v.is_penalized_at(epoch));
        assert!(v.is_penalized_at(epoch + 1));
    }
}
