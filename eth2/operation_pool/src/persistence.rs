use crate::OperationPool;
use parking_lot::RwLock;
use ssz_derive::{Decode, Encode};
use std::collections::HashMap;
use tree_hash::TreeHash;
use types::VoluntaryExit;

/// An SSZ snapshot of an `OperationPool`, suitable for database storage.
#[derive(Encode, Decode, Clone, PartialEq, Debug)]
pub struct PersistedOperationPool {
    voluntary_exits: Vec<VoluntaryExit>,
}

impl PersistedOperationPool {
    /// Convert an `OperationPool` into serializable form.
    pub fn from_operation_pool(operation_pool: &OperationPool) -> Self {
        let mut voluntary_exits: Vec<_> = operation_pool
            .voluntary_exits
            .read()
            .values()
            .cloned()
            .collect();
        // Canonical order, for a stable encoding.
        voluntary_exits.sort_by_key(|exit| (exit.validator_index, exit.epoch));

        Self { voluntary_exits }
    }

    /// Reconstruct an `OperationPool`, re-deriving each exit's address.
    pub fn into_operation_pool(self) -> OperationPool {
        let voluntary_exits: HashMap<_, _> = self
            .voluntary_exits
            .into_iter()
            .map(|exit| (exit.tree_hash_root(), exit))
            .collect();

        OperationPool {
            voluntary_exits: RwLock::new(voluntary_exits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssz::{Decode, Encode};
    use types::{Epoch, SignatureBytes};

    #[test]
    fn ssz_round_trip() {
        let pool = OperationPool::new();
        for i in 0..3 {
            pool.insert_voluntary_exit(VoluntaryExit {
                epoch: Epoch::new(i),
                validator_index: i,
                signature: SignatureBytes::empty(),
            });
        }

        let persisted = PersistedOperationPool::from_operation_pool(&pool);
        let bytes = persisted.as_ssz_bytes();
        let decoded = PersistedOperationPool::from_ssz_bytes(&bytes).unwrap();

        assert_eq!(persisted, decoded);
        assert_eq!(decoded.into_operation_pool(), pool);
    }
}
