//! A pool of voluntary exits awaiting block inclusion, addressed by the tree
//! hash root of their canonical structural encoding.

mod persistence;

pub use persistence::PersistedOperationPool;

use parking_lot::RwLock;
use state_processing::per_block_processing::errors::{
    ExitInvalid, ExitValidationError,
};
use state_processing::per_block_processing::verify_exit;
use state_processing::VerifySignatures;
use std::collections::HashMap;
use tree_hash::TreeHash;
use types::{BeaconState, BlsBackend, ChainSpec, Hash256, VoluntaryExit};

#[derive(Default, Debug)]
pub struct OperationPool {
    /// Voluntary exits, keyed by the exit's tree hash root.
    voluntary_exits: RwLock<HashMap<Hash256, VoluntaryExit>>,
}

impl OperationPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an exit, returning its address: the tree hash root of the exit.
    ///
    /// Storing the same exit twice is a no-op yielding the same root.
    pub fn insert_voluntary_exit(&self, exit: VoluntaryExit) -> Hash256 {
        let root = exit.tree_hash_root();
        self.voluntary_exits.write().insert(root, exit);
        root
    }

    /// Whether an exit with the given root has been stored.
    pub fn contains_exit(&self, root: Hash256) -> bool {
        self.voluntary_exits.read().contains_key(&root)
    }

    /// Retrieve a stored exit by its root.
    pub fn get_voluntary_exit(&self, root: Hash256) -> Option<VoluntaryExit> {
        self.voluntary_exits.read().get(&root).cloned()
    }

    pub fn num_voluntary_exits(&self) -> usize {
        self.voluntary_exits.read().len()
    }

    /// Exits eligible for inclusion in a block built on `state`, at most
    /// `max_exits` of them.
    ///
    /// Signatures are not re-checked here; they were verified when the exit
    /// entered the pool.
    pub fn get_voluntary_exits<B: BlsBackend>(
        &self,
        state: &BeaconState,
        backend: &B,
        spec: &ChainSpec,
    ) -> Vec<VoluntaryExit> {
        self.voluntary_exits
            .read()
            .values()
            .filter(|exit| {
                verify_exit(state, exit, VerifySignatures::False, backend, spec).is_ok()
            })
            .take(spec.max_exits as usize)
            .cloned()
            .collect()
    }

    /// Drop exits that can never again be included on `state`'s chain: the
    /// validator is unknown or already scheduled to exit.
    ///
    /// Exits that are merely early (future epoch) are kept.
    pub fn prune_voluntary_exits<B: BlsBackend>(
        &self,
        state: &BeaconState,
        backend: &B,
        spec: &ChainSpec,
    ) {
        self.voluntary_exits.write().retain(|_, exit| {
            !matches!(
                verify_exit(state, exit, VerifySignatures::False, backend, spec),
                Err(ExitValidationError::Invalid(
                    ExitInvalid::ValidatorUnknown(_) | ExitInvalid::AlreadyExited(_)
                ))
            )
        });
    }
}

impl PartialEq for OperationPool {
    fn eq(&self, other: &Self) -> bool {
        *self.voluntary_exits.read() == *other.voluntary_exits.read()
    }
}
