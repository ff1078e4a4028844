use crate::{Epoch, Fork, Hash256, Slot};

/// A signature domain, qualifying which kind of message a signature commits to.
pub enum Domain {
    Deposit,
    Attestation,
    Proposal,
    Exit,
    Randao,
}

/// Holds all the "constants" for a beacon chain.
///
/// Peers must load identical values or they will compute conflicting state
/// roots for the same blocks.
#[derive(PartialEq, Debug, Clone)]
pub struct ChainSpec {
    /*
     * Misc
     */
    pub shard_count: u64,
    pub beacon_chain_shard_number: u64,
    pub max_indices_per_slashable_vote: u64,

    /*
     * Deposit contract
     */
    pub deposit_contract_tree_depth: u64,

    /*
     * Initial values
     */
    pub genesis_slot: Slot,
    pub genesis_fork_version: [u8; 4],
    pub far_future_epoch: Epoch,
    pub zero_hash: Hash256,

    /*
     * Time parameters
     */
    pub epoch_length: u64,
    pub min_attestation_inclusion_delay: u64,
    pub entry_exit_delay: u64,

    /*
     * State list lengths
     */
    pub latest_block_roots_length: usize,
    pub latest_randao_mixes_length: usize,

    /*
     * Reward and penalty quotients
     */
    pub whistleblower_reward_quotient: u64,

    /*
     * Max operations per block
     */
    pub max_proposer_slashings: u64,
    pub max_attester_slashings: u64,
    pub max_attestations: u64,
    pub max_deposits: u64,
    pub max_exits: u64,

    /*
     * Signature domains
     *
     * Fields should be private to prevent accessing a domain that hasn't been
     * modified to suit some `Fork`.
     *
     * Use `ChainSpec::get_domain(..)` to access these values.
     */
    domain_deposit: u64,
    domain_attestation: u64,
    domain_proposal: u64,
    domain_exit: u64,
    domain_randao: u64,
}

impl ChainSpec {
    /// Get the domain number that represents the fork meta and signature domain.
    pub fn get_domain(&self, epoch: Epoch, domain: Domain, fork: &Fork) -> u64 {
        let domain_constant = match domain {
            Domain::Deposit => self.domain_deposit,
            Domain::Attestation => self.domain_attestation,
            Domain::Proposal => self.domain_proposal,
            Domain::Exit => self.domain_exit,
            Domain::Randao => self.domain_randao,
        };

        let fork_version = u64::from(u32::from_le_bytes(fork.get_fork_version(epoch)));
        fork_version * u64::pow(2, 32) + domain_constant
    }

    /// The earliest epoch at which an exit or activation initiated during
    /// `epoch` can take effect.
    pub fn entry_exit_effect_epoch(&self, epoch: Epoch) -> Epoch {
        epoch + 1 + self.entry_exit_delay
    }

    /// Returns a `ChainSpec` compatible with the Ethereum Foundation
    /// specification.
    pub fn foundation() -> Self {
        Self {
            /*
             * Misc
             */
            shard_count: 1_024,
            beacon_chain_shard_number: u64::max_value(),
            max_indices_per_slashable_vote: 4_096,

            /*
             * Deposit contract
             */
            deposit_contract_tree_depth: 32,

            /*
             * Initial values
             */
            genesis_slot: Slot::new(0),
            genesis_fork_version: [0; 4],
            far_future_epoch: Epoch::max_value(),
            zero_hash: Hash256::zero(),

            /*
             * Time parameters
             */
            epoch_length: 64,
            min_attestation_inclusion_delay: 4,
            entry_exit_delay: 256,

            /*
             * State list lengths
             */
            latest_block_roots_length: 8_192,
            latest_randao_mixes_length: 8_192,

            /*
             * Reward and penalty quotients
             */
            whistleblower_reward_quotient: 512,

            /*
             * Max operations per block
             */
            max_proposer_slashings: 16,
            max_attester_slashings: 1,
            max_attestations: 128,
            max_deposits: 16,
            max_exits: 16,

            /*
             * Signature domains
             */
            domain_deposit: 0,
            domain_attestation: 1,
            domain_proposal: 2,
            domain_exit: 3,
            domain_randao: 4,
        }
    }

    /// Returns a `ChainSpec` with short lists and few shards, suitable for
    /// tests with a handful of validators.
    pub fn few_validators() -> Self {
        Self {
            shard_count: 8,
            epoch_length: 8,
            entry_exit_delay: 8,
            latest_block_roots_length: 64,
            latest_randao_mixes_length: 64,
            ..ChainSpec::foundation()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foundation_spec_can_be_constructed() {
        let _ = ChainSpec::foundation();
    }

    #[test]
    fn entry_exit_effect_epoch_includes_delay() {
        let spec = ChainSpec::few_validators();

        assert_eq!(
            spec.entry_exit_effect_epoch(Epoch::new(3)),
            Epoch::new(3) + 1 + spec.entry_exit_delay
        );
    }

    #[test]
    fn domain_incorporates_fork_version() {
        let spec = ChainSpec::foundation();
        let fork = Fork {
            previous_version: [0; 4],
            current_version: [1, 0, 0, 0],
            epoch: Epoch::new(10),
        };

        let before = spec.get_domain(Epoch::new(9), Domain::Exit, &fork);
        let after = spec.get_domain(Epoch::new(10), Domain::Exit, &fork);

        assert_eq!(before, 3);
        assert_eq!(after, (1 << 32) + 3);
    }
}
