use crate::*;
use hashing::hash;
use ssz::Encode;

/// Fold a Merkle branch up from `leaf`, choosing concatenation order from the
/// bits of `index`, and return the resulting root.
pub fn merkle_root_from_branch(
    leaf: Hash256,
    branch: &[Hash256],
    depth: u64,
    index: u64,
) -> Hash256 {
    let mut value = leaf.to_fixed_bytes().to_vec();

    for i in 0..depth as usize {
        let sibling = branch[i].as_bytes();
        let preimage = if (index >> i) & 1 == 1 {
            [sibling, &value[..]].concat()
        } else {
            [&value[..], sibling].concat()
        };
        value = hash(&preimage);
    }

    Hash256::from_slice(&value)
}

/// Builds a `Deposit` plus the deposit root under which it verifies.
///
/// This struct should **never be used for production purposes.**
pub struct TestingDepositBuilder {
    amount: u64,
    deposit_input: DepositInput,
}

impl TestingDepositBuilder {
    pub fn new(pubkey: PublicKeyBytes, amount: u64) -> Self {
        let deposit_input = DepositInput {
            pubkey,
            withdrawal_credentials: Hash256::from_slice(&hash(&pubkey.serialize())),
            proof_of_possession: SignatureBytes::empty(),
        };

        Self {
            amount,
            deposit_input,
        }
    }

    /// The raw deposit data blob: value, timestamp, then the serialized
    /// `DepositInput`.
    pub fn deposit_data(&self) -> Vec<u8> {
        let mut deposit_data = vec![];
        deposit_data.extend_from_slice(&self.amount.to_be_bytes());
        // Timestamp, unused by the state transition.
        deposit_data.extend_from_slice(&0_u64.to_be_bytes());
        deposit_data.extend_from_slice(&self.deposit_input.as_ssz_bytes());
        deposit_data
    }

    /// Build the deposit at `index`, returning it together with the deposit
    /// root that its Merkle branch commits to.
    pub fn build(&self, index: u64, spec: &ChainSpec) -> (Deposit, Hash256) {
        let deposit_data = self.deposit_data();

        let merkle_branch: Vec<Hash256> = (0..spec.deposit_contract_tree_depth)
            .map(Hash256::from_low_u64_le)
            .collect();

        let leaf = Hash256::from_slice(&hash(&deposit_data));
        let root = merkle_root_from_branch(
            leaf,
            &merkle_branch,
            spec.deposit_contract_tree_depth,
            index,
        );

        let deposit = Deposit {
            merkle_branch,
            merkle_tree_index: index,
            deposit_data,
        };

        (deposit, root)
    }
}
