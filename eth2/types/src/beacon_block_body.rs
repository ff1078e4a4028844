use crate::{Attestation, AttesterSlashing, Deposit, ProposerSlashing, VoluntaryExit};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// The operational payload of a beacon block.
///
/// List lengths are bounded by the `max_*` constants of the chain spec,
/// enforced when the block is processed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct BeaconBlockBody {
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub attestations: Vec<Attestation>,
    pub deposits: Vec<Deposit>,
    pub exits: Vec<VoluntaryExit>,
}
