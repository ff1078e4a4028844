use crate::{ProposalSignedData, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// Two conflicting proposals from the same proposer (validator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct ProposerSlashing {
    pub proposer_index: u64,
    pub proposal_data_1: ProposalSignedData,
    pub proposal_signature_1: SignatureBytes,
    pub proposal_data_2: ProposalSignedData,
    pub proposal_signature_2: SignatureBytes,
}
