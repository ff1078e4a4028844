use crate::SlashableAttestation;

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// Two conflicting attestations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct AttesterSlashing {
    pub slashable_attestation_1: SlashableAttestation,
    pub slashable_attestation_2: SlashableAttestation,
}
