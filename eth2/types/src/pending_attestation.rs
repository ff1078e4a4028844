use crate::{AttestationData, Slot};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// An attestation that has been included in the state but not yet fully
/// processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct PendingAttestation {
    pub data: AttestationData,
    pub aggregation_bitfield: Vec<u8>,
    pub custody_bitfield: Vec<u8>,
    pub slot_included: Slot,
}
