use crate::{AttestationData, SignatureBytes};

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};

/// An aggregated vote for a beacon and shard block, as carried in a block
/// body.
///
/// Bitfields are little-endian packed bytes; bit `i` of the aggregation
/// bitfield selects position `i` of the attesting committee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Attestation {
    pub data: AttestationData,
    pub aggregation_bitfield: Vec<u8>,
    pub custody_bitfield: Vec<u8>,
    pub aggregate_signature: SignatureBytes,
}
