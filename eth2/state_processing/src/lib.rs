#[macro_use]
mod macros;

pub mod common;
pub mod per_block_processing;

pub use per_block_processing::{
    errors::BlockProcessingError, per_block_processing, process_attestations,
    process_attester_slashings, process_deposits, process_eth1_data, process_exits,
    process_proposer_slashings, process_randao, verify_block_signature, VerifySignatures,
};
