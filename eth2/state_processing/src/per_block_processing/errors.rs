use types::*;

/// The error returned from the `per_block_processing` function. Indicates that
/// a block is either invalid, or we were unable to determine its validity (we
/// encountered an unexpected error).
///
/// Any error aborts the whole block: the caller must treat the pre-block state
/// as authoritative and discard the partially-mutated value.
#[derive(Debug, PartialEq, Clone)]
pub enum BlockProcessingError {
    /// An operation list is longer than its protocol maximum.
    LimitExceeded {
        op_kind: OperationKind,
        count: usize,
        max: u64,
    },
    /// The block's randao reveal does not open the proposer's commitment.
    RandaoCommitmentMismatch {
        commitment: Hash256,
        hashed_reveal: Hash256,
    },
    /// The proposer's signature over the block was invalid.
    ProposalSignatureInvalid,
    ProposerSlashingInvalid {
        index: usize,
        reason: ProposerSlashingInvalid,
    },
    AttesterSlashingInvalid {
        index: usize,
        reason: AttesterSlashingInvalid,
    },
    AttestationInvalid {
        index: usize,
        reason: AttestationInvalid,
    },
    DepositInvalid {
        index: usize,
        reason: DepositInvalid,
    },
    ExitInvalid {
        index: usize,
        reason: ExitInvalid,
    },
    /// A state helper failed; propagated unchanged.
    BeaconStateError(BeaconStateError),
}

/// The kind of operation list an error refers to.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum OperationKind {
    ProposerSlashing,
    AttesterSlashing,
    Attestation,
    Deposit,
    VoluntaryExit,
}

impl From<BeaconStateError> for BlockProcessingError {
    fn from(e: BeaconStateError) -> Self {
        BlockProcessingError::BeaconStateError(e)
    }
}

/// A conversion that consumes `self` and adds an `index` variable to resulting struct.
///
/// Used here to allow converting an error into an upstream error that points to the object that
/// caused the error. For example, pointing to the index of an attestation that caused the
/// `AttestationInvalid` error.
pub trait IntoWithIndex<T>: Sized {
    fn into_with_index(self, index: usize) -> T;
}

macro_rules! impl_into_block_processing_error_with_index {
    ($($type: ident),*) => {
        $(
            impl IntoWithIndex<BlockProcessingError> for BlockOperationError<$type> {
                fn into_with_index(self, index: usize) -> BlockProcessingError {
                    match self {
                        BlockOperationError::Invalid(reason) => BlockProcessingError::$type {
                            index,
                            reason
                        },
                        BlockOperationError::BeaconStateError(e) => BlockProcessingError::BeaconStateError(e),
                    }
                }
            }
        )*
    };
}

impl_into_block_processing_error_with_index!(
    ProposerSlashingInvalid,
    AttesterSlashingInvalid,
    AttestationInvalid,
    DepositInvalid,
    ExitInvalid
);

pub type ProposerSlashingValidationError = BlockOperationError<ProposerSlashingInvalid>;
pub type AttesterSlashingValidationError = BlockOperationError<AttesterSlashingInvalid>;
pub type SlashableAttestationValidationError = BlockOperationError<SlashableAttestationInvalid>;
pub type AttestationValidationError = BlockOperationError<AttestationInvalid>;
pub type DepositValidationError = BlockOperationError<DepositInvalid>;
pub type ExitValidationError = BlockOperationError<ExitInvalid>;

#[derive(Debug, PartialEq, Clone)]
pub enum BlockOperationError<T> {
    Invalid(T),
    BeaconStateError(BeaconStateError),
}

impl<T> BlockOperationError<T> {
    pub fn invalid(reason: T) -> BlockOperationError<T> {
        BlockOperationError::Invalid(reason)
    }
}

impl<T> From<BeaconStateError> for BlockOperationError<T> {
    fn from(e: BeaconStateError) -> Self {
        BlockOperationError::BeaconStateError(e)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ProposerSlashingInvalid {
    /// The proposer index is not a known validator.
    ProposerUnknown(u64),
    /// The two proposals have different slots.
    ///
    /// (proposal_1_slot, proposal_2_slot)
    ProposalSlotMismatch(Slot, Slot),
    /// The two proposals have different shards.
    ///
    /// (proposal_1_shard, proposal_2_shard)
    ProposalShardMismatch(u64, u64),
    /// The two proposals carry the same block root and are therefore not
    /// conflicting.
    ProposalsIdentical,
    /// The first proposal signature was invalid.
    BadProposal1Signature,
    /// The second proposal signature was invalid.
    BadProposal2Signature,
}

#[derive(Debug, PartialEq, Clone)]
pub enum AttesterSlashingInvalid {
    /// The two attestations have identical data; nothing conflicts.
    AttestationDataIdentical,
    /// The attestations are neither a double vote nor a surround vote.
    NotSlashable,
    /// The first `SlashableAttestation` was invalid.
    SlashableAttestation1Invalid(SlashableAttestationValidationError),
    /// The second `SlashableAttestation` was invalid.
    SlashableAttestation2Invalid(SlashableAttestationValidationError),
    /// The validator index is unknown. One cannot slash one who does not exist.
    UnknownValidator(u64),
    /// There were no indices able to be slashed.
    NoSlashableIndices,
}

#[derive(Debug, PartialEq, Clone)]
pub enum SlashableAttestationInvalid {
    /// The custody bitfield has no set bits.
    CustodyBitfieldAllZero,
    /// The number of indices is 0.
    NoValidatorIndices,
    /// The validator indices were not in strictly increasing order.
    ///
    /// The error occurred between the given `index` and `index + 1`.
    BadValidatorIndicesOrdering(usize),
    /// The custody bitfield is not `ceil(indices / 8)` bytes.
    BadCustodyBitfieldLength {
        validator_indices_len: usize,
        bitfield_len: usize,
    },
    /// The number of indices exceeds the per-vote maximum.
    MaxIndicesExceed { max: u64, found: usize },
    /// The validator index is unknown. One cannot slash one who does not exist.
    UnknownValidator(u64),
    /// The aggregate signature over the custody partition was invalid.
    BadSignature,
}

/// Describes why an object is invalid.
#[derive(Debug, PartialEq, Clone)]
pub enum AttestationInvalid {
    /// Attestation included before the inclusion delay.
    IncludedTooEarly {
        state: Slot,
        delay: u64,
        attestation: Slot,
    },
    /// Attestation slot is too far in the past to be included in a block.
    IncludedTooLate { state: Slot, attestation: Slot },
    /// Attestation justified epoch does not match the state's justified epoch
    /// for the attestation's slot.
    ///
    /// `is_current` is `true` if the attestation was compared to
    /// `state.justified_epoch`, `false` if compared to
    /// `state.previous_justified_epoch`.
    WrongJustifiedEpoch {
        state: Epoch,
        attestation: Epoch,
        is_current: bool,
    },
    /// Attestation justified block root does not match the block root at the
    /// justified epoch's start slot.
    WrongJustifiedRoot {
        state: Hash256,
        attestation: Hash256,
    },
    /// Neither the attestation's crosslink root nor its shard block root
    /// matches the state's crosslink for the shard.
    BadLatestCrosslinkRoot,
    /// The shard block root must be the zero hash until shard chains launch.
    ShardBlockRootNotZero,
    /// The aggregate signature over the custody partition was invalid.
    BadSignature,
}

#[derive(Debug, PartialEq, Clone)]
pub enum DepositInvalid {
    /// The deposit data blob is shorter than the value + timestamp preamble.
    DepositDataTooShort { len: usize },
    /// The embedded `DepositInput` failed to decode.
    BadDepositInputSsz(ssz::DecodeError),
    /// The Merkle branch does not carry exactly tree-depth siblings.
    BadMerkleBranchLength { expected: u64, found: usize },
    /// The specified branch and index did not form a valid proof that the
    /// deposit is included in the deposit root.
    BadMerkleProof { deposit_root: Hash256 },
    /// A repeat deposit for a known pubkey carries different withdrawal
    /// credentials.
    BadWithdrawalCredentials,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExitInvalid {
    /// The specified validator is not in the state's validator registry.
    ValidatorUnknown(u64),
    /// The specified validator has already been scheduled to exit.
    AlreadyExited(u64),
    /// The exit is for a future epoch.
    FutureEpoch { state: Epoch, exit: Epoch },
    /// The exit signature was not signed by the validator.
    BadSignature,
}
