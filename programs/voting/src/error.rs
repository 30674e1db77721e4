use anchor_lang::prelude::*;

// Error types for the voting program.
// The messages are matched on by callers, keep them stable.
#[error_code]
pub enum VotingError {
    #[msg("Poll end time cannot be in the past.")]
    InvalidTimeWindow,

    #[msg("Poll does not exist.")]
    PollNotFound,

    #[msg("Candidate does not exist in this poll.")]
    CandidateNotFound,

    #[msg("Candidate is already registered in this poll.")]
    DuplicateCandidate,

    #[msg("Poll is not started yet.")]
    PollNotStarted,

    #[msg("Poll is already ended.")]
    PollEnded,

    #[msg("You have already voted in this poll.")]
    AlreadyVoted,

    #[msg("A poll with this id already exists.")]
    PollAlreadyExists,

    #[msg("Description is too long (maximum 200 characters)")]
    DescriptionTooLong,

    #[msg("Candidate name must be between 1 and 32 bytes")]
    InvalidCandidateName,

    #[msg("Seed exceeds the maximum seed length")]
    SeedTooLong,

    #[msg("Clock reports a negative unix timestamp")]
    InvalidClock,

    #[msg("Mathematical overflow in counter update")]
    MathOverflow,

    #[msg("A record already exists at this address")]
    RecordAlreadyExists,

    #[msg("No record exists at this address")]
    RecordNotFound,

    #[msg("Record is owned by a different program")]
    RecordOwnerMismatch,

    #[msg("Instruction data could not be decoded")]
    InvalidInstructionData,
}

/// Helper function to safely increment a record counter
pub fn increment(counter: u64) -> Result<u64> {
    counter.checked_add(1).ok_or(VotingError::MathOverflow.into())
}
