// PDA Seeds for deterministic address generation

// Poll PDAs:        [poll_id]
// Candidate PDAs:   [poll_id, candidate_name]
// Participant PDAs: ["participant", poll_id, voter.key()]
// One participant record per voter per poll
pub const PARTICIPANT_SEED: &[u8] = b"participant";

// Maximum values for validation
pub const MAX_DESCRIPTION_LENGTH: usize = 200;
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 32;

// Runtime limit on the length of a single seed
pub const MAX_SEED_LENGTH: usize = 32;

/// Check if a poll description fits in the poll record
pub fn is_valid_description(description: &str) -> bool {
    description.len() <= MAX_DESCRIPTION_LENGTH
}

/// Candidate names are seeds, so they must be non-empty and fit in one seed.
/// An empty name would derive the poll's own address.
pub fn is_valid_candidate_name(candidate_name: &str) -> bool {
    !candidate_name.is_empty() && candidate_name.len() <= MAX_CANDIDATE_NAME_LENGTH
}
