use anchor_lang::prelude::*;

use crate::constants::PARTICIPANT_SEED;

// The Poll account stores a voting event and its time window
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Poll {
    // Caller chosen identifier, the only seed of this account
    pub poll_id: u64,

    // The prompt shown to voters (e.g., "What is your favorite color?")
    #[max_len(200)]
    pub description: String,

    // Voting window, unix timestamps, both ends inclusive
    pub poll_start: u64,
    pub poll_end: u64,

    // Number of candidates registered under this poll
    pub candidate_amount: u64,
}

// A candidate registered under a poll, seeded by [poll_id, candidate_name]
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Candidate {
    #[max_len(32)]
    pub candidate_name: String,
    pub candidate_votes: u64,
}

// Participant - proves that a voter has voted on a specific poll.
// Created on the first vote attempt, one per voter per poll.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Participant {
    pub participant: Pubkey,
    pub poll_id: u64,
    pub has_voted: bool,
}

impl Poll {
    pub fn seed(poll_id: u64) -> [u8; 8] {
        poll_id.to_le_bytes()
    }

    // Voting window is inclusive on both ends
    pub fn has_started(&self, now: u64) -> bool {
        now >= self.poll_start
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now > self.poll_end
    }
}

impl Candidate {
    pub fn new(candidate_name: String) -> Self {
        Self {
            candidate_name,
            candidate_votes: 0,
        }
    }
}

impl Participant {
    pub const SEED: &'static [u8] = PARTICIPANT_SEED;

    pub fn new(participant: Pubkey, poll_id: u64) -> Self {
        Self {
            participant,
            poll_id,
            has_voted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poll(poll_start: u64, poll_end: u64) -> Poll {
        Poll {
            poll_id: 1,
            description: "What is your favorite color?".to_string(),
            poll_start,
            poll_end,
            candidate_amount: 0,
        }
    }

    fn is_open(poll: &Poll, now: u64) -> bool {
        poll.has_started(now) && !poll.has_ended(now)
    }

    #[test]
    fn test_voting_window_is_inclusive() {
        let poll = poll(100, 200);
        assert!(!is_open(&poll, 99));
        assert!(is_open(&poll, 100));
        assert!(is_open(&poll, 150));
        assert!(is_open(&poll, 200));
        assert!(!is_open(&poll, 201));
    }

    #[test]
    fn test_inverted_window_is_never_open() {
        let poll = poll(200, 100);
        assert!(!is_open(&poll, 100));
        assert!(!is_open(&poll, 150));
        assert!(!is_open(&poll, 200));
    }

    #[test]
    fn test_init_space() {
        assert_eq!(Poll::INIT_SPACE, 8 + (4 + 200) + 8 + 8 + 8);
        assert_eq!(Candidate::INIT_SPACE, (4 + 32) + 8);
        assert_eq!(Participant::INIT_SPACE, 32 + 8 + 1);
    }

    #[test]
    fn test_new_records_start_empty() {
        let candidate = Candidate::new("Pink".to_string());
        assert_eq!(candidate.candidate_votes, 0);

        let voter = Pubkey::new_unique();
        let participant = Participant::new(voter, 7);
        assert_eq!(participant.participant, voter);
        assert_eq!(participant.poll_id, 7);
        assert!(!participant.has_voted);
    }
}
