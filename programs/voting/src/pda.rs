use anchor_lang::prelude::*;

use crate::{
    constants::MAX_SEED_LENGTH,
    error::VotingError,
    state::{Participant, Poll},
};

/// Derive a program address and its canonical bump from `seeds`.
///
/// Oversized seeds are rejected up front; `find_program_address` would
/// otherwise panic on them.
pub fn find_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    require!(
        seeds.iter().all(|seed| seed.len() <= MAX_SEED_LENGTH),
        VotingError::SeedTooLong
    );
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| ProgramError::InvalidSeeds.into())
}

pub fn poll_address(poll_id: u64, program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    find_address(&[Poll::seed(poll_id).as_ref()], program_id)
}

pub fn candidate_address(
    poll_id: u64,
    candidate_name: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    find_address(
        &[Poll::seed(poll_id).as_ref(), candidate_name.as_bytes()],
        program_id,
    )
}

pub fn participant_address(
    poll_id: u64,
    voter: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8)> {
    find_address(
        &[Participant::SEED, Poll::seed(poll_id).as_ref(), voter.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let program_id = crate::ID;
        let (first, first_bump) = poll_address(1, &program_id).unwrap();
        let (second, second_bump) = poll_address(1, &program_id).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);

        let expected = Pubkey::find_program_address(&[1u64.to_le_bytes().as_ref()], &program_id);
        assert_eq!((first, first_bump), expected);
    }

    #[test]
    fn test_keys_map_to_distinct_addresses() {
        let program_id = crate::ID;
        let voter = Pubkey::new_unique();

        let (poll_one, _) = poll_address(1, &program_id).unwrap();
        let (poll_two, _) = poll_address(2, &program_id).unwrap();
        let (pink, _) = candidate_address(1, "Pink", &program_id).unwrap();
        let (blue, _) = candidate_address(1, "Blue", &program_id).unwrap();
        let (pink_elsewhere, _) = candidate_address(2, "Pink", &program_id).unwrap();
        let (participant, _) = participant_address(1, &voter, &program_id).unwrap();
        let (participant_elsewhere, _) = participant_address(2, &voter, &program_id).unwrap();

        let all = [
            poll_one,
            poll_two,
            pink,
            blue,
            pink_elsewhere,
            participant,
            participant_elsewhere,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_program_id_is_part_of_the_address() {
        let (ours, _) = poll_address(1, &crate::ID).unwrap();
        let (theirs, _) = poll_address(1, &Pubkey::new_unique()).unwrap();
        assert_ne!(ours, theirs);
    }

    #[test]
    fn test_oversized_seed_is_rejected() {
        let name = "x".repeat(MAX_SEED_LENGTH + 1);
        assert!(candidate_address(1, &name, &crate::ID).is_err());
        assert!(candidate_address(1, &name[..MAX_SEED_LENGTH], &crate::ID).is_ok());
    }
}
