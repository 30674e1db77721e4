use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::{increment, VotingError},
    instructions::unix_timestamp,
    pda,
    state::{Candidate, Participant, Poll},
    store::{RecordStore, Transaction},
};

// Accounts needed for casting a vote
pub struct Vote {
    // The person casting the vote
    pub signer: Pubkey,

    // The poll being voted on, seeds = [poll_id]
    pub poll: Pubkey,

    // The candidate receiving the vote, seeds = [poll_id, candidate_name].
    // None when the name can never be registered.
    pub candidate: Option<Pubkey>,

    // Participant PDA - created on the first vote, prevents double voting
    // seeds = ["participant", poll_id, signer]
    pub participant: Pubkey,
    pub participant_bump: u8,
}

impl Vote {
    pub fn accounts(
        program_id: &Pubkey,
        signer: Pubkey,
        candidate_name: &str,
        poll_id: u64,
    ) -> Result<Self> {
        let (poll, _) = pda::poll_address(poll_id, program_id)?;
        let candidate = if is_valid_candidate_name(candidate_name) {
            Some(pda::candidate_address(poll_id, candidate_name, program_id)?.0)
        } else {
            None
        };
        let (participant, participant_bump) =
            pda::participant_address(poll_id, &signer, program_id)?;
        Ok(Self {
            signer,
            poll,
            candidate,
            participant,
            participant_bump,
        })
    }

    pub fn vote<S: RecordStore>(
        &self,
        tx: &mut Transaction<'_, S>,
        clock: &Clock,
        poll_id: u64,
    ) -> Result<Candidate> {
        let poll = tx
            .load::<Poll>(&self.poll)?
            .ok_or(VotingError::PollNotFound)?;

        // Both window checks use the same timestamp
        let current_time = unix_timestamp(clock)?;
        require!(poll.has_started(current_time), VotingError::PollNotStarted);
        require!(!poll.has_ended(current_time), VotingError::PollEnded);

        let mut participant = match tx.load::<Participant>(&self.participant)? {
            Some(participant) => participant,
            None => {
                let participant = Participant::new(self.signer, poll_id);
                tx.create(self.participant, &participant)?;
                msg!(
                    "Participant account created: {} (bump {})",
                    self.participant,
                    self.participant_bump
                );
                participant
            }
        };

        if participant.has_voted {
            return Err(VotingError::AlreadyVoted.into());
        }

        let candidate_address = self.candidate.ok_or(VotingError::CandidateNotFound)?;
        let mut candidate = tx
            .load::<Candidate>(&candidate_address)?
            .ok_or(VotingError::CandidateNotFound)?;

        candidate.candidate_votes = increment(candidate.candidate_votes)?;
        participant.has_voted = true;
        tx.update(candidate_address, &candidate)?;
        tx.update(self.participant, &participant)?;

        msg!("Voted for candidate: {}", candidate.candidate_name);
        msg!("Voter: {}", self.signer);
        msg!("Votes: {}", candidate.candidate_votes);

        Ok(candidate)
    }
}
