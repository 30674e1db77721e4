use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::{increment, VotingError},
    pda,
    state::{Candidate, Poll},
    store::{RecordStore, Transaction},
};

// Accounts needed for registering a candidate under a poll
pub struct InitializeCandidate {
    pub signer: Pubkey,

    // The poll the candidate joins (candidate_amount is incremented)
    pub poll: Pubkey,

    // The candidate account (PDA) - will be created, seeds = [poll_id, candidate_name]
    pub candidate: Pubkey,
    pub candidate_bump: u8,
}

impl InitializeCandidate {
    pub fn accounts(
        program_id: &Pubkey,
        signer: Pubkey,
        candidate_name: &str,
        poll_id: u64,
    ) -> Result<Self> {
        require!(
            is_valid_candidate_name(candidate_name),
            VotingError::InvalidCandidateName
        );

        let (poll, _) = pda::poll_address(poll_id, program_id)?;
        let (candidate, candidate_bump) =
            pda::candidate_address(poll_id, candidate_name, program_id)?;
        Ok(Self {
            signer,
            poll,
            candidate,
            candidate_bump,
        })
    }

    pub fn initialize_candidate<S: RecordStore>(
        &self,
        tx: &mut Transaction<'_, S>,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<Candidate> {
        let mut poll = tx
            .load::<Poll>(&self.poll)?
            .ok_or(VotingError::PollNotFound)?;

        require!(!tx.exists(&self.candidate), VotingError::DuplicateCandidate);

        let candidate = Candidate::new(candidate_name);
        tx.create(self.candidate, &candidate)?;

        poll.candidate_amount = increment(poll.candidate_amount)?;
        tx.update(self.poll, &poll)?;

        msg!("Candidate registered: {}", candidate.candidate_name);
        msg!("Poll ID: {}", poll_id);
        msg!("Candidate account: {} (bump {})", self.candidate, self.candidate_bump);
        msg!("Candidates in poll: {}", poll.candidate_amount);

        Ok(candidate)
    }
}
