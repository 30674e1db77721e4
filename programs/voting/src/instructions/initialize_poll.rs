use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::VotingError,
    instructions::unix_timestamp,
    pda,
    state::Poll,
    store::{RecordStore, Transaction},
};

// Accounts needed for creating a new poll
pub struct InitializePoll {
    // The person creating the poll
    pub signer: Pubkey,

    // The poll account (PDA) - will be created, seeds = [poll_id]
    pub poll: Pubkey,
    pub poll_bump: u8,
}

impl InitializePoll {
    pub fn accounts(program_id: &Pubkey, signer: Pubkey, poll_id: u64) -> Result<Self> {
        let (poll, poll_bump) = pda::poll_address(poll_id, program_id)?;
        Ok(Self {
            signer,
            poll,
            poll_bump,
        })
    }

    pub fn initialize_poll<S: RecordStore>(
        &self,
        tx: &mut Transaction<'_, S>,
        clock: &Clock,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<Poll> {
        // A poll id can only be used once
        require!(!tx.exists(&self.poll), VotingError::PollAlreadyExists);

        require!(
            is_valid_description(&description),
            VotingError::DescriptionTooLong
        );

        // Poll end must be in the future. poll_start is taken as given.
        let current_time = unix_timestamp(clock)?;
        require!(poll_end > current_time, VotingError::InvalidTimeWindow);

        let poll = Poll {
            poll_id,
            description,
            poll_start,
            poll_end,
            candidate_amount: 0,
        };
        tx.create(self.poll, &poll)?;

        msg!("Poll created successfully!");
        msg!("Poll ID: {}", poll_id);
        msg!("Creator: {}", self.signer);
        msg!("Poll account: {} (bump {})", self.poll, self.poll_bump);
        msg!("Window: {} - {}", poll_start, poll_end);

        Ok(poll)
    }
}
