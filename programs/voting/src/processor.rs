use anchor_lang::prelude::*;

use crate::{error::VotingError, store::RecordStore, Voting};

/// Requests accepted by the program, Borsh encoded.
///
/// Argument order follows the instruction signatures:
/// `initialize_candidate(candidate_name, poll_id)`, `vote(candidate_name, poll_id)`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum VotingInstruction {
    InitializePoll {
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    },
    InitializeCandidate {
        candidate_name: String,
        poll_id: u64,
    },
    Vote {
        candidate_name: String,
        poll_id: u64,
    },
}

impl VotingInstruction {
    pub fn unpack(instruction_data: &[u8]) -> Result<Self> {
        Self::try_from_slice(instruction_data)
            .map_err(|_| VotingError::InvalidInstructionData.into())
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.serialize(&mut data)
            .map_err(|_| VotingError::InvalidInstructionData)?;
        Ok(data)
    }
}

impl<S: RecordStore> Voting<S> {
    /// Decode `instruction_data` and run it on behalf of `signer`
    pub fn process_instruction(
        &mut self,
        signer: &Pubkey,
        clock: &Clock,
        instruction_data: &[u8],
    ) -> Result<()> {
        match VotingInstruction::unpack(instruction_data)? {
            VotingInstruction::InitializePoll {
                poll_id,
                description,
                poll_start,
                poll_end,
            } => {
                msg!("Instruction: InitializePoll");
                self.initialize_poll(signer, clock, poll_id, description, poll_start, poll_end)?;
            }
            VotingInstruction::InitializeCandidate {
                candidate_name,
                poll_id,
            } => {
                msg!("Instruction: InitializeCandidate");
                self.initialize_candidate(signer, candidate_name, poll_id)?;
            }
            VotingInstruction::Vote {
                candidate_name,
                poll_id,
            } => {
                msg!("Instruction: Vote");
                self.vote(signer, clock, &candidate_name, poll_id)?;
            }
        }
        Ok(())
    }
}
