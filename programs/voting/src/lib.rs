use anchor_lang::prelude::*;

// Import our modules
pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod processor;
pub mod state;
pub mod store;

// Import instruction handlers
use instructions::*;

pub use processor::VotingInstruction;
pub use state::{Candidate, Participant, Poll};
pub use store::{InMemoryStore, RecordStore};

use store::{atomically, Transaction};

declare_id!("coUnmi3oBUtwtd9fjeAvSsJssXh5A5xyPbhpewyzRVF");

/// The voting program: polls, candidates and one ballot per participant.
///
/// Owns the record store it runs against. Every instruction runs as a single
/// transaction on that store, so a failed instruction leaves no trace.
pub struct Voting<S: RecordStore> {
    program_id: Pubkey,
    store: S,
}

impl<S: RecordStore> Voting<S> {
    pub fn new(store: S) -> Self {
        Self::with_program_id(ID, store)
    }

    pub fn with_program_id(program_id: Pubkey, store: S) -> Self {
        Self { program_id, store }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // Create a new poll with a description and voting window
    pub fn initialize_poll(
        &mut self,
        signer: &Pubkey,
        clock: &Clock,
        poll_id: u64,
        description: String,
        poll_start: u64,
        poll_end: u64,
    ) -> Result<Poll> {
        let accounts = InitializePoll::accounts(&self.program_id, *signer, poll_id)?;
        atomically(&mut self.store, &self.program_id, |tx| {
            accounts.initialize_poll(tx, clock, poll_id, description, poll_start, poll_end)
        })
    }

    // Register a candidate under an existing poll
    pub fn initialize_candidate(
        &mut self,
        signer: &Pubkey,
        candidate_name: String,
        poll_id: u64,
    ) -> Result<Candidate> {
        let accounts =
            InitializeCandidate::accounts(&self.program_id, *signer, &candidate_name, poll_id)?;
        atomically(&mut self.store, &self.program_id, |tx| {
            accounts.initialize_candidate(tx, candidate_name, poll_id)
        })
    }

    // Cast the signer's single vote in a poll
    pub fn vote(
        &mut self,
        signer: &Pubkey,
        clock: &Clock,
        candidate_name: &str,
        poll_id: u64,
    ) -> Result<Candidate> {
        let accounts = Vote::accounts(&self.program_id, *signer, candidate_name, poll_id)?;
        atomically(&mut self.store, &self.program_id, |tx| {
            accounts.vote(tx, clock, poll_id)
        })
    }

    pub fn poll(&self, poll_id: u64) -> Result<Option<Poll>> {
        let (address, _) = pda::poll_address(poll_id, &self.program_id)?;
        self.reader().load(&address)
    }

    pub fn candidate(&self, poll_id: u64, candidate_name: &str) -> Result<Option<Candidate>> {
        if !constants::is_valid_candidate_name(candidate_name) {
            return Ok(None);
        }
        let (address, _) = pda::candidate_address(poll_id, candidate_name, &self.program_id)?;
        self.reader().load(&address)
    }

    pub fn participant(&self, poll_id: u64, voter: &Pubkey) -> Result<Option<Participant>> {
        let (address, _) = pda::participant_address(poll_id, voter, &self.program_id)?;
        self.reader().load(&address)
    }

    pub fn has_voted(&self, poll_id: u64, voter: &Pubkey) -> Result<bool> {
        Ok(self
            .participant(poll_id, voter)?
            .is_some_and(|participant| participant.has_voted))
    }

    fn reader(&self) -> Transaction<'_, S> {
        Transaction::new(&self.store, self.program_id)
    }
}

impl Default for Voting<InMemoryStore> {
    fn default() -> Self {
        Self::new(InMemoryStore::new())
    }
}
