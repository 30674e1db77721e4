// Export all instruction modules

pub mod initialize_poll;
pub mod initialize_candidate;
pub mod vote;

// Re-export the instruction structs for easy access
pub use initialize_poll::*;
pub use initialize_candidate::*;
pub use vote::*;

use anchor_lang::prelude::*;

use crate::error::VotingError;

/// Current unix time from the clock, as the unsigned seconds polls are stored in
pub fn unix_timestamp(clock: &Clock) -> Result<u64> {
    u64::try_from(clock.unix_timestamp).map_err(|_| VotingError::InvalidClock.into())
}
