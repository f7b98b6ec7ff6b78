#![no_std]
//! # Election Voting Contract
//!
//! An administrator-driven election workflow. The admin registers a cohort
//! of voters, opens and closes proposal submission, opens and closes the
//! ballot, and tallies the result. Registered voters submit proposals and
//! cast exactly one vote per session.
//!
//! ## Workflow
//!
//! ```text
//! RegisteringVoters -> ProposalsRegistrationStarted -> ProposalsRegistrationEnded
//!   -> VotingSessionStarted -> VotingSessionEnded -> VotesTallied -> RegisteringVoters
//! ```
//!
//! A new session can only be started from `VotesTallied` (or restarted while
//! still registering). Starting one discards every proposal and registration
//! of the previous session.
//!
//! ## Modules
//!
//! - `contract` - the `VotingContract` entry points
//! - `types` - workflow status, voter and proposal records, storage keys
//! - `errors` - the `VotingError` codes
//! - `storage` - typed storage accessors
//! - `access` - admin and registered-voter checks
//! - `validation` - input validation helpers
//! - `events` - published contract events
//! - `constants` - limits and TTL settings

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod validation;

pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{ElectionConfig, Proposal, Voter, WorkflowStatus};
