//! Error codes returned by the voting contract.

use soroban_sdk::contracterror;

/// Every failure is a caller-correctable precondition violation.
///
/// Codes are stable and part of the contract interface:
/// - 1-4: workflow errors
/// - 5-6: lifecycle errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the admin, or not a registered voter of this session
    Unauthorized = 1,

    /// Operation is not allowed in the current workflow status
    InvalidPhase = 2,

    /// Null principal, out-of-range proposal id or malformed argument
    InvalidInput = 3,

    /// Voter already cast a ballot in this session
    AlreadyVoted = 4,

    /// Contract has not been initialized
    NotInitialized = 5,

    /// Contract was already initialized
    AlreadyInitialized = 6,
}
