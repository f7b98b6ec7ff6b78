//! Capability checks.
//!
//! The election knows two capabilities: being the admin, and being a
//! registered voter of the current session. Both are checked against the
//! caller the entry point received, after that caller has authorized the
//! invocation.

use soroban_sdk::{Address, Env};

use crate::errors::VotingError;
use crate::storage;
use crate::types::Voter;

/// Require that the contract has been initialized, returning its admin.
pub fn require_initialized(env: &Env) -> Result<Address, VotingError> {
    storage::get_admin(env).ok_or(VotingError::NotInitialized)
}

/// Require that `caller` authorized this call and is the admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    let admin = require_initialized(env)?;
    caller.require_auth();

    if *caller != admin {
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

/// Require that `caller` authorized this call and is registered in the
/// current session. Returns the caller's voter record.
pub fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    require_initialized(env)?;
    caller.require_auth();

    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        return Err(VotingError::Unauthorized);
    }
    Ok(voter)
}
