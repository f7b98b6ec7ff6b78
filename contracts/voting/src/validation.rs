//! Input validation helpers.

use soroban_sdk::{Address, Env, String, Vec};

use crate::constants::{MAX_DESCRIPTION_LEN_CAP, MAX_VOTERS_PER_SESSION, NULL_ACCOUNT};
use crate::errors::VotingError;
use crate::types::ElectionConfig;

// ===== Address Validation =====

/// The all-zero account address.
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ACCOUNT))
}

/// Validate that an address is not the null principal
pub fn validate_address(env: &Env, address: &Address) -> Result<(), VotingError> {
    if *address == null_address(env) {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

/// Validate a session's registration list: at most `MAX_VOTERS_PER_SESSION`
/// entries, no null principal
pub fn validate_voter_list(env: &Env, voters: &Vec<Address>) -> Result<(), VotingError> {
    if voters.len() > MAX_VOTERS_PER_SESSION {
        return Err(VotingError::InvalidInput);
    }

    let null = null_address(env);
    for voter in voters.iter() {
        if voter == null {
            return Err(VotingError::InvalidInput);
        }
    }
    Ok(())
}

// ===== Proposal Validation =====

/// Validate a proposal description against the configured limit
pub fn validate_description(
    description: &String,
    config: &ElectionConfig,
) -> Result<(), VotingError> {
    let len = description.len();
    if len == 0 || len > config.max_description_len {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

// ===== Config Validation =====

pub fn validate_config(config: &ElectionConfig) -> Result<(), VotingError> {
    if config.max_description_len == 0 || config.max_description_len > MAX_DESCRIPTION_LEN_CAP {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}
