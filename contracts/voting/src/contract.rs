use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    access,
    constants::{DEFAULT_MAX_DESCRIPTION_LEN, MAX_PROPOSALS_PER_SESSION},
    errors::VotingError,
    events, storage,
    types::{ElectionConfig, Proposal, Voter, WorkflowStatus},
    validation,
};

#[contract]
pub struct VotingContract;

// ============================================================================
// Helper Functions
// ============================================================================

/// Move the workflow one step forward from `expected`.
///
/// Fails with `InvalidPhase` unless the election currently sits in
/// `expected`. Callers check capabilities first.
fn advance(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    let current = storage::get_status(env);
    if current != expected {
        return Err(VotingError::InvalidPhase);
    }
    let next = current.next().ok_or(VotingError::InvalidPhase)?;

    storage::set_status(env, next);
    storage::bump_instance(env);
    storage::bump_proposals(env);

    log!(env, "workflow status changed", current, next);
    events::status_changed(env, current, next);
    Ok(())
}

fn require_phase(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    if storage::get_status(env) != expected {
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Index of the highest vote count, given counts in proposal id order.
///
/// Scans left to right and only replaces the current best on a strictly
/// greater count, so the earliest proposal wins a tie. `None` when there
/// are no proposals.
fn tally(vote_counts: impl Iterator<Item = u32>) -> Option<u32> {
    let mut winner: Option<(u32, u32)> = None;

    for (id, count) in vote_counts.enumerate() {
        match winner {
            Some((_, best)) if count <= best => {}
            _ => winner = Some((id as u32, count)),
        }
    }

    winner.map(|(id, _)| id)
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the election with its admin.
    ///
    /// `max_description_len` bounds proposal descriptions in bytes and falls
    /// back to `DEFAULT_MAX_DESCRIPTION_LEN`. Can only be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        max_description_len: Option<u32>,
    ) -> Result<(), VotingError> {
        if storage::has_admin(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::validate_address(&env, &admin)?;

        let config = ElectionConfig {
            max_description_len: max_description_len.unwrap_or(DEFAULT_MAX_DESCRIPTION_LEN),
        };
        validation::validate_config(&config)?;

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::bump_instance(&env);

        events::initialized(&env, &admin);
        Ok(())
    }

    // ── Administration ───────────────────────────────────────────────────────

    /// Hand the admin role to another principal.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        validation::validate_address(&env, &new_admin)?;

        storage::set_admin(&env, &new_admin);
        storage::bump_instance(&env);

        events::admin_transferred(&env, &caller, &new_admin);
        Ok(())
    }

    /// Replace the election settings. Only allowed between sessions.
    pub fn update_config(
        env: Env,
        caller: Address,
        max_description_len: u32,
    ) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        if !storage::get_status(&env).accepts_registration() {
            return Err(VotingError::InvalidPhase);
        }

        let config = ElectionConfig { max_description_len };
        validation::validate_config(&config)?;

        storage::set_config(&env, &config);
        storage::bump_instance(&env);
        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    /// Open a new session and register `voters` for it.
    ///
    /// Every registrant and proposal of the previous session is discarded,
    /// as is the previous tally. Allowed while registering or once votes
    /// have been tallied. `voters` is the session's whole electorate and
    /// holds at most `MAX_VOTERS_PER_SESSION` addresses.
    pub fn register_voters(
        env: Env,
        caller: Address,
        voters: Vec<Address>,
    ) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;

        let previous = storage::get_status(&env);
        if !previous.accepts_registration() {
            return Err(VotingError::InvalidPhase);
        }
        validation::validate_voter_list(&env, &voters)?;

        let session = storage::increment_session(&env);
        storage::reset_proposals(&env);
        storage::set_winner(&env, None);

        for voter in voters.iter() {
            storage::save_voter(&env, &voter, &Voter::registered());
            events::voter_registered(&env, &voter);
        }

        let next = WorkflowStatus::RegisteringVoters;
        storage::set_status(&env, next);
        storage::bump_instance(&env);

        log!(&env, "session opened", session, voters.len());
        events::status_changed(&env, previous, next);
        Ok(())
    }

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::RegisteringVoters)
    }

    /// Submit a proposal. Returns its id, the index it was stored at.
    pub fn propose(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        access::require_voter(&env, &caller)?;
        require_phase(&env, WorkflowStatus::ProposalsRegistrationStarted)?;

        let config = storage::get_config(&env).ok_or(VotingError::NotInitialized)?;
        validation::validate_description(&description, &config)?;

        if storage::get_proposal_count(&env) >= MAX_PROPOSALS_PER_SESSION {
            return Err(VotingError::InvalidInput);
        }

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        storage::bump_voter(&env, &caller);
        storage::bump_instance(&env);

        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::ProposalsRegistrationEnded)
    }

    /// Cast the caller's single ballot for `proposal_id`.
    pub fn vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = access::require_voter(&env, &caller)?;
        require_phase(&env, WorkflowStatus::VotingSessionStarted)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidInput)?;

        proposal.vote_count += 1;
        storage::save_proposal(&env, proposal_id, &proposal);

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        storage::save_voter(&env, &caller, &voter);
        storage::bump_instance(&env);

        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        access::require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::VotingSessionStarted)
    }

    /// Count the ballots and close the session.
    ///
    /// Returns the winning proposal id, 0 when no proposal was submitted.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, VotingError> {
        access::require_admin(&env, &caller)?;
        advance(&env, WorkflowStatus::VotingSessionEnded)?;

        let winner = tally(
            storage::get_proposals(&env)
                .iter()
                .map(|proposal| proposal.vote_count),
        );
        storage::set_winner(&env, winner);
        Ok(winner.unwrap_or(0))
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// The principal's record in the current session. Unknown principals
    /// read as unregistered.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::InvalidInput)
    }

    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        storage::get_proposals(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    /// Winning proposal id of the last tally. Reads as 0 before a tally and
    /// when the tallied session had no proposals; see `winner`.
    pub fn winning_proposal_id(env: Env) -> u32 {
        storage::get_winner(&env).unwrap_or(0)
    }

    /// Winning proposal id of the last tally, `None` when there is no winner.
    pub fn winner(env: Env) -> Option<u32> {
        storage::get_winner(&env)
    }

    pub fn workflow_status(env: Env) -> WorkflowStatus {
        storage::get_status(&env)
    }

    /// Number of sessions opened so far.
    pub fn session(env: Env) -> u32 {
        storage::get_session(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        access::require_initialized(&env)
    }

    pub fn get_config(env: Env) -> Result<ElectionConfig, VotingError> {
        storage::get_config(&env).ok_or(VotingError::NotInitialized)
    }
}
