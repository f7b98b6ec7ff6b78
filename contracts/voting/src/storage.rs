use soroban_sdk::{Address, Env, Vec};

use crate::constants::{
    BUMP_AMOUNT, LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT, SESSION_LIFETIME_THRESHOLD,
};
use crate::types::{DataKey, ElectionConfig, Proposal, Voter, WorkflowStatus};

// ── Instance ─────────────────────────────────────────────────────────────────
// Singletons live in instance storage and share the contract's lifetime.

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ── Config ───────────────────────────────────────────────────────────────────

pub fn get_config(env: &Env) -> Option<ElectionConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ── Workflow ─────────────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> WorkflowStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(WorkflowStatus::RegisteringVoters)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_session(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Session)
        .unwrap_or(0u32)
}

/// Opens a new session and returns its number. Voter records of earlier
/// sessions become unreachable.
pub fn increment_session(env: &Env) -> u32 {
    let session = get_session(env) + 1;
    env.storage().instance().set(&DataKey::Session, &session);
    session
}

// ── Voters ───────────────────────────────────────────────────────────────────
// Keyed by session so that a reset never has to enumerate old registrants.

pub fn get_voter(env: &Env, voter: &Address) -> Voter {
    let key = DataKey::Voter(get_session(env), voter.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(Voter::unregistered)
}

pub fn save_voter(env: &Env, voter: &Address, record: &Voter) {
    let key = DataKey::Voter(get_session(env), voter.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}

/// Extend a voter record's TTL if the voter is registered this session.
pub fn bump_voter(env: &Env, voter: &Address) {
    let key = DataKey::Voter(get_session(env), voter.clone());
    if env.storage().persistent().has(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
    }
}

// ── Proposals ────────────────────────────────────────────────────────────────
// One persistent entry per proposal; only the count lives in the instance.

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u32)
}

/// Forget the current session's proposals. Their entries become
/// unreachable once the session number moves on.
pub fn reset_proposals(env: &Env) {
    env.storage().instance().set(&DataKey::ProposalCount, &0u32);
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    if proposal_id >= get_proposal_count(env) {
        return None;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(get_session(env), proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(get_session(env), proposal_id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, SESSION_LIFETIME_THRESHOLD, SESSION_BUMP_AMOUNT);
}

/// Append a proposal and return its id.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    proposal_id
}

/// Extend every proposal of the current session, so that none is archived
/// before the tally reads it.
pub fn bump_proposals(env: &Env) {
    let session = get_session(env);
    for proposal_id in 0..get_proposal_count(env) {
        env.storage().persistent().extend_ttl(
            &DataKey::Proposal(session, proposal_id),
            SESSION_LIFETIME_THRESHOLD,
            SESSION_BUMP_AMOUNT,
        );
    }
}

pub fn get_proposals(env: &Env) -> Vec<Proposal> {
    let mut proposals = Vec::new(env);
    for proposal_id in 0..get_proposal_count(env) {
        if let Some(proposal) = get_proposal(env, proposal_id) {
            proposals.push_back(proposal);
        }
    }
    proposals
}

// ── Result ───────────────────────────────────────────────────────────────────

pub fn get_winner(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::Winner)
}

pub fn set_winner(env: &Env, winner: Option<u32>) {
    match winner {
        Some(id) => env.storage().instance().set(&DataKey::Winner, &id),
        None => env.storage().instance().remove(&DataKey::Winner),
    }
}
