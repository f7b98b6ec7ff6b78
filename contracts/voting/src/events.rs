//! Events published for indexers and off-chain observers.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::WorkflowStatus;

const INITIALIZED: Symbol = symbol_short!("init");
const ADMIN_TRANSFERRED: Symbol = symbol_short!("adm_xfer");
const VOTER_REGISTERED: Symbol = symbol_short!("voter_reg");
const PROPOSAL_REGISTERED: Symbol = symbol_short!("proposal");
const VOTED: Symbol = symbol_short!("voted");
const STATUS_CHANGED: Symbol = symbol_short!("status");

pub fn initialized(env: &Env, admin: &Address) {
    env.events().publish((INITIALIZED,), admin.clone());
}

pub fn admin_transferred(env: &Env, previous: &Address, next: &Address) {
    env.events()
        .publish((ADMIN_TRANSFERRED,), (previous.clone(), next.clone()));
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events().publish((VOTER_REGISTERED, voter.clone()), ());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events().publish((PROPOSAL_REGISTERED,), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events().publish((VOTED, voter.clone()), proposal_id);
}

pub fn status_changed(env: &Env, previous: WorkflowStatus, next: WorkflowStatus) {
    env.events().publish((STATUS_CHANGED,), (previous, next));
}
