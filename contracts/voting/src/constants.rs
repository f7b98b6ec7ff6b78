//! Limits and storage lifetime settings.

// ===== Ledger TTL =====

/// ~5s per ledger.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are extended to 30 days of ledgers.
pub const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Entries are only extended once their remaining TTL drops below this.
pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal records must outlive the session that created them,
/// however long the admin keeps it open. They are extended to 180 days of
/// ledgers when written, when the voter proposes, and (for proposals) on
/// every phase transition.
pub const SESSION_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS;

pub const SESSION_LIFETIME_THRESHOLD: u32 = SESSION_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== Registration =====

/// Maximum registrants in one session. Every `register_voters` call opens a
/// new session, so this bounds the whole electorate, not just one batch.
pub const MAX_VOTERS_PER_SESSION: u32 = 100;

/// The all-zero ed25519 account, never a valid principal.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ===== Proposals =====

/// Maximum proposals in one session, keeping the tally scan inside the
/// instruction budget.
pub const MAX_PROPOSALS_PER_SESSION: u32 = 100;

/// Upper bound an admin may configure for proposal descriptions, in bytes.
pub const MAX_DESCRIPTION_LEN_CAP: u32 = 1_024;

/// Description limit used when the deployer has no preference.
pub const DEFAULT_MAX_DESCRIPTION_LEN: u32 = 256;
