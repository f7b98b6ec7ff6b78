use soroban_sdk::{contracttype, Address, String};

/// Phases of an election session, in the only order they may occur.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// The phase that follows this one within a session.
    ///
    /// `VotesTallied` has no successor here: leaving it requires a new
    /// registration, which resets the session.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }

    /// Whether a new session may be opened from this phase.
    pub fn accepts_registration(self) -> bool {
        matches!(
            self,
            WorkflowStatus::RegisteringVoters | WorkflowStatus::VotesTallied
        )
    }
}

/// A principal's standing in the current session.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Set once the ballot is cast
    pub voted_proposal_id: Option<u32>,
}

impl Voter {
    pub fn unregistered() -> Self {
        Voter {
            is_registered: false,
            has_voted: false,
            voted_proposal_id: None,
        }
    }

    pub fn registered() -> Self {
        Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        }
    }
}

/// A submitted proposal. Its id is its index in the session's proposal list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Admin-tunable election settings.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionConfig {
    /// Longest accepted proposal description, in bytes
    pub max_description_len: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    Status,
    /// Current session number, bumped by every registration
    Session,
    /// (session, principal) -> Voter
    Voter(u32, Address),
    /// (session, proposal id) -> Proposal
    Proposal(u32, u32),
    /// Proposals submitted in the current session
    ProposalCount,
    /// Winning proposal id of the last tally, absent when there is none
    Winner,
}
