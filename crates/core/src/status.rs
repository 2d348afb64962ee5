//! Status vocabulary and phase status derivation.
//!
//! Activities (and the phases rolled up from them) move through
//! `not_started -> in_progress -> done`. Parts (and deliverables) move through
//! `not_started -> in_progress -> approved`. Raw status strings arrive in
//! whatever case the source stored them; parsing is case-insensitive and any
//! unknown or missing value degrades to `not_started`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_NOT_STARTED: &str = "not_started";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_DONE: &str = "done";
pub const STATUS_APPROVED: &str = "approved";

/// Status values valid for activities and phases.
pub const ACTIVITY_STATUSES: &[&str] = &[STATUS_NOT_STARTED, STATUS_IN_PROGRESS, STATUS_DONE];

/// Status values valid for parts and deliverables.
pub const PART_STATUSES: &[&str] = &[STATUS_NOT_STARTED, STATUS_IN_PROGRESS, STATUS_APPROVED];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Status of any node in a project tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Done,
    Approved,
}

impl Status {
    /// Parse a raw activity status. Only `not_started`, `in_progress` and
    /// `done` are recognised.
    pub fn parse_activity(raw: Option<&str>) -> Self {
        match normalize(raw).as_deref() {
            Some(STATUS_IN_PROGRESS) => Self::InProgress,
            Some(STATUS_DONE) => Self::Done,
            _ => Self::NotStarted,
        }
    }

    /// Parse a raw part or deliverable status. Only `not_started`,
    /// `in_progress` and `approved` are recognised.
    pub fn parse_part(raw: Option<&str>) -> Self {
        match normalize(raw).as_deref() {
            Some(STATUS_IN_PROGRESS) => Self::InProgress,
            Some(STATUS_APPROVED) => Self::Approved,
            _ => Self::NotStarted,
        }
    }

    /// Parse a status supplied by an API caller (e.g. a filter parameter).
    ///
    /// Unlike the raw-record parsers this is strict: callers asking for a
    /// status that does not exist get an error rather than a silent default.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            STATUS_NOT_STARTED => Ok(Self::NotStarted),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_DONE => Ok(Self::Done),
            STATUS_APPROVED => Ok(Self::Approved),
            other => Err(format!(
                "Invalid status '{other}'. Must be one of: {}, {}",
                ACTIVITY_STATUSES.join(", "),
                STATUS_APPROVED
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => STATUS_NOT_STARTED,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Done => STATUS_DONE,
            Self::Approved => STATUS_APPROVED,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a node type obtains its status.
///
/// Phases reflect their activities live; deliverables carry an explicit
/// sign-off state that part completion never overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Status is recomputed from the children on every formatting pass.
    DerivedFromChildren,
    /// Status is whatever the record stores.
    StoredAuthoritative,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive a container status from its children's statuses.
///
/// `completed` is the terminal status of the child vocabulary (`Done` for
/// activities, `Approved` for parts). Precedence: empty => not started; all
/// completed => completed; any in progress or any completed => in progress;
/// otherwise not started.
pub fn derive_status(children: &[Status], completed: Status) -> Status {
    if children.is_empty() {
        return Status::NotStarted;
    }
    if children.iter().all(|s| *s == completed) {
        return completed;
    }
    if children
        .iter()
        .any(|s| *s == Status::InProgress || *s == completed)
    {
        return Status::InProgress;
    }
    Status::NotStarted
}

/// Derive a phase status from its activities' statuses.
pub fn derive_phase_status(children: &[Status]) -> Status {
    derive_status(children, Status::Done)
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(|s| s.trim().to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
