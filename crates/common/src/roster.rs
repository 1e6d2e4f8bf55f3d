//! Credential validator
//!
//! The roster is a fixed in-memory list of user records checked with a
//! linear scan. Validation is a pure read-only lookup: no tokens, no
//! rate limiting, no mutation, so concurrent requests need no locking.

use crate::types::{LoginRequest, PublicUser, UserRecord};

/// Outcome of a credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Exact match found; carries the public view of the matched record.
    Accepted(PublicUser),
    /// No record matched.
    Rejected,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Process-lifetime user roster.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<UserRecord>,
}

impl Roster {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Check a submitted credential pair against the roster.
    ///
    /// Matching is case-sensitive exact equality on both fields, with
    /// no trimming or normalization. Empty strings are legal input and
    /// match nothing in the default roster.
    pub fn validate(&self, request: &LoginRequest) -> Verdict {
        let matched = self
            .users
            .iter()
            .find(|u| u.user_name == request.user_name && u.password == request.password);

        match matched {
            Some(user) => Verdict::Accepted(user.public_view()),
            None => Verdict::Rejected,
        }
    }
}

impl Default for Roster {
    /// The demo roster: exactly one record, `admin` / `123`.
    fn default() -> Self {
        Self::new(vec![UserRecord::new("admin", "123")])
    }
}
