//! Per-session request state machine.
//!
//! A session tracks exactly one in-flight report request:
//! Idle → Pending → Success | Failure, with reset back to Idle from any
//! state. Submitting is only legal from Idle, so a caller can never have
//! two requests outstanding at once.

use thiserror::Error;

use crate::profile::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a request is already in flight or unresolved; reset first")]
    NotIdle,

    #[error("at least one profile field must be filled in")]
    EmptyProfile,
}

/// One user session: the profile under edit plus the request state.
#[derive(Debug, Default)]
pub struct Session {
    profile: Profile,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The profile is edited in place between submissions.
    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Idle → Pending. Rejected outside Idle and when every field is blank.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.state != SessionState::Idle {
            return Err(SubmitError::NotIdle);
        }
        if !self.profile.has_content() {
            return Err(SubmitError::EmptyProfile);
        }
        self.state = SessionState::Pending;
        Ok(())
    }

    /// Pending → Success. A resolution arriving in any other state is ignored.
    pub fn resolve_success(&mut self, report: String) {
        if self.state == SessionState::Pending {
            self.state = SessionState::Success(report);
        }
    }

    /// Pending → Failure. A resolution arriving in any other state is ignored.
    pub fn resolve_failure(&mut self, message: String) {
        if self.state == SessionState::Pending {
            self.state = SessionState::Failure(message);
        }
    }

    /// Any state → Idle, discarding the profile, report, and failure message.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}
