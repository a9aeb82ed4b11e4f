use super::session::{SwipeDirection, SwipeSession};
use crate::workflows::matching::{Job, StudentProfile};

/// Raised when session operations run before the composition root initialized a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("swipe session not initialized: call SessionContext::initialize first")]
    NotInitialized,
}

/// Owner of the single active session and its student profile.
///
/// Held by the composition root and passed by reference to whatever renders or drives
/// the deck. Every accessor fails with [`SessionError::NotInitialized`] until
/// [`SessionContext::initialize`] has run.
#[derive(Debug, Default)]
pub struct SessionContext {
    active: Option<ActiveSession>,
}

#[derive(Debug)]
struct ActiveSession {
    profile: StudentProfile,
    session: SwipeSession,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh session, discarding any previous one.
    pub fn initialize(&mut self, profile: StudentProfile, jobs: Vec<Job>) -> &mut SwipeSession {
        let active = self.active.insert(ActiveSession {
            profile,
            session: SwipeSession::new(jobs),
        });
        &mut active.session
    }

    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    pub fn session(&self) -> Result<&SwipeSession, SessionError> {
        self.active
            .as_ref()
            .map(|active| &active.session)
            .ok_or(SessionError::NotInitialized)
    }

    pub fn session_mut(&mut self) -> Result<&mut SwipeSession, SessionError> {
        self.active
            .as_mut()
            .map(|active| &mut active.session)
            .ok_or(SessionError::NotInitialized)
    }

    pub fn profile(&self) -> Result<&StudentProfile, SessionError> {
        self.active
            .as_ref()
            .map(|active| &active.profile)
            .ok_or(SessionError::NotInitialized)
    }

    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<(), SessionError> {
        self.session_mut()?.swipe(direction);
        Ok(())
    }

    pub fn apply_to_job(&mut self, job: Job) -> Result<(), SessionError> {
        self.session_mut()?.apply_to_job(job);
        Ok(())
    }

    pub fn current_job(&self) -> Result<Option<&Job>, SessionError> {
        Ok(self.session()?.current_job())
    }

    pub fn interested_jobs(&self) -> Result<&[Job], SessionError> {
        Ok(self.session()?.interested_jobs())
    }

    pub fn applied_jobs(&self) -> Result<&[Job], SessionError> {
        Ok(self.session()?.applied_jobs())
    }
}
