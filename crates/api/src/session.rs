// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-session roster ownership.
//!
//! Each session owns exactly one roster. Rosters are never shared between
//! sessions; a session's roster lives until the session is ended or has
//! been idle for longer than the registry's idle timeout.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use roster_sim::Roster;
use tracing::debug;

use crate::error::ApiError;

/// Default upper bound on concurrently open sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Default time a session may go unused before it is reclaimed (30 minutes).
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// One open session.
#[derive(Debug)]
struct SessionEntry {
    /// The roster this session owns.
    roster: Roster,
    /// When the session was created or last used.
    last_activity: Instant,
}

/// Registry of open sessions, keyed by bearer token.
#[derive(Debug)]
pub struct SessionRegistry {
    /// Open sessions.
    sessions: HashMap<String, SessionEntry>,
    /// Maximum number of sessions that may be open at once.
    max_sessions: usize,
    /// How long a session may go unused before it is reclaimed.
    idle_timeout: Duration,
}

impl SessionRegistry {
    /// Creates an empty registry.
    ///
    /// # Arguments
    ///
    /// * `max_sessions` - Maximum number of sessions open at once
    /// * `idle_timeout` - How long a session may go unused before it is reclaimed
    #[must_use]
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions,
            idle_timeout,
        }
    }

    /// Opens a new session with an empty roster and returns its token.
    ///
    /// Idle sessions are reclaimed first, so abandoned sessions never hold
    /// a slot past the idle timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionLimitReached` if the registry is still full
    /// after idle sessions are reclaimed.
    pub fn create_session(&mut self) -> Result<String, ApiError> {
        self.expire_idle_sessions(Instant::now());

        if self.sessions.len() >= self.max_sessions {
            return Err(ApiError::SessionLimitReached {
                limit: self.max_sessions,
            });
        }

        let mut token: String = Self::generate_session_token();
        while self.sessions.contains_key(&token) {
            token = Self::generate_session_token();
        }

        self.sessions.insert(
            token.clone(),
            SessionEntry {
                roster: Roster::new(),
                last_activity: Instant::now(),
            },
        );
        debug!(open_sessions = self.sessions.len(), "Opened session");
        Ok(token)
    }

    /// Returns the roster owned by a session and marks the session active.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown.
    pub fn roster(&mut self, token: &str) -> Result<&Roster, ApiError> {
        self.touch(token).map(|entry| &entry.roster)
    }

    /// Returns the roster owned by a session for mutation and marks the
    /// session active.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown.
    pub fn roster_mut(&mut self, token: &str) -> Result<&mut Roster, ApiError> {
        self.touch(token).map(|entry| &mut entry.roster)
    }

    /// Returns whether a token names an open session.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    /// Ends a session, returning its roster.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown.
    pub fn end_session(&mut self, token: &str) -> Result<Roster, ApiError> {
        let entry: SessionEntry = self
            .sessions
            .remove(token)
            .ok_or(ApiError::SessionNotFound)?;
        debug!(open_sessions = self.sessions.len(), "Ended session");
        Ok(entry.roster)
    }

    /// Drops every session whose last activity is more than the idle
    /// timeout before `now`.
    ///
    /// Returns the number of sessions dropped.
    pub fn expire_idle_sessions(&mut self, now: Instant) -> usize {
        let before: usize = self.sessions.len();
        let idle_timeout: Duration = self.idle_timeout;
        self.sessions.retain(|_, entry| {
            now.saturating_duration_since(entry.last_activity) <= idle_timeout
        });

        let expired: usize = before - self.sessions.len();
        if expired > 0 {
            debug!(
                expired,
                open_sessions = self.sessions.len(),
                "Expired idle sessions"
            );
        }
        expired
    }

    /// Returns the number of open sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns whether no sessions are open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn touch(&mut self, token: &str) -> Result<&mut SessionEntry, ApiError> {
        let entry: &mut SessionEntry = self
            .sessions
            .get_mut(token)
            .ok_or(ApiError::SessionNotFound)?;
        entry.last_activity = Instant::now();
        Ok(entry)
    }

    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_TIMEOUT)
    }
}
