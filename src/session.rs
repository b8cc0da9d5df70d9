//! Session state shared across the profile UI
//!
//! The bearer token and the last-known-good user record live in one
//! explicitly-passed [`SessionStore`] with defined read/write accessors and
//! a single invalidation point for logout, instead of ad-hoc ambient
//! lookups scattered through the views.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::profile::{Entry, Skill};

/// The persisted user record as the backend returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    /// Server-assigned identifier
    pub id: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Free-form biography
    pub bio: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// University name (student accounts)
    pub university: Option<String>,

    /// Course of study (student accounts)
    pub course: Option<String>,

    /// Year of study (student accounts)
    pub year: Option<String>,

    /// Account role, `"student"` or `"company"`
    pub role: Option<String>,

    /// Company name (company accounts)
    pub company_name: Option<String>,

    /// Skills, in either legacy wire representation
    pub skills: Vec<Skill>,

    /// Education history entries
    pub education: Vec<Entry>,

    /// Completed course entries
    pub courses: Vec<Entry>,

    /// Spoken language entries
    pub languages: Vec<Entry>,

    /// Achievement entries
    pub achievements: Vec<Entry>,

    /// Lightweight project entries
    pub projects: Vec<Entry>,
}

impl UserRecord {
    /// Whether this account is a student account. Only students get the
    /// mount-time showcase-projects fetch.
    pub fn is_student(&self) -> bool {
        self.role.as_deref() == Some("student")
    }
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserRecord>,
}

/// Shared store for the bearer token and the cached user record.
///
/// Cloning is cheap and all clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<Mutex<SessionState>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the bearer token after sign-in.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.token = Some(token.into());
    }

    /// The current bearer token, if signed in.
    pub fn token(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.token.clone()
    }

    /// Replace the cached user record, e.g. after a successful profile save.
    pub fn store_user(&self, user: UserRecord) {
        let mut state = self.state.lock().unwrap();
        state.user = Some(user);
    }

    /// The last-known-good user record.
    pub fn user(&self) -> Option<UserRecord> {
        let state = self.state.lock().unwrap();
        state.user.clone()
    }

    /// Drop the token and cached user record. The invalidation point for
    /// logout.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.token = None;
        state.user = None;
    }
}
