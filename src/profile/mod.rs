//! Profile editing: draft state, entry collections, skills, and saving

mod draft;
mod editor;
mod entries;
mod skills;

use reqwest::Client;
use serde::Deserialize;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::session::{SessionStore, UserRecord};

pub use draft::ProfileDraft;
pub use editor::ProfileEditor;
pub use entries::{Entry, EntryCollection, EntryId, EntryIdGen, EntryKind};
pub use skills::{
    add_skill, normalize_all, remove_skill, update_skill_name, update_skill_proficiency,
    Proficiency, Skill,
};

/// Success body of a profile save
#[derive(Debug, Deserialize)]
struct SaveResponse {
    user: UserRecord,
}

/// Client for profile persistence
pub struct ProfileClient {
    /// The base URL of the TalentBridge API
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Session state providing the bearer token
    session: SessionStore,
}

impl ProfileClient {
    /// Create a new ProfileClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
        }
    }

    /// Save the full draft with `PUT /users/profile`.
    ///
    /// On success the server's user record replaces the cached one in the
    /// session store and is returned. No retries; a failure leaves the
    /// session store untouched so the caller can re-attempt.
    pub async fn save(&self, draft: &ProfileDraft) -> Result<UserRecord, Error> {
        let token = self
            .session
            .token()
            .ok_or_else(|| Error::session("Not signed in"))?;

        let url = format!("{}/users/profile", self.url);
        let response = Fetch::put(&self.client, &url)
            .bearer_auth(&token)
            .json(draft)?
            .execute::<SaveResponse>()
            .await?;

        self.session.store_user(response.user.clone());
        Ok(response.user)
    }
}
