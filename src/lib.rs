//! TalentBridge Profile Client
//!
//! Client-side profile management for TalentBridge, a platform connecting
//! students and companies: the editable multi-section profile (personal
//! info, education, skills, languages, achievements, projects) and the
//! separately submitted showcase projects with file and video upload, all
//! over the platform's REST backend.

pub mod config;
pub mod error;
pub mod fetch;
pub mod notice;
pub mod profile;
pub mod projects;
pub mod session;
pub mod task;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::profile::{ProfileClient, ProfileEditor};
use crate::projects::{ProjectBoard, ProjectsClient};
use crate::session::SessionStore;

/// The main entry point for the TalentBridge profile client
pub struct TalentBridge {
    /// The base URL of the TalentBridge API
    pub url: String,
    /// HTTP client shared by all requests
    pub http_client: Client,
    /// Session state: bearer token and cached user record
    pub session: SessionStore,
    /// Client options
    pub options: ClientOptions,
}

impl TalentBridge {
    /// Create a new client with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use talentbridge_profile::TalentBridge;
    ///
    /// let bridge = TalentBridge::new("https://api.talentbridge.example");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self {
            url: base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
            session: SessionStore::new(),
            options: ClientOptions::default(),
        }
    }

    /// Create a new client with custom options. The request timeout, when
    /// set, is applied to the shared HTTP client.
    ///
    /// # Example
    ///
    /// ```
    /// use talentbridge_profile::{config::ClientOptions, TalentBridge};
    /// use std::time::Duration;
    ///
    /// let options = ClientOptions::default().with_notice_ttl(Duration::from_secs(3));
    /// let bridge = TalentBridge::new_with_options("https://api.talentbridge.example", options)
    ///     .expect("client construction");
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: base_url.trim_end_matches('/').to_string(),
            http_client: builder.build()?,
            session: SessionStore::new(),
            options,
        })
    }

    /// The shared session store.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// A client for profile persistence.
    pub fn profile(&self) -> ProfileClient {
        ProfileClient::new(&self.url, self.http_client.clone(), self.session.clone())
    }

    /// A client for showcase project endpoints.
    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// A fresh editing-screen state machine for the profile form.
    pub fn profile_editor(&self) -> ProfileEditor {
        ProfileEditor::new(self.options.notice_ttl)
    }

    /// A fresh showcase project list state for the profile screen.
    pub fn project_board(&self) -> ProjectBoard {
        ProjectBoard::new(self.options.notice_ttl)
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::profile::{EntryKind, ProfileDraft, ProfileEditor, Proficiency, Skill};
    pub use crate::projects::{ProjectBoard, ShowcaseDraft, ShowcaseProject};
    pub use crate::session::{SessionStore, UserRecord};
    pub use crate::TalentBridge;
}
