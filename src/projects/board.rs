//! In-memory showcase project list for the profile screen

use std::time::Duration;

use crate::notice::NoticeHost;
use crate::projects::{ProjectsClient, ShowcaseDraft, ShowcaseProject};

const LOAD_FALLBACK: &str = "Failed to load projects.";
const SUBMIT_FALLBACK: &str = "Failed to submit project. Please try again.";
const DELETE_FALLBACK: &str = "Failed to delete project. Please try again.";

/// The project list of the profile screen plus its form and notice state.
///
/// Loading is typically kicked off once when the screen mounts, for
/// student accounts only; wrap the call in a [`Scoped`] task so a teardown
/// before the response arrives discards the result.
///
/// [`Scoped`]: crate::task::Scoped
pub struct ProjectBoard {
    projects: Vec<ShowcaseProject>,
    form_open: bool,
    submitting: bool,
    notices: NoticeHost,
}

impl ProjectBoard {
    /// Create an empty board whose notices clear after `notice_ttl`.
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            projects: Vec::new(),
            form_open: false,
            submitting: false,
            notices: NoticeHost::new(notice_ttl),
        }
    }

    /// The projects currently held, newest first.
    pub fn projects(&self) -> &[ShowcaseProject] {
        &self.projects
    }

    /// Open the submission form.
    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    /// Close the submission form.
    pub fn close_form(&mut self) {
        self.form_open = false;
    }

    /// Whether the submission form is open.
    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The notice host for this screen.
    pub fn notices(&self) -> &NoticeHost {
        &self.notices
    }

    /// Replace the list with the backend's current projects. A failure
    /// shows a notice and keeps whatever was already loaded.
    pub async fn load(&mut self, client: &ProjectsClient) {
        match client.my_projects().await {
            Ok(projects) => self.projects = projects,
            Err(err) => self.notices.show(err.notice(LOAD_FALLBACK)),
        }
    }

    /// Submit `draft` once. On success the created record is prepended and
    /// the form closes; on failure a notice is shown and the form stays
    /// open, with the caller's draft untouched for another attempt.
    /// Re-entrant calls while a submission is in flight are ignored.
    pub async fn submit(&mut self, client: &ProjectsClient, draft: &ShowcaseDraft) {
        if self.submitting {
            return;
        }
        self.submitting = true;

        match client.submit(draft).await {
            Ok(project) => {
                self.projects.insert(0, project);
                self.form_open = false;
            }
            Err(err) => self.notices.show(err.notice(SUBMIT_FALLBACK)),
        }

        self.submitting = false;
    }

    /// Delete a project after the user confirmed. The local entry is
    /// removed only once the backend reports success; a failure shows a
    /// notice and leaves the list unchanged.
    pub async fn delete_confirmed(&mut self, client: &ProjectsClient, id: &str) {
        match client.delete(id).await {
            Ok(()) => self.projects.retain(|project| project.id != id),
            Err(err) => self.notices.show(err.notice(DELETE_FALLBACK)),
        }
    }
}
