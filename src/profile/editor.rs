//! Edit-mode state for the profile screen

use std::time::Duration;

use crate::notice::NoticeHost;
use crate::profile::{ProfileClient, ProfileDraft};
use crate::session::UserRecord;

/// Fallback notice when a profile save fails without a server message.
const SAVE_FALLBACK: &str = "Failed to update profile. Please try again.";

/// State machine of the profile editing screen: a draft, an edit-mode
/// flag, a busy flag while one save is in flight, and a notice host for
/// reporting outcomes.
pub struct ProfileEditor {
    draft: ProfileDraft,
    editing: bool,
    saving: bool,
    notices: NoticeHost,
}

impl ProfileEditor {
    /// Create an editor whose notices clear after `notice_ttl`.
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            draft: ProfileDraft::default(),
            editing: false,
            saving: false,
            notices: NoticeHost::new(notice_ttl),
        }
    }

    /// Enter edit mode with a fresh draft built from `user`. Any previous
    /// unsaved draft is discarded.
    pub fn begin_edit(&mut self, user: &UserRecord) {
        self.draft = ProfileDraft::from_user(user);
        self.editing = true;
    }

    /// Leave edit mode, reverting the draft to `user`.
    pub fn cancel(&mut self, user: &UserRecord) {
        self.draft = ProfileDraft::from_user(user);
        self.editing = false;
    }

    /// Whether the screen is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Whether a save is currently in flight.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The draft being edited.
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Mutable access to the draft for field and collection edits.
    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    /// The notice host for this screen.
    pub fn notices(&self) -> &NoticeHost {
        &self.notices
    }

    /// Attempt one save of the current draft.
    ///
    /// Re-entrant calls while a save is in flight are ignored. On success
    /// the editor leaves edit mode and rebuilds the draft from the server's
    /// record; on failure it shows a notice and stays in edit mode with the
    /// draft unchanged, leaving retry to the user.
    pub async fn save(&mut self, client: &ProfileClient) {
        if self.saving || !self.editing {
            return;
        }
        self.saving = true;

        match client.save(&self.draft).await {
            Ok(user) => {
                self.draft = ProfileDraft::from_user(&user);
                self.editing = false;
            }
            Err(err) => {
                self.notices.show(err.notice(SAVE_FALLBACK));
            }
        }

        self.saving = false;
    }
}
