//! Types for showcase projects

use serde::{Deserialize, Serialize};

use crate::config::ClientOptions;
use crate::error::Error;

/// A collaborator on a showcase project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Collaborator name
    pub name: String,

    /// Their role on the project
    pub role: String,

    /// Contact handle or address
    pub contact: String,
}

/// A file attached to a showcase project submission
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// File name as shown to the backend
    pub file_name: String,

    /// MIME type, when known
    pub content_type: Option<String>,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Size of the attachment in bytes.
    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the attachment is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The video accompanying a showcase project, by link or by upload
#[derive(Debug, Clone, PartialEq)]
pub enum Video {
    /// Hosted elsewhere, referenced by URL
    Url(String),

    /// Uploaded alongside the submission
    File(Attachment),
}

/// A showcase project as the backend returns it.
///
/// Owned by the backend once created; the id and the view/like/comment
/// counters are server-assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowcaseProject {
    /// Server-assigned identifier
    pub id: String,

    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Technologies used
    pub technologies: Vec<String>,

    /// What was learned building it
    pub learning_tags: Vec<String>,

    /// Project category
    pub category: String,

    /// Difficulty level
    pub difficulty: String,

    /// How long it took
    pub duration: String,

    /// Team size
    pub team_size: String,

    /// Collaborators
    pub collaborators: Vec<Collaborator>,

    /// Completion status
    pub status: String,

    /// Visibility setting
    pub visibility: String,

    /// Video URL, when one was provided or uploaded
    pub video_url: Option<String>,

    /// View counter
    pub views: u64,

    /// Like counter
    pub likes: u64,

    /// Comment counter
    pub comments: u64,
}

/// The client-side working copy of a showcase project submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowcaseDraft {
    /// Project title
    pub title: String,

    /// Project description
    pub description: String,

    /// Project category
    pub category: String,

    /// Difficulty level
    pub difficulty: String,

    /// How long it took
    pub duration: String,

    /// Team size
    pub team_size: String,

    /// Completion status
    pub status: String,

    /// Visibility setting
    pub visibility: String,

    /// Technologies used, without duplicates
    pub technologies: Vec<String>,

    /// Learning tags, without duplicates
    pub learning_tags: Vec<String>,

    /// Collaborators
    pub collaborators: Vec<Collaborator>,

    /// Optional video, by URL or file
    pub video: Option<Video>,

    /// General attachments
    pub attachments: Vec<Attachment>,
}

impl ShowcaseDraft {
    /// Add a technology. Trimmed; empty or already-present values are a
    /// no-op.
    pub fn add_technology(&mut self, raw: &str) {
        push_unique(&mut self.technologies, raw);
    }

    /// Remove a technology by exact name.
    pub fn remove_technology(&mut self, name: &str) {
        self.technologies.retain(|t| t != name);
    }

    /// Add a learning tag. Trimmed; empty or already-present values are a
    /// no-op.
    pub fn add_learning_tag(&mut self, raw: &str) {
        push_unique(&mut self.learning_tags, raw);
    }

    /// Remove a learning tag by exact name.
    pub fn remove_learning_tag(&mut self, name: &str) {
        self.learning_tags.retain(|t| t != name);
    }

    /// Check the draft against the input-layer rules, so an invalid draft
    /// never reaches the network.
    pub fn validate(&self, options: &ClientOptions) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("Project title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(Error::validation("Project description is required"));
        }
        if self.attachments.len() > options.max_attachments {
            return Err(Error::validation(format!(
                "At most {} attachments are allowed",
                options.max_attachments
            )));
        }
        for attachment in &self.attachments {
            if attachment.len() > options.max_attachment_bytes {
                return Err(Error::validation(format!(
                    "Attachment {} exceeds the size limit",
                    attachment.file_name
                )));
            }
        }
        Ok(())
    }
}

fn push_unique(list: &mut Vec<String>, raw: &str) {
    let value = raw.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return;
    }
    list.push(value.to_string());
}
