//! Showcase projects: listing, multipart submission, and deletion

mod board;
mod types;

use reqwest::{multipart, Client};

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{check_status, Fetch};
use crate::session::SessionStore;

pub use board::ProjectBoard;
pub use types::{Attachment, Collaborator, ShowcaseDraft, ShowcaseProject, Video};

/// Client for showcase project endpoints
pub struct ProjectsClient {
    /// The base URL of the TalentBridge API
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// Session state providing the bearer token
    session: SessionStore,

    /// Client options, for attachment limits
    options: ClientOptions,
}

impl ProjectsClient {
    /// Create a new ProjectsClient
    pub(crate) fn new(url: &str, client: Client, session: SessionStore, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    fn token(&self) -> Result<String, Error> {
        self.session
            .token()
            .ok_or_else(|| Error::session("Not signed in"))
    }

    /// Fetch the signed-in user's showcase projects.
    pub async fn my_projects(&self) -> Result<Vec<ShowcaseProject>, Error> {
        let token = self.token()?;
        let url = format!("{}/student-projects/my-projects", self.url);

        Fetch::get(&self.client, &url)
            .bearer_auth(&token)
            .execute::<Vec<ShowcaseProject>>()
            .await
    }

    /// Submit a showcase project as one multipart request: scalar text
    /// parts, JSON-encoded array fields, an optional video (URL part or
    /// file part), and the general attachments.
    ///
    /// The draft is validated first; an invalid draft never reaches the
    /// network. Returns the server-created record.
    pub async fn submit(&self, draft: &ShowcaseDraft) -> Result<ShowcaseProject, Error> {
        draft.validate(&self.options)?;
        let token = self.token()?;

        let mut form = multipart::Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone())
            .text("category", draft.category.clone())
            .text("difficulty", draft.difficulty.clone())
            .text("duration", draft.duration.clone())
            .text("teamSize", draft.team_size.clone())
            .text("status", draft.status.clone())
            .text("visibility", draft.visibility.clone())
            .text("technologies", serde_json::to_string(&draft.technologies)?)
            .text("learningTags", serde_json::to_string(&draft.learning_tags)?)
            .text("collaborators", serde_json::to_string(&draft.collaborators)?);

        match &draft.video {
            Some(Video::Url(url)) => {
                form = form.text("videoUrl", url.clone());
            }
            Some(Video::File(file)) => {
                form = form.part("video", file_part(file)?);
            }
            None => {}
        }

        for attachment in &draft.attachments {
            form = form.part("attachments", file_part(attachment)?);
        }

        let url = format!("{}/student-projects", self.url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .multipart(form)
            .send()
            .await?;

        let response = check_status(response).await?;
        let project = response.json::<ShowcaseProject>().await?;
        Ok(project)
    }

    /// Delete a showcase project by id. Success or failure only; callers
    /// decide what to do with their local list.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let token = self.token()?;
        let url = format!("{}/student-projects/{}", self.url, id);

        Fetch::delete(&self.client, &url)
            .bearer_auth(&token)
            .execute_empty()
            .await
    }
}

fn file_part(attachment: &Attachment) -> Result<multipart::Part, Error> {
    let mut part =
        multipart::Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
    if let Some(content_type) = &attachment.content_type {
        part = part.mime_str(content_type)?;
    }
    Ok(part)
}
