//! Configuration options for the TalentBridge profile client

use std::time::Duration;

/// Default time a transient notice stays visible.
const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Configuration options for the TalentBridge profile client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout applied to the shared HTTP client
    pub request_timeout: Option<Duration>,

    /// How long a transient notice stays visible before auto-clearing
    pub notice_ttl: Duration,

    /// Maximum number of general attachments on a showcase project
    pub max_attachments: usize,

    /// Maximum size in bytes of a single attachment
    pub max_attachment_bytes: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            notice_ttl: DEFAULT_NOTICE_TTL,
            max_attachments: 10,
            max_attachment_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set how long a transient notice stays visible
    pub fn with_notice_ttl(mut self, value: Duration) -> Self {
        self.notice_ttl = value;
        self
    }

    /// Set the maximum number of showcase project attachments
    pub fn with_max_attachments(mut self, value: usize) -> Self {
        self.max_attachments = value;
        self
    }

    /// Set the maximum size in bytes of a single attachment
    pub fn with_max_attachment_bytes(mut self, value: u64) -> Self {
        self.max_attachment_bytes = value;
        self
    }
}
