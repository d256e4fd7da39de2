//! Session storage operations wrapping the database repository.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use posthub_core::error::AppError;
use posthub_database::repositories::session::SessionRepository;
use posthub_entity::session::Session;

/// Abstracts session persistence operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }

    /// Creates a new session record for a fresh login.
    pub async fn create(&self, account_id: Uuid) -> Result<Session, AppError> {
        self.repo.create(account_id).await
    }

    /// Finds a session by ID.
    pub async fn find_by_id(&self, session_id: Uuid) -> Result<Option<Session>, AppError> {
        self.repo.find_by_id(session_id).await
    }

    /// Updates the session's last-activity timestamp to now, extending the
    /// sliding inactivity window.
    pub async fn touch(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.update_last_activity(session_id, Utc::now()).await
    }

    /// Clears the validity flag, ending the session immediately.
    ///
    /// Not reachable from any route; staleness is the expiry mechanism in
    /// the served flows. This is the extension point for an explicit
    /// logout-invalidation path.
    pub async fn invalidate(&self, session_id: Uuid) -> Result<(), AppError> {
        self.repo.invalidate(session_id).await
    }
}
