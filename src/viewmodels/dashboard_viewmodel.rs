// ============================================================================
// DASHBOARD VIEWMODEL - Blog CRUD flow
// ============================================================================
// Every mutation is followed by a full-list refresh; a failed refresh reports
// the mutation as failed. Results that arrive after the dashboard was
// unmounted are dropped (see DashboardState epoch).
// ============================================================================

use std::rc::Rc;

use thiserror::Error;

use crate::models::{Blog, BlogPayload};
use crate::router::{Navigator, Route};
use crate::services::{ApiError, BlogApi};
use crate::state::{AuthContext, DashboardState, FailureKind, FormDraft, StatusMessage};
use crate::utils::{MSG_BLOG_CREATED, MSG_BLOG_UPDATED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
}

impl SubmitOutcome {
    fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created => MSG_BLOG_CREATED,
            SubmitOutcome::Updated => MSG_BLOG_UPDATED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("A save is already in progress")]
    InFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Confirm pressed with nothing pending; no request issued
    NothingPending,
}

pub struct DashboardViewModel<A: BlogApi> {
    api: Rc<A>,
    auth: AuthContext,
    navigator: Rc<dyn Navigator>,
    state: DashboardState,
}

impl<A: BlogApi> DashboardViewModel<A> {
    pub fn new(
        api: Rc<A>,
        auth: AuthContext,
        navigator: Rc<dyn Navigator>,
        state: DashboardState,
    ) -> Self {
        Self {
            api,
            auth,
            navigator,
            state,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Mount: profile and blog list, concurrently and independently
    pub async fn load(&self) {
        let epoch = self.state.epoch();
        log::info!("🚀 [DASHBOARD] Loading profile and blogs");
        let ((), refreshed) = futures::join!(self.load_profile(epoch), self.refresh_blogs(epoch));
        if let Err(e) = refreshed {
            log::error!("❌ [DASHBOARD] Error fetching blogs: {}", e);
        }
    }

    async fn load_profile(&self, epoch: u64) {
        let result = match self.auth.require_token() {
            Ok(token) => self.api.current_user(&token).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(user) => {
                if !self.state.set_user(epoch, user) {
                    log::debug!("[DASHBOARD] Stale profile response dropped");
                }
            }
            Err(e) => log::error!("❌ [DASHBOARD] Error fetching user data: {}", e),
        }
    }

    /// Replace the local list with the server's. A response superseded by a
    /// newer refresh is dropped and still counts as success.
    async fn refresh_blogs(&self, epoch: u64) -> Result<(), ApiError> {
        let ticket = self.state.begin_refresh();
        let token = self.auth.require_token()?;
        let blogs = self.api.list_blogs(&token).await?;
        let count = blogs.len();
        if self.state.apply_refresh(epoch, ticket, blogs) {
            log::info!("📋 [DASHBOARD] Blog list refreshed ({} entries)", count);
        } else {
            log::debug!("[DASHBOARD] Stale blog list dropped (ticket {})", ticket);
        }
        Ok(())
    }

    fn report_failure(&self, epoch: u64, kind: FailureKind) {
        if self.state.is_current(epoch) {
            self.state.set_message(Some(StatusMessage::Failure(kind)));
        }
    }

    /// Create, or update the entry being edited, then refresh the list
    pub async fn submit(&self) -> Result<SubmitOutcome, SubmitError> {
        let draft = self.state.draft();
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }
        if self.state.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        let epoch = self.state.epoch();
        self.state.set_submitting(true);
        let result = self.save(&draft, &draft.to_payload()).await;

        if !self.state.is_current(epoch) {
            log::debug!("[DASHBOARD] Save finished after unmount, result dropped");
            return result.map_err(SubmitError::Api);
        }
        self.state.set_submitting(false);

        match result {
            Ok(outcome) => {
                self.state.clear_draft();
                self.state
                    .set_message(Some(StatusMessage::Success(outcome.message().to_string())));
                if let Err(e) = self.refresh_blogs(epoch).await {
                    log::error!("❌ [DASHBOARD] Blog saved but list refresh failed: {}", e);
                    self.report_failure(epoch, FailureKind::Save);
                }
                Ok(outcome)
            }
            Err(e) => {
                // Draft kept so the user can retry
                log::error!("❌ [DASHBOARD] Error saving blog: {}", e);
                self.report_failure(epoch, FailureKind::Save);
                Err(SubmitError::Api(e))
            }
        }
    }

    async fn save(&self, draft: &FormDraft, payload: &BlogPayload) -> Result<SubmitOutcome, ApiError> {
        let token = self.auth.require_token()?;
        match draft.editing_id() {
            Some(id) => {
                self.api.update_blog(&token, id, payload).await?;
                Ok(SubmitOutcome::Updated)
            }
            None => {
                self.api.create_blog(&token, payload).await?;
                Ok(SubmitOutcome::Created)
            }
        }
    }

    /// Row "Edit": fill the form, no request
    pub fn begin_edit(&self, blog: &Blog) {
        log::info!("✏️ [DASHBOARD] Editing blog {}", blog.id);
        self.state.load_for_edit(blog);
    }

    pub fn cancel_edit(&self) {
        self.state.clear_draft();
    }

    /// Row "Delete": ask first, no request
    pub fn request_delete(&self, id: &str) {
        self.state.request_delete(id);
    }

    pub fn cancel_delete(&self) {
        self.state.clear_confirmation();
    }

    /// "Yes" on the prompt. The prompt closes before the request goes out,
    /// so a second "Yes" finds nothing pending; the list is refreshed whether
    /// or not the delete succeeded.
    pub async fn confirm_delete(&self) -> Result<DeleteOutcome, ApiError> {
        let Some(id) = self.state.take_pending_delete() else {
            return Ok(DeleteOutcome::NothingPending);
        };

        let epoch = self.state.epoch();
        log::info!("🗑️ [DASHBOARD] Deleting blog with ID: {}", id);
        let result = match self.auth.require_token() {
            Ok(token) => self.api.delete_blog(&token, &id).await,
            Err(e) => Err(e),
        };

        if !self.state.is_current(epoch) {
            log::debug!("[DASHBOARD] Delete finished after unmount, result dropped");
            return result.map(|()| DeleteOutcome::Deleted);
        }

        if let Err(e) = &result {
            log::error!("❌ [DASHBOARD] Error deleting blog: {}", e);
            self.report_failure(epoch, FailureKind::Delete);
        }
        if let Err(e) = self.refresh_blogs(epoch).await {
            log::error!("❌ [DASHBOARD] List refresh after delete failed: {}", e);
            self.report_failure(epoch, FailureKind::Delete);
        }

        result.map(|()| DeleteOutcome::Deleted)
    }

    /// Drop the token and reload the login page
    pub fn logout(&self) {
        log::info!("👋 [DASHBOARD] Logout");
        self.auth.clear();
        self.state.end_lifetime();
        self.navigator.hard_redirect(Route::Login);
    }
}
