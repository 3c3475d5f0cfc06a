// ============================================================================
// DASHBOARD STATE - Blog list, form draft, delete confirmation, status
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{Blog, BlogPayload, ImageUpload, UserProfile};
use crate::state::ChangeNotifier;
use crate::utils::{MSG_DELETE_FAILED, MSG_SAVE_FAILED};

/// Create/edit form contents. `editing == None` means create mode.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub image: Option<ImageUpload>,
    pub editing: Option<Blog>,
}

impl FormDraft {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|blog| blog.id.as_str())
    }

    /// Names of required fields left empty. Whitespace counts as a value,
    /// the same as the form's `required` check.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(BlogPayload::TITLE_FIELD);
        }
        if self.description.is_empty() {
            missing.push(BlogPayload::DESCRIPTION_FIELD);
        }
        missing
    }

    pub fn to_payload(&self) -> BlogPayload {
        BlogPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Blog"
        } else {
            "Create Blog"
        }
    }
}

/// Pending delete, shown as a yes/no prompt
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DeleteConfirmation {
    pub pending_id: Option<String>,
    pub visible: bool,
}

/// Which operation failed; each has one generic user-facing text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Save,
    Delete,
}

impl FailureKind {
    pub fn text(&self) -> &'static str {
        match self {
            FailureKind::Save => MSG_SAVE_FAILED,
            FailureKind::Delete => MSG_DELETE_FAILED,
        }
    }
}

/// Result line under the form
#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Success(String),
    Failure(FailureKind),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Success(text) => text,
            StatusMessage::Failure(kind) => kind.text(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StatusMessage::Failure(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardMode {
    Idle,
    Editing,
    ConfirmingDelete,
    Submitting,
}

impl DashboardMode {
    /// Value of the dashboard's `data-mode` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardMode::Idle => "idle",
            DashboardMode::Editing => "editing",
            DashboardMode::ConfirmingDelete => "confirming-delete",
            DashboardMode::Submitting => "submitting",
        }
    }
}

#[derive(Clone)]
pub struct DashboardState {
    pub user: Rc<RefCell<Option<UserProfile>>>,
    pub blogs: Rc<RefCell<Vec<Blog>>>,
    pub draft: Rc<RefCell<FormDraft>>,
    pub confirmation: Rc<RefCell<DeleteConfirmation>>,
    pub message: Rc<RefCell<Option<StatusMessage>>>,
    pub submitting: Rc<RefCell<bool>>,
    // Lifetime of the mounted dashboard; bumped on unmount/logout
    epoch: Rc<Cell<u64>>,
    // Last list refresh handed out
    refresh_issued: Rc<Cell<u64>>,
    notifier: ChangeNotifier,
}

impl DashboardState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            blogs: Rc::new(RefCell::new(Vec::new())),
            draft: Rc::new(RefCell::new(FormDraft::default())),
            confirmation: Rc::new(RefCell::new(DeleteConfirmation::default())),
            message: Rc::new(RefCell::new(None)),
            submitting: Rc::new(RefCell::new(false)),
            epoch: Rc::new(Cell::new(0)),
            refresh_issued: Rc::new(Cell::new(0)),
            notifier,
        }
    }

    // ----- lifetime -----

    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get() == epoch
    }

    /// Unmount: results of requests issued before this point are discarded
    pub fn end_lifetime(&self) {
        self.epoch.set(self.epoch.get() + 1);
        *self.user.borrow_mut() = None;
        self.blogs.borrow_mut().clear();
        *self.draft.borrow_mut() = FormDraft::default();
        *self.confirmation.borrow_mut() = DeleteConfirmation::default();
        *self.message.borrow_mut() = None;
        *self.submitting.borrow_mut() = false;
    }

    // ----- server data -----

    pub fn user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, epoch: u64, user: UserProfile) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        *self.user.borrow_mut() = Some(user);
        self.notifier.notify();
        true
    }

    pub fn blogs(&self) -> Vec<Blog> {
        self.blogs.borrow().clone()
    }

    /// Ticket for a list refresh about to be issued
    pub fn begin_refresh(&self) -> u64 {
        let ticket = self.refresh_issued.get() + 1;
        self.refresh_issued.set(ticket);
        ticket
    }

    /// Replace the whole list, unless the dashboard was unmounted or a newer
    /// refresh was issued since `ticket`
    pub fn apply_refresh(&self, epoch: u64, ticket: u64, blogs: Vec<Blog>) -> bool {
        if !self.is_current(epoch) || self.refresh_issued.get() != ticket {
            return false;
        }
        *self.blogs.borrow_mut() = blogs;
        self.notifier.notify();
        true
    }

    // ----- form draft -----

    pub fn draft(&self) -> FormDraft {
        self.draft.borrow().clone()
    }

    // Text setters do not notify: the input already shows the value.

    pub fn set_title(&self, title: String) {
        self.draft.borrow_mut().title = title;
    }

    pub fn set_description(&self, description: String) {
        self.draft.borrow_mut().description = description;
    }

    pub fn set_image(&self, image: Option<ImageUpload>) {
        self.draft.borrow_mut().image = image;
        self.notifier.notify();
    }

    /// Edit mode for `blog`; any picked image is dropped
    pub fn load_for_edit(&self, blog: &Blog) {
        *self.draft.borrow_mut() = FormDraft {
            title: blog.title.clone(),
            description: blog.description.clone(),
            image: None,
            editing: Some(blog.clone()),
        };
        self.notifier.notify();
    }

    pub fn clear_draft(&self) {
        *self.draft.borrow_mut() = FormDraft::default();
        self.notifier.notify();
    }

    // ----- delete confirmation -----

    pub fn confirmation(&self) -> DeleteConfirmation {
        self.confirmation.borrow().clone()
    }

    pub fn request_delete(&self, id: &str) {
        *self.confirmation.borrow_mut() = DeleteConfirmation {
            pending_id: Some(id.to_string()),
            visible: true,
        };
        self.notifier.notify();
    }

    /// Close the prompt and hand back the id it was holding
    pub fn take_pending_delete(&self) -> Option<String> {
        let pending = std::mem::take(&mut *self.confirmation.borrow_mut()).pending_id;
        self.notifier.notify();
        pending
    }

    pub fn clear_confirmation(&self) {
        *self.confirmation.borrow_mut() = DeleteConfirmation::default();
        self.notifier.notify();
    }

    // ----- status -----

    pub fn message(&self) -> Option<StatusMessage> {
        self.message.borrow().clone()
    }

    pub fn set_message(&self, message: Option<StatusMessage>) {
        *self.message.borrow_mut() = message;
        self.notifier.notify();
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn set_submitting(&self, submitting: bool) {
        *self.submitting.borrow_mut() = submitting;
        self.notifier.notify();
    }

    pub fn mode(&self) -> DashboardMode {
        if self.is_submitting() {
            DashboardMode::Submitting
        } else if self.confirmation.borrow().visible {
            DashboardMode::ConfirmingDelete
        } else if self.draft.borrow().is_editing() {
            DashboardMode::Editing
        } else {
            DashboardMode::Idle
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ChangeNotifier::new())
    }
}
