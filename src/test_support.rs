//! In-memory backend and navigator used by the viewmodel tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use crate::models::{Blog, BlogPayload, LoginData, LoginRequest, LoginResponse, UserProfile};
use crate::router::{Navigator, Route};
use crate::services::{ApiError, BlogApi};

/// One recorded request
#[derive(Clone, Debug, PartialEq)]
pub enum ApiCall {
    Login { username: String, password: String },
    CurrentUser { token: String },
    ListBlogs { token: String },
    CreateBlog { token: String, fields: Vec<(String, String)>, image: Option<String> },
    UpdateBlog { token: String, id: String, fields: Vec<(String, String)>, image: Option<String> },
    DeleteBlog { token: String, id: String },
}

impl ApiCall {
    pub fn operation(&self) -> Op {
        match self {
            ApiCall::Login { .. } => Op::Login,
            ApiCall::CurrentUser { .. } => Op::CurrentUser,
            ApiCall::ListBlogs { .. } => Op::ListBlogs,
            ApiCall::CreateBlog { .. } => Op::Create,
            ApiCall::UpdateBlog { .. } => Op::Update,
            ApiCall::DeleteBlog { .. } => Op::Delete,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Login,
    CurrentUser,
    ListBlogs,
    Create,
    Update,
    Delete,
}

/// Fake blog backend holding its own list
#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub server_blogs: RefCell<Vec<Blog>>,
    pub user: RefCell<Option<UserProfile>>,
    pub login_response: RefCell<Option<LoginResponse>>,
    failing: RefCell<HashSet<Op>>,
    // Runs inside each request, i.e. while it is in flight
    during_request: RefCell<Option<Box<dyn Fn(&ApiCall)>>>,
    next_id: Cell<u32>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        let api = Self::new();
        *api.server_blogs.borrow_mut() = blogs;
        api
    }

    pub fn accept_login(&self, token: &str) {
        *self.login_response.borrow_mut() = Some(LoginResponse {
            success: true,
            data: Some(LoginData {
                access_token: Some(token.to_string()),
            }),
            message: Some("User logged in successfully".to_string()),
        });
    }

    pub fn reject_login(&self, message: &str) {
        *self.login_response.borrow_mut() = Some(LoginResponse {
            success: false,
            data: None,
            message: Some(message.to_string()),
        });
    }

    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn during_request<F>(&self, hook: F)
    where
        F: Fn(&ApiCall) + 'static,
    {
        *self.during_request.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn operations(&self) -> Vec<Op> {
        self.calls.borrow().iter().map(ApiCall::operation).collect()
    }

    fn record(&self, call: ApiCall) -> Result<(), ApiError> {
        let op = call.operation();
        if let Some(hook) = self.during_request.borrow().as_ref() {
            hook(&call);
        }
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&op) {
            return Err(ApiError::Http {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn fields(payload: &BlogPayload) -> Vec<(String, String)> {
        payload
            .text_fields()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Http {
            status: 404,
            body: format!("Blog {} not found", id),
        }
    }
}

#[async_trait(?Send)]
impl BlogApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(ApiCall::Login {
            username: request.username.clone(),
            password: request.password.clone(),
        })?;
        self.login_response
            .borrow()
            .clone()
            .ok_or_else(|| ApiError::Http {
                status: 401,
                body: "Invalid user credentials".to_string(),
            })
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.record(ApiCall::CurrentUser { token: token.to_string() })?;
        self.user.borrow().clone().ok_or_else(|| ApiError::Http {
            status: 401,
            body: "Unauthorized request".to_string(),
        })
    }

    async fn list_blogs(&self, token: &str) -> Result<Vec<Blog>, ApiError> {
        self.record(ApiCall::ListBlogs { token: token.to_string() })?;
        Ok(self.server_blogs.borrow().clone())
    }

    async fn create_blog(&self, token: &str, payload: &BlogPayload) -> Result<(), ApiError> {
        self.record(ApiCall::CreateBlog {
            token: token.to_string(),
            fields: Self::fields(payload),
            image: payload.image.as_ref().map(|i| i.name.clone()),
        })?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.server_blogs.borrow_mut().push(Blog {
            id: format!("new-{}", id),
            title: payload.title.clone(),
            description: payload.description.clone(),
            image: payload.image.as_ref().map(|i| format!("http://cdn.test/{}", i.name)),
        });
        Ok(())
    }

    async fn update_blog(&self, token: &str, id: &str, payload: &BlogPayload) -> Result<(), ApiError> {
        self.record(ApiCall::UpdateBlog {
            token: token.to_string(),
            id: id.to_string(),
            fields: Self::fields(payload),
            image: payload.image.as_ref().map(|i| i.name.clone()),
        })?;
        let mut blogs = self.server_blogs.borrow_mut();
        let blog = blogs
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        blog.title = payload.title.clone();
        blog.description = payload.description.clone();
        if let Some(image) = &payload.image {
            blog.image = Some(format!("http://cdn.test/{}", image.name));
        }
        Ok(())
    }

    async fn delete_blog(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.record(ApiCall::DeleteBlog {
            token: token.to_string(),
            id: id.to_string(),
        })?;
        let mut blogs = self.server_blogs.borrow_mut();
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        if blogs.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Push(Route),
    Redirect(Route),
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub history: RefCell<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn history(&self) -> Vec<Navigation> {
        self.history.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.history.borrow_mut().push(Navigation::Push(route));
    }

    fn hard_redirect(&self, route: Route) {
        self.history.borrow_mut().push(Navigation::Redirect(route));
    }
}

pub fn blog(id: &str, title: &str, description: &str) -> Blog {
    Blog {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: None,
    }
}
