// ============================================================================
// SERVICES - HTTP communication and token persistence only
// ============================================================================

pub mod error;
pub mod api_client;
pub mod token_store;

pub use error::ApiError;
pub use api_client::ApiClient;
pub use token_store::{CookieTokenStore, MemoryTokenStore, TokenStore};

use async_trait::async_trait;
use crate::models::{Blog, BlogPayload, LoginRequest, LoginResponse, UserProfile};

/// REST surface of the blog backend.
///
/// Implemented over `gloo-net` by [`ApiClient`]; viewmodels are generic over
/// it so the flows run without a browser. Futures are `!Send`, matching the
/// single-threaded browser event loop.
#[async_trait(?Send)]
pub trait BlogApi {
    /// `POST /users/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `GET /users/me`
    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// `GET /blogs`
    async fn list_blogs(&self, token: &str) -> Result<Vec<Blog>, ApiError>;

    /// `POST /blogs`
    async fn create_blog(&self, token: &str, payload: &BlogPayload) -> Result<(), ApiError>;

    /// `PUT /blogs/:id`
    async fn update_blog(&self, token: &str, id: &str, payload: &BlogPayload) -> Result<(), ApiError>;

    /// `DELETE /blogs/:id`
    async fn delete_blog(&self, token: &str, id: &str) -> Result<(), ApiError>;
}
