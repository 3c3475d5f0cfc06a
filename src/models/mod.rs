pub mod auth;
pub mod user;
pub mod blog;

pub use auth::{LoginData, LoginRequest, LoginResponse};
pub use user::{UserProfile, UserResponse};
pub use blog::{Blog, BlogListResponse, BlogPayload, ImageUpload};
