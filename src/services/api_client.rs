// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic: builds requests, checks status, decodes bodies.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::config::CONFIG;
use crate::models::{
    Blog, BlogListResponse, BlogPayload, LoginRequest, LoginResponse, UserProfile, UserResponse,
};
use crate::services::{ApiError, BlogApi};

/// REST client for the blog backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url())
    }

    /// Client rooted at `base_url`, which already includes the API prefix
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn blog_endpoint(&self, id: &str) -> String {
        self.endpoint(&format!("/blogs/{}", id))
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer(token))
    }

    /// Map non-2xx responses to [`ApiError::Http`], keeping the body for logs
    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = match response.text().await {
            Ok(text) if !text.is_empty() => text,
            _ => response.status_text(),
        };
        log::warn!("⚠️ [API] {} {} -> HTTP {}", response.url(), status, body);
        Err(ApiError::Http { status, body })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn js_error(context: &str, err: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, err))
}

/// Build the multipart body. The browser sets the boundary header itself.
fn build_form_data(payload: &BlogPayload) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| js_error("FormData", e))?;
    for (name, value) in payload.text_fields() {
        form.append_with_str(name, value)
            .map_err(|e| js_error("FormData append", e))?;
    }

    if let Some(image) = &payload.image {
        let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&image.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| js_error("Blob", e))?;
        form.append_with_blob_and_filename(BlogPayload::IMAGE_FIELD, &blob, &image.name)
            .map_err(|e| js_error("FormData append image", e))?;
    }

    Ok(form)
}

#[async_trait(?Send)]
impl BlogApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/users/login");
        log::info!("🔐 [API] Login for user: {}", request.username);

        let response = Request::post(&url).json(request)?.send().await?;
        let response = Self::ensure_ok(response).await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, ApiError> {
        let url = self.endpoint("/users/me");
        let response = Self::authorized(Request::get(&url), token).send().await?;
        let response = Self::ensure_ok(response).await?;
        let body = response.json::<UserResponse>().await?;
        log::info!("👤 [API] Profile loaded: {}", body.data.id);
        Ok(body.data)
    }

    async fn list_blogs(&self, token: &str) -> Result<Vec<Blog>, ApiError> {
        let url = self.endpoint("/blogs");
        let response = Self::authorized(Request::get(&url), token).send().await?;
        let response = Self::ensure_ok(response).await?;
        let body = response.json::<BlogListResponse>().await?;
        log::info!("📋 [API] {} blogs received", body.blogs.len());
        Ok(body.blogs)
    }

    async fn create_blog(&self, token: &str, payload: &BlogPayload) -> Result<(), ApiError> {
        let url = self.endpoint("/blogs");
        let form = build_form_data(payload)?;
        log::info!("📝 [API] Creating blog \"{}\"", payload.title);

        let response = Self::authorized(Request::post(&url), token)
            .body(form)?
            .send()
            .await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    async fn update_blog(&self, token: &str, id: &str, payload: &BlogPayload) -> Result<(), ApiError> {
        let url = self.blog_endpoint(id);
        let form = build_form_data(payload)?;
        log::info!("✏️ [API] Updating blog {}", id);

        let response = Self::authorized(Request::put(&url), token)
            .body(form)?
            .send()
            .await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    async fn delete_blog(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let url = self.blog_endpoint(id);
        log::info!("🗑️ [API] Deleting blog {}", id);

        let response = Self::authorized(Request::delete(&url), token).send().await?;
        Self::ensure_ok(response).await?;
        Ok(())
    }
}
