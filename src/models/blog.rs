use serde::{Deserialize, Serialize};

/// Blog entry as listed by `GET /blogs`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL of the stored image, if any
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct BlogListResponse {
    #[serde(default)]
    pub blogs: Vec<Blog>,
}

/// Image file picked in the form, read into memory before upload
#[derive(Clone, PartialEq, Debug)]
pub struct ImageUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Multipart body for `POST /blogs` and `PUT /blogs/:id`
#[derive(Clone, PartialEq, Debug)]
pub struct BlogPayload {
    pub title: String,
    pub description: String,
    pub image: Option<ImageUpload>,
}

impl BlogPayload {
    pub const TITLE_FIELD: &'static str = "title";
    pub const DESCRIPTION_FIELD: &'static str = "description";
    pub const IMAGE_FIELD: &'static str = "image";

    /// Text parts of the multipart body, in submission order
    pub fn text_fields(&self) -> [(&'static str, &str); 2] {
        [
            (Self::TITLE_FIELD, self.title.as_str()),
            (Self::DESCRIPTION_FIELD, self.description.as_str()),
        ]
    }
}
