use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use crate::models::ImageUpload;

/// First file selected in the `<input type="file">` that fired `event`
pub fn selected_file(event: &Event) -> Option<File> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read a picked file into memory for a multipart upload
pub async fn read_image_file(file: &File) -> Result<ImageUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(ImageUpload {
        name: file.name(),
        mime_type,
        bytes,
    })
}
