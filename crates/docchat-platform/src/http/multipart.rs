//! Builds the `multipart/form-data` body for an upload.
//! The browser picks the boundary, so callers must not set Content-Type.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};
use docchat_types::{ClientError, Result, document::Document};

/// One-part form: `field` → the document bytes, its name and media type
pub fn document_form(field: &str, document: &Document) -> Result<FormData> {
    let bytes = Uint8Array::from(document.bytes());
    let parts = Array::new();
    parts.push(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(document.media_type());

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Blob", e))?;

    let form = FormData::new().map_err(|e| js_error("FormData", e))?;
    form.append_with_blob_and_filename(field, &blob, document.name())
        .map_err(|e| js_error("FormData.append", e))?;

    Ok(form)
}

fn js_error(what: &str, e: JsValue) -> ClientError {
    ClientError::JsInterop(format!("{} failed: {:?}", what, e))
}
