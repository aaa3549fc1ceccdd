//! Small browser helpers

use agri_core::Language;
use wasm_bindgen::{JsCast, JsValue};

/// Body class that switches to a Bengali-capable font stack
const BENGALI_FONT_CLASS: &str = "font-bengali";

pub fn log_error(context: &str, err: &impl std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
}

/// `navigator.onLine`, assuming online when unavailable
pub fn is_online() -> bool {
    web_sys::window().is_none_or(|w| w.navigator().on_line())
}

/// Point `<html lang>` and the body font class at `lang`
pub fn apply_language(lang: Language) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", lang.code());
    }
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = match lang {
            Language::Bn => classes.add_1(BENGALI_FONT_CLASS),
            Language::En => classes.remove_1(BENGALI_FONT_CLASS),
        };
    }
}

/// Offer `content` to the user as a file download
pub fn download(filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(
        &js_sys::Array::of1(&JsValue::from_str(content)),
        &options,
    )?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}
