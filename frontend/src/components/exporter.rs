use chrono::Utc;
use studyguide_shared::{
    export::{ExportDocument, EXPORT_MIME},
    ContentItem,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

use crate::{components::toast::Toaster, dom::js_error_message, i18n::current::exporter as t};

/// Download every card as a dated JSON file. A page without cards downloads
/// an empty list.
pub fn export_to_json(document: &Document, items: &[ContentItem], toaster: &Toaster) {
    match download(document, items) {
        Ok(filename) => {
            tracing::info!(filename = %filename, count = items.len(), "examples exported");
            toaster.success(t::DONE);
        },
        Err(reason) => {
            tracing::error!("export failed: {reason}");
            toaster.error(t::FAILED);
        },
    }
}

fn download(document: &Document, items: &[ContentItem]) -> Result<String, String> {
    let export = ExportDocument::build(items, Utc::now().date_naive()).map_err(|err| err.to_string())?;

    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME);
    let parts = js_sys::Array::of1(&JsValue::from_str(&export.json));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| js_error_message(&err))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|err| js_error_message(&err))?;

    let link = document
        .create_element("a")
        .map_err(|err| js_error_message(&err))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "anchor element has unexpected type".to_string())?;
    link.set_href(&url);
    link.set_download(&export.filename);
    link.click();

    let _ = Url::revoke_object_url(&url);
    Ok(export.filename)
}
