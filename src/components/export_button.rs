//! Export Button Component
//!
//! Fetches the full data export and hands it to the browser as a download.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;

const EXPORT_FILENAME: &str = "jaaybaan-export.json";

fn trigger_download(contents: &str) -> Result<(), String> {
    let err = |e: JsValue| format!("{:?}", e);

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = web_sys::BlobPropertyBag::new();
    props.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props).map_err(err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(err)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILENAME);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(err)?;
    Ok(())
}

#[component]
pub fn ExportButton() -> impl IntoView {
    let (exporting, set_exporting) = signal(false);

    let export = move |_| {
        if exporting.get() {
            return;
        }
        set_exporting.set(true);
        spawn_local(async move {
            match api::export_data().await {
                Ok(contents) => {
                    if let Err(err) = trigger_download(&contents) {
                        web_sys::console::error_1(&format!("[EXPORT] download failed: {}", err).into());
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[EXPORT] fetch failed: {}", err).into());
                }
            }
            set_exporting.set(false);
        });
    };

    view! {
        <button class="export-btn" disabled=move || exporting.get() on:click=export>
            {move || if exporting.get() { "در حال خروجی گرفتن..." } else { "خروجی داده‌ها" }}
        </button>
    }
}
