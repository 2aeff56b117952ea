//! DOM-side utilities for the builder: toast notifications and the local
//! crash-recovery snapshot.

use common::model::block::Block;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Browser-local storage key for the crash-recovery snapshot of an unsaved
/// new template's block list.
pub const SNAPSHOT_KEY: &str = "emailBuilderComponents";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Writes the current block list as the crash-recovery snapshot. Callers
/// only do this while the document is new (never persisted).
pub fn write_snapshot(blocks: &[Block]) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(blocks)) {
        let _ = storage.set_item(SNAPSHOT_KEY, &json);
    }
}

/// Reads the snapshot back, tolerating absence and malformed content.
pub fn read_snapshot() -> Option<Vec<Block>> {
    let storage = local_storage()?;
    let json = storage.get_item(SNAPSHOT_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_snapshot() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SNAPSHOT_KEY);
    }
}

/// Displays a temporary notification at the bottom of the screen. The toast
/// removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
