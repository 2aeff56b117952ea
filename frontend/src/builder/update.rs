//! Update function for the builder component.
//!
//! Elm-style architecture, one central `update`: it receives the current
//! `BuilderComponent` state, the `Context`, and a `Msg`, mutates the state,
//! and returns whether the view should re-render.
//!
//! Key behaviors
//! - Every document mutation goes through `TemplateDocument`'s operation
//!   set; nothing here merges block properties locally.
//! - While the document is new, each mutation refreshes the local
//!   crash-recovery snapshot; emptying the document or saving clears it.
//! - Save/load talk to the template store over HTTP with in-flight guards;
//!   a duplicate trigger while one is outstanding is dropped. Completion is
//!   delivered as a message through the component link, so a response that
//!   arrives after unmount is discarded instead of touching dead state.

use gloo_console::error;
use gloo_net::http::Request;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::render::render_document;
use common::requests::{name_is_well_formed, SaveTemplateRequest, SaveTemplateResponse};

use super::canvas::{insertion_index, insertion_index_at_block, midpoint, should_reorder, DragSource};
use super::helpers::{clear_snapshot, show_toast, write_snapshot};
use super::messages::Msg;
use super::state::{BuilderComponent, CodeViewBinding};

/// Refreshes the crash-recovery snapshot after a mutation. Snapshots only
/// apply to documents without a server identity.
fn after_mutation(component: &BuilderComponent) {
    if component.document.is_new() {
        write_snapshot(component.document.blocks());
    }
}

/// Vertical midpoints of the rendered blocks, in block order, measured from
/// the live DOM. `None` when the canvas is not mounted.
fn block_midpoints(component: &BuilderComponent) -> Option<Vec<f64>> {
    let canvas = component.canvas_ref.cast::<Element>()?;
    let nodes = canvas.query_selector_all(".canvas-block").ok()?;
    let mut midpoints = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let element: Element = nodes.get(i)?.dyn_into().ok()?;
        let rect = element.get_bounding_client_rect();
        midpoints.push(midpoint(rect.top(), rect.height()));
    }
    Some(midpoints)
}

/// Closes the code view if its bound block is no longer the selected block
/// (deselected, removed, or selection moved elsewhere).
fn sync_code_view(component: &mut BuilderComponent) {
    let still_bound = match (&component.code_view, component.document.selected_block_id()) {
        (Some(binding), Some(selected)) => binding.block_id == selected,
        (Some(_), None) => false,
        (None, _) => return,
    };
    if !still_bound {
        if let Some(binding) = component.code_view.take() {
            component.overlay_registry.remove(&binding.overlay_token);
        }
    }
}

pub fn update(component: &mut BuilderComponent, ctx: &Context<BuilderComponent>, msg: Msg) -> bool {
    match msg {
        Msg::AddBlock(kind) => {
            component.document.add_block(kind);
            after_mutation(component);
            sync_code_view(component);
            true
        }
        Msg::UpdateBlock { id, body } => {
            component.document.update_block(&id, body);
            after_mutation(component);
            true
        }
        Msg::RemoveBlock(id) => {
            let emptied = component.document.remove_block(&id);
            if emptied {
                clear_snapshot();
            } else {
                after_mutation(component);
            }
            sync_code_view(component);
            true
        }
        Msg::SelectBlock(id) => {
            component.document.select_block(&id);
            sync_code_view(component);
            true
        }
        Msg::BackgroundClicked => {
            // Overlays registered as "keep selection" suppress deselection
            // for the duration of their mount.
            if component.overlay_registry.is_empty() {
                component.document.clear_selection();
                sync_code_view(component);
                true
            } else {
                false
            }
        }

        Msg::DragStartExisting { id, index } => {
            component.drag = Some(DragSource::Existing { id, index });
            component.insertion_marker = None;
            true
        }
        Msg::DragStartPalette(kind) => {
            component.drag = Some(DragSource::New(kind));
            component.insertion_marker = None;
            true
        }
        Msg::DragOverBlock {
            hover_index,
            pointer_y,
            rect_top,
            rect_height,
        } => {
            let mid = midpoint(rect_top, rect_height);
            match &mut component.drag {
                Some(DragSource::Existing { index, .. }) => {
                    // Live reorder: the move happens as soon as the pointer
                    // crosses the hovered block's midpoint, not on drop.
                    if should_reorder(*index, hover_index, pointer_y, mid) {
                        let from = *index;
                        *index = hover_index;
                        component.document.move_block(from, hover_index);
                        after_mutation(component);
                        true
                    } else {
                        false
                    }
                }
                Some(DragSource::New(_)) => {
                    let marker = insertion_index_at_block(hover_index, pointer_y, mid);
                    let changed = component.insertion_marker != Some(marker);
                    component.insertion_marker = Some(marker);
                    changed
                }
                None => false,
            }
        }
        Msg::DragOverCanvas { pointer_y } => {
            if let Some(DragSource::New(_)) = component.drag {
                // Hovering canvas whitespace runs the same midpoint scan as
                // hovering a block: padding above the first block previews
                // index 0, the area below the last previews an append.
                let marker = match block_midpoints(component) {
                    Some(midpoints) => insertion_index(pointer_y, &midpoints),
                    None => component.document.blocks().len(),
                };
                let changed = component.insertion_marker != Some(marker);
                component.insertion_marker = Some(marker);
                changed
            } else {
                false
            }
        }
        Msg::DropOnCanvas => {
            match component.drag.take() {
                Some(DragSource::New(kind)) => {
                    let index = component
                        .insertion_marker
                        .unwrap_or(component.document.blocks().len());
                    component.document.insert_block(kind, index);
                    after_mutation(component);
                    sync_code_view(component);
                }
                // An existing block was already moved live during dragover.
                Some(DragSource::Existing { .. }) | None => {}
            }
            component.insertion_marker = None;
            true
        }
        Msg::DragEnded => {
            // Pointer-up outside a hover target: abort the insertion preview
            // without mutating the document.
            component.drag = None;
            component.insertion_marker = None;
            true
        }

        Msg::OpenCodeView => {
            let Some(block) = component.document.selected_block() else {
                return false;
            };
            // The panel edits the effective markup: the rich-text fragment
            // when one overrides the plain content field.
            let html = match (&block.rich_text, block.body.content()) {
                (Some(rich), _) => rich.clone(),
                (None, Some(content)) => content.to_string(),
                (None, None) => return false,
            };
            let token = format!("code-view-{}", Uuid::new_v4());
            component.overlay_registry.insert(token.clone());
            component.code_view = Some(CodeViewBinding {
                block_id: block.id.clone(),
                initial_html: html,
                overlay_token: token,
            });
            true
        }
        Msg::CodeViewApply(html) => {
            if let Some(binding) = &component.code_view {
                let id = binding.block_id.clone();
                let overrides = component
                    .document
                    .block(&id)
                    .map(|b| b.rich_text.is_some())
                    .unwrap_or(false);
                if overrides {
                    component.document.update_rich_text(&id, html);
                } else {
                    component.document.update_content(&id, &html);
                }
                after_mutation(component);
                true
            } else {
                false
            }
        }
        Msg::CodeViewClosed => {
            if let Some(binding) = component.code_view.take() {
                component.overlay_registry.remove(&binding.overlay_token);
            }
            true
        }

        Msg::SetName(name) => {
            component.template_name = name;
            component.name_error = None;
            true
        }
        Msg::Save => {
            if component.saving {
                // A save is already in flight; this trigger is dropped.
                return false;
            }
            let name = component.template_name.trim().to_string();
            if name.is_empty() {
                component.name_error = Some("Name is required.".to_string());
                return true;
            }
            if !name_is_well_formed(&name) {
                component.name_error =
                    Some("Name cannot contain / \\ ? # or %.".to_string());
                return true;
            }
            let html = match render_document(component.document.blocks()) {
                Ok(html) => html,
                Err(err) => {
                    show_toast(&format!("Cannot save: {}.", err));
                    return true;
                }
            };
            let json = match component.document.to_json() {
                Ok(json) => json,
                Err(err) => {
                    show_toast(&format!("Cannot save: {}.", err));
                    return true;
                }
            };
            component.saving = true;

            let request = SaveTemplateRequest {
                name,
                html,
                json,
                overwrite: !component.document.is_new(),
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let built = match Request::post("/api/templates/save").json(&request) {
                    Ok(built) => built,
                    Err(err) => {
                        link.send_message(Msg::SaveFailed(err.to_string()));
                        return;
                    }
                };
                match built.send().await {
                    Ok(response) if response.status() == 200 => {
                        match response.json::<SaveTemplateResponse>().await {
                            Ok(body) => link.send_message(Msg::SaveSucceeded(body)),
                            Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                        }
                    }
                    Ok(response) if response.status() == 409 => {
                        link.send_message(Msg::SaveConflicted);
                    }
                    Ok(response) => {
                        let detail = response.text().await.unwrap_or_default();
                        link.send_message(Msg::SaveFailed(detail));
                    }
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            true
        }
        Msg::SaveSucceeded(_) => {
            component.saving = false;
            component.document.mark_as_saved();
            component.document.mark_persisted();
            clear_snapshot();
            show_toast("Template saved.");
            true
        }
        Msg::SaveConflicted => {
            // Field-level error, not a toast; the document stays dirty so
            // the user can retry under another name without re-authoring.
            component.saving = false;
            component.name_error = Some("A template with this name already exists.".to_string());
            true
        }
        Msg::SaveFailed(detail) => {
            component.saving = false;
            error!("save failed:", detail.as_str());
            show_toast("Saving failed. Your changes are still here, try again.");
            true
        }

        Msg::TemplateLoaded(document) => {
            component.loading = false;
            component.document = document;
            show_toast("Template loaded.");
            true
        }
        Msg::DraftRecovered(document) => {
            component.document = document;
            show_toast("Recovered your unsaved draft.");
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            error!("template load failed:", detail.as_str());
            component.document = crate::document::TemplateDocument::new();
            show_toast("Could not load the template. Starting empty.");
            true
        }
    }
}
