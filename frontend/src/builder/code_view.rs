//! The code-view escape hatch: a floating, draggable panel bound to the
//! selected block's rich-content field, for direct HTML edits that bypass
//! the structured editors.
//!
//! The panel does not own its lifetime: the builder renders it only while
//! the bound block is still present and selected, so deselection or removal
//! closes it through the document model rather than panel-local state.
//! Applying routes through the builder's `update_content`.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlTextAreaElement};
use yew::prelude::*;

pub const PANEL_WIDTH: f64 = 380.0;
pub const PANEL_HEIGHT: f64 = 300.0;

/// Clamps the panel's top-left corner so the panel stays inside `bounds`
/// (`(left, top, width, height)`), when a canvas bounding box is supplied.
/// Without bounds the position is only kept non-negative.
pub fn clamp_position(
    x: f64,
    y: f64,
    panel_w: f64,
    panel_h: f64,
    bounds: Option<(f64, f64, f64, f64)>,
) -> (f64, f64) {
    match bounds {
        Some((left, top, width, height)) => {
            let max_x = (left + width - panel_w).max(left);
            let max_y = (top + height - panel_h).max(top);
            (x.clamp(left, max_x), y.clamp(top, max_y))
        }
        None => (x.max(0.0), y.max(0.0)),
    }
}

#[derive(Properties, PartialEq)]
pub struct CodeViewProps {
    pub block_id: String,
    pub initial_html: String,
    /// The canvas container; its bounding box constrains panel dragging.
    pub canvas_ref: NodeRef,
    pub on_apply: Callback<String>,
    pub on_close: Callback<()>,
}

pub enum CodeViewMsg {
    SetDraft(String),
    Apply,
    Close,
    DragStart { pointer_x: f64, pointer_y: f64 },
    DragMove { pointer_x: f64, pointer_y: f64 },
    DragEnd,
}

pub struct CodeViewPanel {
    draft: String,
    x: f64,
    y: f64,
    /// Pointer offset inside the panel while a header drag is active.
    drag_offset: Option<(f64, f64)>,
}

impl CodeViewPanel {
    fn canvas_bounds(&self, ctx: &Context<Self>) -> Option<(f64, f64, f64, f64)> {
        let rect = ctx
            .props()
            .canvas_ref
            .cast::<Element>()?
            .get_bounding_client_rect();
        Some((rect.left(), rect.top(), rect.width(), rect.height()))
    }
}

impl Component for CodeViewPanel {
    type Message = CodeViewMsg;
    type Properties = CodeViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            draft: ctx.props().initial_html.clone(),
            x: 120.0,
            y: 120.0,
            drag_offset: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CodeViewMsg::SetDraft(html) => {
                self.draft = html;
                false
            }
            CodeViewMsg::Apply => {
                ctx.props().on_apply.emit(self.draft.clone());
                false
            }
            CodeViewMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
            CodeViewMsg::DragStart { pointer_x, pointer_y } => {
                self.drag_offset = Some((pointer_x - self.x, pointer_y - self.y));
                true
            }
            CodeViewMsg::DragMove { pointer_x, pointer_y } => {
                let Some((dx, dy)) = self.drag_offset else {
                    return false;
                };
                let (x, y) = clamp_position(
                    pointer_x - dx,
                    pointer_y - dy,
                    PANEL_WIDTH,
                    PANEL_HEIGHT,
                    self.canvas_bounds(ctx),
                );
                self.x = x;
                self.y = y;
                true
            }
            CodeViewMsg::DragEnd => {
                self.drag_offset = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let style = format!(
            "position:fixed;left:{}px;top:{}px;width:{}px;",
            self.x, self.y, PANEL_WIDTH
        );

        let oninput = link.callback(|e: InputEvent| {
            CodeViewMsg::SetDraft(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_drag_start = link.callback(|e: MouseEvent| {
            e.prevent_default();
            CodeViewMsg::DragStart {
                pointer_x: e.client_x() as f64,
                pointer_y: e.client_y() as f64,
            }
        });

        // A fullscreen capture layer tracks the pointer while the header is
        // being dragged, so the panel follows even when the pointer outruns it.
        let capture = if self.drag_offset.is_some() {
            let onmousemove = link.callback(|e: MouseEvent| CodeViewMsg::DragMove {
                pointer_x: e.client_x() as f64,
                pointer_y: e.client_y() as f64,
            });
            let onmouseup = link.callback(|_: MouseEvent| CodeViewMsg::DragEnd);
            html! {
                <div class="drag-capture" {onmousemove} {onmouseup}></div>
            }
        } else {
            html! {}
        };

        html! {
            <>
                { capture }
                <div class="code-view-panel" {style}>
                    <div class="code-view-head" onmousedown={on_drag_start}>
                        <span>{format!("Edit HTML: {}", ctx.props().block_id)}</span>
                        <button class="close-btn" onclick={link.callback(|_| CodeViewMsg::Close)}>{"×"}</button>
                    </div>
                    <textarea
                        class="code-view-editor"
                        rows="10"
                        value={self.draft.clone()}
                        spellcheck="false"
                        {oninput}
                    />
                    <div class="code-view-actions">
                        <button class="apply-btn" onclick={link.callback(|_| CodeViewMsg::Apply)}>{"Apply"}</button>
                    </div>
                </div>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_drag_only_prevents_negative_positions() {
        assert_eq!(clamp_position(-5.0, 40.0, 380.0, 300.0, None), (0.0, 40.0));
        assert_eq!(clamp_position(10.0, -1.0, 380.0, 300.0, None), (10.0, 0.0));
    }

    #[test]
    fn drag_is_constrained_to_the_canvas_bounds() {
        let bounds = Some((100.0, 50.0, 800.0, 600.0));
        // Past the right/bottom edge: pinned so the panel stays inside.
        assert_eq!(
            clamp_position(900.0, 700.0, 380.0, 300.0, bounds),
            (100.0 + 800.0 - 380.0, 50.0 + 600.0 - 300.0)
        );
        // Before the left/top edge: pinned to the canvas origin.
        assert_eq!(clamp_position(0.0, 0.0, 380.0, 300.0, bounds), (100.0, 50.0));
    }

    #[test]
    fn canvas_smaller_than_the_panel_pins_to_the_canvas_origin() {
        let bounds = Some((100.0, 50.0, 200.0, 100.0));
        assert_eq!(clamp_position(500.0, 500.0, 380.0, 300.0, bounds), (100.0, 50.0));
    }
}
