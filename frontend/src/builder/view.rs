//! View function for the builder component: toolbar, palette, canvas and the
//! property panel, plus the floating code-view panel when one is bound.
//!
//! Canvas previews are produced by the same `render_block` used for export,
//! injected as raw HTML, so what the canvas shows is exactly what the saved
//! artifact contains.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use common::model::block::{Block, BlockKind};
use common::render::render_block;

use super::canvas::DragSource;
use super::code_view::CodeViewPanel;
use super::editors::PropertyPanel;
use super::messages::Msg;
use super::state::BuilderComponent;

pub fn view(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="builder-root" onclick={link.callback(|_| Msg::BackgroundClicked)}>
            { toolbar(component, ctx) }
            <div class="builder-main">
                { palette(ctx) }
                { canvas(component, ctx) }
                { property_panel(component, ctx) }
            </div>
            { code_view(component, ctx) }
        </div>
    }
}

fn toolbar(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    let oninput = link.callback(|e: InputEvent| {
        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_save = link.callback(|e: MouseEvent| {
        e.stop_propagation();
        Msg::Save
    });

    let dirty_dot = if component.document.is_dirty() {
        html! { <span class="dirty-dot" title="Unsaved changes">{"●"}</span> }
    } else {
        html! {}
    };
    let name_error = if let Some(message) = &component.name_error {
        html! { <span class="name-error">{message}</span> }
    } else {
        html! {}
    };
    let save_label = if component.saving { "Saving…" } else { "Save" };

    html! {
        <div class="builder-toolbar">
            <span class="toolbar-title">{"Email Template Builder"}</span>
            <div class="toolbar-name">
                <input
                    type="text"
                    class="name-input"
                    placeholder="Template name"
                    value={component.template_name.clone()}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    {oninput}
                />
                { name_error }
            </div>
            { dirty_dot }
            <button
                class="save-btn"
                disabled={component.saving || component.loading}
                onclick={on_save}
            >
                {save_label}
            </button>
        </div>
    }
}

fn palette(ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="builder-palette">
            <div class="palette-title">{"Blocks"}</div>
            { for BlockKind::PALETTE.iter().map(|kind| {
                let kind = *kind;
                // Clicking the item appends; the click must not bubble to the
                // background handler, which would clear the fresh selection.
                let onclick = link.callback(move |e: MouseEvent| {
                    e.stop_propagation();
                    Msg::AddBlock(kind)
                });
                let ondragstart = link.callback(move |e: DragEvent| {
                    let source = DragSource::New(kind);
                    if let Some(transfer) = e.data_transfer() {
                        if let Ok(payload) = serde_json::to_string(&source.payload()) {
                            let _ = transfer.set_data("application/json", &payload);
                        }
                    }
                    Msg::DragStartPalette(kind)
                });
                let ondragend = link.callback(|_: DragEvent| Msg::DragEnded);
                html! {
                    <div
                        class="palette-item"
                        draggable="true"
                        {onclick}
                        {ondragstart}
                        {ondragend}
                    >
                        {kind.label()}
                    </div>
                }
            }) }
        </div>
    }
}

fn canvas(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    // Dragover on individual blocks is handled per block and stops
    // propagation, so only the canvas background (padding above the first
    // block, gaps, the area below the last block) reaches this handler.
    let ondragover = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DragOverCanvas {
            pointer_y: e.client_y() as f64,
        }
    });
    let ondrop = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::DropOnCanvas
    });

    let blocks = component.document.blocks();
    let marker = component.insertion_marker;

    let body = if blocks.is_empty() && marker.is_none() {
        html! {
            <div class="canvas-empty">{"Drag blocks here or pick from the palette"}</div>
        }
    } else {
        html! {
            <>
                { for blocks.iter().enumerate().map(|(index, block)| {
                    html! {
                        <>
                            { if marker == Some(index) { insertion_marker() } else { html! {} } }
                            { canvas_block(component, ctx, index, block) }
                        </>
                    }
                }) }
                { if marker == Some(blocks.len()) { insertion_marker() } else { html! {} } }
            </>
        }
    };

    // Clicks on canvas whitespace are inside the canvas region and must not
    // reach the background deselection handler.
    html! {
        <div
            class="builder-canvas"
            ref={component.canvas_ref.clone()}
            onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            {ondragover}
            {ondrop}
        >
            { body }
        </div>
    }
}

fn insertion_marker() -> Html {
    html! { <div class="insertion-marker"></div> }
}

fn canvas_block(
    component: &BuilderComponent,
    ctx: &Context<BuilderComponent>,
    index: usize,
    block: &Block,
) -> Html {
    let link = ctx.link();
    let id = block.id.clone();
    let selected = component.document.selected_block_id() == Some(block.id.as_str());

    let onclick = {
        let id = id.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::SelectBlock(id.clone())
        })
    };
    let ondragstart = {
        let id = id.clone();
        link.callback(move |e: DragEvent| {
            let source = DragSource::Existing {
                id: id.clone(),
                index,
            };
            if let Some(transfer) = e.data_transfer() {
                if let Ok(payload) = serde_json::to_string(&source.payload()) {
                    let _ = transfer.set_data("application/json", &payload);
                }
            }
            Msg::DragStartExisting {
                id: id.clone(),
                index,
            }
        })
    };
    let ondragover = link.callback(move |e: DragEvent| {
        e.prevent_default();
        e.stop_propagation();
        let rect = e
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.get_bounding_client_rect());
        let (rect_top, rect_height) = rect
            .map(|rect| (rect.top(), rect.height()))
            .unwrap_or((0.0, 0.0));
        Msg::DragOverBlock {
            hover_index: index,
            pointer_y: e.client_y() as f64,
            rect_top,
            rect_height,
        }
    });
    let ondragend = link.callback(|_: DragEvent| Msg::DragEnded);
    let on_remove = {
        let id = id.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::RemoveBlock(id.clone())
        })
    };

    let class = classes!("canvas-block", selected.then_some("selected"));
    let preview = Html::from_html_unchecked(AttrValue::from(render_block(block)));

    html! {
        <div
            key={block.id.clone()}
            {class}
            draggable="true"
            {onclick}
            {ondragstart}
            {ondragover}
            {ondragend}
        >
            <div class="block-controls">
                <span class="block-kind">{block.kind().label()}</span>
                <button class="block-remove" title="Remove block" onclick={on_remove}>{"×"}</button>
            </div>
            <div class="block-preview">{ preview }</div>
        </div>
    }
}

fn property_panel(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    let Some(block) = component.document.selected_block() else {
        return html! {
            <div class="property-panel">
                <div class="panel-hint">{"Select a block to edit its properties"}</div>
            </div>
        };
    };

    let on_change = {
        let id = block.id.clone();
        link.callback(move |body| Msg::UpdateBlock {
            id: id.clone(),
            body,
        })
    };
    let on_edit_html = link.callback(|_| Msg::OpenCodeView);

    html! {
        <div class="property-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
            <PropertyPanel
                key={block.id.clone()}
                block={block.clone()}
                {on_change}
                {on_edit_html}
            />
        </div>
    }
}

fn code_view(component: &BuilderComponent, ctx: &Context<BuilderComponent>) -> Html {
    let link = ctx.link();

    let Some(binding) = &component.code_view else {
        return html! {};
    };

    html! {
        <CodeViewPanel
            key={binding.block_id.clone()}
            block_id={binding.block_id.clone()}
            initial_html={binding.initial_html.clone()}
            canvas_ref={component.canvas_ref.clone()}
            on_apply={link.callback(Msg::CodeViewApply)}
            on_close={link.callback(|_| Msg::CodeViewClosed)}
        />
    }
}
