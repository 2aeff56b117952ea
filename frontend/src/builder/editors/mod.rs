//! Block property editors: one editor per block type, each organized into a
//! fixed set of tabs (Content / Styles / Text where applicable).
//!
//! The panel is keyed on the selected block's id by its parent, so switching
//! blocks remounts it fresh (tab state resets to the type's starting tab),
//! while property changes on the same block preserve local UI state such as
//! the "apply to all sides" toggles.
//!
//! Editors never merge fields locally: every edit emits one complete
//! replacement property bag through `on_change`, which the builder routes to
//! the document model's `update_block`.

use common::model::block::{Block, BlockBody, BlockKind};
use yew::prelude::*;

pub mod fields;

mod button;
mod columns2;
mod divider;
mod footer;
mod header;
mod image;
mod spacer;
mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTab {
    Content,
    Styles,
    Text,
}

impl EditorTab {
    pub fn label(self) -> &'static str {
        match self {
            EditorTab::Content => "Content",
            EditorTab::Styles => "Styles",
            EditorTab::Text => "Text",
        }
    }
}

/// The fixed tab structure per block type, in display order.
pub fn tabs_for(kind: BlockKind) -> &'static [EditorTab] {
    match kind {
        BlockKind::Header | BlockKind::Text | BlockKind::Button | BlockKind::Footer => {
            &[EditorTab::Content, EditorTab::Styles, EditorTab::Text]
        }
        BlockKind::Image | BlockKind::Columns2 => &[EditorTab::Content, EditorTab::Styles],
        BlockKind::Spacer | BlockKind::Divider => &[EditorTab::Styles],
    }
}

pub fn default_tab(kind: BlockKind) -> EditorTab {
    tabs_for(kind)[0]
}

/// Local UI state for one composite spacing field (padding or margin).
pub struct Spacing {
    pub all: bool,
    pub on_toggle: Callback<bool>,
}

/// Builds a callback that clones the current bag, applies one field edit,
/// and emits the full replacement. All editors funnel through this.
pub(crate) fn patch<P, V>(
    p: &P,
    on: &Callback<BlockBody>,
    wrap: fn(P) -> BlockBody,
    apply: impl Fn(&mut P, V) + 'static,
) -> Callback<V>
where
    P: Clone + 'static,
    V: 'static,
{
    let p = p.clone();
    let on = on.clone();
    Callback::from(move |value: V| {
        let mut next = p.clone();
        apply(&mut next, value);
        on.emit(wrap(next));
    })
}

#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub block: Block,
    pub on_change: Callback<BlockBody>,
    /// Opens the code-view escape hatch on the bound block.
    pub on_edit_html: Callback<()>,
}

pub enum PanelMsg {
    SetTab(EditorTab),
    TogglePadding(bool),
    ToggleMargin(bool),
}

pub struct PropertyPanel {
    tab: EditorTab,
    padding_all: bool,
    margin_all: bool,
}

impl Component for PropertyPanel {
    type Message = PanelMsg;
    type Properties = PanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            tab: default_tab(ctx.props().block.kind()),
            padding_all: false,
            margin_all: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PanelMsg::SetTab(tab) => self.tab = tab,
            PanelMsg::TogglePadding(all) => self.padding_all = all,
            PanelMsg::ToggleMargin(all) => self.margin_all = all,
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // The parent keys this panel on the block id, so a block switch
        // normally remounts it. Reset here as well so the contract holds
        // even if an unkeyed parent reuses the instance.
        if old_props.block.id != ctx.props().block.id {
            self.tab = default_tab(ctx.props().block.kind());
            self.padding_all = false;
            self.margin_all = false;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let block = &ctx.props().block;
        let kind = block.kind();
        let tabs = tabs_for(kind);

        let tab_bar = html! {
            <div class="tab-bar">
                { for tabs.iter().map(|tab| {
                    let tab = *tab;
                    let class = classes!(
                        "tab-btn",
                        (tab == self.tab).then_some("active"),
                    );
                    html! {
                        <button {class} onclick={link.callback(move |_| PanelMsg::SetTab(tab))}>
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
        };

        let edit_html = if block.body.content().is_some() {
            let on_edit_html = ctx.props().on_edit_html.clone();
            html! {
                <button class="edit-html-btn" onclick={Callback::from(move |_| on_edit_html.emit(()))}>
                    {"Edit HTML"}
                </button>
            }
        } else {
            html! {}
        };

        let padding = Spacing {
            all: self.padding_all,
            on_toggle: link.callback(PanelMsg::TogglePadding),
        };
        let margin = Spacing {
            all: self.margin_all,
            on_toggle: link.callback(PanelMsg::ToggleMargin),
        };
        let on = &ctx.props().on_change;

        let body = match (&block.body, self.tab) {
            (BlockBody::Header(p), EditorTab::Content) => header::content_tab(p, on),
            (BlockBody::Header(p), EditorTab::Text) => header::text_tab(p, on),
            (BlockBody::Header(p), EditorTab::Styles) => {
                header::styles_tab(p, &padding, &margin, on)
            }
            (BlockBody::Text(p), EditorTab::Content) => text::content_tab(p, on),
            (BlockBody::Text(p), EditorTab::Text) => text::text_tab(p, on),
            (BlockBody::Text(p), EditorTab::Styles) => text::styles_tab(p, &padding, on),
            (BlockBody::Image(p), EditorTab::Content) => image::content_tab(p, on),
            (BlockBody::Image(p), _) => image::styles_tab(p, on),
            (BlockBody::Button(p), EditorTab::Content) => button::content_tab(p, on),
            (BlockBody::Button(p), EditorTab::Text) => button::text_tab(p, on),
            (BlockBody::Button(p), EditorTab::Styles) => button::styles_tab(p, &padding, on),
            (BlockBody::Spacer(p), _) => spacer::styles_tab(p, on),
            (BlockBody::Divider(p), _) => divider::styles_tab(p, &padding, on),
            (BlockBody::Footer(p), EditorTab::Content) => footer::content_tab(p, on),
            (BlockBody::Footer(p), EditorTab::Text) => footer::text_tab(p, on),
            (BlockBody::Footer(p), EditorTab::Styles) => footer::styles_tab(p, &padding, on),
            (BlockBody::Columns2(p), EditorTab::Content) => columns2::content_tab(p, on),
            (BlockBody::Columns2(p), _) => columns2::styles_tab(p, &padding, on),
        };

        html! {
            <div class="property-panel-body">
                <div class="panel-head">
                    <span class="panel-title">{kind.label()}</span>
                    { edit_html }
                </div>
                { tab_bar }
                <div class="tab-content">{ body }</div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_starts_on_its_first_tab() {
        assert_eq!(default_tab(BlockKind::Header), EditorTab::Content);
        assert_eq!(default_tab(BlockKind::Spacer), EditorTab::Styles);
        assert_eq!(default_tab(BlockKind::Divider), EditorTab::Styles);
        assert_eq!(default_tab(BlockKind::Image), EditorTab::Content);
    }

    #[test]
    fn tab_structure_is_fixed_per_type() {
        for kind in [
            BlockKind::Header,
            BlockKind::Text,
            BlockKind::Image,
            BlockKind::Button,
            BlockKind::Spacer,
            BlockKind::Divider,
            BlockKind::Footer,
            BlockKind::Columns2,
        ] {
            assert!(!tabs_for(kind).is_empty());
            assert_eq!(tabs_for(kind)[0], default_tab(kind));
        }
    }
}
