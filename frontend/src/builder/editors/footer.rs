use common::model::block::{BlockBody, FooterProps};
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn content_tab(p: &FooterProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::textarea_field("Content (HTML)", &p.content, patch(p, on, BlockBody::Footer, |p, v| p.content = v)) }
        </>
    }
}

pub fn text_tab(p: &FooterProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Font size", p.font_size, patch(p, on, BlockBody::Footer, |p, v| p.font_size = v)) }
            { fields::align_field(p.align, patch(p, on, BlockBody::Footer, |p, v| p.align = v)) }
            { fields::color_field("Text color", &p.color, patch(p, on, BlockBody::Footer, |p, v| p.color = v)) }
        </>
    }
}

pub fn styles_tab(p: &FooterProps, padding: &Spacing, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::color_field("Background", &p.background, patch(p, on, BlockBody::Footer, |p, v| p.background = v)) }
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Footer, |p, v| p.padding = v),
            ) }
        </>
    }
}
