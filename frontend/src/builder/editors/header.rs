use common::model::block::{BlockBody, HeaderProps};
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn content_tab(p: &HeaderProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::text_field("Title", &p.text, patch(p, on, BlockBody::Header, |p, v| p.text = v)) }
        </>
    }
}

pub fn text_tab(p: &HeaderProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Font size", p.font_size, patch(p, on, BlockBody::Header, |p, v| p.font_size = v)) }
            { fields::checkbox_field("Bold", p.bold, patch(p, on, BlockBody::Header, |p, v| p.bold = v)) }
            { fields::align_field(p.align, patch(p, on, BlockBody::Header, |p, v| p.align = v)) }
            { fields::color_field("Text color", &p.color, patch(p, on, BlockBody::Header, |p, v| p.color = v)) }
        </>
    }
}

pub fn styles_tab(
    p: &HeaderProps,
    padding: &Spacing,
    margin: &Spacing,
    on: &Callback<BlockBody>,
) -> Html {
    html! {
        <>
            { fields::color_field("Background", &p.background, patch(p, on, BlockBody::Header, |p, v| p.background = v)) }
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Header, |p, v| p.padding = v),
            ) }
            { fields::spacing_editor(
                "Margin",
                p.margin,
                margin.all,
                margin.on_toggle.clone(),
                patch(p, on, BlockBody::Header, |p, v| p.margin = v),
            ) }
        </>
    }
}
