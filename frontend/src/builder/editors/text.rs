use common::model::block::{BlockBody, TextProps};
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn content_tab(p: &TextProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::textarea_field("Content (HTML)", &p.content, patch(p, on, BlockBody::Text, |p, v| p.content = v)) }
        </>
    }
}

pub fn text_tab(p: &TextProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Font size", p.font_size, patch(p, on, BlockBody::Text, |p, v| p.font_size = v)) }
            { fields::float_field("Line height", p.line_height, patch(p, on, BlockBody::Text, |p, v| p.line_height = v)) }
            { fields::align_field(p.align, patch(p, on, BlockBody::Text, |p, v| p.align = v)) }
            { fields::color_field("Text color", &p.color, patch(p, on, BlockBody::Text, |p, v| p.color = v)) }
        </>
    }
}

pub fn styles_tab(p: &TextProps, padding: &Spacing, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Text, |p, v| p.padding = v),
            ) }
        </>
    }
}
