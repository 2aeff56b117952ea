use common::model::block::{BlockBody, ButtonProps};
use common::model::props::ButtonWidth;
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn content_tab(p: &ButtonProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::text_field("Label", &p.content, patch(p, on, BlockBody::Button, |p, v| p.content = v)) }
            { fields::text_field("Link URL", &p.url, patch(p, on, BlockBody::Button, |p, v| p.url = v)) }
        </>
    }
}

pub fn text_tab(p: &ButtonProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Font size", p.font_size, patch(p, on, BlockBody::Button, |p, v| p.font_size = v)) }
            { fields::checkbox_field("Bold", p.bold, patch(p, on, BlockBody::Button, |p, v| p.bold = v)) }
            { fields::color_field("Text color", &p.color, patch(p, on, BlockBody::Button, |p, v| p.color = v)) }
        </>
    }
}

pub fn styles_tab(p: &ButtonProps, padding: &Spacing, on: &Callback<BlockBody>) -> Html {
    // Width is the constrained enumeration, not a free pixel value.
    let width = {
        let mapped = patch(p, on, BlockBody::Button, |p: &mut ButtonProps, v| p.width = v);
        Callback::from(move |v: String| {
            mapped.emit(match v.as_str() {
                "25%" => ButtonWidth::Quarter,
                "75%" => ButtonWidth::ThreeQuarters,
                _ => ButtonWidth::Half,
            })
        })
    };
    html! {
        <>
            { fields::color_field("Background", &p.background, patch(p, on, BlockBody::Button, |p, v| p.background = v)) }
            { fields::select_field(
                "Width",
                &[("25%", "25%"), ("50%", "50%"), ("75%", "75%")],
                p.width.css(),
                width,
            ) }
            { fields::align_field(p.align, patch(p, on, BlockBody::Button, |p, v| p.align = v)) }
            { fields::radius_editor(p.border_radius, ButtonProps::ROUNDED_RADIUS, patch(p, on, BlockBody::Button, |p, v| p.border_radius = v)) }
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Button, |p, v| p.padding = v),
            ) }
        </>
    }
}
