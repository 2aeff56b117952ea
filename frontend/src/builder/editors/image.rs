use common::model::block::{BlockBody, ImageProps};
use yew::prelude::*;

use super::{fields, patch};

/// The "rounded" shape preset constant for images.
const ROUNDED_RADIUS: u32 = 12;

pub fn content_tab(p: &ImageProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::text_field("Image URL", &p.src, patch(p, on, BlockBody::Image, |p, v| p.src = v)) }
            { fields::text_field("Alt text", &p.alt, patch(p, on, BlockBody::Image, |p, v| p.alt = v)) }
            { fields::text_field("Link URL", &p.link_url, patch(p, on, BlockBody::Image, |p, v| p.link_url = v)) }
        </>
    }
}

pub fn styles_tab(p: &ImageProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Width (px)", p.width, patch(p, on, BlockBody::Image, |p, v| p.width = v)) }
            { fields::align_field(p.align, patch(p, on, BlockBody::Image, |p, v| p.align = v)) }
            { fields::select_field(
                "Object fit",
                &[("cover", "Cover"), ("contain", "Contain"), ("fill", "Fill")],
                p.object_fit.css(),
                {
                    let mapped = patch(p, on, BlockBody::Image, |p: &mut ImageProps, v| p.object_fit = v);
                    Callback::from(move |v: String| {
                        mapped.emit(match v.as_str() {
                            "contain" => common::model::props::ObjectFit::Contain,
                            "fill" => common::model::props::ObjectFit::Fill,
                            _ => common::model::props::ObjectFit::Cover,
                        })
                    })
                },
            ) }
            { fields::radius_editor(p.border_radius, ROUNDED_RADIUS, patch(p, on, BlockBody::Image, |p, v| p.border_radius = v)) }
            { fields::number_field("Border width", p.border_width, patch(p, on, BlockBody::Image, |p, v| p.border_width = v)) }
            { fields::color_field("Border color", &p.border_color, patch(p, on, BlockBody::Image, |p, v| p.border_color = v)) }
        </>
    }
}
