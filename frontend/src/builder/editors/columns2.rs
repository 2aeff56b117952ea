use common::model::block::{BlockBody, Columns2Props};
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn content_tab(p: &Columns2Props, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::textarea_field("Left column (HTML)", &p.left, patch(p, on, BlockBody::Columns2, |p, v| p.left = v)) }
            { fields::textarea_field("Right column (HTML)", &p.right, patch(p, on, BlockBody::Columns2, |p, v| p.right = v)) }
        </>
    }
}

pub fn styles_tab(p: &Columns2Props, padding: &Spacing, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Column gap", p.gap, patch(p, on, BlockBody::Columns2, |p, v| p.gap = v)) }
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Columns2, |p, v| p.padding = v),
            ) }
        </>
    }
}
