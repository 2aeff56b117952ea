use common::model::block::{BlockBody, SpacerProps};
use yew::prelude::*;

use super::{fields, patch};

pub fn styles_tab(p: &SpacerProps, on: &Callback<BlockBody>) -> Html {
    html! {
        <>
            { fields::number_field("Height (px)", p.height, patch(p, on, BlockBody::Spacer, |p, v| p.height = v)) }
            { fields::color_field("Background", &p.background, patch(p, on, BlockBody::Spacer, |p, v| p.background = v)) }
        </>
    }
}
