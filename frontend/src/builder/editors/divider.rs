use common::model::block::{BlockBody, DividerProps};
use common::model::props::DividerStyle;
use yew::prelude::*;

use super::{fields, patch, Spacing};

pub fn styles_tab(p: &DividerProps, padding: &Spacing, on: &Callback<BlockBody>) -> Html {
    let style = {
        let mapped = patch(p, on, BlockBody::Divider, |p: &mut DividerProps, v| p.style = v);
        Callback::from(move |v: String| {
            mapped.emit(match v.as_str() {
                "dashed" => DividerStyle::Dashed,
                "dotted" => DividerStyle::Dotted,
                _ => DividerStyle::Solid,
            })
        })
    };
    html! {
        <>
            { fields::color_field("Color", &p.color, patch(p, on, BlockBody::Divider, |p, v| p.color = v)) }
            { fields::number_field("Thickness", p.thickness, patch(p, on, BlockBody::Divider, |p, v| p.thickness = v)) }
            { fields::select_field(
                "Line style",
                &[("solid", "Solid"), ("dashed", "Dashed"), ("dotted", "Dotted")],
                p.style.css(),
                style,
            ) }
            { fields::number_field("Width (%)", p.width_percent, patch(p, on, BlockBody::Divider, |p, v: u32| p.width_percent = v.min(100))) }
            { fields::spacing_editor(
                "Padding",
                p.padding,
                padding.all,
                padding.on_toggle.clone(),
                patch(p, on, BlockBody::Divider, |p, v| p.padding = v),
            ) }
        </>
    }
}
