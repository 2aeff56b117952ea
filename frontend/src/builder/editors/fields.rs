//! Shared form controls for the block property editors.
//!
//! Every block editor is assembled from these helpers so the merge behavior
//! lives in one place: a field edit always emits a complete replacement
//! property bag through a single callback, never a partial patch.

use common::model::props::{Align, Side, Sides};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const SQUARE_RADIUS: u32 = 0;
pub const PILL_RADIUS: u32 = 9999;

/// Named border-radius shapes. Square and pill are global constants; the
/// "rounded" constant is block-type specific and supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePreset {
    Square,
    Rounded,
    Pill,
    Custom,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 4] = [
        ShapePreset::Square,
        ShapePreset::Rounded,
        ShapePreset::Pill,
        ShapePreset::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapePreset::Square => "Square",
            ShapePreset::Rounded => "Rounded",
            ShapePreset::Pill => "Pill",
            ShapePreset::Custom => "Custom",
        }
    }

    /// Classifies a stored radius against the presets for this block type.
    pub fn of(radius: u32, rounded: u32) -> ShapePreset {
        if radius == SQUARE_RADIUS {
            ShapePreset::Square
        } else if radius == rounded {
            ShapePreset::Rounded
        } else if radius == PILL_RADIUS {
            ShapePreset::Pill
        } else {
            ShapePreset::Custom
        }
    }

    /// The exact constant a named preset writes. Selecting a preset always
    /// stores this value, so preset -> custom -> same preset round-trips to
    /// the identical constant.
    pub fn radius(self, rounded: u32) -> Option<u32> {
        match self {
            ShapePreset::Square => Some(SQUARE_RADIUS),
            ShapePreset::Rounded => Some(rounded),
            ShapePreset::Pill => Some(PILL_RADIUS),
            ShapePreset::Custom => None,
        }
    }
}

/// Upper bound of the custom-radius slider.
pub const CUSTOM_RADIUS_MAX: u32 = 100;

/// Seed value when switching into custom mode: always distinguishable from
/// the preset the user is coming from, so the slider visibly moves off the
/// preset value, and always within the slider's range. The exact constants
/// are not meaningful beyond that.
pub fn custom_seed(radius: u32, rounded: u32) -> u32 {
    let seed = match ShapePreset::of(radius, rounded) {
        ShapePreset::Square => 1,
        ShapePreset::Rounded => rounded + 1,
        ShapePreset::Pill => CUSTOM_RADIUS_MAX,
        ShapePreset::Custom => radius,
    };
    seed.min(CUSTOM_RADIUS_MAX)
}

pub fn text_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn textarea_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea rows="4" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn number_field(label: &str, value: u32, on_change: Callback<u32>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Ok(v) = e.target_unchecked_into::<HtmlInputElement>().value().parse() {
            on_change.emit(v);
        }
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="number" min="0" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn float_field(label: &str, value: f32, on_change: Callback<f32>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Ok(v) = e.target_unchecked_into::<HtmlInputElement>().value().parse() {
            on_change.emit(v);
        }
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="number" min="0" step="0.1" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn color_field(label: &str, value: &str, on_change: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        on_change.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    });
    html! {
        <label class="field field-color">
            <span class="field-label">{label}</span>
            <input type="color" value={value.to_string()} {oninput} />
        </label>
    }
}

pub fn checkbox_field(label: &str, value: bool, on_change: Callback<bool>) -> Html {
    let onchange = Callback::from(move |e: Event| {
        on_change.emit(e.target_unchecked_into::<HtmlInputElement>().checked());
    });
    html! {
        <label class="field field-checkbox">
            <input type="checkbox" checked={value} {onchange} />
            <span class="field-label">{label}</span>
        </label>
    }
}

pub fn select_field(
    label: &str,
    options: &[(&'static str, &'static str)],
    value: &str,
    on_change: Callback<String>,
) -> Html {
    let onchange = Callback::from(move |e: Event| {
        on_change.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select {onchange}>
                { for options.iter().map(|(v, text)| html! {
                    <option value={*v} selected={*v == value}>{*text}</option>
                }) }
            </select>
        </label>
    }
}

pub fn align_field(value: Align, on_change: Callback<Align>) -> Html {
    let mapped = Callback::from(move |v: String| {
        on_change.emit(match v.as_str() {
            "left" => Align::Left,
            "right" => Align::Right,
            _ => Align::Center,
        });
    });
    select_field(
        "Alignment",
        &[("left", "Left"), ("center", "Center"), ("right", "Right")],
        value.css(),
        mapped,
    )
}

/// Composite four-side spacing editor. Editing one side updates only that
/// side; with "apply to all sides" enabled, the single input broadcasts its
/// value to all four sides in one emitted `Sides`, so the document model
/// sees exactly one atomic update.
pub fn spacing_editor(
    label: &str,
    sides: Sides,
    all_sides: bool,
    on_toggle: Callback<bool>,
    on_change: Callback<Sides>,
) -> Html {
    let toggle = checkbox_field("All sides", all_sides, on_toggle);
    let inputs = if all_sides {
        let on_change = on_change.clone();
        number_field(
            "All",
            sides.top,
            Callback::from(move |v| on_change.emit(Sides::uniform(v))),
        )
    } else {
        html! {
            <div class="field-sides">
                { for Side::ALL.iter().map(|side| {
                    let side = *side;
                    let on_change = on_change.clone();
                    let current = match side {
                        Side::Top => sides.top,
                        Side::Right => sides.right,
                        Side::Bottom => sides.bottom,
                        Side::Left => sides.left,
                    };
                    number_field(
                        side.label(),
                        current,
                        Callback::from(move |v| on_change.emit(sides.with_side(side, v))),
                    )
                }) }
            </div>
        }
    };
    html! {
        <fieldset class="field-group">
            <legend>{label}</legend>
            { toggle }
            { inputs }
        </fieldset>
    }
}

/// Border-radius editor: three named presets writing their exact constants,
/// plus a custom mode exposing a slider seeded off the current preset.
pub fn radius_editor(radius: u32, rounded: u32, on_change: Callback<u32>) -> Html {
    let current = ShapePreset::of(radius, rounded);
    let buttons = ShapePreset::ALL.iter().map(|preset| {
        let preset = *preset;
        let on_change = on_change.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let value = preset
                .radius(rounded)
                .unwrap_or_else(|| custom_seed(radius, rounded));
            on_change.emit(value);
        });
        let class = if preset == current {
            "shape-btn active"
        } else {
            "shape-btn"
        };
        html! { <button type="button" {class} {onclick}>{preset.label()}</button> }
    });
    let slider = if current == ShapePreset::Custom {
        let on_change = on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Ok(v) = e.target_unchecked_into::<HtmlInputElement>().value().parse() {
                on_change.emit(v);
            }
        });
        html! {
            <label class="field">
                <span class="field-label">{format!("Radius: {}px", radius)}</span>
                <input
                    type="range"
                    min="1"
                    max={CUSTOM_RADIUS_MAX.to_string()}
                    value={radius.to_string()}
                    {oninput}
                />
            </label>
        }
    } else {
        html! {}
    };
    html! {
        <fieldset class="field-group">
            <legend>{"Shape"}</legend>
            <div class="shape-row">{ for buttons }</div>
            { slider }
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUNDED: u32 = 8;

    #[test]
    fn presets_classify_their_exact_constants() {
        assert_eq!(ShapePreset::of(0, ROUNDED), ShapePreset::Square);
        assert_eq!(ShapePreset::of(ROUNDED, ROUNDED), ShapePreset::Rounded);
        assert_eq!(ShapePreset::of(PILL_RADIUS, ROUNDED), ShapePreset::Pill);
        assert_eq!(ShapePreset::of(17, ROUNDED), ShapePreset::Custom);
    }

    #[test]
    fn preset_to_custom_and_back_reproduces_the_exact_constant() {
        for preset in [ShapePreset::Square, ShapePreset::Rounded, ShapePreset::Pill] {
            let original = preset.radius(ROUNDED).unwrap();
            let seeded = custom_seed(original, ROUNDED);
            // The seed moved the value off the preset...
            assert_ne!(seeded, original);
            // ...and re-selecting the preset writes the exact constant again,
            // never a derived or rounded value.
            assert_eq!(preset.radius(ROUNDED), Some(original));
        }
    }

    #[test]
    fn custom_seed_is_distinguishable_from_every_source_preset() {
        assert_eq!(custom_seed(SQUARE_RADIUS, ROUNDED), 1);
        assert_eq!(custom_seed(ROUNDED, ROUNDED), ROUNDED + 1);
        assert_eq!(custom_seed(PILL_RADIUS, ROUNDED), CUSTOM_RADIUS_MAX);
        // Already custom: keep the value, the slider is live.
        assert_eq!(custom_seed(37, ROUNDED), 37);
    }

    #[test]
    fn custom_seed_always_fits_the_slider_range() {
        for radius in [SQUARE_RADIUS, ROUNDED, PILL_RADIUS, 37, 4000] {
            let seed = custom_seed(radius, ROUNDED);
            assert!((1..=CUSTOM_RADIUS_MAX).contains(&seed), "seed {seed} off slider");
        }
    }

    #[test]
    fn uniform_broadcast_produces_four_equal_sides_in_one_value() {
        let sides = Sides::uniform(20);
        assert_eq!(sides.top, 20);
        assert_eq!(sides.right, 20);
        assert_eq!(sides.bottom, 20);
        assert_eq!(sides.left, 20);
    }
}
