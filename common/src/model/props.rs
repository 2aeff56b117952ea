//! Shared value types used inside block property bags.
//!
//! Everything here serializes with the field names the persisted JSON artifact
//! uses, and every type carries a `Default` so that fields absent from a
//! stored property bag deserialize to the block type's documented default.

use serde::{Deserialize, Serialize};

/// Four-sided spacing (padding or margin), in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Sides {
    pub const fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Returns a copy with exactly one side replaced.
    pub fn with_side(mut self, side: Side, value: u32) -> Self {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
        self
    }

    /// CSS shorthand, clockwise from top.
    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::uniform(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn label(self) -> &'static str {
        match self {
            Side::Top => "Top",
            Side::Right => "Right",
            Side::Bottom => "Bottom",
            Side::Left => "Left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    pub fn css(self) -> &'static str {
        match self {
            DividerStyle::Solid => "solid",
            DividerStyle::Dashed => "dashed",
            DividerStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

impl ObjectFit {
    pub fn css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
        }
    }
}

/// Button width is a constrained enumeration, unlike the image block whose
/// width accepts arbitrary pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonWidth {
    #[serde(rename = "25%")]
    Quarter,
    #[default]
    #[serde(rename = "50%")]
    Half,
    #[serde(rename = "75%")]
    ThreeQuarters,
}

impl ButtonWidth {
    pub const ALL: [ButtonWidth; 3] = [
        ButtonWidth::Quarter,
        ButtonWidth::Half,
        ButtonWidth::ThreeQuarters,
    ];

    pub fn css(self) -> &'static str {
        match self {
            ButtonWidth::Quarter => "25%",
            ButtonWidth::Half => "50%",
            ButtonWidth::ThreeQuarters => "75%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_side_touches_exactly_one_side() {
        let sides = Sides::uniform(10);
        let edited = sides.with_side(Side::Left, 99);
        assert_eq!(edited.left, 99);
        assert_eq!(edited.top, 10);
        assert_eq!(edited.right, 10);
        assert_eq!(edited.bottom, 10);
    }

    #[test]
    fn css_shorthand_is_clockwise_from_top() {
        let sides = Sides {
            top: 1,
            right: 2,
            bottom: 3,
            left: 4,
        };
        assert_eq!(sides.css(), "1px 2px 3px 4px");
    }

    #[test]
    fn button_width_serializes_as_percentage_string() {
        let json = serde_json::to_string(&ButtonWidth::ThreeQuarters).unwrap();
        assert_eq!(json, "\"75%\"");
        let back: ButtonWidth = serde_json::from_str("\"25%\"").unwrap();
        assert_eq!(back, ButtonWidth::Quarter);
    }
}
