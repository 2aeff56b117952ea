//! The block model: one typed, positioned content unit within a template.
//!
//! A template artifact is `Vec<Block>` serialized as a bare JSON array of
//! `{id, type, props, richText?}` objects, no wrapper envelope. The `type`
//! and `props` pair is an adjacently tagged [`BlockBody`] flattened into the
//! block, so each block type gets its own typed property bag while the wire
//! shape stays exactly what the builder persists and re-hydrates.
//!
//! Every property bag field carries a default, and the bags deserialize with
//! `#[serde(default)]`: a field absent from a stored bag means "apply the
//! type's default", never null/invalid.

use serde::{Deserialize, Serialize};

use crate::model::props::{Align, ButtonWidth, DividerStyle, ObjectFit, Sides};

/// Closed enumeration of block types. The renderer supports all of them;
/// the interactive palette exposes the subset in [`BlockKind::PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Header,
    Text,
    Image,
    Button,
    Spacer,
    Divider,
    Footer,
    Columns2,
}

impl BlockKind {
    /// Block types exposed by the builder palette, in display order.
    pub const PALETTE: [BlockKind; 5] = [
        BlockKind::Button,
        BlockKind::Image,
        BlockKind::Header,
        BlockKind::Text,
        BlockKind::Spacer,
    ];

    /// The identifier used in block ids and in the persisted `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Spacer => "spacer",
            BlockKind::Divider => "divider",
            BlockKind::Footer => "footer",
            BlockKind::Columns2 => "columns2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Header => "Header",
            BlockKind::Text => "Text",
            BlockKind::Image => "Image",
            BlockKind::Button => "Button",
            BlockKind::Spacer => "Spacer",
            BlockKind::Divider => "Divider",
            BlockKind::Footer => "Footer",
            BlockKind::Columns2 => "Two columns",
        }
    }

    /// The block type registry: maps a type to its default property bag.
    /// Pure and total over the enumeration.
    pub fn default_props(self) -> BlockBody {
        match self {
            BlockKind::Header => BlockBody::Header(HeaderProps::default()),
            BlockKind::Text => BlockBody::Text(TextProps::default()),
            BlockKind::Image => BlockBody::Image(ImageProps::default()),
            BlockKind::Button => BlockBody::Button(ButtonProps::default()),
            BlockKind::Spacer => BlockBody::Spacer(SpacerProps::default()),
            BlockKind::Divider => BlockBody::Divider(DividerProps::default()),
            BlockKind::Footer => BlockBody::Footer(FooterProps::default()),
            BlockKind::Columns2 => BlockBody::Columns2(Columns2Props::default()),
        }
    }
}

/// Type tag plus property bag, serialized as sibling `type`/`props` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum BlockBody {
    Header(HeaderProps),
    Text(TextProps),
    Image(ImageProps),
    Button(ButtonProps),
    Spacer(SpacerProps),
    Divider(DividerProps),
    Footer(FooterProps),
    Columns2(Columns2Props),
}

impl BlockBody {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockBody::Header(_) => BlockKind::Header,
            BlockBody::Text(_) => BlockKind::Text,
            BlockBody::Image(_) => BlockKind::Image,
            BlockBody::Button(_) => BlockKind::Button,
            BlockBody::Spacer(_) => BlockKind::Spacer,
            BlockBody::Divider(_) => BlockKind::Divider,
            BlockBody::Footer(_) => BlockKind::Footer,
            BlockBody::Columns2(_) => BlockKind::Columns2,
        }
    }

    /// The block's primary rich-content field, for types that have one.
    /// This is what the code-view escape hatch reads and writes.
    pub fn content(&self) -> Option<&str> {
        match self {
            BlockBody::Header(p) => Some(&p.text),
            BlockBody::Text(p) => Some(&p.content),
            BlockBody::Button(p) => Some(&p.content),
            BlockBody::Footer(p) => Some(&p.content),
            BlockBody::Image(_)
            | BlockBody::Spacer(_)
            | BlockBody::Divider(_)
            | BlockBody::Columns2(_) => None,
        }
    }

    /// Writes the primary rich-content field. Returns `false` for block
    /// types without one, leaving the bag untouched.
    pub fn set_content(&mut self, html: &str) -> bool {
        match self {
            BlockBody::Header(p) => p.text = html.to_string(),
            BlockBody::Text(p) => p.content = html.to_string(),
            BlockBody::Button(p) => p.content = html.to_string(),
            BlockBody::Footer(p) => p.content = html.to_string(),
            BlockBody::Image(_)
            | BlockBody::Spacer(_)
            | BlockBody::Divider(_)
            | BlockBody::Columns2(_) => return false,
        }
        true
    }
}

/// The atomic unit of a template. `id` is the sole correlation key between
/// the document model, the render tree, and drag-and-drop item identity;
/// ids are unique within one template and never reused after removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub body: BlockBody,
    /// Raw HTML fragment produced by the external rich-text widget, when the
    /// block's label content was edited through it. Takes precedence over the
    /// property bag's content field at render time.
    #[serde(rename = "richText", default, skip_serializing_if = "Option::is_none")]
    pub rich_text: Option<String>,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        self.body.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderProps {
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub bold: bool,
    pub align: Align,
    pub background: String,
    pub padding: Sides,
    pub margin: Sides,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            text: "Your title here".to_string(),
            color: "#1f2937".to_string(),
            font_size: 28,
            bold: true,
            align: Align::Center,
            background: "transparent".to_string(),
            padding: Sides::symmetric(16, 24),
            margin: Sides::uniform(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProps {
    /// HTML fragment, injected verbatim at render time.
    pub content: String,
    pub color: String,
    pub font_size: u32,
    pub line_height: f32,
    pub align: Align,
    pub padding: Sides,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            content: "<p>Write your text here.</p>".to_string(),
            color: "#374151".to_string(),
            font_size: 16,
            line_height: 1.5,
            align: Align::Left,
            padding: Sides::symmetric(12, 24),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub link_url: String,
    /// Free pixel width, unlike the button's constrained width enumeration.
    pub width: u32,
    pub align: Align,
    pub border_radius: u32,
    pub object_fit: ObjectFit,
    pub border_width: u32,
    pub border_color: String,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: "https://placehold.co/600x200".to_string(),
            alt: String::new(),
            link_url: String::new(),
            width: 600,
            align: Align::Center,
            border_radius: 0,
            object_fit: ObjectFit::Cover,
            border_width: 0,
            border_color: "#e5e7eb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonProps {
    /// Label markup, injected verbatim; superseded by `Block::rich_text`.
    pub content: String,
    pub url: String,
    pub background: String,
    pub color: String,
    pub width: ButtonWidth,
    pub align: Align,
    pub font_size: u32,
    pub bold: bool,
    pub border_radius: u32,
    pub padding: Sides,
}

impl ButtonProps {
    /// The "rounded" shape preset constant for buttons.
    pub const ROUNDED_RADIUS: u32 = 8;
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            content: "Click me".to_string(),
            url: "#".to_string(),
            background: "#2563eb".to_string(),
            color: "#ffffff".to_string(),
            width: ButtonWidth::Half,
            align: Align::Center,
            font_size: 16,
            bold: true,
            border_radius: Self::ROUNDED_RADIUS,
            padding: Sides::symmetric(12, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpacerProps {
    pub height: u32,
    pub background: String,
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self {
            height: 32,
            background: "transparent".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerProps {
    pub color: String,
    pub thickness: u32,
    pub style: DividerStyle,
    pub width_percent: u32,
    pub padding: Sides,
}

impl Default for DividerProps {
    fn default() -> Self {
        Self {
            color: "#e5e7eb".to_string(),
            thickness: 1,
            style: DividerStyle::Solid,
            width_percent: 100,
            padding: Sides::symmetric(8, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterProps {
    pub content: String,
    pub color: String,
    pub font_size: u32,
    pub align: Align,
    pub background: String,
    pub padding: Sides,
}

impl Default for FooterProps {
    fn default() -> Self {
        Self {
            content: "<p>You received this email because you signed up.</p>".to_string(),
            color: "#6b7280".to_string(),
            font_size: 12,
            align: Align::Center,
            background: "#f9fafb".to_string(),
            padding: Sides::symmetric(16, 24),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Columns2Props {
    pub left: String,
    pub right: String,
    pub gap: u32,
    pub padding: Sides,
}

impl Default for Columns2Props {
    fn default() -> Self {
        Self {
            left: "<p>Left column</p>".to_string(),
            right: "<p>Right column</p>".to_string(),
            gap: 16,
            padding: Sides::symmetric(12, 24),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_defaults_are_idempotent() {
        for kind in [
            BlockKind::Header,
            BlockKind::Text,
            BlockKind::Image,
            BlockKind::Button,
            BlockKind::Spacer,
            BlockKind::Divider,
            BlockKind::Footer,
            BlockKind::Columns2,
        ] {
            assert_eq!(kind.default_props(), kind.default_props());
            assert_eq!(kind.default_props().kind(), kind);
        }
    }

    #[test]
    fn block_serializes_to_flat_id_type_props_shape() {
        let block = Block {
            id: "button-1700000000000".to_string(),
            body: BlockKind::Button.default_props(),
            rich_text: None,
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["id"], "button-1700000000000");
        assert_eq!(value["type"], "button");
        assert_eq!(value["props"]["width"], "50%");
        // richText is omitted entirely when absent, not serialized as null.
        assert!(value.get("richText").is_none());
    }

    #[test]
    fn rich_text_round_trips_when_present() {
        let block = Block {
            id: "button-1".to_string(),
            body: BlockKind::Button.default_props(),
            rich_text: Some("<b>Buy now</b>".to_string()),
        };
        let json = serde_json::to_string(&block).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn absent_props_fields_deserialize_to_type_defaults() {
        let json = r#"{"id":"header-9","type":"header","props":{"text":"Hi"}}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let BlockBody::Header(props) = &block.body else {
            panic!("expected header body");
        };
        assert_eq!(props.text, "Hi");
        assert_eq!(props.font_size, HeaderProps::default().font_size);
        assert_eq!(props.align, HeaderProps::default().align);
    }

    #[test]
    fn unknown_props_fields_are_tolerated() {
        let json = r#"{"id":"spacer-1","type":"spacer","props":{"height":10,"legacy":true}}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        let BlockBody::Spacer(props) = &block.body else {
            panic!("expected spacer body");
        };
        assert_eq!(props.height, 10);
    }

    #[test]
    fn set_content_writes_the_rich_content_field_only_where_one_exists() {
        let mut body = BlockKind::Text.default_props();
        assert!(body.set_content("<p>edited</p>"));
        assert_eq!(body.content(), Some("<p>edited</p>"));

        let mut spacer = BlockKind::Spacer.default_props();
        let before = spacer.clone();
        assert!(!spacer.set_content("<p>ignored</p>"));
        assert_eq!(spacer, before);
    }

    #[test]
    fn palette_is_the_documented_subset() {
        assert_eq!(
            BlockKind::PALETTE,
            [
                BlockKind::Button,
                BlockKind::Image,
                BlockKind::Header,
                BlockKind::Text,
                BlockKind::Spacer,
            ]
        );
    }
}
