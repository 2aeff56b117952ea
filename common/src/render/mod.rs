//! The rendering engine: a pure translation of an ordered block list into a
//! static HTML email document.
//!
//! [`render_block`] produces the markup for a single block and is the one
//! canonical per-type render function: the builder canvas injects its output
//! directly for the live preview, and [`render_document`] wraps the same
//! output in the table-based email scaffolding for export. The preview and
//! the exported HTML therefore cannot diverge for the same property bag.
//!
//! Rendering the same block list twice produces byte-identical markup.
//!
//! Content fields (`text.content`, button labels, footer content, column
//! bodies) are injected verbatim as raw markup; callers own sanitization.
//! Plain-text fields and attribute values go through [`escape_html`].

use thiserror::Error;

use crate::model::block::{
    Block, BlockBody, ButtonProps, Columns2Props, DividerProps, FooterProps, HeaderProps,
    ImageProps, SpacerProps, TextProps,
};

const FONT_STACK: &str = "Arial,Helvetica,sans-serif";

/// Canvas width of the exported email body, in pixels.
pub const DOCUMENT_WIDTH: u32 = 600;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Zero-block documents must not be exported; the empty-canvas
    /// placeholder is a builder affordance, not email content.
    #[error("template has no blocks to export")]
    EmptyTemplate,
}

/// Escapes `&`, `<`, `>`, `"` and `'` for safe embedding in markup.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn font_weight(bold: bool) -> &'static str {
    if bold { "700" } else { "400" }
}

/// Renders one block to its markup. Dispatches on the block type; each arm is
/// a pure mapping from the property bag to inline-styled markup.
pub fn render_block(block: &Block) -> String {
    match &block.body {
        BlockBody::Header(p) => render_header(p),
        BlockBody::Text(p) => render_text(p, block.rich_text.as_deref()),
        BlockBody::Image(p) => render_image(p),
        BlockBody::Button(p) => render_button(p, block.rich_text.as_deref()),
        BlockBody::Spacer(p) => render_spacer(p),
        BlockBody::Divider(p) => render_divider(p),
        BlockBody::Footer(p) => render_footer(p),
        BlockBody::Columns2(p) => render_columns2(p),
    }
}

fn render_header(p: &HeaderProps) -> String {
    format!(
        "<h1 style=\"margin:{};padding:{};color:{};font-size:{}px;font-weight:{};\
         text-align:{};background-color:{};font-family:{};line-height:1.2;\">{}</h1>",
        p.margin.css(),
        p.padding.css(),
        p.color,
        p.font_size,
        font_weight(p.bold),
        p.align.css(),
        p.background,
        FONT_STACK,
        escape_html(&p.text),
    )
}

fn render_text(p: &TextProps, rich_text: Option<&str>) -> String {
    let content = rich_text.unwrap_or(&p.content);
    format!(
        "<div style=\"padding:{};color:{};font-size:{}px;line-height:{};\
         text-align:{};font-family:{};\">{}</div>",
        p.padding.css(),
        p.color,
        p.font_size,
        p.line_height,
        p.align.css(),
        FONT_STACK,
        content,
    )
}

fn render_image(p: &ImageProps) -> String {
    let img = format!(
        "<img src=\"{}\" alt=\"{}\" width=\"{}\" style=\"display:inline-block;\
         width:{}px;max-width:100%;object-fit:{};border-radius:{}px;\
         border:{}px solid {};\"/>",
        escape_html(&p.src),
        escape_html(&p.alt),
        p.width,
        p.width,
        p.object_fit.css(),
        p.border_radius,
        p.border_width,
        p.border_color,
    );
    let inner = if p.link_url.is_empty() {
        img
    } else {
        format!(
            "<a href=\"{}\" target=\"_blank\" style=\"text-decoration:none;\">{}</a>",
            escape_html(&p.link_url),
            img
        )
    };
    format!(
        "<div style=\"text-align:{};font-size:0;\">{}</div>",
        p.align.css(),
        inner
    )
}

fn render_button(p: &ButtonProps, rich_text: Option<&str>) -> String {
    let label = rich_text.unwrap_or(&p.content);
    format!(
        "<div style=\"text-align:{};\">\
         <a href=\"{}\" target=\"_blank\" style=\"display:inline-block;width:{};\
         padding:{};background-color:{};color:{};font-size:{}px;font-weight:{};\
         text-align:center;text-decoration:none;border-radius:{}px;\
         font-family:{};\">{}</a></div>",
        p.align.css(),
        escape_html(&p.url),
        p.width.css(),
        p.padding.css(),
        p.background,
        p.color,
        p.font_size,
        font_weight(p.bold),
        p.border_radius,
        FONT_STACK,
        label,
    )
}

fn render_spacer(p: &SpacerProps) -> String {
    format!(
        "<div style=\"height:{}px;background-color:{};font-size:1px;line-height:1px;\">&nbsp;</div>",
        p.height, p.background
    )
}

fn render_divider(p: &DividerProps) -> String {
    format!(
        "<div style=\"padding:{};\"><hr style=\"border:none;border-top:{}px {} {};\
         width:{}%;margin:0 auto;\"/></div>",
        p.padding.css(),
        p.thickness,
        p.style.css(),
        p.color,
        p.width_percent,
    )
}

fn render_footer(p: &FooterProps) -> String {
    format!(
        "<div style=\"padding:{};color:{};font-size:{}px;text-align:{};\
         background-color:{};font-family:{};\">{}</div>",
        p.padding.css(),
        p.color,
        p.font_size,
        p.align.css(),
        p.background,
        FONT_STACK,
        p.content,
    )
}

fn render_columns2(p: &Columns2Props) -> String {
    let half_gap = p.gap / 2;
    format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"padding:{};font-family:{};\"><tr>\
         <td valign=\"top\" style=\"width:50%;padding-right:{}px;\">{}</td>\
         <td valign=\"top\" style=\"width:50%;padding-left:{}px;\">{}</td>\
         </tr></table>",
        p.padding.css(),
        FONT_STACK,
        half_gap,
        p.left,
        half_gap,
        p.right,
    )
}

/// Renders the complete send-ready email document: inlined styles, table
/// layout, one row per block in list order. Refuses zero-block documents.
pub fn render_document(blocks: &[Block]) -> Result<String, RenderError> {
    if blocks.is_empty() {
        return Err(RenderError::EmptyTemplate);
    }

    let mut rows = String::new();
    for block in blocks {
        rows.push_str("<tr><td style=\"padding:0;\">");
        rows.push_str(&render_block(block));
        rows.push_str("</td></tr>");
    }

    Ok(format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\
         </head>\
         <body style=\"margin:0;padding:0;background-color:#f3f4f6;\">\
         <table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\">\
         <tr><td align=\"center\" style=\"padding:24px 0;\">\
         <table role=\"presentation\" width=\"{DOCUMENT_WIDTH}\" cellpadding=\"0\" cellspacing=\"0\" \
         style=\"width:{DOCUMENT_WIDTH}px;max-width:100%;background-color:#ffffff;\">\
         {rows}\
         </table></td></tr></table></body></html>"
    ))
}
