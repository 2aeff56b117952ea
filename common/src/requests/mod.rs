//! Request and response payloads exchanged between the builder frontend and
//! the template store.

use serde::{Deserialize, Serialize};

/// Characters a template name must not contain: the name is embedded in the
/// `/api/templates/{name}` URL paths, where these break route matching.
pub const RESERVED_NAME_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// Whether a (trimmed) template name can be stored and addressed by URL.
pub fn name_is_well_formed(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && !name.contains(&RESERVED_NAME_CHARS[..])
}

/// Payload for `POST /api/templates/save`. Carries both artifacts produced at
/// save time: the re-editable JSON block list and the send-ready HTML
/// document, generated from the same block list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
    pub html: String,
    pub json: String,
    /// `true` when re-saving a template that already has a server identity.
    /// A first save onto an existing name is the duplicate-name conflict.
    #[serde(default)]
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTemplateResponse {
    pub html_url: String,
    pub json_url: String,
}

/// Response for `GET /api/templates/{name}`. The caller parses `json_data`
/// into its block list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTemplateResponse {
    pub json_data: String,
}

/// One row of `GET /api/templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub name: String,
    /// Milliseconds since the Unix epoch of the last save.
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_with_path_breaking_characters_are_rejected() {
        for name in ["q/a", "back\\slash", "what?", "frag#ment", "100%"] {
            assert!(!name_is_well_formed(name), "{name} must be rejected");
        }
        assert!(!name_is_well_formed(""));
        assert!(!name_is_well_formed("   "));
    }

    #[test]
    fn ordinary_names_are_accepted() {
        for name in ["newsletter", "Spring Promo 2026", "  padded  ", "draft-v2"] {
            assert!(name_is_well_formed(name), "{name} must be accepted");
        }
    }
}
