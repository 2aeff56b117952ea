//! Runtime state for the builder component.

use std::collections::HashSet;

use yew::NodeRef;

use crate::builder::canvas::DragSource;
use crate::document::TemplateDocument;

/// Binding of the code-view panel to one block's rich-content field.
pub struct CodeViewBinding {
    pub block_id: String,
    pub initial_html: String,
    /// Token held in the overlay registry while the panel is mounted.
    pub overlay_token: String,
}

pub struct BuilderComponent {
    /// The single source of truth every palette/canvas/editor read derives
    /// from; the only writer path for blocks.
    pub document: TemplateDocument,

    /// Name under which the template is saved; edited in the toolbar.
    pub template_name: String,

    /// Inline validation message on the name input (duplicate name, empty name).
    pub name_error: Option<String>,

    /// In-flight guards: a second save/load triggered while one is
    /// outstanding is dropped, not queued.
    pub saving: bool,
    pub loading: bool,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// The active drag, mirrored from dragstart because `DataTransfer` data
    /// is unreadable during dragover.
    pub drag: Option<DragSource>,

    /// Insertion index previewed during a palette drag; drawn as a marker
    /// and consumed on drop. Cleared without mutation on an aborted drag.
    pub insertion_marker: Option<usize>,

    pub code_view: Option<CodeViewBinding>,

    /// Overlays that must keep the current selection alive: while non-empty,
    /// background clicks do not clear selection. Overlays register a token
    /// for the duration of their mount.
    pub overlay_registry: HashSet<String>,

    pub canvas_ref: NodeRef,
}

impl BuilderComponent {
    pub fn new() -> Self {
        Self {
            document: TemplateDocument::new(),
            template_name: String::new(),
            name_error: None,
            saving: false,
            loading: false,
            loaded: false,
            drag: None,
            insertion_marker: None,
            code_view: None,
            overlay_registry: HashSet::new(),
            canvas_ref: NodeRef::default(),
        }
    }
}
