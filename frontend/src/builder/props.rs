//! Properties for the `BuilderComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BuilderProps {
    /// Name of a persisted template to load on first render.
    ///
    /// - `Some(name)`: the builder fetches the template's JSON artifact and
    ///   hydrates the document from it. On failure it logs, shows a toast,
    ///   and falls back to an empty document.
    /// - `None` (default): a fresh document is created; if a local
    ///   crash-recovery snapshot exists, it is offered as the initial
    ///   block list.
    #[prop_or_default]
    pub template_name: Option<String>,
}
