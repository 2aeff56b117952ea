use yew::prelude::*;

use crate::builder::state::BuilderComponent;

/// Pulls an optional `?template=NAME` out of the query string so a saved
/// template can be reopened by URL.
fn template_from_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let query = search.strip_prefix('?')?;
    for pair in query.split('&') {
        if let Some(value) = pair.strip_prefix("template=") {
            if !value.is_empty() {
                return Some(js_sys::decode_uri_component(value).ok()?.into());
            }
        }
    }
    None
}

#[function_component(App)]
pub fn app() -> Html {
    let template_name = template_from_query();

    html! {
        <BuilderComponent {template_name} />
    }
}
