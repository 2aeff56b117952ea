//! The email template builder: palette, canvas, property editors and the
//! save/load boundary, arranged around a single owned `TemplateDocument`.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::LoadTemplateResponse;

use crate::document::TemplateDocument;

pub mod canvas;
pub mod code_view;
pub mod editors;
pub mod helpers;
pub mod messages;
pub mod props;
pub mod state;
pub mod update;
pub mod view;

use messages::Msg;
use props::BuilderProps;
use state::BuilderComponent;

impl Component for BuilderComponent {
    type Message = Msg;
    type Properties = BuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.loaded {
            return;
        }
        self.loaded = true;

        match ctx.props().template_name.clone() {
            Some(name) => {
                self.loading = true;
                self.template_name = name.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    // Names may contain spaces and other URL-significant
                    // characters; the path segment must be encoded.
                    let url = format!(
                        "/api/templates/{}",
                        js_sys::encode_uri_component(&name)
                    );
                    let response = match Request::get(&url).send().await {
                        Ok(response) if response.status() == 200 => response,
                        Ok(response) => {
                            link.send_message(Msg::LoadFailed(format!(
                                "status {}",
                                response.status()
                            )));
                            return;
                        }
                        Err(err) => {
                            link.send_message(Msg::LoadFailed(err.to_string()));
                            return;
                        }
                    };
                    let body = match response.json::<LoadTemplateResponse>().await {
                        Ok(body) => body,
                        Err(err) => {
                            link.send_message(Msg::LoadFailed(err.to_string()));
                            return;
                        }
                    };
                    match TemplateDocument::hydrate(&body.json_data) {
                        Ok(document) => link.send_message(Msg::TemplateLoaded(document)),
                        Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                    }
                });
            }
            None => {
                // Fresh session: offer the crash-recovery snapshot, if any.
                if let Some(blocks) = helpers::read_snapshot() {
                    if !blocks.is_empty() {
                        ctx.link()
                            .send_message(Msg::DraftRecovered(TemplateDocument::recovered(blocks)));
                    }
                }
            }
        }
    }
}
