mod app;
mod builder;
mod document;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
