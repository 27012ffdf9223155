use crate::app::App;

mod app;
mod components;
mod controller;

fn main() {
    yew::Renderer::<App>::new().render();
}
