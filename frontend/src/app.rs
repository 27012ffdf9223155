use crate::components::watchers::WatchersComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main>
                <h1>{"Playlist watchers"}</h1>
                <WatchersComponent />
            </main>
        }
    }
}
