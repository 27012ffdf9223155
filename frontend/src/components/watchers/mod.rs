//! Watchers page: the create form, the list of existing watchers with their
//! sync/delete actions, and account deletion.
//!
//! Behavior lives in `crate::controller`; this module wires it to Yew.
//! `update` turns messages into controller calls and `view` renders the
//! controller's state.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::WatchersComponent;

impl Component for WatchersComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        WatchersComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if self.focus_pending {
            self.focus_pending = false;
            self.focus_source();
        }

        if first_render && !self.loaded {
            self.loaded = true;

            let controller = self.controller.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match controller.load().await {
                    Ok(dashboard) => link.send_message(Msg::Loaded(dashboard)),
                    Err(err) => gloo_console::error!(format!("could not load watchers: {err}")),
                }
            });
        }
    }
}
