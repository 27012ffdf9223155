use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::controller::error::ClientResult;

use super::messages::Msg;
use super::state::{BrowserController, WatchersComponent};

/// Returns `true` when the view should re-render.
pub fn update(component: &mut WatchersComponent, ctx: &Context<WatchersComponent>, msg: Msg) -> bool {
    let controller = &component.controller;

    match msg {
        Msg::Loaded(dashboard) => {
            component.dashboard = dashboard;
            true
        }
        Msg::SetPlaylistFrom(value) => {
            controller.update_form(|form| form.playlist_from = value);
            true
        }
        Msg::SetManualPlaylistFrom(value) => {
            controller.update_form(|form| form.manual_playlist_from = value);
            true
        }
        Msg::SetPlaylistTo(value) => {
            controller.update_form(|form| form.playlist_to = value);
            true
        }
        Msg::SetSyncInterval(value) => {
            controller.update_form(|form| form.sync_interval = value);
            true
        }
        Msg::SetShouldRemove(checked) => {
            controller.update_form(|form| form.should_remove = checked);
            true
        }
        Msg::ToggleManualEntry => {
            controller.toggle_manual_entry();
            component.focus_pending = true;
            true
        }
        Msg::Submit => {
            controller.clear_error();
            run(component, ctx, |controller| async move { controller.submit_create().await });
            true
        }
        Msg::DeleteWatcher(id) => {
            controller.clear_error();
            run(component, ctx, move |controller| async move { controller.delete_watcher(id).await });
            true
        }
        Msg::SyncWatcher(id) => {
            controller.clear_error();
            run(component, ctx, move |controller| async move { controller.sync_watcher(id).await });
            true
        }
        Msg::DeleteAccount => {
            if !controller.confirm_account_deletion() {
                return false;
            }
            run(component, ctx, |controller| async move { controller.delete_account().await });
            true
        }
        Msg::ActionFinished => true,
    }
}

/// Runs one network action and re-renders once it settles. Transport and
/// decoding failures only reach the console.
fn run<F, Fut>(component: &WatchersComponent, ctx: &Context<WatchersComponent>, action: F)
where
    F: FnOnce(Rc<BrowserController>) -> Fut + 'static,
    Fut: Future<Output = ClientResult<()>> + 'static,
{
    let controller = component.controller.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        if let Err(err) = action(controller).await {
            gloo_console::error!(format!("request failed: {err}"));
        }
        link.send_message(Msg::ActionFinished);
    });
}
