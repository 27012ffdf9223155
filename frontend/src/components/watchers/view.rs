//! View rendering for the watchers page.
//!
//! Element ids are the ones the page has always exposed (`#input-playlist-from`,
//! `#submit`, `#errors`, ...). Visibility is toggled with the `hidden` class.

use common::model::watcher::{SyncInterval, Watcher};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{destinations, playlist_name, toggle_label};
use super::messages::Msg;
use super::state::WatchersComponent;

pub fn view(component: &WatchersComponent, ctx: &Context<WatchersComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="watchers-root">
            { build_errors(component) }
            { build_create_form(component, link) }
            { build_watcher_list(component, link) }
            <section class="account">
                <button id="delete-account" type="button" onclick={link.callback(|_| Msg::DeleteAccount)}>
                    {"Delete account"}
                </button>
            </section>
        </div>
    }
}

fn build_errors(component: &WatchersComponent) -> Html {
    let error = component.controller.error();
    let hidden = error.is_none().then_some("hidden");

    html! {
        <div id="errors" class={classes!("errors", hidden)}>
            <p id="errors-text">{ error.unwrap_or_default() }</p>
        </div>
    }
}

fn build_create_form(component: &WatchersComponent, link: &Scope<WatchersComponent>) -> Html {
    let controller = &component.controller;
    let form = controller.form();
    let manual = form.manual_entry();
    let playlists = &component.dashboard.playlists;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id="create" {onsubmit}>
            <label for={ if manual { "input-playlist-from-manual" } else { "input-playlist-from" } }>
                { if manual { "Source playlist URL" } else { "Source playlist" } }
            </label>
            <select
                id="input-playlist-from"
                ref={component.select_ref.clone()}
                class={classes!(manual.then_some("hidden"))}
                onchange={link.callback(|e: Event| Msg::SetPlaylistFrom(e.target_unchecked_into::<HtmlSelectElement>().value()))}
            >
                <option value="" selected={form.playlist_from.is_empty()}>{"Select a playlist"}</option>
                { for playlists.iter().map(|playlist| html! {
                    <option value={playlist.id.clone()} selected={playlist.id == form.playlist_from}>
                        { playlist.name.clone() }
                    </option>
                }) }
            </select>
            <input
                id="input-playlist-from-manual"
                type="text"
                placeholder="https://open.spotify.com/playlist/..."
                ref={component.manual_ref.clone()}
                class={classes!((!manual).then_some("hidden"))}
                value={form.manual_playlist_from.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetManualPlaylistFrom(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            <button id="toggle-manual-entry" type="button" onclick={link.callback(|_| Msg::ToggleManualEntry)}>
                { toggle_label(manual) }
            </button>

            <label for="input-playlist-to">{"Destination playlist"}</label>
            <select
                id="input-playlist-to"
                onchange={link.callback(|e: Event| Msg::SetPlaylistTo(e.target_unchecked_into::<HtmlSelectElement>().value()))}
            >
                <option value="" selected={form.playlist_to.is_empty()}>{"Select a playlist"}</option>
                { for destinations(playlists).map(|playlist| html! {
                    <option value={playlist.id.clone()} selected={playlist.id == form.playlist_to}>
                        { playlist.name.clone() }
                    </option>
                }) }
            </select>

            <label for="input-sync-interval">{"Sync"}</label>
            <select
                id="input-sync-interval"
                onchange={link.callback(|e: Event| Msg::SetSyncInterval(e.target_unchecked_into::<HtmlSelectElement>().value()))}
            >
                { for SyncInterval::ALL.iter().map(|interval| {
                    let value = interval.to_string();
                    let selected = value == form.sync_interval;
                    html! {
                        <option selected={selected} value={value}>{ interval.label() }</option>
                    }
                }) }
            </select>

            <div id="should-remove-wrapper" class={classes!(manual.then_some("hidden"))}>
                <input
                    id="checkbox-should-remove"
                    type="checkbox"
                    checked={form.should_remove}
                    onchange={link.callback(|e: Event| Msg::SetShouldRemove(e.target_unchecked_into::<HtmlInputElement>().checked()))}
                />
                <label for="checkbox-should-remove">{"Remove tracks from the source playlist after syncing"}</label>
            </div>

            <button id="submit" type="submit" disabled={controller.submit_disabled()}>{"Create watcher"}</button>
        </form>
    }
}

fn build_watcher_list(component: &WatchersComponent, link: &Scope<WatchersComponent>) -> Html {
    let watchers = &component.dashboard.watchers;

    if watchers.is_empty() {
        return html! { <p class="watchers-empty">{"No watchers yet."}</p> };
    }

    html! {
        <ul class="watchers">
            { for watchers.iter().map(|watcher| build_watcher_row(component, watcher, link)) }
        </ul>
    }
}

fn build_watcher_row(component: &WatchersComponent, watcher: &Watcher, link: &Scope<WatchersComponent>) -> Html {
    let playlists = &component.dashboard.playlists;
    let id = watcher.id;

    html! {
        <li class="watcher" key={id}>
            <span class="watcher-playlists">
                { playlist_name(playlists, &watcher.playlist_from) }
                {" → "}
                { playlist_name(playlists, &watcher.playlist_to) }
            </span>
            <span class="watcher-interval">{ watcher.sync_interval.label() }</span>
            { if watcher.should_remove { html! { <span class="watcher-remove">{"removes tracks"}</span> } } else { html! {} } }
            <span class="watcher-last-sync">
                { watcher.last_sync_at.clone().unwrap_or_else(|| "never synced".to_string()) }
            </span>
            { for watcher.last_error.iter().map(|error| html! { <span class="watcher-error">{ error.clone() }</span> }) }
            <button type="button" onclick={link.callback(move |_| Msg::SyncWatcher(id))}>{"Sync"}</button>
            <button type="button" onclick={link.callback(move |_| Msg::DeleteWatcher(id))}>{"Delete"}</button>
        </li>
    }
}
