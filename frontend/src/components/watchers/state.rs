//! Component state for the watchers page.

use std::rc::Rc;

use common::model::watcher::SyncInterval;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::controller::browser::{GlooBackend, WindowNavigator};
use crate::controller::{Dashboard, FormController, WatcherForm};

pub type BrowserController = FormController<GlooBackend, WindowNavigator>;

pub struct WatchersComponent {
    /// Form values, entry mode and error text live here; the component only
    /// renders them.
    pub controller: Rc<BrowserController>,

    /// Watchers and playlists fetched on first render.
    pub dashboard: Dashboard,

    /// Guard so the dashboard is fetched once per page load.
    pub loaded: bool,

    /// Source playlist select.
    pub select_ref: NodeRef,

    /// Free-text source input.
    pub manual_ref: NodeRef,

    /// Set by the entry-mode toggle; the active source control takes focus
    /// after the next render, once it is visible.
    pub focus_pending: bool,
}

impl WatchersComponent {
    pub fn new() -> Self {
        let form = WatcherForm::new(SyncInterval::default().to_string());

        Self {
            controller: Rc::new(FormController::new(GlooBackend, WindowNavigator, form)),
            dashboard: Dashboard::default(),
            loaded: false,
            select_ref: NodeRef::default(),
            manual_ref: NodeRef::default(),
            focus_pending: false,
        }
    }

    /// Focus whichever source control the current entry mode shows.
    pub fn focus_source(&self) {
        let node = if self.controller.manual_entry() {
            &self.manual_ref
        } else {
            &self.select_ref
        };

        if let Some(element) = node.cast::<HtmlElement>() {
            element.focus().ok();
        }
    }
}
