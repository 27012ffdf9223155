use std::cell::{Ref, RefCell};

use common::model::playlist::Playlist;
use common::model::watcher::Watcher;
use common::responses::{Envelope, PlaylistsResponse, WatchersResponse};
use common::routes;

use super::error::ClientResult;
use super::form::WatcherForm;

/// Shown before the account and everything attached to it is deleted.
pub const DELETE_ACCOUNT_MESSAGE: &str = "Are you sure? This will delete your connected data and watchers. Your Spotify account will be untouched, and you can always reconnect later";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// Sends one JSON request and hands back the raw response body, whatever the
/// HTTP status was.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> ClientResult<String>;
}

/// Page-level effects of the dispatcher.
pub trait Navigator {
    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
    fn redirect(&self, path: &str);
}

/// Everything the page renders besides the form itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub watchers: Vec<Watcher>,
    pub playlists: Vec<Playlist>,
}

/// Owns the create form, the error region text and the two seams every action
/// goes through.
///
/// Actions never inspect HTTP status codes: a body with `success: true`
/// navigates, anything else puts the server's message in the error region and
/// leaves the page alone.
pub struct FormController<B, N> {
    backend: B,
    navigator: N,
    form: RefCell<WatcherForm>,
    error: RefCell<Option<String>>,
}

impl<B: Backend, N: Navigator> FormController<B, N> {
    pub fn new(backend: B, navigator: N, form: WatcherForm) -> Self {
        Self {
            backend,
            navigator,
            form: RefCell::new(form),
            error: RefCell::new(None),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn form(&self) -> Ref<'_, WatcherForm> {
        self.form.borrow()
    }

    pub fn update_form(&self, update: impl FnOnce(&mut WatcherForm)) {
        update(&mut self.form.borrow_mut());
    }

    pub fn manual_entry(&self) -> bool {
        self.form.borrow().manual_entry()
    }

    pub fn submit_disabled(&self) -> bool {
        self.form.borrow().submit_disabled()
    }

    pub fn toggle_manual_entry(&self) {
        self.form.borrow_mut().toggle_manual_entry();
    }

    /// Text of the error region; `None` while the region is hidden.
    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn clear_error(&self) {
        self.error.replace(None);
    }

    fn set_error(&self, message: Option<String>) {
        self.error.replace(Some(message.unwrap_or_default()));
    }

    /// Fetch the watchers and playlists the page renders.
    pub async fn load(&self) -> ClientResult<Dashboard> {
        let body = self.backend.send(HttpMethod::Get, routes::WATCHERS, None).await?;
        let watchers = serde_json::from_str::<WatchersResponse>(&body)?.watchers;

        let body = self.backend.send(HttpMethod::Get, routes::PLAYLISTS, None).await?;
        let playlists = serde_json::from_str::<PlaylistsResponse>(&body)?.playlists;

        Ok(Dashboard { watchers, playlists })
    }

    pub async fn submit_create(&self) -> ClientResult<()> {
        self.clear_error();

        let draft = self.form.borrow().draft();
        let body = serde_json::to_string(&draft)?;

        if self.dispatch(HttpMethod::Post, routes::WATCHERS, Some(body)).await? {
            self.navigator.reload();
        }
        Ok(())
    }

    pub async fn delete_watcher(&self, id: u32) -> ClientResult<()> {
        self.clear_error();

        if self.dispatch(HttpMethod::Delete, &routes::watcher(id), None).await? {
            self.navigator.reload();
        }
        Ok(())
    }

    pub async fn sync_watcher(&self, id: u32) -> ClientResult<()> {
        self.clear_error();

        if self.dispatch(HttpMethod::Post, &routes::watcher_sync(id), None).await? {
            self.navigator.reload();
        }
        Ok(())
    }

    /// Asks before the account is deleted. Accepting starts the action, so the
    /// error region is hidden right away; declining leaves it untouched.
    pub fn confirm_account_deletion(&self) -> bool {
        if !self.navigator.confirm(DELETE_ACCOUNT_MESSAGE) {
            return false;
        }

        self.clear_error();
        true
    }

    /// Deletes the account and leaves for the root page, since nothing on the
    /// current page belongs to anyone anymore. Only call once
    /// `confirm_account_deletion` accepted.
    pub async fn delete_account(&self) -> ClientResult<()> {
        if self.dispatch(HttpMethod::Delete, routes::ME, None).await? {
            self.navigator.redirect(routes::ROOT);
        }
        Ok(())
    }

    /// Returns whether the envelope reported success; on failure the message
    /// is already in the error region.
    async fn dispatch(&self, method: HttpMethod, path: &str, body: Option<String>) -> ClientResult<bool> {
        let response = self.backend.send(method, path, body).await?;
        let envelope: Envelope = serde_json::from_str(&response)?;

        if !envelope.success {
            self.set_error(envelope.error);
            return Ok(false);
        }
        Ok(true)
    }
}
