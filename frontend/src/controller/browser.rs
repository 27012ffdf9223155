//! Browser implementations of the controller seams.

use gloo_net::http::Request;

use super::dispatch::{Backend, HttpMethod, Navigator};
use super::error::{ClientError, ClientResult};

const JSON: &str = "application/json";

/// Same-origin JSON requests through `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooBackend;

impl Backend for GlooBackend {
    async fn send(&self, method: HttpMethod, path: &str, body: Option<String>) -> ClientResult<String> {
        let builder = match method {
            HttpMethod::Get => Request::get(path),
            HttpMethod::Post => Request::post(path),
            HttpMethod::Delete => Request::delete(path),
        }
        .header("Accept", JSON)
        .header("Content-Type", JSON);

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(request_error)?;

        let response = request.send().await.map_err(request_error)?;
        response.text().await.map_err(request_error)
    }
}

fn request_error(err: gloo_net::Error) -> ClientError {
    ClientError::Request(err.to_string())
}

/// `window.confirm` and `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if window.location().reload().is_err() {
                gloo_console::error!("could not reload the page");
            }
        }
    }

    fn redirect(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                gloo_console::error!(format!("could not navigate to {path}"));
            }
        }
    }
}
