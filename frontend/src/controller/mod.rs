//! Form controller for the watchers page, kept free of Yew and of the browser
//! so its behavior can be driven from tests.
//!
//! - `form`: the input reader and validity gate.
//! - `dispatch`: the `Backend`/`Navigator` seams and the action dispatcher
//!   that owns the error surface.
//! - `browser`: the `gloo-net`/`web-sys` implementations of those seams.

pub mod browser;
pub mod dispatch;
pub mod error;
pub mod form;

pub use dispatch::{Dashboard, FormController};
pub use form::WatcherForm;
