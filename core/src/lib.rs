//! View-model core for the todo list page.
//!
//! # Overview
//! Holds the list of todos and the inline-edit cursor, renders them to HTML
//! markup, and turns user actions into requests against the `/api/todos`
//! collection. The core never touches the network: requests are plain data
//! executed by a host-supplied [`Transport`].
//!
//! # Design
//! - `TodoClient` is stateless and split into `build_*` / `parse_*` pairs.
//! - `ViewState::apply` is a pure reducer; `render_*` are pure functions.
//! - `TodoApp` owns the only `ViewState` and applies a change only after the
//!   server confirms it.
//! - Failed actions return `ActionError`, whose `Display` is the message to
//!   show the user.

pub mod client;
pub mod controller;
pub mod error;
pub mod escape;
pub mod http;
pub mod render;
pub mod state;
pub mod types;

pub use client::TodoClient;
pub use controller::TodoApp;
pub use error::{ActionError, ApiError, TransportError};
pub use escape::escape_html;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use render::{render_list, render_page, render_stats, Stats, EMPTY_MESSAGE};
pub use state::{Change, ViewState};
pub use types::{DeleteStatus, EditTodo, NewTodo, TodoItem};
