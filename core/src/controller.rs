//! Action handlers that keep the view state in sync with the server.
//!
//! # Design
//! `TodoApp` is the single owner of the `ViewState`. Every handler follows
//! the same shape: validate locally, build a request with `TodoClient`, run
//! it through the host's `Transport`, and only after a 2xx response feed the
//! parsed item to the reducer. A failed handler leaves the state exactly as
//! it was and returns an `ActionError` for the host to present.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::{ActionError, ApiError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::{self, Stats};
use crate::state::{Change, ViewState};
use crate::types::{EditTodo, NewTodo, TodoItem};

/// The todo view-model: state, API client and transport.
#[derive(Debug)]
pub struct TodoApp<T> {
    client: TodoClient,
    transport: T,
    state: ViewState,
}

impl<T: Transport> TodoApp<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn render(&self) -> String {
        render::render_list(&self.state)
    }

    pub fn render_page(&self) -> String {
        render::render_page(&self.state)
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.state)
    }

    /// Replace the list with the server's copy.
    pub fn load(&mut self) -> Result<(), ActionError> {
        let request = self.client.build_list_todos();
        let response = self.send(request)?;
        let todos = self
            .client
            .parse_list_todos(response)
            .map_err(|e| rejected(e, |status| ActionError::LoadRejected { status }))?;
        debug!(count = todos.len(), "loaded todos");
        self.update(Change::Loaded(todos));
        Ok(())
    }

    /// Create an item from `input`. On `Ok` the host should clear its input.
    pub fn add(&mut self, input: &str) -> Result<&TodoItem, ActionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ActionError::EmptyInput);
        }
        let request = self
            .client
            .build_create_todo(&NewTodo {
                text: text.to_string(),
            })
            .map_err(ActionError::Api)?;
        let response = self.send(request)?;
        let item = self
            .client
            .parse_create_todo(response)
            .map_err(|e| rejected(e, |status| ActionError::AddRejected { status }))?;
        let id = item.id;
        self.update(Change::Added(item));
        self.item(id)
    }

    /// Flip `completed` on the server and adopt the returned item.
    pub fn toggle(&mut self, id: Uuid) -> Result<&TodoItem, ActionError> {
        self.require(id)?;
        let request = self.client.build_toggle_todo(id);
        let response = self.send(request)?;
        let item = self
            .client
            .parse_toggle_todo(response)
            .map_err(|e| rejected(e, |status| ActionError::ToggleRejected { status }))?;
        self.update(Change::Replaced(item));
        self.item(id)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<(), ActionError> {
        self.require(id)?;
        let request = self.client.build_delete_todo(id);
        let response = self.send(request)?;
        self.client
            .parse_delete_todo(response)
            .map_err(|e| rejected(e, |status| ActionError::DeleteRejected { status }))?;
        self.update(Change::Removed(id));
        Ok(())
    }

    /// Put `id` into inline-edit mode. No request is issued.
    pub fn start_edit(&mut self, id: Uuid) -> Result<(), ActionError> {
        self.require(id)?;
        self.update(Change::EditStarted(id));
        Ok(())
    }

    /// Leave edit mode without saving. No request is issued.
    pub fn cancel_edit(&mut self) {
        self.update(Change::EditCancelled);
    }

    /// Send the edited text for `id` and leave edit mode on success.
    pub fn save_edit(&mut self, id: Uuid, input: &str) -> Result<&TodoItem, ActionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(ActionError::EmptyEdit);
        }
        self.require(id)?;
        let request = self
            .client
            .build_edit_todo(
                id,
                &EditTodo {
                    text: text.to_string(),
                },
            )
            .map_err(ActionError::Api)?;
        let response = self.send(request)?;
        let item = self
            .client
            .parse_edit_todo(response)
            .map_err(|e| rejected(e, |status| ActionError::SaveRejected { status }))?;
        self.update(Change::Saved(item));
        self.item(id)
    }

    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, ActionError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).inspect_err(|e| {
            warn!(error = %e, "transport failure");
        })?;
        if !response.is_ok() {
            warn!(status = response.status, body = %response.body, "request rejected");
        }
        Ok(response)
    }

    fn update(&mut self, change: Change) {
        self.state = std::mem::take(&mut self.state).apply(change);
    }

    fn require(&self, id: Uuid) -> Result<(), ActionError> {
        if self.state.contains(id) {
            Ok(())
        } else {
            Err(ActionError::UnknownTodo(id))
        }
    }

    fn item(&self, id: Uuid) -> Result<&TodoItem, ActionError> {
        self.state.get(id).ok_or(ActionError::UnknownTodo(id))
    }
}

/// Turn a parse failure into the action's rejection when the server
/// answered with an error status; anything else propagates as-is.
fn rejected(err: ApiError, on_status: impl FnOnce(u16) -> ActionError) -> ActionError {
    match err.status() {
        Some(status) => on_status(status),
        None => ActionError::Api(err),
    }
}
