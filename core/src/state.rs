//! View state and its pure reducer.
//!
//! # Design
//! `ViewState` is a value: `apply` consumes it and returns the next state.
//! Only confirmed server data reaches the reducer, so there is never an
//! optimistic entry to roll back. The editing cursor is local UI state and
//! is kept pointing at an existing item: any change that removes the edited
//! item also clears the cursor.

use uuid::Uuid;

use crate::types::TodoItem;

/// The list shown to the user plus the id of the item in inline-edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    todos: Vec<TodoItem>,
    editing: Option<Uuid>,
}

/// A single state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Full list fetched from the server.
    Loaded(Vec<TodoItem>),
    /// Newly created item, appended at the end.
    Added(TodoItem),
    /// Updated item from a toggle; replaces the entry with the same id.
    Replaced(TodoItem),
    /// Updated item from a saved edit; replaces the entry and leaves edit mode.
    Saved(TodoItem),
    Removed(Uuid),
    /// Enter edit mode. A later start replaces an earlier one.
    EditStarted(Uuid),
    EditCancelled,
}

impl ViewState {
    pub fn new(todos: Vec<TodoItem>) -> Self {
        Self {
            todos,
            editing: None,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn is_editing(&self, id: Uuid) -> bool {
        self.editing == Some(id)
    }

    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn apply(mut self, change: Change) -> Self {
        match change {
            Change::Loaded(todos) => {
                self.todos = todos;
                if let Some(id) = self.editing {
                    if !self.contains(id) {
                        self.editing = None;
                    }
                }
            }
            Change::Added(item) => self.todos.push(item),
            Change::Replaced(item) => self.replace(item),
            Change::Saved(item) => {
                self.replace(item);
                self.editing = None;
            }
            Change::Removed(id) => {
                self.todos.retain(|t| t.id != id);
                if self.editing == Some(id) {
                    self.editing = None;
                }
            }
            Change::EditStarted(id) => {
                if self.contains(id) {
                    self.editing = Some(id);
                }
            }
            Change::EditCancelled => self.editing = None,
        }
        self
    }

    fn replace(&mut self, item: TodoItem) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == item.id) {
            *slot = item;
        }
    }
}
