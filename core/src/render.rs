//! Markup rendering for the todo list.
//!
//! # Design
//! Every function here is a pure `&ViewState -> String`. User text always
//! goes through [`escape_html`]; ids are UUIDs and are emitted verbatim.
//! Controls carry `data-action` and `data-id` so a host can route clicks
//! back to the matching `TodoApp` handler.

use uuid::Uuid;

use crate::escape::escape_html;
use crate::state::ViewState;
use crate::types::TodoItem;

pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

/// Aggregate counts shown under the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn of(state: &ViewState) -> Self {
        let todos = state.todos();
        Self {
            total: todos.len(),
            completed: todos.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total)
    }

    pub fn completed_label(&self) -> String {
        format!("Completed: {}", self.completed)
    }
}

/// Render the list region.
pub fn render_list(state: &ViewState) -> String {
    if state.is_empty() {
        return format!("<div class=\"empty-state\">{EMPTY_MESSAGE}</div>");
    }
    let mut out = String::new();
    for todo in state.todos() {
        if state.is_editing(todo.id) {
            out.push_str(&render_editing(todo));
        } else {
            out.push_str(&render_item(todo));
        }
        out.push('\n');
    }
    out
}

/// Render the stats region.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "<div class=\"stats\"><span id=\"total-count\">{}</span> <span id=\"completed-count\">{}</span></div>",
        stats.total_label(),
        stats.completed_label()
    )
}

/// Render a complete HTML document: add form, list and stats.
pub fn render_page(state: &ViewState) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Todo List</title>
</head>
<body>
<div class="container">
<h1>Todo List</h1>
<div class="add-todo">
<input type="text" id="todo-input" placeholder="What needs to be done?">
<button id="add-btn" data-action="add">Add</button>
</div>
<div id="todo-list">
{list}</div>
{stats}
</div>
</body>
</html>
"#,
        list = render_list(state),
        stats = render_stats(&Stats::of(state)),
    )
}

/// Id of the inline edit input for `id`.
pub fn edit_input_id(id: Uuid) -> String {
    format!("edit-input-{id}")
}

fn render_item(todo: &TodoItem) -> String {
    let id = todo.id;
    let (class, checked) = if todo.completed {
        ("todo-item completed", " checked")
    } else {
        ("todo-item", "")
    };
    format!(
        concat!(
            r#"<div class="{class}" data-id="{id}">"#,
            r#"<input type="checkbox" class="todo-checkbox" data-action="toggle" data-id="{id}"{checked}>"#,
            r#"<span class="todo-text">{text}</span>"#,
            r#"<div class="todo-actions">"#,
            r#"<button class="edit-btn" data-action="edit" data-id="{id}">Edit</button>"#,
            r#"<button class="delete-btn" data-action="delete" data-id="{id}">Delete</button>"#,
            r#"</div></div>"#,
        ),
        class = class,
        id = id,
        checked = checked,
        text = escape_html(&todo.text),
    )
}

fn render_editing(todo: &TodoItem) -> String {
    let id = todo.id;
    format!(
        concat!(
            r#"<div class="todo-item editing" data-id="{id}">"#,
            r#"<input type="text" class="edit-input" id="{input_id}" value="{text}">"#,
            r#"<div class="todo-actions">"#,
            r#"<button class="save-btn" data-action="save" data-id="{id}">Save</button>"#,
            r#"<button class="cancel-btn" data-action="cancel" data-id="{id}">Cancel</button>"#,
            r#"</div></div>"#,
        ),
        id = id,
        input_id = edit_input_id(id),
        text = escape_html(&todo.text),
    )
}
