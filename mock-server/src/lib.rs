use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct NewTodo {
    pub text: String,
}

#[derive(Deserialize)]
pub struct EditTodo {
    pub text: String,
}

/// Todos in insertion order.
pub type Db = Arc<RwLock<Vec<Todo>>>;

type ApiError = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            put(toggle_todo).patch(edit_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

fn not_found(id: Uuid) -> ApiError {
    tracing::warn!(%id, "todo not found");
    error(StatusCode::NOT_FOUND, "Todo not found")
}

fn required_text(text: &str) -> Result<String, ApiError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Text is required"));
    }
    Ok(text.to_string())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = Todo {
        id: Uuid::new_v4(),
        text: required_text(&input.text)?,
        completed: false,
    };
    db.write().await.push(todo.clone());
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn toggle_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Todo>, ApiError> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    todo.completed = !todo.completed;
    tracing::info!(%id, completed = todo.completed, "toggled todo");
    Ok(Json(todo.clone()))
}

async fn edit_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<EditTodo>,
) -> Result<Json<Todo>, ApiError> {
    let text = required_text(&input.text)?;
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    todo.text = text;
    tracing::info!(%id, "edited todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Value>, ApiError> {
    let mut todos = db.write().await;
    let index = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| not_found(id))?;
    todos.remove(index);
    tracing::info!(%id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted" })))
}
