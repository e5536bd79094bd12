/// Task endpoints
///
/// - `GET /tasks/:list_id` - Tasks in a list
/// - `POST /tasks` - Create a task
/// - `PUT /tasks` - Change a task's description
/// - `PUT /movetask` - Move a task to another list
/// - `PUT /taskstatus` - Change a task's status
/// - `DELETE /tasks/:task_id` - Delete a task
///
/// Each `PUT` touches one column. Updates answer `201` with `[n]`, deletes
/// answer `200` with `n`; an unknown ID gives `n = 0`, not an error.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use todolist_shared::models::task::{CreateTask, Task};

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task_description: String,

    /// Not checked against existing lists
    pub list_id: i32,

    /// Any string
    pub task_status: String,
}

/// Move task request
#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    pub task_id: i32,
    pub list_id: i32,
}

/// Update description request
#[derive(Debug, Deserialize)]
pub struct UpdateDescriptionRequest {
    pub task_id: i32,
    pub task_description: String,
}

/// Update status request
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub task_id: i32,
    pub task_status: String,
}

/// Response for update routes: a one-element array holding the row count
type UpdatedResponse = (StatusCode, Json<[u64; 1]>);

fn updated(affected: u64) -> UpdatedResponse {
    (StatusCode::CREATED, Json([affected]))
}

/// `GET /tasks/:list_id`
pub async fn tasks_by_list(
    State(state): State<AppState>,
    Path(list_id): Path<i32>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::find_by_list(&state.db, list_id).await?;
    Ok(Json(tasks))
}

/// `POST /tasks`
///
/// ```text
/// { "task_description": "Buy milk", "list_id": 3, "task_status": "todo" }
/// ```
///
/// `201 Created` with the new task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = Task::create(
        &state.db,
        CreateTask {
            task_description: req.task_description,
            list_id: req.list_id,
            task_status: req.task_status,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /movetask`
pub async fn move_task(
    State(state): State<AppState>,
    Json(req): Json<MoveTaskRequest>,
) -> ApiResult<UpdatedResponse> {
    let affected = Task::move_to_list(&state.db, req.task_id, req.list_id).await?;
    Ok(updated(affected))
}

/// `PUT /tasks`
pub async fn update_task_description(
    State(state): State<AppState>,
    Json(req): Json<UpdateDescriptionRequest>,
) -> ApiResult<UpdatedResponse> {
    let affected = Task::update_description(&state.db, req.task_id, &req.task_description).await?;
    Ok(updated(affected))
}

/// `PUT /taskstatus`
pub async fn update_task_status(
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> ApiResult<UpdatedResponse> {
    let affected = Task::update_status(&state.db, req.task_id, &req.task_status).await?;
    Ok(updated(affected))
}

/// `DELETE /tasks/:task_id`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> ApiResult<Json<u64>> {
    let affected = Task::delete(&state.db, task_id).await?;
    Ok(Json(affected))
}
