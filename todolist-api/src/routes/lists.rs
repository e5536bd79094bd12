/// List endpoints
///
/// - `GET /lists/:user_id` - Lists owned by a user
/// - `POST /lists` - Create a list
/// - `PUT /lists` - Rename a list
/// - `DELETE /lists/:list_id` - Delete a list
///
/// Nothing here checks that the user exists or that the caller owns the list.
/// Deleting a list leaves its tasks behind.

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use todolist_shared::models::list::{CreateList, List};

/// Create list request
#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    pub list_name: String,
    pub user_id: i32,
}

/// Rename list request
#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub list_id: i32,
    pub list_name: String,
}

/// `GET /lists/:user_id`
///
/// `200 OK` with every list owned by the user, `[]` if none.
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<List>>> {
    let lists = List::find_by_user(&state.db, user_id).await?;
    Ok(Json(lists))
}

/// `POST /lists`
///
/// ```text
/// { "list_name": "Groceries", "user_id": 1 }
/// ```
///
/// `201 Created` with the new list, including its `list_id`.
pub async fn create_list(
    State(state): State<AppState>,
    Json(req): Json<CreateListRequest>,
) -> ApiResult<(StatusCode, Json<List>)> {
    let list = List::create(
        &state.db,
        CreateList {
            list_name: req.list_name,
            user_id: req.user_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// `PUT /lists`
///
/// ```text
/// { "list_id": 3, "list_name": "Weekend" }
/// ```
///
/// `201 Created` with `[n]`, the number of lists renamed (0 or 1).
pub async fn update_list(
    State(state): State<AppState>,
    Json(req): Json<UpdateListRequest>,
) -> ApiResult<(StatusCode, Json<[u64; 1]>)> {
    let affected = List::rename(&state.db, req.list_id, &req.list_name).await?;
    Ok((StatusCode::CREATED, Json([affected])))
}

/// `DELETE /lists/:list_id`
///
/// `200 OK` with the number of lists deleted; `0` for an unknown ID.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<i32>,
) -> ApiResult<Json<u64>> {
    let affected = List::delete(&state.db, list_id).await?;
    tracing::debug!(list_id, affected, "Deleted list");
    Ok(Json(affected))
}
