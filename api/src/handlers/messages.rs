use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{IdPath, Params},
};
use axum::{extract::State, Json};
use models::{
    api::messages::{Message, NewMessage, UpdateMessage},
    data::{self, encode_timestamp, messages::MessageRow},
};
use sqlx::query_as;
use time::OffsetDateTime;
use tracing::{debug, info};

#[axum::debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<Vec<Message>>> {
    let messages: Vec<MessageRow> =
        query_as("SELECT * FROM messages ORDER BY created_at ASC, id ASC;")
            .fetch_all(&state.pool)
            .await?;

    debug!(count = messages.len(), "listed messages");

    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    Params(payload): Params<NewMessage>,
) -> ApiResult<Json<Message>> {
    let new_message = data::messages::NewMessage::from(payload);
    let now = encode_timestamp(OffsetDateTime::now_utc())?;

    let mut tx = state.pool.begin().await?;

    let message: MessageRow = query_as(
        "INSERT INTO messages (body, username, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING *;",
    )
    .bind(new_message.body)
    .bind(new_message.username)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(id = message.id, "created message");

    Ok(Json(message.into()))
}

#[axum::debug_handler]
pub async fn update_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Params(payload): Params<UpdateMessage>,
) -> ApiResult<Json<Message>> {
    let now = encode_timestamp(OffsetDateTime::now_utc())?;

    let mut tx = state.pool.begin().await?;

    // Single statement so the write lock is taken up front. max() keeps
    // updated_at from moving backwards when the wall clock does.
    let message: MessageRow = query_as(
        "UPDATE messages SET body = ?1, updated_at = max(?2, updated_at) WHERE id = ?3 RETURNING *;",
    )
    .bind(payload.body)
    .bind(now)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(ApiError::MessageNotFound(id))?;

    tx.commit().await?;

    info!(id, "updated message");

    Ok(Json(message.into()))
}

#[axum::debug_handler]
pub async fn delete_message(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<Message>> {
    let mut tx = state.pool.begin().await?;

    let message: MessageRow = query_as("DELETE FROM messages WHERE id = ?1 RETURNING *;")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(ApiError::MessageNotFound(id))?;

    tx.commit().await?;

    info!(id, "deleted message");

    Ok(Json(message.into()))
}
