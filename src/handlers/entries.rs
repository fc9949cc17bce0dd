//! Entry write and listing handlers.

use crate::csrf;
use crate::entry::{Entry, EntrySummary, NewEntry, NewEntryForm};
use crate::error::AppError;
use crate::service::EntryService;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct EntriesBody<T> {
    pub entries: Vec<T>,
}

/// POST /add-entry/ — JSON variant, CSRF exempt. Every failure (malformed
/// body, missing field, persistence) flattens to 400 with the error text.
pub async fn add_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    EntryService::insert(&state.pool, &body.name, Some(body.number))
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Data added successfully!"})),
    ))
}

/// POST /add/ — form variant, CSRF protected. `name` defaults when absent;
/// `number` is never set on this path.
pub async fn add_entry_form(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<NewEntryForm>,
) -> Result<Json<Value>, AppError> {
    csrf::verify(&jar, &headers)?;
    let name = form.name.unwrap_or_else(|| "Default Name".to_string());
    let id = EntryService::insert(&state.pool, &name, None).await?;
    Ok(Json(json!({"message": "Data added", "id": id})))
}

/// GET /get-entries/ — rows projected to name, number, created_at.
pub async fn get_entries(
    State(state): State<AppState>,
) -> Result<Json<EntriesBody<EntrySummary>>, AppError> {
    let entries = EntryService::list_summaries(&state.pool).await?;
    Ok(Json(EntriesBody { entries }))
}

/// GET /see/ — full rows.
pub async fn see_entries(
    State(state): State<AppState>,
) -> Result<Json<EntriesBody<Entry>>, AppError> {
    let entries = EntryService::list_all(&state.pool).await?;
    Ok(Json(EntriesBody { entries }))
}
