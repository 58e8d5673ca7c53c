//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    routing::get,
    Json, Router,
};
use roster_domain::Character;
use std::sync::Arc;

use super::error::{ApiError, CHARACTER_DOES_NOT_EXIST, CHARACTER_NOT_FOUND};
use super::extract::{parse_character_id, CharacterBody};
use super::views;
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // JSON API
        .route("/characters", get(list_characters).post(create_character))
        .route(
            "/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        // HTML views
        .route("/index", get(views::index))
        .route("/list", get(views::list))
        .route("/new", get(views::new_form).post(views::submit_new))
}

async fn root() -> Redirect {
    Redirect::to("/index")
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

async fn list_characters(State(app): State<Arc<App>>) -> Json<Vec<Character>> {
    Json(app.use_cases.management.character.list().await)
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let id = parse_character_id(&id)?;

    let character = app
        .use_cases
        .management
        .character
        .get(id)
        .await
        .map_err(|e| ApiError::from_management(e, CHARACTER_NOT_FOUND))?;

    Ok(Json(character))
}

async fn create_character(
    State(app): State<Arc<App>>,
    CharacterBody(input): CharacterBody,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let character = app
        .use_cases
        .management
        .character
        .create(input)
        .await
        .map_err(|e| ApiError::from_management(e, CHARACTER_NOT_FOUND))?;

    Ok((StatusCode::CREATED, Json(character)))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    CharacterBody(input): CharacterBody,
) -> Result<StatusCode, ApiError> {
    let id = parse_character_id(&id)?;

    app.use_cases
        .management
        .character
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_management(e, CHARACTER_DOES_NOT_EXIST))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_character_id(&id)?;

    app.use_cases
        .management
        .character
        .delete(id)
        .await
        .map_err(|e| ApiError::from_management(e, CHARACTER_DOES_NOT_EXIST))?;

    Ok(StatusCode::NO_CONTENT)
}
