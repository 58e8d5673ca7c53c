//! HTML view handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use roster_domain::Character;

use super::error::{ApiError, CHARACTER_NOT_FOUND};
use super::pages::{self, NewCharacterForm, LIST_TITLE, NEW_TITLE, WELCOME_TITLE};
use crate::app::App;

pub(super) async fn index() -> Html<String> {
    Html(pages::welcome(WELCOME_TITLE))
}

pub(super) async fn list(State(app): State<Arc<App>>) -> Html<String> {
    let characters = app.use_cases.management.character.list().await;
    Html(pages::character_list(LIST_TITLE, &characters))
}

pub(super) async fn new_form() -> Html<String> {
    Html(pages::new_character(
        NEW_TITLE,
        None,
        &NewCharacterForm::default(),
    ))
}

/// Create a character from the form and go back to the list.
///
/// Goes through the same validated create as the JSON API. Rejections
/// re-render the form with the message and the submitted values.
pub(super) async fn submit_new(
    State(app): State<Arc<App>>,
    Form(form): Form<NewCharacterForm>,
) -> Response {
    let candidate = match character_from_form(&form) {
        Ok(candidate) => candidate,
        Err(msg) => return rejected_form(msg, &form),
    };

    match app
        .use_cases
        .management
        .character
        .create(candidate.into())
        .await
    {
        Ok(_) => (StatusCode::FOUND, [(header::LOCATION, "/list")]).into_response(),
        Err(e) => {
            let err = ApiError::from_management(e, CHARACTER_NOT_FOUND);
            rejected_form(err.message(), &form)
        }
    }
}

fn character_from_form(form: &NewCharacterForm) -> Result<Character, &'static str> {
    let id = form
        .id
        .trim()
        .parse::<i64>()
        .map_err(|_| "ID must be a number")?;
    let level = form
        .level
        .trim()
        .parse::<i64>()
        .map_err(|_| "Level must be a number")?;

    Ok(Character::new(
        id,
        form.name.as_str(),
        form.job.as_str(),
        form.weapon.as_str(),
        level,
    ))
}

fn rejected_form(msg: &str, form: &NewCharacterForm) -> Response {
    tracing::debug!(error = %msg, "New character form rejected");
    (
        StatusCode::BAD_REQUEST,
        Html(pages::new_character(NEW_TITLE, Some(msg), form)),
    )
        .into_response()
}
