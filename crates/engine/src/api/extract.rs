//! Request extractors for the character API.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use roster_domain::{Character, CharacterId, Level};
use serde_json::Value;

use super::error::{ApiError, INVALID_CHARACTER_ID};
use crate::use_cases::management::CharacterInput;

/// JSON character body, left unresolved for the use case.
///
/// A body counts as missing when the request is not JSON, is blank, or
/// decodes to `null`, `{}` or `[]`. Only unreadable bytes and syntactically
/// broken JSON are rejected here; everything else is decided after the
/// use case has looked at the target record.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CharacterBody(input): CharacterBody) -> impl IntoResponse {
///     app.use_cases.management.character.create(input).await
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterBody(pub CharacterInput);

impl<S> FromRequest<S> for CharacterBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_json_content_type);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        if !is_json {
            return Ok(Self(CharacterInput::Missing));
        }

        parse_character(&bytes).map(Self)
    }
}

fn is_json_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn parse_character(bytes: &[u8]) -> Result<CharacterInput, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(CharacterInput::Missing);
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let is_empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if is_empty {
        return Ok(CharacterInput::Missing);
    }

    // Fractional or oversized numbers are levels out of range, not type errors.
    if value
        .get("level")
        .is_some_and(|level| level.is_number() && level.as_i64().is_none())
    {
        return Ok(CharacterInput::Malformed(Level::range_message()));
    }

    Ok(match serde_json::from_value::<Character>(value) {
        Ok(character) => CharacterInput::Provided(character),
        Err(e) => CharacterInput::Malformed(format!("Invalid character payload: {e}")),
    })
}

/// Parse a path segment into a character id.
pub(crate) fn parse_character_id(raw: &str) -> Result<CharacterId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(INVALID_CHARACTER_ID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/merge-patch+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
    }

    #[test]
    fn blank_and_empty_documents_are_missing() {
        for body in ["", "  \n", "null", "{}", "[]"] {
            assert_eq!(
                parse_character(body.as_bytes()).unwrap(),
                CharacterInput::Missing,
                "{body:?}"
            );
        }
    }

    #[test]
    fn broken_json_is_rejected() {
        let err = parse_character(b"{\"id\": ").unwrap_err();
        assert_eq!(err, ApiError::BadRequest("Invalid JSON body".to_string()));
    }

    #[test]
    fn incomplete_record_is_malformed() {
        let input = parse_character(br#"{"id": 5, "name": "Vincent"}"#).unwrap();
        match input {
            CharacterInput::Malformed(msg) => {
                assert!(msg.starts_with("Invalid character payload:"), "{msg}");
                assert!(msg.contains("job"), "{msg}");
            }
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_level_reports_the_range() {
        for level in ["100000000000000000000", "22.5", "-1e30"] {
            let body = format!(
                r#"{{"id":9,"name":"Cait Sith","job":"Fortune teller","weapon":"Megaphone","level":{level}}}"#
            );
            assert_eq!(
                parse_character(body.as_bytes()).unwrap(),
                CharacterInput::Malformed("Level must be between 1 and 99".to_string()),
                "{level}"
            );
        }
    }

    #[test]
    fn complete_record_is_provided() {
        let input = parse_character(
            br#"{"id":7,"name":"Vincent Valentine","job":"Gunner","weapon":"Quicksilver","level":50}"#,
        )
        .unwrap();
        assert_eq!(
            input,
            CharacterInput::Provided(Character::new(
                7,
                "Vincent Valentine",
                "Gunner",
                "Quicksilver",
                50
            ))
        );
    }

    #[test]
    fn path_ids_must_be_integers() {
        assert_eq!(parse_character_id("3").unwrap(), CharacterId::new(3));
        assert_eq!(
            parse_character_id("three").unwrap_err(),
            ApiError::BadRequest("Invalid character ID".to_string())
        );
    }
}
