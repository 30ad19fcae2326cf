use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::models::Activity;
use crate::roster::{RosterError, SharedRoster};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: String,
}

/// Boundary check: the roster only ever sees a non-empty email. A missing
/// `email` parameter is already rejected by the `Query` extractor.
fn validated_email(query: &EmailQuery) -> Result<&str, (StatusCode, Json<Value>)> {
    let email = query.email.trim();
    if email.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": "email must not be empty" })),
        ));
    }
    Ok(email)
}

/// Map a roster rejection to the HTTP contract: unknown activity and
/// unknown participant are 404, duplicate signup and full activity are
/// 400. The `detail` body is what the frontend surfaces to the user.
fn roster_rejection(err: RosterError) -> (StatusCode, Json<Value>) {
    let status = match err {
        RosterError::NotFound | RosterError::ParticipantNotRegistered => StatusCode::NOT_FOUND,
        RosterError::AlreadyRegistered | RosterError::CapacityExceeded => StatusCode::BAD_REQUEST,
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}

pub async fn list_activities_handler(
    State(roster): State<SharedRoster>,
) -> Json<IndexMap<String, Activity>> {
    Json(roster.activities())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(roster): State<SharedRoster>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = validated_email(&query)?;

    match roster.signup(&activity_name, email) {
        Ok(count) => {
            tracing::info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(Json(serde_json::json!({
                "message": format!("Signed up {} for {}", email, activity_name)
            })))
        }
        Err(e) => {
            tracing::warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(roster_rejection(e))
        }
    }
}

pub async fn remove_participant_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(roster): State<SharedRoster>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let email = validated_email(&query)?;

    match roster.remove_participant(&activity_name, email) {
        Ok(count) => {
            tracing::info!(activity = %activity_name, email = %email, participants = count, "participant removed");
            Ok(Json(serde_json::json!({
                "message": format!("Removed {} from {}", email, activity_name)
            })))
        }
        Err(e) => {
            tracing::warn!(activity = %activity_name, email = %email, "removal rejected: {}", e);
            Err(roster_rejection(e))
        }
    }
}
