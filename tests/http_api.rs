//! End-to-end tests against the real router, driven in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use signups::roster::{seed, SharedRoster};
use signups::web;

fn app() -> Router {
    web::build_router(SharedRoster::new(seed()))
}

/// Send one request to a clone of the router; clones share the roster.
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    // Extractor rejections (e.g. a missing query parameter) come back as
    // plain text, not JSON.
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn listing_returns_seeded_catalog() {
    let app = app();
    let (status, body) = send(&app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);

    let soccer = &body["Soccer Team"];
    assert!(soccer.is_object(), "Soccer Team must be seeded");
    assert!(soccer["description"].is_string());
    assert!(soccer["schedule"].is_string());
    assert!(soccer["max_participants"].as_u64().unwrap() > 0);
    assert!(soccer["participants"].is_array());
}

#[tokio::test]
async fn signup_remove_round_trip() {
    let app = app();

    // Known activity present up front.
    let (status, body) = send(&app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    let before = body["Soccer Team"]["participants"].as_array().unwrap().len();

    // Signup succeeds; the activity name arrives URL-encoded.
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Soccer%20Team/signup?email=testuser@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("testuser@example.com"));

    // Listing reflects the signup.
    let (_, body) = send(&app, "GET", "/activities").await;
    let participants = body["Soccer Team"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), before + 1);
    assert!(participants.contains(&Value::String("testuser@example.com".into())));

    // Same signup again is a duplicate.
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Soccer%20Team/signup?email=testuser@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    // Removal succeeds and restores the original list.
    let (status, _) = send(
        &app,
        "DELETE",
        "/activities/Soccer%20Team/participants?email=testuser@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/activities").await;
    let participants = body["Soccer Team"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), before);
    assert!(!participants.contains(&Value::String("testuser@example.com".into())));

    // Removing someone who was never signed up is a 404.
    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Soccer%20Team/participants?email=nonexistent@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn unknown_activity_is_404_for_both_operations() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/activities/No%20Such%20Activity/signup?email=a@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");

    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/No%20Such%20Activity/participants?email=a@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn missing_email_is_rejected_before_the_roster() {
    let app = app();

    let (status, _) = send(&app, "POST", "/activities/Soccer%20Team/signup").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Roster state untouched.
    let (_, body) = send(&app, "GET", "/activities").await;
    assert_eq!(
        body["Soccer Team"]["participants"].as_array().unwrap().len(),
        2
    );
}

#[tokio::test]
async fn blank_email_is_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/activities/Soccer%20Team/signup?email=%20%20",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "email must not be empty");
}

#[tokio::test]
async fn full_activity_rejects_further_signups() {
    let app = app();

    // Math Club is seeded with 2 of 10 places taken; fill the rest.
    for i in 0..8 {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/Math%20Club/signup?email=filler{i}@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Math%20Club/signup?email=late@example.com",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Activity is already full");

    let (_, body) = send(&app, "GET", "/activities").await;
    assert_eq!(
        body["Math Club"]["participants"].as_array().unwrap().len(),
        10
    );
}
