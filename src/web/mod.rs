use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::roster::SharedRoster;

pub mod routes;

/// Assemble the full application router around a roster handle.
///
/// Shared between `main` and the integration tests so both drive the same
/// routing, layering, and state wiring.
pub fn build_router(roster: SharedRoster) -> Router {
    Router::new()
        // The signup page is the only UI; send visitors straight there.
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(routes::activities::remove_participant_handler),
        )
        // Static frontend
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(CatchPanicLayer::new())
        // State
        .with_state(roster)
}
