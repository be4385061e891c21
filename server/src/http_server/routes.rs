use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::{api, trace::RouteSpans};
use crate::{state::VersionInfo, AppState};

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/_", get(versions))
        .route("/parse", post(api::parse::parse))
        .route("/entry", post(api::entry::create_entry))
        .route("/summary", get(api::summary::summary))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(RouteSpans)
                .on_response(RouteSpans),
        )
}

async fn versions(State(versions): State<VersionInfo>) -> String {
    format!("{} {}", versions.name, versions.version)
}
