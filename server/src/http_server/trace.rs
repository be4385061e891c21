use std::time::Duration;

use axum::{
    extract::MatchedPath,
    http::{Request, Response},
};
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

/// Names each request span after the route it matched and records the outcome on it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteSpans;

impl<B> MakeSpan<B> for RouteSpans {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let method = request.method();
        let route = matched_route(request).unwrap_or("unmatched");

        tracing::info_span!(
            "request",
            otel.name = %format_args!("{method} {route}"),
            %method,
            route,
            path = request.uri().path(),
            query = request.uri().query(),
            status = tracing::field::Empty,
            latency_ms = tracing::field::Empty,
        )
    }
}

impl<B> OnResponse<B> for RouteSpans {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();
        let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);

        span.record("status", status);
        span.record("latency_ms", latency_ms);

        if response.status().is_server_error() {
            tracing::warn!(status, latency_ms, "request failed");
        } else {
            tracing::info!(status, latency_ms, "request finished");
        }
    }
}

fn matched_route<B>(request: &Request<B>) -> Option<&str> {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
}
