use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::WrapErr;
use cookbook::{Cookbook, CookbookError, Summary};
use serde::{Deserialize, Serialize};

use crate::http_server::{errors::WithStatus as _, ResponseResult};

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct SummaryQuery {
    name: Option<String>,
}

#[axum_macros::debug_handler(state = crate::AppState)]
pub(crate) async fn summary(
    State(cookbook): State<Arc<Cookbook>>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> ResponseResult<Json<Summary>> {
    let Query(SummaryQuery { name }) = query?;
    let name = name.ok_or_else(|| CookbookError::NotFound(String::new()))?;

    // Big recipe graphs take a while to expand, keep that off the async workers
    let summary = tokio::task::spawn_blocking(move || cookbook.summarize(&name))
        .await
        .wrap_err("Summary task failed to complete")
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(summary))
}
