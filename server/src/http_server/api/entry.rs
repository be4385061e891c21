use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::WrapErr;
use cookbook::{Cookbook, NewEntry};

use crate::http_server::{errors::WithStatus as _, ResponseResult};

#[axum_macros::debug_handler(state = crate::AppState)]
pub(crate) async fn create_entry(
    State(cookbook): State<Arc<Cookbook>>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> ResponseResult<StatusCode> {
    let Json(new_entry) = payload?;

    // Waits on the write lock while summaries hold the read lock, so it can't run on a worker
    tokio::task::spawn_blocking(move || cookbook.register(new_entry))
        .await
        .wrap_err("Registration task failed to complete")
        .with_status(StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(StatusCode::OK)
}
