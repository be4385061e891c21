use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::http_server::ResponseResult;

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ParseRequest {
    #[serde(default)]
    input: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct ParseResponse {
    msg: String,
}

#[axum_macros::debug_handler]
pub(crate) async fn parse(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> ResponseResult<Json<ParseResponse>> {
    let Json(request) = payload?;

    let msg = cookbook::parse_handwriting(&request.input)?;

    Ok(Json(ParseResponse { msg }))
}
