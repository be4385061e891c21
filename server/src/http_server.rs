use std::net::SocketAddr;

use axum::{response::Response, Router};
use color_eyre::eyre::WrapErr;
use tokio::net::TcpListener;

use crate::Result;

pub(crate) mod cmd;
pub(crate) mod errors;
pub(crate) mod routes;

mod api {
    pub mod entry;
    pub mod parse;
    pub mod summary;
}

mod config;
mod trace;

#[cfg(test)]
pub(crate) mod test_helpers;

pub(crate) type ResponseResult<T = Response> = std::result::Result<T, errors::ServerError>;

pub(crate) async fn run_server(app: Router, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on port {}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err("Failed to open port")?;

    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .wrap_err("Failed to run server")
}
