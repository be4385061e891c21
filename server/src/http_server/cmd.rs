use tracing::info;

use crate::{http_server::routes, AppState, Result};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;
    let port = app_state.app.port;

    info!(
        entries = app_state.cookbook.len(),
        expansion_limit = ?app_state.cookbook.expansion_limit(),
        "Cookbook ready"
    );

    crate::http_server::run_server(routes::make_router().with_state(app_state), port).await?;

    info!("Main Returning");

    Ok(())
}
