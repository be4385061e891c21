use std::sync::Arc;

use axum::extract::FromRef;
use cookbook::Cookbook;

use crate::{state::VersionInfo, AppState};

impl FromRef<AppState> for Arc<Cookbook> {
    fn from_ref(state: &AppState) -> Self {
        state.cookbook.clone()
    }
}

impl FromRef<AppState> for VersionInfo {
    fn from_ref(state: &AppState) -> Self {
        state.versions.clone()
    }
}
