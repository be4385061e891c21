use std::{path::PathBuf, sync::Arc};

use color_eyre::eyre::WrapErr;
use cookbook::{Cookbook, DEFAULT_EXPANSION_LIMIT};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::seed;

pub(crate) const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` when `COOKBOOK_EXPANSION_LIMIT=0`
    pub expansion_limit: Option<usize>,
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            expansion_limit: Some(DEFAULT_EXPANSION_LIMIT),
            seed_path: None,
        }
    }
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .wrap_err_with(|| format!("Invalid PORT {port:?}, needs to be a port number"))?,
            None => defaults.port,
        };

        let expansion_limit = match lookup("COOKBOOK_EXPANSION_LIMIT") {
            Some(limit) => {
                let limit: usize = limit.parse().wrap_err_with(|| {
                    format!("Invalid COOKBOOK_EXPANSION_LIMIT {limit:?}, needs to be a count")
                })?;

                (limit > 0).then_some(limit)
            }
            None => defaults.expansion_limit,
        };

        Ok(Self {
            port,
            expansion_limit,
            seed_path: lookup("COOKBOOK_SEED_PATH").map(PathBuf::from),
        })
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl VersionInfo {
    pub fn from_env() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub cookbook: Arc<Cookbook>,
    pub versions: VersionInfo,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        Self::from_config(AppConfig::from_env()?)
    }

    /// Builds a fresh cookbook for `app`, preloaded from its seed file when one is configured.
    pub fn from_config(app: AppConfig) -> crate::Result<Self> {
        let cookbook = Cookbook::with_expansion_limit(app.expansion_limit);

        if let Some(seed_path) = &app.seed_path {
            let registered = seed::load_into(&cookbook, seed_path)?;
            tracing::info!(registered, seed_path = %seed_path.display(), "Seeded cookbook");
        }

        Ok(Self {
            app,
            cookbook: Arc::new(cookbook),
            versions: VersionInfo::from_env(),
        })
    }
}
