use std::fs::File;

use anyhow::{Context, Result};
use api::ApiConfig;
use app::AppConfig;
use db::DbConfig;
use log::LogConfig;
use serde::Deserialize;

pub mod api;
pub mod app;
pub mod db;
pub mod log;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    db: DbConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open config file {path}"))?;
    let config = serde_yaml::from_reader::<_, Config>(file)
        .with_context(|| format!("Failed to parse config file {path}"))?;
    config.db.validate()?;
    Ok(config)
}

pub fn from_str(config: &str) -> Result<Config> {
    let config = serde_yaml::from_str::<Config>(config)?;
    config.db.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use crate::app::AppConfigMode;

    const FULL: &str = r#"
app:
  mode: production
log:
  display_level: false
  level_filter: debug
db:
  sqlite:
    url: sqlite:projman.db?mode=rwc
    max_connections: 8
api:
  graphql:
    host: 127.0.0.1
    port: 5000
    allowed_origin: http://localhost:3000
"#;

    #[test]
    fn parses_full_config() {
        let config = super::from_str(FULL).unwrap();

        assert!(matches!(config.app().mode(), AppConfigMode::Production));
        assert!(!*config.log().display_level());
        assert_eq!(config.log().level_filter(), "debug");

        let sqlite = config.db().sqlite().as_ref().unwrap();
        assert_eq!(sqlite.url(), "sqlite:projman.db?mode=rwc");
        assert_eq!(*sqlite.max_connections(), 8);
        assert!(config.db().memory().is_none());

        let graphql = config.api().graphql();
        assert_eq!(graphql.host(), "127.0.0.1");
        assert_eq!(*graphql.port(), 5000);
        assert_eq!(graphql.path(), "/graphql");
        assert_eq!(graphql.allowed_origin(), "http://localhost:3000");
    }

    #[test]
    fn parses_memory_store() {
        let config = super::from_str(
            r#"
app:
  mode: development
log:
  display_level: true
  level_filter: info
db:
  memory: {}
api:
  graphql:
    host: 0.0.0.0
    port: 8080
    path: /api/graphql
    allowed_origin: "*"
"#,
        )
        .unwrap();

        assert!(config.db().sqlite().is_none());
        assert!(config.db().memory().is_some());
        assert_eq!(config.api().graphql().path(), "/api/graphql");
    }

    #[test]
    fn rejects_both_stores() {
        let config = FULL.replace(
            "db:\n  sqlite:",
            "db:\n  memory: {}\n  sqlite:",
        );
        let err = super::from_str(&config).err().unwrap();
        assert!(err.to_string().contains("exactly one"));
    }

    #[test]
    fn rejects_missing_store() {
        let config = FULL.replace(
            "db:\n  sqlite:\n    url: sqlite:projman.db?mode=rwc\n    max_connections: 8\n",
            "db: {}\n",
        );
        assert!(super::from_str(&config).is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        let config = FULL.replace("mode: production", "mode: staging");
        assert!(super::from_str(&config).is_err());
    }
}
