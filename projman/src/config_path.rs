use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("PM_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        panic!("config.yml file specified in PM_CONFIG_PATH environment variable or current directory must exist")
    }

    config_path
}

/// Connection string override for the SQLite store.
pub fn db_url() -> Option<String> {
    std::env::var("PM_DB_URL").ok().filter(|url| !url.is_empty())
}
