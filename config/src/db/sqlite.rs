use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbSqliteConfig {
    url: String,
    #[serde(default = "default_max_connections")]
    max_connections: u32,
}

impl DbSqliteConfig {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }
}

fn default_max_connections() -> u32 {
    5
}
