use serde::Deserialize;

#[derive(Deserialize)]
pub struct ApiConfig {
    graphql: ApiGraphqlConfig,
}

impl ApiConfig {
    pub fn graphql(&self) -> &ApiGraphqlConfig {
        &self.graphql
    }
}

#[derive(Deserialize)]
pub struct ApiGraphqlConfig {
    host: String,
    port: u16,
    #[serde(default = "default_path")]
    path: String,
    allowed_origin: String,
}

impl ApiGraphqlConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &u16 {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}

fn default_path() -> String {
    "/graphql".to_owned()
}
