use async_graphql::{Object, ID};
use pm_dao::client::ClientDao;

pub struct Client(ClientDao);

impl From<ClientDao> for Client {
    fn from(client_data: ClientDao) -> Self {
        Self(client_data)
    }
}

#[Object]
impl Client {
    async fn id(&self) -> ID {
        ID::from(self.0.id().to_string())
    }

    async fn name(&self) -> &str {
        self.0.name()
    }

    async fn email(&self) -> &str {
        self.0.email()
    }

    async fn phone(&self) -> &str {
        self.0.phone()
    }
}
