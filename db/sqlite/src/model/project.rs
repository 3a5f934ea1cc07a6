use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct ProjectModel {
    id: Uuid,
    name: String,
    description: String,
    status: String,
    client_id: Uuid,
}

impl ProjectModel {
    pub fn new(id: &Uuid, name: &str, description: &str, status: &str, client_id: &Uuid) -> Self {
        Self {
            id: *id,
            name: name.to_owned(),
            description: description.to_owned(),
            status: status.to_owned(),
            client_id: *client_id,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn client_id(&self) -> &Uuid {
        &self.client_id
    }
}
