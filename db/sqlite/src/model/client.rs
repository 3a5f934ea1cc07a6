use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct ClientModel {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
}

impl ClientModel {
    pub fn new(id: &Uuid, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: *id,
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
