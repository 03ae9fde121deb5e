use sqlx::prelude::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: i64,
    pub body: Option<String>,
    pub username: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub struct NewMessage {
    pub body: Option<String>,
    pub username: Option<String>,
}

impl From<crate::api::messages::NewMessage> for NewMessage {
    fn from(value: crate::api::messages::NewMessage) -> Self {
        Self {
            body: value.body,
            username: value.username,
        }
    }
}
