use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Message {
    pub id: i64,
    pub body: Option<String>,
    pub username: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<crate::data::messages::MessageRow> for Message {
    fn from(value: crate::data::messages::MessageRow) -> Self {
        Self {
            id: value.id,
            body: value.body,
            username: value.username,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Parameters accepted by `POST /messages`. Both fields may be omitted.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewMessage {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// Parameters accepted by `PATCH /messages/:id`.
///
/// An omitted `body` clears the stored one.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateMessage {
    pub body: Option<String>,
}
