use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Full user row as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String, // stored as received; exposed by email lookup and profile update
    pub designation: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub setup_completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime, // set once at insert, never updated
}

/// Projection served by the id lookup; the password column is never selected.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub designation: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub setup_completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
