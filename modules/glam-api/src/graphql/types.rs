use async_graphql::{InputObject, SimpleObject, Union, ID};

use crate::db::instagram::InstagramRow;
use crate::db::users::UserRow;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// User as exposed over GraphQL. Password material never leaves the db layer.
#[derive(SimpleObject)]
pub struct UserType {
    pub id: ID,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
}

impl From<UserRow> for UserType {
    fn from(row: UserRow) -> Self {
        let full_name = compose_full_name(row.first_name.as_deref(), row.last_name.as_deref());
        Self {
            id: ID(row.id.to_string()),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            full_name,
        }
    }
}

#[derive(SimpleObject)]
pub struct LoginSuccessType {
    pub user: UserType,
    pub access_token: String,
    pub refresh_token: String,
}

/// Stored scrape result for one Instagram account.
#[derive(SimpleObject)]
pub struct InstagramType {
    pub id: ID,
    pub user_id: ID,
    pub account_username: String,
    pub photo_urls: Vec<String>,
}

impl From<InstagramRow> for InstagramType {
    fn from(row: InstagramRow) -> Self {
        Self {
            id: ID(row.id.to_string()),
            user_id: ID(row.user_id.to_string()),
            account_username: row.account_username.unwrap_or_default(),
            photo_urls: row
                .photo_urls
                .map(|v| serde_json::from_value(v).unwrap_or_default())
                .unwrap_or_default(),
        }
    }
}

/// Plain informational payload for operations that answer with a sentence.
#[derive(SimpleObject)]
pub struct MessageType {
    pub message: String,
}

impl MessageType {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Photos when the scrape succeeds, a message explaining why otherwise.
/// Expected scrape failures are answers, not GraphQL errors.
#[derive(Union)]
pub enum GetPhotosResult {
    Instagram(InstagramType),
    Message(MessageType),
}

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

#[derive(InputObject)]
pub struct UserRegisterInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct UserInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(InputObject)]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct RefreshTokenInput {
    pub refresh_token: String,
}

#[derive(InputObject)]
pub struct InstagramInput {
    pub username: String,
    #[graphql(default = 10)]
    pub max_count: i32,
}

fn compose_full_name(first: Option<&str>, last: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(first) = first {
        parts.push(first);
    }
    if let Some(last) = last {
        parts.push(last);
    }
    parts.join(" ")
}
