use serde::{Deserialize, Serialize};

/// One element of `GET /posts` on JSONPlaceholder.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlaceholderPost {
    #[serde(rename = "userId")]
    pub user_id: u32,

    #[serde(rename = "title")]
    pub title: String,

    #[serde(rename = "body")]
    pub body: String,
}
