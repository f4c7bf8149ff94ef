use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FriendLinkCreateRequest {
    pub logo: String,

    #[validate(url)]
    pub link: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FriendLinkDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FriendLinkUpdateRequest {
    pub id: i64,

    #[validate(url)]
    pub link: String,

    #[validate(length(min = 1))]
    pub name: String,

    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FriendLinkListRequest {
    pub page: i64,
    pub page_size: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}
