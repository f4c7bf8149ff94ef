use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CommentCreateRequest {
    pub article_id: String,

    /// Parent comment id for replies, absent for top-level comments.
    pub p_id: Option<i64>,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentListRequest {
    pub page: i64,
    pub page_size: i64,
    pub article_id: Option<String>,
    pub user_uuid: Option<Uuid>,
    pub content: Option<String>,
}
