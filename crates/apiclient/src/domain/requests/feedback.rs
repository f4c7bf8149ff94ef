use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FeedbackCreateRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedbackDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FeedbackReplyRequest {
    pub id: i64,

    #[validate(length(min = 1))]
    pub reply: String,
}
