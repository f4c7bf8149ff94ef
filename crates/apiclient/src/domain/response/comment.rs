use serde::{Deserialize, Serialize};
use shared::model::Model;
use uuid::Uuid;

use crate::domain::response::user::User;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    #[serde(flatten)]
    pub model: Model,
    pub article_id: String,
    pub p_id: Option<i64>,
    #[serde(default)]
    pub children: Vec<Comment>,
    pub user_uuid: Uuid,
    pub user: User,
    pub content: String,
}
