use serde::{Deserialize, Serialize};
use shared::model::Model;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Feedback {
    #[serde(flatten)]
    pub model: Model,
    pub user_uuid: Uuid,
    pub content: String,
    pub reply: String,
}
