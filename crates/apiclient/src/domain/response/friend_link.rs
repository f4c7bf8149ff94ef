use serde::{Deserialize, Serialize};
use shared::model::Model;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FriendLink {
    #[serde(flatten)]
    pub model: Model,
    pub logo: String,
    pub link: String,
    pub name: String,
    pub description: String,
}
