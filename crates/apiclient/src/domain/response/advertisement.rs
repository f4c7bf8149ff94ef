use serde::{Deserialize, Serialize};
use shared::model::Model;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Advertisement {
    #[serde(flatten)]
    pub model: Model,
    pub ad_image: String,
    pub link: String,
    pub title: String,
    pub content: String,
}
