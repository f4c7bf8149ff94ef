use serde::{Deserialize, Serialize};
use shared::model::Model;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Image {
    #[serde(flatten)]
    pub model: Model,
    pub name: String,
    pub url: String,
    pub category: String,
    pub storage: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImageUploadResponse {
    pub url: String,
    #[serde(rename = "ossType")]
    pub oss_type: String,
}
