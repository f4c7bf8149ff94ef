use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AdvertisementCreateRequest {
    pub ad_image: String,

    #[validate(url)]
    pub link: String,

    #[validate(length(min = 1))]
    pub title: String,

    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdvertisementDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct AdvertisementUpdateRequest {
    pub id: i64,

    #[validate(url)]
    pub link: String,

    #[validate(length(min = 1))]
    pub title: String,

    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdvertisementListRequest {
    pub page: i64,
    pub page_size: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}
