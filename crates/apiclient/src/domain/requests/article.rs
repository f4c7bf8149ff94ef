use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleLikeRequest {
    pub article_id: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ArticleCreateRequest {
    pub cover: String,

    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub category: String,

    pub tags: Vec<String>,

    #[serde(rename = "abstract")]
    pub summary: String,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleDeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ArticleUpdateRequest {
    pub id: String,
    pub cover: String,

    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub category: String,

    pub tags: Vec<String>,

    #[serde(rename = "abstract")]
    pub summary: String,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleListRequest {
    pub page: i64,
    pub page_size: i64,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleSearchRequest {
    pub page: i64,
    pub page_size: i64,
    pub query: String,
    pub category: String,
    pub tag: String,
    pub sort: String,
    pub order: String,
}
