use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article document as stored in the backend's search index; the document
/// id travels separately in the surrounding [`shared::model::Hit`].
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Article {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    pub cover: String,
    pub title: String,
    #[serde(default)]
    pub keyword: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub content: String,

    pub views: i64,
    pub comments: i64,
    pub likes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleCategory {
    pub category: String,
    pub number: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArticleTag {
    pub tag: String,
    pub number: i64,
}
