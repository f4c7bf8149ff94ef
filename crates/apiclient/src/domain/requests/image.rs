use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImageDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ImageListRequest {
    pub page: i64,
    pub page_size: i64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub storage: Option<String>,
}
