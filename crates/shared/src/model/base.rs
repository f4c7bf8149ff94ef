use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base record fields every backend entity carries.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Model {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
