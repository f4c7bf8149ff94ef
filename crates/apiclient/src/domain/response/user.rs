use serde::{Deserialize, Serialize};
use shared::model::Model;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct User {
    #[serde(flatten)]
    pub model: Model,
    pub uuid: Uuid,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub openid: String,
    pub avatar: String,
    pub address: String,
    pub signature: String,
    pub role_id: i64,
    /// Registration source reported by the backend ("Email", "QQ").
    pub register: String,
    pub freeze: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub access_token_expires_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserCard {
    pub uuid: Uuid,
    pub username: String,
    pub avatar: String,
    pub address: String,
    pub signature: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserChart {
    pub date_list: Vec<String>,
    pub login_data: Vec<i64>,
    pub register_data: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginRecord {
    #[serde(flatten)]
    pub model: Model,
    pub user_id: i64,
    pub user: User,
    pub login_method: String,
    pub ip: String,
    pub address: String,
    pub os: String,
    pub device_info: String,
    pub browser_info: String,
    pub status: String,
}
