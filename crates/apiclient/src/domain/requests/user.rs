use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 20))]
    pub username: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(equal = 6))]
    pub verification_code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    pub captcha: String,
    pub captcha_id: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(equal = 6))]
    pub verification_code: String,

    #[validate(length(min = 6))]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserCardRequest {
    pub uuid: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(min = 6))]
    pub new_password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ChangeInfoRequest {
    #[validate(length(min = 2, max = 20))]
    pub username: String,

    pub address: String,
    pub signature: String,
}

/// Day window for the login/register activity chart.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserChartRequest {
    pub date: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserListRequest {
    pub page: i64,
    pub page_size: i64,
    pub uuid: Option<Uuid>,
    pub register: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserOperation {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginListRequest {
    pub page: i64,
    pub page_size: i64,
    pub uuid: Option<Uuid>,
}
