use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct EmailRequest {
    #[validate(email)]
    pub email: String,

    pub captcha: String,
    pub captcha_id: String,
}
