use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptchaResponse {
    pub captcha_id: String,
    pub pic_path: String,
}
