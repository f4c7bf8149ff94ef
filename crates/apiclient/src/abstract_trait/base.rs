use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

use crate::domain::{requests::base::EmailRequest, response::base::CaptchaResponse};

pub type DynBaseClient = Arc<dyn BaseClientTrait + Send + Sync>;

#[async_trait]
pub trait BaseClientTrait {
    async fn captcha(&self) -> Result<CaptchaResponse, ClientError>;
    async fn send_email_verification_code(&self, input: &EmailRequest)
    -> Result<(), ClientError>;
    async fn qq_login_url(&self) -> Result<String, ClientError>;
}
