use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;
use tracing::info;

use crate::{
    abstract_trait::base::BaseClientTrait,
    client::{RestClient, validate_request},
    domain::{requests::base::EmailRequest, response::base::CaptchaResponse},
};

#[derive(Debug)]
pub struct BaseClientService {
    client: Arc<RestClient>,
}

impl BaseClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseClientTrait for BaseClientService {
    async fn captcha(&self) -> Result<CaptchaResponse, ClientError> {
        self.client.post_empty("/base/captcha").await
    }

    async fn send_email_verification_code(
        &self,
        input: &EmailRequest,
    ) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Sending email verification code to {}", input.email);

        self.client
            .post("/base/sendEmailVerificationCode", input)
            .await
    }

    async fn qq_login_url(&self) -> Result<String, ClientError> {
        self.client.get("/base/qqLoginURL").await
    }
}
