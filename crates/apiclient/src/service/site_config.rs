use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;
use tracing::info;

use crate::{
    abstract_trait::site_config::SiteConfigClientTrait,
    client::RestClient,
    domain::response::site_config::{Email, Gaode, Jwt, Qiniu, Qq, System, Website},
};

#[derive(Debug)]
pub struct SiteConfigClientService {
    client: Arc<RestClient>,
}

impl SiteConfigClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SiteConfigClientTrait for SiteConfigClientService {
    async fn get_website(&self) -> Result<Website, ClientError> {
        self.client.get("/config/website").await
    }

    async fn update_website(&self, input: &Website) -> Result<(), ClientError> {
        info!("Updating website configuration");

        self.client.put("/config/website", input).await
    }

    async fn get_system(&self) -> Result<System, ClientError> {
        self.client.get("/config/system").await
    }

    async fn update_system(&self, input: &System) -> Result<(), ClientError> {
        info!("Updating system configuration");

        self.client.put("/config/system", input).await
    }

    async fn get_email(&self) -> Result<Email, ClientError> {
        self.client.get("/config/email").await
    }

    async fn update_email(&self, input: &Email) -> Result<(), ClientError> {
        info!("Updating email configuration");

        self.client.put("/config/email", input).await
    }

    async fn get_qq(&self) -> Result<Qq, ClientError> {
        self.client.get("/config/qq").await
    }

    async fn update_qq(&self, input: &Qq) -> Result<(), ClientError> {
        info!("Updating qq login configuration");

        self.client.put("/config/qq", input).await
    }

    async fn get_qiniu(&self) -> Result<Qiniu, ClientError> {
        self.client.get("/config/qiniu").await
    }

    async fn update_qiniu(&self, input: &Qiniu) -> Result<(), ClientError> {
        info!("Updating qiniu storage configuration");

        self.client.put("/config/qiniu", input).await
    }

    async fn get_jwt(&self) -> Result<Jwt, ClientError> {
        self.client.get("/config/jwt").await
    }

    async fn update_jwt(&self, input: &Jwt) -> Result<(), ClientError> {
        info!("Updating jwt configuration");

        self.client.put("/config/jwt", input).await
    }

    async fn get_gaode(&self) -> Result<Gaode, ClientError> {
        self.client.get("/config/gaode").await
    }

    async fn update_gaode(&self, input: &Gaode) -> Result<(), ClientError> {
        info!("Updating gaode configuration");

        self.client.put("/config/gaode", input).await
    }
}
