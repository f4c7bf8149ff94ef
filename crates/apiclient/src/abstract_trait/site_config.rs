use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

use crate::domain::response::site_config::{Email, Gaode, Jwt, Qiniu, Qq, System, Website};

pub type DynSiteConfigClient = Arc<dyn SiteConfigClientTrait + Send + Sync>;

/// Admin-only access to the backend's configuration sections.
#[async_trait]
pub trait SiteConfigClientTrait {
    async fn get_website(&self) -> Result<Website, ClientError>;
    async fn update_website(&self, input: &Website) -> Result<(), ClientError>;
    async fn get_system(&self) -> Result<System, ClientError>;
    async fn update_system(&self, input: &System) -> Result<(), ClientError>;
    async fn get_email(&self) -> Result<Email, ClientError>;
    async fn update_email(&self, input: &Email) -> Result<(), ClientError>;
    async fn get_qq(&self) -> Result<Qq, ClientError>;
    async fn update_qq(&self, input: &Qq) -> Result<(), ClientError>;
    async fn get_qiniu(&self) -> Result<Qiniu, ClientError>;
    async fn update_qiniu(&self, input: &Qiniu) -> Result<(), ClientError>;
    async fn get_jwt(&self) -> Result<Jwt, ClientError>;
    async fn update_jwt(&self, input: &Jwt) -> Result<(), ClientError>;
    async fn get_gaode(&self) -> Result<Gaode, ClientError>;
    async fn update_gaode(&self, input: &Gaode) -> Result<(), ClientError>;
}
