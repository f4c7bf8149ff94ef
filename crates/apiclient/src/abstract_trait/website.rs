use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

use crate::domain::{
    requests::website::{CarouselOperation, NewsRequest},
    response::{
        site_config::Website,
        website::{Calendar, FooterLink, HotSearchData, WebsiteLogo, WebsiteTitle},
    },
};

pub type DynWebsiteClient = Arc<dyn WebsiteClientTrait + Send + Sync>;

#[async_trait]
pub trait WebsiteClientTrait {
    async fn info(&self) -> Result<Website, ClientError>;
    async fn logo(&self) -> Result<WebsiteLogo, ClientError>;
    async fn title(&self) -> Result<WebsiteTitle, ClientError>;
    async fn carousel(&self) -> Result<Vec<String>, ClientError>;
    async fn news(&self, input: &NewsRequest) -> Result<HotSearchData, ClientError>;
    async fn calendar(&self) -> Result<Calendar, ClientError>;
    async fn footer_links(&self) -> Result<Vec<FooterLink>, ClientError>;
    async fn add_carousel(&self, input: &CarouselOperation) -> Result<(), ClientError>;
    async fn cancel_carousel(&self, input: &CarouselOperation) -> Result<(), ClientError>;
    async fn create_footer_link(&self, input: &FooterLink) -> Result<(), ClientError>;
    async fn delete_footer_link(&self, input: &FooterLink) -> Result<(), ClientError>;
}
