use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::website::WebsiteClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::website::{CarouselOperation, NewsRequest},
        response::{
            site_config::Website,
            website::{Calendar, FooterLink, HotSearchData, WebsiteLogo, WebsiteTitle},
        },
    },
};

#[derive(Debug)]
pub struct WebsiteClientService {
    client: Arc<RestClient>,
}

impl WebsiteClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebsiteClientTrait for WebsiteClientService {
    async fn info(&self) -> Result<Website, ClientError> {
        debug!("Fetching website profile");

        self.client.get("/website/info").await
    }

    async fn logo(&self) -> Result<WebsiteLogo, ClientError> {
        self.client.get("/website/logo").await
    }

    async fn title(&self) -> Result<WebsiteTitle, ClientError> {
        self.client.get("/website/title").await
    }

    async fn carousel(&self) -> Result<Vec<String>, ClientError> {
        self.client.get("/website/carousel").await
    }

    async fn news(&self, input: &NewsRequest) -> Result<HotSearchData, ClientError> {
        self.client.get_query("/website/news", input).await
    }

    async fn calendar(&self) -> Result<Calendar, ClientError> {
        self.client.get("/website/calendar").await
    }

    async fn footer_links(&self) -> Result<Vec<FooterLink>, ClientError> {
        self.client.get("/website/footerLink").await
    }

    async fn add_carousel(&self, input: &CarouselOperation) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Adding carousel image");

        self.client.post("/website/addCarousel", input).await
    }

    async fn cancel_carousel(&self, input: &CarouselOperation) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Removing carousel image");

        self.client.put("/website/cancelCarousel", input).await
    }

    async fn create_footer_link(&self, input: &FooterLink) -> Result<(), ClientError> {
        info!("Creating footer link: {}", input.title);

        self.client.post("/website/createFooterLink", input).await
    }

    async fn delete_footer_link(&self, input: &FooterLink) -> Result<(), ClientError> {
        info!("Deleting footer link: {}", input.title);

        self.client.delete("/website/deleteFooterLink", input).await
    }
}
