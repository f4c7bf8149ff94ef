use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::advertisement::AdvertisementClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::advertisement::{
            AdvertisementCreateRequest, AdvertisementDeleteRequest, AdvertisementListRequest,
            AdvertisementUpdateRequest,
        },
        response::advertisement::Advertisement,
    },
};

#[derive(Debug)]
pub struct AdvertisementClientService {
    client: Arc<RestClient>,
}

impl AdvertisementClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdvertisementClientTrait for AdvertisementClientService {
    async fn info(&self) -> Result<PageResult<Advertisement>, ClientError> {
        self.client.get("/advertisement/info").await
    }

    async fn create(&self, input: &AdvertisementCreateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Creating advertisement: {}", input.title);

        self.client.post("/advertisement/create", input).await
    }

    async fn delete(&self, input: &AdvertisementDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} advertisement(s)", input.ids.len());

        self.client.delete("/advertisement/delete", input).await
    }

    async fn update(&self, input: &AdvertisementUpdateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Updating advertisement {}", input.id);

        self.client.put("/advertisement/update", input).await
    }

    async fn list(
        &self,
        input: &AdvertisementListRequest,
    ) -> Result<PageResult<Advertisement>, ClientError> {
        debug!("Listing advertisements page {}", input.page);

        self.client.get_query("/advertisement/list", input).await
    }
}
