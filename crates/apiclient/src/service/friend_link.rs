use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::friend_link::FriendLinkClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::friend_link::{
            FriendLinkCreateRequest, FriendLinkDeleteRequest, FriendLinkListRequest,
            FriendLinkUpdateRequest,
        },
        response::friend_link::FriendLink,
    },
};

#[derive(Debug)]
pub struct FriendLinkClientService {
    client: Arc<RestClient>,
}

impl FriendLinkClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FriendLinkClientTrait for FriendLinkClientService {
    async fn info(&self) -> Result<PageResult<FriendLink>, ClientError> {
        self.client.get("/friendLink/info").await
    }

    async fn create(&self, input: &FriendLinkCreateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Creating friend link: {}", input.name);

        self.client.post("/friendLink/create", input).await
    }

    async fn delete(&self, input: &FriendLinkDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} friend link(s)", input.ids.len());

        self.client.delete("/friendLink/delete", input).await
    }

    async fn update(&self, input: &FriendLinkUpdateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Updating friend link {}", input.id);

        self.client.put("/friendLink/update", input).await
    }

    async fn list(
        &self,
        input: &FriendLinkListRequest,
    ) -> Result<PageResult<FriendLink>, ClientError> {
        debug!("Listing friend links page {}", input.page);

        self.client.get_query("/friendLink/list", input).await
    }
}
