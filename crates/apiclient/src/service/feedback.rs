use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::{PageInfo, PageResult};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::feedback::FeedbackClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::feedback::{
            FeedbackCreateRequest, FeedbackDeleteRequest, FeedbackReplyRequest,
        },
        response::feedback::Feedback,
    },
};

#[derive(Debug)]
pub struct FeedbackClientService {
    client: Arc<RestClient>,
}

impl FeedbackClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackClientTrait for FeedbackClientService {
    async fn create(&self, input: &FeedbackCreateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Submitting feedback");

        self.client.post("/feedback/create", input).await
    }

    async fn info(&self) -> Result<Vec<Feedback>, ClientError> {
        self.client.get("/feedback/info").await
    }

    async fn delete(&self, input: &FeedbackDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} feedback item(s)", input.ids.len());

        self.client.delete("/feedback/delete", input).await
    }

    async fn reply(&self, input: &FeedbackReplyRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Replying to feedback {}", input.id);

        self.client.put("/feedback/reply", input).await
    }

    async fn list(&self, input: &PageInfo) -> Result<PageResult<Feedback>, ClientError> {
        debug!("Listing feedback page {}", input.page);

        self.client.get_query("/feedback/list", input).await
    }

    async fn latest(&self) -> Result<Vec<Feedback>, ClientError> {
        self.client.get("/feedback/new").await
    }
}
