use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::comment::CommentClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::comment::{CommentCreateRequest, CommentDeleteRequest, CommentListRequest},
        response::comment::Comment,
    },
};

#[derive(Debug)]
pub struct CommentClientService {
    client: Arc<RestClient>,
}

impl CommentClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentClientTrait for CommentClientService {
    async fn create(&self, input: &CommentCreateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Creating comment on article {}", input.article_id);

        self.client.post("/comment/create", input).await
    }

    async fn delete(&self, input: &CommentDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} comment(s)", input.ids.len());

        self.client.delete("/comment/delete", input).await
    }

    async fn info(&self) -> Result<Vec<Comment>, ClientError> {
        self.client.get("/comment/info").await
    }

    async fn by_article(&self, article_id: &str) -> Result<Vec<Comment>, ClientError> {
        debug!("Fetching comments for article {article_id}");

        self.client
            .get_at("/comment/{article_id}", &format!("/comment/{article_id}"))
            .await
    }

    async fn latest(&self) -> Result<Vec<Comment>, ClientError> {
        self.client.get("/comment/new").await
    }

    async fn list(&self, input: &CommentListRequest) -> Result<PageResult<Comment>, ClientError> {
        debug!("Listing comments page {}", input.page);

        self.client.get_query("/comment/list", input).await
    }
}
