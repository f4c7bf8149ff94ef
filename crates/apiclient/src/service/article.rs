use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::{Hit, PageInfo, PageResult};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::article::ArticleClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::article::{
            ArticleCreateRequest, ArticleDeleteRequest, ArticleLikeRequest, ArticleListRequest,
            ArticleSearchRequest, ArticleUpdateRequest,
        },
        response::article::{Article, ArticleCategory, ArticleTag},
    },
};

#[derive(Debug)]
pub struct ArticleClientService {
    client: Arc<RestClient>,
}

impl ArticleClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleClientTrait for ArticleClientService {
    async fn like(&self, input: &ArticleLikeRequest) -> Result<(), ClientError> {
        info!("Toggling like for article {}", input.article_id);

        self.client.post("/article/like", input).await
    }

    async fn is_like(&self, input: &ArticleLikeRequest) -> Result<bool, ClientError> {
        self.client.get_query("/article/isLike", input).await
    }

    async fn likes_list(
        &self,
        input: &PageInfo,
    ) -> Result<PageResult<Hit<Article>>, ClientError> {
        self.client.get_query("/article/likesList", input).await
    }

    async fn create(&self, input: &ArticleCreateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Creating article: {}", input.title);

        self.client.post("/article/create", input).await
    }

    async fn delete(&self, input: &ArticleDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} article(s)", input.ids.len());

        self.client.delete("/article/delete", input).await
    }

    async fn update(&self, input: &ArticleUpdateRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Updating article {}", input.id);

        self.client.put("/article/update", input).await
    }

    async fn list(
        &self,
        input: &ArticleListRequest,
    ) -> Result<PageResult<Hit<Article>>, ClientError> {
        debug!("Listing articles page {}", input.page);

        self.client.get_query("/article/list", input).await
    }

    async fn info_by_id(&self, id: &str) -> Result<Article, ClientError> {
        self.client
            .get_at("/article/{id}", &format!("/article/{id}"))
            .await
    }

    async fn search(
        &self,
        input: &ArticleSearchRequest,
    ) -> Result<PageResult<Hit<Article>>, ClientError> {
        debug!("Searching articles: {}", input.query);

        self.client.get_query("/article/search", input).await
    }

    async fn category(&self) -> Result<Vec<ArticleCategory>, ClientError> {
        self.client.get("/article/category").await
    }

    async fn tags(&self) -> Result<Vec<ArticleTag>, ClientError> {
        self.client.get("/article/tags").await
    }
}
