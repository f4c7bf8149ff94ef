use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::{Hit, PageInfo, PageResult};
use std::sync::Arc;

use crate::domain::{
    requests::article::{
        ArticleCreateRequest, ArticleDeleteRequest, ArticleLikeRequest, ArticleListRequest,
        ArticleSearchRequest, ArticleUpdateRequest,
    },
    response::article::{Article, ArticleCategory, ArticleTag},
};

pub type DynArticleClient = Arc<dyn ArticleClientTrait + Send + Sync>;

#[async_trait]
pub trait ArticleClientTrait {
    async fn like(&self, input: &ArticleLikeRequest) -> Result<(), ClientError>;
    async fn is_like(&self, input: &ArticleLikeRequest) -> Result<bool, ClientError>;
    async fn likes_list(&self, input: &PageInfo)
    -> Result<PageResult<Hit<Article>>, ClientError>;
    async fn create(&self, input: &ArticleCreateRequest) -> Result<(), ClientError>;
    async fn delete(&self, input: &ArticleDeleteRequest) -> Result<(), ClientError>;
    async fn update(&self, input: &ArticleUpdateRequest) -> Result<(), ClientError>;
    async fn list(
        &self,
        input: &ArticleListRequest,
    ) -> Result<PageResult<Hit<Article>>, ClientError>;
    async fn info_by_id(&self, id: &str) -> Result<Article, ClientError>;
    async fn search(
        &self,
        input: &ArticleSearchRequest,
    ) -> Result<PageResult<Hit<Article>>, ClientError>;
    async fn category(&self) -> Result<Vec<ArticleCategory>, ClientError>;
    async fn tags(&self) -> Result<Vec<ArticleTag>, ClientError>;
}
