use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;

use crate::domain::{
    requests::comment::{CommentCreateRequest, CommentDeleteRequest, CommentListRequest},
    response::comment::Comment,
};

pub type DynCommentClient = Arc<dyn CommentClientTrait + Send + Sync>;

#[async_trait]
pub trait CommentClientTrait {
    async fn create(&self, input: &CommentCreateRequest) -> Result<(), ClientError>;
    async fn delete(&self, input: &CommentDeleteRequest) -> Result<(), ClientError>;
    async fn info(&self) -> Result<Vec<Comment>, ClientError>;
    async fn by_article(&self, article_id: &str) -> Result<Vec<Comment>, ClientError>;
    async fn latest(&self) -> Result<Vec<Comment>, ClientError>;
    async fn list(&self, input: &CommentListRequest) -> Result<PageResult<Comment>, ClientError>;
}
