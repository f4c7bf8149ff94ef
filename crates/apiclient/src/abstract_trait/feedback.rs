use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::{PageInfo, PageResult};
use std::sync::Arc;

use crate::domain::{
    requests::feedback::{FeedbackCreateRequest, FeedbackDeleteRequest, FeedbackReplyRequest},
    response::feedback::Feedback,
};

pub type DynFeedbackClient = Arc<dyn FeedbackClientTrait + Send + Sync>;

#[async_trait]
pub trait FeedbackClientTrait {
    async fn create(&self, input: &FeedbackCreateRequest) -> Result<(), ClientError>;
    async fn info(&self) -> Result<Vec<Feedback>, ClientError>;
    async fn delete(&self, input: &FeedbackDeleteRequest) -> Result<(), ClientError>;
    async fn reply(&self, input: &FeedbackReplyRequest) -> Result<(), ClientError>;
    async fn list(&self, input: &PageInfo) -> Result<PageResult<Feedback>, ClientError>;
    async fn latest(&self) -> Result<Vec<Feedback>, ClientError>;
}
