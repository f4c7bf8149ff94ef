use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;

use crate::domain::{
    requests::friend_link::{
        FriendLinkCreateRequest, FriendLinkDeleteRequest, FriendLinkListRequest,
        FriendLinkUpdateRequest,
    },
    response::friend_link::FriendLink,
};

pub type DynFriendLinkClient = Arc<dyn FriendLinkClientTrait + Send + Sync>;

#[async_trait]
pub trait FriendLinkClientTrait {
    async fn info(&self) -> Result<PageResult<FriendLink>, ClientError>;
    async fn create(&self, input: &FriendLinkCreateRequest) -> Result<(), ClientError>;
    async fn delete(&self, input: &FriendLinkDeleteRequest) -> Result<(), ClientError>;
    async fn update(&self, input: &FriendLinkUpdateRequest) -> Result<(), ClientError>;
    async fn list(
        &self,
        input: &FriendLinkListRequest,
    ) -> Result<PageResult<FriendLink>, ClientError>;
}
