use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;

use crate::domain::{
    requests::advertisement::{
        AdvertisementCreateRequest, AdvertisementDeleteRequest, AdvertisementListRequest,
        AdvertisementUpdateRequest,
    },
    response::advertisement::Advertisement,
};

pub type DynAdvertisementClient = Arc<dyn AdvertisementClientTrait + Send + Sync>;

#[async_trait]
pub trait AdvertisementClientTrait {
    async fn info(&self) -> Result<PageResult<Advertisement>, ClientError>;
    async fn create(&self, input: &AdvertisementCreateRequest) -> Result<(), ClientError>;
    async fn delete(&self, input: &AdvertisementDeleteRequest) -> Result<(), ClientError>;
    async fn update(&self, input: &AdvertisementUpdateRequest) -> Result<(), ClientError>;
    async fn list(
        &self,
        input: &AdvertisementListRequest,
    ) -> Result<PageResult<Advertisement>, ClientError>;
}
