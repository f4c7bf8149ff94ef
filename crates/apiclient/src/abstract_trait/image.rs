use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;

use crate::domain::{
    requests::image::{ImageDeleteRequest, ImageListRequest},
    response::image::{Image, ImageUploadResponse},
};

pub type DynImageClient = Arc<dyn ImageClientTrait + Send + Sync>;

#[async_trait]
pub trait ImageClientTrait {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageUploadResponse, ClientError>;
    async fn delete(&self, input: &ImageDeleteRequest) -> Result<(), ClientError>;
    async fn list(&self, input: &ImageListRequest) -> Result<PageResult<Image>, ClientError>;
}
