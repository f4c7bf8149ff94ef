use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::image::ImageClientTrait,
    client::RestClient,
    domain::{
        requests::image::{ImageDeleteRequest, ImageListRequest},
        response::image::{Image, ImageUploadResponse},
    },
};

#[derive(Debug)]
pub struct ImageClientService {
    client: Arc<RestClient>,
}

impl ImageClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageClientTrait for ImageClientService {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ImageUploadResponse, ClientError> {
        info!("Uploading image {file_name} ({} bytes)", bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        let form = Form::new().part("image", part);

        self.client.upload("/image/upload", form).await
    }

    async fn delete(&self, input: &ImageDeleteRequest) -> Result<(), ClientError> {
        info!("Deleting {} image(s)", input.ids.len());

        self.client.delete("/image/delete", input).await
    }

    async fn list(&self, input: &ImageListRequest) -> Result<PageResult<Image>, ClientError> {
        debug!("Listing images page {}", input.page);

        self.client.get_query("/image/list", input).await
    }
}
