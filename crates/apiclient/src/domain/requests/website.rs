use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewsRequest {
    pub source: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CarouselOperation {
    #[validate(url)]
    pub url: String,
}
