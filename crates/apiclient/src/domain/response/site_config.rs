use serde::{Deserialize, Serialize};

/// Public site profile; also the admin update payload for
/// `/config/website`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Website {
    pub logo: String,
    pub full_logo: String,
    pub title: String,
    pub slogan: String,
    pub slogan_en: String,
    pub description: String,
    pub version: String,
    pub created_at: String,
    pub icp_filing: String,
    pub public_security_filing: String,
    pub bilibili_url: String,
    pub gitee_url: String,
    pub github_url: String,
    pub name: String,
    pub job: String,
    pub address: String,
    pub email: String,
    pub qq_image: String,
    pub wechat_image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct System {
    pub use_multipoint: bool,
    pub sessions_secret: String,
    pub oss_type: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Email {
    pub host: String,
    pub port: u16,
    pub from: String,
    pub nickname: String,
    pub secret: String,
    pub is_ssl: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Qq {
    pub enable: bool,
    pub app_id: String,
    pub app_key: String,
    pub redirect_uri: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Qiniu {
    pub zone: String,
    pub bucket: String,
    pub img_path: String,
    pub access_key: String,
    pub secret_key: String,
    pub use_https: bool,
    pub use_cdn_domains: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Jwt {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub access_token_expiry_time: String,
    pub refresh_token_expiry_time: String,
    pub issuer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Gaode {
    pub enable: bool,
    pub key: String,
}
