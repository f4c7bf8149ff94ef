use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use apiclient::abstract_trait::{user::UserClientTrait, website::WebsiteClientTrait};
use apiclient::domain::requests::user::{
    ChangeInfoRequest, ForgotPasswordRequest, LoginListRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UserCardRequest, UserChartRequest, UserListRequest, UserOperation,
};
use apiclient::domain::requests::website::{CarouselOperation, NewsRequest};
use apiclient::domain::response::site_config::Website;
use apiclient::domain::response::user::{LoginRecord, LoginResponse, User, UserCard, UserChart};
use apiclient::domain::response::website::{
    Calendar, FooterLink, HotSearchData, WebsiteLogo, WebsiteTitle,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;

pub(crate) fn user_with_role(role_id: i64) -> User {
    User {
        username: "tester".to_string(),
        email: "tester@example.com".to_string(),
        role_id,
        ..User::default()
    }
}

pub(crate) fn login_request() -> LoginRequest {
    LoginRequest {
        email: "tester@example.com".to_string(),
        password: "secret-password".to_string(),
        captcha: "123456".to_string(),
        captcha_id: "captcha-1".to_string(),
    }
}

fn not_wired() -> ClientError {
    ClientError::api(1, "not wired in tests")
}

/// In-memory [`UserClientTrait`] double counting network calls.
pub(crate) struct StubUserClient {
    pub info_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    profile: Option<User>,
}

impl StubUserClient {
    pub fn with_profile(profile: User) -> Self {
        Self {
            info_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            profile: Some(profile),
        }
    }

    pub fn failing() -> Self {
        Self {
            info_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            profile: None,
        }
    }

    fn login_response(&self) -> Result<LoginResponse, ClientError> {
        let user = self.profile.clone().ok_or_else(not_wired)?;
        Ok(LoginResponse {
            user,
            access_token: "token-1".to_string(),
            access_token_expires_at: 4_102_444_800,
        })
    }
}

#[async_trait]
impl UserClientTrait for StubUserClient {
    async fn register(&self, _input: &RegisterRequest) -> Result<LoginResponse, ClientError> {
        self.login_response()
    }

    async fn login(&self, _input: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.login_response()
    }

    async fn forgot_password(&self, _input: &ForgotPasswordRequest) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn card(&self, _input: &UserCardRequest) -> Result<UserCard, ClientError> {
        Err(not_wired())
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn reset_password(&self, _input: &ResetPasswordRequest) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn info(&self) -> Result<User, ClientError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.profile
            .clone()
            .ok_or_else(|| ClientError::api(1, "profile unavailable"))
    }

    async fn change_info(&self, _input: &ChangeInfoRequest) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn weather(&self) -> Result<String, ClientError> {
        Err(not_wired())
    }

    async fn chart(&self, _input: &UserChartRequest) -> Result<UserChart, ClientError> {
        Err(not_wired())
    }

    async fn list(&self, _input: &UserListRequest) -> Result<PageResult<User>, ClientError> {
        Err(not_wired())
    }

    async fn freeze(&self, _input: &UserOperation) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn unfreeze(&self, _input: &UserOperation) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn login_list(
        &self,
        _input: &LoginListRequest,
    ) -> Result<PageResult<LoginRecord>, ClientError> {
        Err(not_wired())
    }
}

/// In-memory [`WebsiteClientTrait`] double; only `info` is wired.
pub(crate) struct StubWebsiteClient {
    pub info_calls: AtomicUsize,
    title: Mutex<Option<String>>,
}

impl StubWebsiteClient {
    pub fn with_title(title: &str) -> Self {
        Self {
            info_calls: AtomicUsize::new(0),
            title: Mutex::new(Some(title.to_string())),
        }
    }

    pub fn failing() -> Self {
        Self {
            info_calls: AtomicUsize::new(0),
            title: Mutex::new(None),
        }
    }

    pub fn recover(&self, title: &str) {
        *self
            .title
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(title.to_string());
    }
}

#[async_trait]
impl WebsiteClientTrait for StubWebsiteClient {
    async fn info(&self) -> Result<Website, ClientError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        let title = self
            .title
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        match title {
            Some(title) => Ok(Website {
                title,
                ..Website::default()
            }),
            None => Err(ClientError::api(1, "site profile unavailable")),
        }
    }

    async fn logo(&self) -> Result<WebsiteLogo, ClientError> {
        Err(not_wired())
    }

    async fn title(&self) -> Result<WebsiteTitle, ClientError> {
        Err(not_wired())
    }

    async fn carousel(&self) -> Result<Vec<String>, ClientError> {
        Err(not_wired())
    }

    async fn news(&self, _input: &NewsRequest) -> Result<HotSearchData, ClientError> {
        Err(not_wired())
    }

    async fn calendar(&self) -> Result<Calendar, ClientError> {
        Err(not_wired())
    }

    async fn footer_links(&self) -> Result<Vec<FooterLink>, ClientError> {
        Err(not_wired())
    }

    async fn add_carousel(&self, _input: &CarouselOperation) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn cancel_carousel(&self, _input: &CarouselOperation) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn create_footer_link(&self, _input: &FooterLink) -> Result<(), ClientError> {
        Err(not_wired())
    }

    async fn delete_footer_link(&self, _input: &FooterLink) -> Result<(), ClientError> {
        Err(not_wired())
    }
}
