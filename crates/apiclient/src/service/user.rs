use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    abstract_trait::user::UserClientTrait,
    client::{RestClient, validate_request},
    domain::{
        requests::user::{
            ChangeInfoRequest, ForgotPasswordRequest, LoginListRequest, LoginRequest,
            RegisterRequest, ResetPasswordRequest, UserCardRequest, UserChartRequest,
            UserListRequest, UserOperation,
        },
        response::user::{LoginRecord, LoginResponse, User, UserCard, UserChart},
    },
};

#[derive(Debug)]
pub struct UserClientService {
    client: Arc<RestClient>,
}

impl UserClientService {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserClientTrait for UserClientService {
    async fn register(&self, input: &RegisterRequest) -> Result<LoginResponse, ClientError> {
        validate_request(input)?;
        info!("Registering user: {}", input.email);

        self.client.post("/user/register", input).await
    }

    async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ClientError> {
        validate_request(input)?;
        info!("Logging in user: {}", input.email);

        self.client.post("/user/login", input).await
    }

    async fn forgot_password(&self, input: &ForgotPasswordRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Requesting password recovery for {}", input.email);

        self.client.post("/user/forgotPassword", input).await
    }

    async fn card(&self, input: &UserCardRequest) -> Result<UserCard, ClientError> {
        self.client.get_query("/user/card", input).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        info!("Logging out current user");

        self.client.post_empty("/user/logout").await
    }

    async fn reset_password(&self, input: &ResetPasswordRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Resetting password for current user");

        self.client.put("/user/resetPassword", input).await
    }

    async fn info(&self) -> Result<User, ClientError> {
        debug!("Fetching current user profile");

        self.client.get("/user/info").await
    }

    async fn change_info(&self, input: &ChangeInfoRequest) -> Result<(), ClientError> {
        validate_request(input)?;
        info!("Updating profile for {}", input.username);

        self.client.put("/user/changeInfo", input).await
    }

    async fn weather(&self) -> Result<String, ClientError> {
        self.client.get("/user/weather").await
    }

    async fn chart(&self, input: &UserChartRequest) -> Result<UserChart, ClientError> {
        self.client.get_query("/user/chart", input).await
    }

    async fn list(&self, input: &UserListRequest) -> Result<PageResult<User>, ClientError> {
        debug!("Listing users page {}", input.page);

        self.client.get_query("/user/list", input).await
    }

    async fn freeze(&self, input: &UserOperation) -> Result<(), ClientError> {
        info!("Freezing user {}", input.id);

        self.client.put("/user/freeze", input).await
    }

    async fn unfreeze(&self, input: &UserOperation) -> Result<(), ClientError> {
        info!("Unfreezing user {}", input.id);

        self.client.put("/user/unfreeze", input).await
    }

    async fn login_list(
        &self,
        input: &LoginListRequest,
    ) -> Result<PageResult<LoginRecord>, ClientError> {
        debug!("Listing login records page {}", input.page);

        self.client.get_query("/user/loginList", input).await
    }
}
