use async_trait::async_trait;
use shared::errors::ClientError;
use shared::model::PageResult;
use std::sync::Arc;

use crate::domain::{
    requests::user::{
        ChangeInfoRequest, ForgotPasswordRequest, LoginListRequest, LoginRequest,
        RegisterRequest, ResetPasswordRequest, UserCardRequest, UserChartRequest,
        UserListRequest, UserOperation,
    },
    response::user::{LoginRecord, LoginResponse, User, UserCard, UserChart},
};

pub type DynUserClient = Arc<dyn UserClientTrait + Send + Sync>;

#[async_trait]
pub trait UserClientTrait {
    async fn register(&self, input: &RegisterRequest) -> Result<LoginResponse, ClientError>;
    async fn login(&self, input: &LoginRequest) -> Result<LoginResponse, ClientError>;
    async fn forgot_password(&self, input: &ForgotPasswordRequest) -> Result<(), ClientError>;
    async fn card(&self, input: &UserCardRequest) -> Result<UserCard, ClientError>;
    async fn logout(&self) -> Result<(), ClientError>;
    async fn reset_password(&self, input: &ResetPasswordRequest) -> Result<(), ClientError>;
    async fn info(&self) -> Result<User, ClientError>;
    async fn change_info(&self, input: &ChangeInfoRequest) -> Result<(), ClientError>;
    async fn weather(&self) -> Result<String, ClientError>;
    async fn chart(&self, input: &UserChartRequest) -> Result<UserChart, ClientError>;
    async fn list(&self, input: &UserListRequest) -> Result<PageResult<User>, ClientError>;
    async fn freeze(&self, input: &UserOperation) -> Result<(), ClientError>;
    async fn unfreeze(&self, input: &UserOperation) -> Result<(), ClientError>;
    async fn login_list(
        &self,
        input: &LoginListRequest,
    ) -> Result<PageResult<LoginRecord>, ClientError>;
}
