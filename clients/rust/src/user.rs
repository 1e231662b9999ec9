use crate::{APIResponse, BaseClient};
use care_reminders_api_structs::*;
use care_reminders_domain::{Role, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct CreateUserInput {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

pub struct UpdateUserInput {
    pub user_id: ID,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateUserInput) -> APIResponse<create_user::APIResponse> {
        let body = create_user::RequestBody {
            role: input.role,
            name: input.name,
            email: input.email,
            phone: input.phone,
        };
        self.base
            .post(body, "users".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_user::APIResponse> {
        self.base
            .get(format!("users/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get_many(&self, role: Option<Role>) -> APIResponse<get_users::APIResponse> {
        let path = match role {
            Some(role) => format!("users?role={}", role.as_str()),
            None => "users".into(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn update(&self, input: UpdateUserInput) -> APIResponse<update_user::APIResponse> {
        let body = update_user::RequestBody {
            name: input.name,
            phone: input.phone,
            role: input.role,
        };
        self.base
            .put(body, format!("users/{}", input.user_id), StatusCode::OK)
            .await
    }

    pub async fn stats(&self) -> APIResponse<get_user_stats::APIResponse> {
        self.base.get("users/stats".into(), StatusCode::OK).await
    }
}
