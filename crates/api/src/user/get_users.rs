use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_users::*;
use care_reminders_domain::{Role, User};
use care_reminders_infra::CareContext;

pub async fn get_users_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetUsersUseCase {
        role: query_params.role,
    };

    execute(usecase, &ctx)
        .await
        .map(|users| HttpResponse::Ok().json(APIResponse::new(users)))
        .map_err(CareError::from)
}

/// Lists the users, newest first, optionally only the ones with the given `Role`
#[derive(Debug)]
pub struct GetUsersUseCase {
    pub role: Option<Role>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUsersUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let res = match self.role {
            Some(role) => ctx.repos.users.find_by_role(role).await,
            None => ctx.repos.users.find_all().await,
        };
        res.map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
