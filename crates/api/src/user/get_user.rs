use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_user::*;
use care_reminders_domain::{User, ID};
use care_reminders_infra::CareContext;

pub async fn get_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetUserUseCase {
        user_id: path_params.into_inner().user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct GetUserUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUser";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound(self.user_id.clone()))
    }
}
