use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_user_stats::*;
use care_reminders_domain::UserStats;
use care_reminders_infra::CareContext;

pub async fn get_user_stats_controller(
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    execute(GetUserStatsUseCase {}, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct GetUserStatsUseCase {}

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
impl UseCase for GetUserStatsUseCase {
    type Response = UserStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserStats";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .users
            .find_all()
            .await
            .map(|users| UserStats::from_users(&users))
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}
