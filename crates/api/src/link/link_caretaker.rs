use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::link_caretaker::*;
use care_reminders_domain::{Link, Role, ID};
use care_reminders_infra::CareContext;

pub async fn link_caretaker_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    let usecase = LinkCaretakerUseCase {
        caretaker_id: body.caretaker_id,
        patient_id: body.patient_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|link| HttpResponse::Created().json(APIResponse::new(link)))
        .map_err(CareError::from)
}

/// Gives a caretaker access to the reminders of a patient. Linking a pair
/// which is already linked replaces the existing `Link`.
#[derive(Debug)]
pub struct LinkCaretakerUseCase {
    pub caretaker_id: ID,
    pub patient_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound(ID),
    InvalidRole { user_id: ID, expected: Role },
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(user_id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", user_id))
            }
            UseCaseError::InvalidRole { user_id, expected } => Self::BadClientData(format!(
                "The user with id: {}, is not a {}",
                user_id,
                expected.as_str()
            )),
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

impl LinkCaretakerUseCase {
    async fn ensure_role(
        &self,
        user_id: &ID,
        expected: Role,
        ctx: &CareContext,
    ) -> Result<(), UseCaseError> {
        let user = ctx
            .repos
            .users
            .find(user_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?
            .ok_or_else(|| UseCaseError::UserNotFound(user_id.clone()))?;
        if user.role != expected {
            return Err(UseCaseError::InvalidRole {
                user_id: user_id.clone(),
                expected,
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LinkCaretakerUseCase {
    type Response = Link;

    type Error = UseCaseError;

    const NAME: &'static str = "LinkCaretaker";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        self.ensure_role(&self.caretaker_id, Role::Caretaker, ctx)
            .await?;
        self.ensure_role(&self.patient_id, Role::Patient, ctx).await?;

        let link = Link::new(
            self.caretaker_id.clone(),
            self.patient_id.clone(),
            ctx.sys.get_timestamp_millis(),
        );
        ctx.repos
            .links
            .save(&link)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(link)
    }
}
