use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::create_user::*;
use care_reminders_domain::{Role, User};
use care_reminders_infra::CareContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    let usecase = CreateUserUseCase {
        role: body.role,
        name: body.name,
        email: body.email,
        phone: body.phone,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(CareError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidName,
    InvalidEmail,
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("The name of the user must not be empty".into())
            }
            UseCaseError::InvalidEmail => {
                Self::BadClientData("The email of the user is not valid".into())
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::InvalidName);
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(UseCaseError::InvalidEmail);
        }

        let mut user = User::new(
            self.role,
            name.to_string(),
            email.to_string(),
            ctx.sys.get_timestamp_millis(),
        );
        user.phone = self
            .phone
            .as_ref()
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        ctx.repos
            .users
            .insert(&user)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(user)
    }
}
