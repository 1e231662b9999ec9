use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::update_user::*;
use care_reminders_domain::{Role, User, ID};
use care_reminders_infra::CareContext;

pub async fn update_user_controller(
    body: web::Json<RequestBody>,
    path: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let body = body.0;
    let usecase = UpdateUserUseCase {
        user_id: path.into_inner().user_id,
        name: body.name,
        phone: body.phone,
        role: body.role,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(CareError::from)
}

/// Changes the profile or the role of a user. Only the given fields are
/// changed, an empty phone number removes it.
#[derive(Debug)]
pub struct UpdateUserUseCase {
    pub user_id: ID,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidName,
    NotFound(ID),
    StorageError(String),
}

impl From<UseCaseError> for CareError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidName => {
                Self::BadClientData("The name of the user must not be empty".into())
            }
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A user with id: {}, was not found.", id))
            }
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateUser";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let mut user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?
            .ok_or_else(|| UseCaseError::NotFound(self.user_id.clone()))?;

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(UseCaseError::InvalidName);
            }
            user.name = name.to_string();
        }
        if let Some(phone) = &self.phone {
            let phone = phone.trim();
            user.phone = if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            };
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        user.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::setup_test_context;
    use care_reminders_infra::FixedSys;
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn updates_given_fields() {
        let mut ctx = setup_test_context();
        let sys = Arc::new(FixedSys::new(100));
        ctx.sys = sys.clone();
        let mut user = User::new(Role::Patient, "Ann".into(), "ann@example.com".into(), 100);
        user.phone = Some("555-0100".into());
        ctx.repos.users.insert(&user).await.unwrap();
        sys.advance(50);

        let updated = execute(
            UpdateUserUseCase {
                user_id: user.id.clone(),
                name: None,
                phone: Some("".into()),
                role: Some(Role::Caretaker),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.role, Role::Caretaker);
        assert_eq!(updated.updated, 150);
        assert_eq!(
            ctx.repos.users.find(&user.id).await.unwrap(),
            Some(updated)
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_user_and_empty_name() {
        let ctx = setup_test_context();
        let user = User::new(Role::Patient, "Ann".into(), "ann@example.com".into(), 1);
        ctx.repos.users.insert(&user).await.unwrap();

        let missing_id = ID::new();
        let mut usecase = UpdateUserUseCase {
            user_id: missing_id.clone(),
            name: Some("Annie".into()),
            phone: None,
            role: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::NotFound(missing_id)
        );

        let mut usecase = UpdateUserUseCase {
            user_id: user.id.clone(),
            name: Some(" ".into()),
            phone: None,
            role: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::InvalidName
        );
    }
}
