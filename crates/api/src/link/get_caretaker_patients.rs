use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_caretaker_patients::*;
use care_reminders_domain::{User, ID};
use care_reminders_infra::CareContext;

pub async fn get_caretaker_patients_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetCaretakerPatientsUseCase {
        caretaker_id: path_params.into_inner().caretaker_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|users| HttpResponse::Ok().json(APIResponse::new(users)))
        .map_err(CareError::from)
}

/// The patients linked to the caretaker. Links to users that no longer
/// exist are left out.
#[derive(Debug)]
pub struct GetCaretakerPatientsUseCase {
    pub caretaker_id: ID,
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
impl UseCase for GetCaretakerPatientsUseCase {
    type Response = Vec<User>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCaretakerPatients";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let patient_ids = ctx
            .repos
            .links
            .find_patient_ids_by_caretaker(&self.caretaker_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        if patient_ids.is_empty() {
            return Ok(Vec::new());
        }

        ctx.repos
            .users
            .find_many(&patient_ids)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{insert_user, setup_test_context, NOW};
    use care_reminders_domain::{Link, Role};

    #[actix_web::main]
    #[test]
    async fn resolves_linked_patients_that_exist() {
        let ctx = setup_test_context();
        let caretaker = insert_user(&ctx, Role::Caretaker, "Bo").await;
        let patient = insert_user(&ctx, Role::Patient, "Ann").await;
        for patient_id in &[patient.id.clone(), ID::new()] {
            ctx.repos
                .links
                .save(&Link::new(caretaker.id.clone(), patient_id.clone(), NOW))
                .await
                .unwrap();
        }

        let patients = execute(
            GetCaretakerPatientsUseCase {
                caretaker_id: caretaker.id,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(patients, vec![patient]);
    }
}
