use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::unlink_caretaker::*;
use care_reminders_domain::{Link, ID};
use care_reminders_infra::CareContext;

pub async fn unlink_caretaker_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let path_params = path_params.into_inner();
    let usecase = UnlinkCaretakerUseCase {
        caretaker_id: path_params.caretaker_id.clone(),
        patient_id: path_params.patient_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|link| {
            HttpResponse::Ok().json(APIResponse {
                caretaker_id: path_params.caretaker_id,
                patient_id: path_params.patient_id,
                unlinked: link.is_some(),
            })
        })
        .map_err(CareError::from)
}

/// Removes the link between the caretaker and the patient. Unlinking a pair
/// that is not linked succeeds without changes.
#[derive(Debug)]
pub struct UnlinkCaretakerUseCase {
    pub caretaker_id: ID,
    pub patient_id: ID,
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
impl UseCase for UnlinkCaretakerUseCase {
    type Response = Option<Link>;

    type Error = UseCaseError;

    const NAME: &'static str = "UnlinkCaretaker";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .links
            .delete(&self.caretaker_id, &self.patient_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{setup_test_context, NOW};

    #[actix_web::main]
    #[test]
    async fn unlinking_twice_is_not_an_error() {
        let ctx = setup_test_context();
        let link = Link::new(ID::new(), ID::new(), NOW);
        ctx.repos.links.save(&link).await.unwrap();

        let usecase = UnlinkCaretakerUseCase {
            caretaker_id: link.caretaker_id.clone(),
            patient_id: link.patient_id.clone(),
        };
        assert_eq!(execute(usecase, &ctx).await, Ok(Some(link.clone())));

        let usecase = UnlinkCaretakerUseCase {
            caretaker_id: link.caretaker_id.clone(),
            patient_id: link.patient_id.clone(),
        };
        assert_eq!(execute(usecase, &ctx).await, Ok(None));
        assert!(ctx
            .repos
            .links
            .find_caretaker_ids_by_patient(&link.patient_id)
            .await
            .unwrap()
            .is_empty());
    }
}
