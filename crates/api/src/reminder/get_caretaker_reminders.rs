use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_caretaker_reminders::*;
use care_reminders_domain::{sort_by_reminder_time, Reminder, ID};
use care_reminders_infra::CareContext;

pub async fn get_caretaker_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetCaretakerRemindersUseCase {
        caretaker_id: path_params.into_inner().caretaker_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(CareError::from)
}

/// The reminders of every patient linked to the caretaker, soonest first
#[derive(Debug)]
pub struct GetCaretakerRemindersUseCase {
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
impl UseCase for GetCaretakerRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCaretakerReminders";

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

        let mut reminders = ctx
            .repos
            .reminders
            .find_by_patients(&patient_ids)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        sort_by_reminder_time(&mut reminders);

        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{setup_test_context, UnreachableReminderRepo, NOW};
    use care_reminders_domain::Link;
    use std::sync::Arc;

    fn reminder(patient_id: &ID, reminder_time: i64) -> Reminder {
        Reminder::new(
            patient_id.clone(),
            "Ann".into(),
            "Pills".into(),
            "Take them".into(),
            reminder_time,
            NOW,
        )
    }

    #[actix_web::main]
    #[test]
    async fn lists_reminders_of_linked_patients() {
        let ctx = setup_test_context();
        let caretaker_id = ID::new();
        let patient_ids = vec![ID::new(), ID::new()];
        for patient_id in &patient_ids {
            ctx.repos
                .links
                .save(&Link::new(caretaker_id.clone(), patient_id.clone(), NOW))
                .await
                .unwrap();
        }
        let later = reminder(&patient_ids[0], NOW + 2000);
        let sooner = reminder(&patient_ids[1], NOW + 1000);
        let unlinked = reminder(&ID::new(), NOW + 500);
        for r in &[&later, &sooner, &unlinked] {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let reminders = execute(GetCaretakerRemindersUseCase { caretaker_id }, &ctx)
            .await
            .unwrap();
        let ids = reminders.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![sooner.id, later.id]);
    }

    #[actix_web::main]
    #[test]
    async fn no_links_gives_empty_list_without_reading_reminders() {
        let mut ctx = setup_test_context();
        ctx.repos.reminders = Arc::new(UnreachableReminderRepo {});

        let res = execute(
            GetCaretakerRemindersUseCase {
                caretaker_id: ID::new(),
            },
            &ctx,
        )
        .await;
        assert_eq!(res, Ok(Vec::new()));
    }

    #[actix_web::main]
    #[test]
    async fn reports_storage_errors() {
        let mut ctx = setup_test_context();
        let caretaker_id = ID::new();
        ctx.repos
            .links
            .save(&Link::new(caretaker_id.clone(), ID::new(), NOW))
            .await
            .unwrap();
        ctx.repos.reminders = Arc::new(UnreachableReminderRepo {});

        let res = execute(GetCaretakerRemindersUseCase { caretaker_id }, &ctx).await;
        assert_eq!(
            res,
            Err(UseCaseError::StorageError(
                "Reminder store is unreachable".into()
            ))
        );
    }
}
