use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_all_reminders::*;
use care_reminders_domain::{sort_by_created_desc, Reminder};
use care_reminders_infra::CareContext;

pub async fn get_all_reminders_controller(
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    execute(GetAllRemindersUseCase {}, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(CareError::from)
}

/// Every reminder, most recently created first
#[derive(Debug)]
pub struct GetAllRemindersUseCase {}

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
impl UseCase for GetAllRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAllReminders";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let mut reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        sort_by_created_desc(&mut reminders);

        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{setup_test_context, NOW};
    use care_reminders_domain::ID;

    #[actix_web::main]
    #[test]
    async fn lists_newest_first() {
        let ctx = setup_test_context();
        let mut expected = Vec::new();
        for created in &[NOW - 300, NOW - 100, NOW - 200] {
            let reminder = Reminder::new(
                ID::new(),
                "Ann".into(),
                "Pills".into(),
                "Take them".into(),
                NOW + 1000,
                *created,
            );
            ctx.repos.reminders.insert(&reminder).await.unwrap();
            expected.push((*created, reminder.id));
        }
        expected.sort_by(|a, b| b.0.cmp(&a.0));

        let reminders = execute(GetAllRemindersUseCase {}, &ctx).await.unwrap();
        let ids = reminders.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            expected.into_iter().map(|(_, id)| id).collect::<Vec<_>>()
        );
    }
}
