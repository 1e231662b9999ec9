use crate::error::CareError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use care_reminders_api_structs::get_reminder_stats::*;
use care_reminders_domain::{ReminderStats, ID};
use care_reminders_infra::CareContext;

pub async fn get_reminder_stats_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CareContext>,
) -> Result<HttpResponse, CareError> {
    let usecase = GetReminderStatsUseCase {
        patient_id: path_params.into_inner().patient_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
        .map_err(CareError::from)
}

/// Tallies the reminders of the patient by status
#[derive(Debug)]
pub struct GetReminderStatsUseCase {
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
impl UseCase for GetReminderStatsUseCase {
    type Response = ReminderStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminderStats";

    async fn execute(&mut self, ctx: &CareContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx
            .repos
            .reminders
            .find_by_patient(&self.patient_id)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;

        Ok(ReminderStats::from_reminders(&reminders))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_utils::{setup_test_context, UnreachableReminderRepo, NOW};
    use care_reminders_domain::{Reminder, ReminderStatus};
    use std::sync::Arc;

    #[actix_web::main]
    #[test]
    async fn tallies_statuses_of_the_patient() {
        let ctx = setup_test_context();
        let patient_id = ID::new();
        let statuses = [
            ReminderStatus::Pending,
            ReminderStatus::Taken,
            ReminderStatus::Missed,
            ReminderStatus::Taken,
        ];
        for status in &statuses {
            let reminder = Reminder::new(
                patient_id.clone(),
                "Ann".into(),
                "Pills".into(),
                "Take them".into(),
                NOW + 1000,
                NOW,
            );
            ctx.repos.reminders.insert(&reminder).await.unwrap();
            if *status != ReminderStatus::Pending {
                ctx.repos
                    .reminders
                    .update_status(&reminder.id, *status, NOW + 10)
                    .await
                    .unwrap();
            }
        }
        // Belongs to someone else
        let other = Reminder::new(
            ID::new(),
            "Bo".into(),
            "Pills".into(),
            "Take them".into(),
            NOW + 1000,
            NOW,
        );
        ctx.repos.reminders.insert(&other).await.unwrap();

        let stats = execute(GetReminderStatsUseCase { patient_id }, &ctx)
            .await
            .unwrap();
        assert_eq!(
            stats,
            ReminderStats {
                total: 4,
                taken: 2,
                missed: 1,
                pending: 1,
            }
        );
    }

    #[actix_web::main]
    #[test]
    async fn reports_failed_reads_instead_of_partial_tallies() {
        let mut ctx = setup_test_context();
        ctx.repos.reminders = Arc::new(UnreachableReminderRepo {});

        let res = execute(
            GetReminderStatsUseCase {
                patient_id: ID::new(),
            },
            &ctx,
        )
        .await;
        assert_eq!(
            res,
            Err(UseCaseError::StorageError(
                "Reminder store is unreachable".into()
            ))
        );
    }
}
