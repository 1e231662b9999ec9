mod helpers;

use care_reminders_sdk::{
    APIErrorVariant, CareSDK, CreateReminderInput, LinkInput, Reminder, ReminderStats,
    ReminderStatus, Role, SetReminderStatusInput, UpdateUserInput, User, ID,
};
use helpers::setup::spawn_app;
use helpers::utils::{assert_equal_user_lists, create_user, minutes_from_now};

async fn create_reminder(sdk: &CareSDK, patient: &User, title: &str) -> Reminder {
    sdk.reminder
        .create(CreateReminderInput {
            patient_id: patient.id.clone(),
            patient_name: Some(patient.name.clone()),
            title: title.into(),
            description: "Take two blue pills".into(),
            reminder_time: minutes_from_now(30),
        })
        .await
        .expect("Expected to create reminder")
        .reminder
}

async fn link(sdk: &CareSDK, caretaker: &User, patient: &User) {
    sdk.link
        .link(LinkInput {
            caretaker_id: caretaker.id.clone(),
            patient_id: patient.id.clone(),
        })
        .await
        .expect("Expected to link caretaker");
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_crud_user() {
    let (_, sdk, _) = spawn_app().await;
    let user = create_user(&sdk, Role::Patient, "Ann").await;
    assert_eq!(user.role, Role::Patient);

    let res = sdk
        .user
        .get(user.id.clone())
        .await
        .expect("Expected to get user");
    assert_eq!(res.user.email, "ann@example.com");

    let res = sdk
        .user
        .update(UpdateUserInput {
            user_id: user.id.clone(),
            name: Some("Annie".into()),
            phone: Some("555-0100".into()),
            role: None,
        })
        .await
        .expect("Expected to update user");
    assert_eq!(res.user.name, "Annie");
    assert_eq!(res.user.phone, Some("555-0100".into()));

    let res = sdk.user.get(ID::new()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}

#[actix_web::main]
#[test]
async fn test_list_users_and_stats() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    let caretaker = create_user(&sdk, Role::Caretaker, "Bo").await;

    let caretakers = sdk
        .user
        .get_many(Some(Role::Caretaker))
        .await
        .expect("Expected to list users")
        .users;
    assert!(caretakers.iter().all(|u| u.role == Role::Caretaker));
    assert!(caretakers.iter().any(|u| u.id == caretaker.id));
    assert!(!caretakers.iter().any(|u| u.id == patient.id));

    let stats = sdk.user.stats().await.expect("Expected to get stats").stats;
    assert!(stats.total_users >= 2);
    assert!(stats.patients >= 1);
    assert!(stats.caretakers >= 1);
}

#[actix_web::main]
#[test]
async fn test_link_and_unlink_caretaker() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    let caretaker = create_user(&sdk, Role::Caretaker, "Bo").await;
    let other_caretaker = create_user(&sdk, Role::Caretaker, "Cy").await;

    // Linking the same pair twice keeps a single link
    link(&sdk, &caretaker, &patient).await;
    link(&sdk, &caretaker, &patient).await;
    link(&sdk, &other_caretaker, &patient).await;

    let caretakers = sdk
        .link
        .get_caretakers(patient.id.clone())
        .await
        .expect("Expected to get caretakers")
        .users;
    assert_equal_user_lists(&caretakers, &[caretaker.clone(), other_caretaker.clone()]);

    let patients = sdk
        .link
        .get_patients(caretaker.id.clone())
        .await
        .expect("Expected to get patients")
        .users;
    assert_equal_user_lists(&patients, &[patient.clone()]);

    let input = || LinkInput {
        caretaker_id: caretaker.id.clone(),
        patient_id: patient.id.clone(),
    };
    let res = sdk
        .link
        .unlink(input())
        .await
        .expect("Expected to unlink");
    assert!(res.unlinked);
    // Unlinking again is not an error
    let res = sdk
        .link
        .unlink(input())
        .await
        .expect("Expected to unlink");
    assert!(!res.unlinked);
    assert_equal_user_lists(
        &sdk.link
            .get_caretakers(patient.id.clone())
            .await
            .expect("Expected to get caretakers")
            .users,
        &[other_caretaker.clone()],
    );

    // Patients can not be linked as caretakers
    let res = sdk
        .link
        .link(LinkInput {
            caretaker_id: patient.id.clone(),
            patient_id: patient.id.clone(),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_create_reminder_notifies_patient_and_caretakers() {
    let (app, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    for name in &["Bo", "Cy"] {
        let caretaker = create_user(&sdk, Role::Caretaker, name).await;
        link(&sdk, &caretaker, &patient).await;
    }

    let reminder = create_reminder(&sdk, &patient, "Pills").await;
    assert_eq!(reminder.status, ReminderStatus::Pending);
    assert_eq!(reminder.created, reminder.updated);
    assert_eq!(reminder.patient_name, "Ann");
    let expected_notifications = if app.config.notifications_enabled {
        3
    } else {
        0
    };
    assert_eq!(reminder.notification_ids.len(), expected_notifications);

    let stored = sdk
        .reminder
        .get(reminder.id.clone())
        .await
        .expect("Expected to get reminder")
        .reminder;
    assert_eq!(stored.notification_ids, reminder.notification_ids);
}

#[actix_web::main]
#[test]
async fn test_rejects_invalid_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;

    let res = sdk
        .reminder
        .create(CreateReminderInput {
            patient_id: patient.id.clone(),
            patient_name: None,
            title: "Pills".into(),
            description: "Take them".into(),
            reminder_time: minutes_from_now(-1),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);

    let res = sdk
        .reminder
        .create(CreateReminderInput {
            patient_id: patient.id.clone(),
            patient_name: None,
            title: " ".into(),
            description: "Take them".into(),
            reminder_time: minutes_from_now(10),
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);

    let reminders = sdk
        .reminder
        .get_by_patient(patient.id.clone())
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert!(reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_reminder_status_and_stats() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    let statuses = [
        None,
        Some(ReminderStatus::Taken),
        Some(ReminderStatus::Missed),
        Some(ReminderStatus::Taken),
    ];
    for (i, status) in statuses.iter().enumerate() {
        let reminder = create_reminder(&sdk, &patient, &format!("Reminder {}", i)).await;
        if let Some(status) = status {
            let res = sdk
                .reminder
                .set_status(SetReminderStatusInput {
                    reminder_id: reminder.id.clone(),
                    status: *status,
                })
                .await
                .expect("Expected to set status");
            assert_eq!(res.status, *status);
        }
    }

    let stats = sdk
        .reminder
        .stats(patient.id.clone())
        .await
        .expect("Expected to get stats")
        .stats;
    assert_eq!(
        stats,
        ReminderStats {
            total: 4,
            taken: 2,
            missed: 1,
            pending: 1,
        }
    );

    let reminders = sdk
        .reminder
        .get_by_patient(patient.id.clone())
        .await
        .expect("Expected to list reminders")
        .reminders;
    let taken = reminders
        .iter()
        .find(|r| r.status == ReminderStatus::Taken)
        .expect("Expected a taken reminder");
    assert!(taken.updated >= taken.created);

    let res = sdk
        .reminder
        .set_status(SetReminderStatusInput {
            reminder_id: taken.id.clone(),
            status: ReminderStatus::Pending,
        })
        .await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_caretaker_sees_reminders_of_linked_patients() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    let caretaker = create_user(&sdk, Role::Caretaker, "Bo").await;

    let reminders = sdk
        .reminder
        .get_by_caretaker(caretaker.id.clone())
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert!(reminders.is_empty());

    link(&sdk, &caretaker, &patient).await;
    let reminder = create_reminder(&sdk, &patient, "Pills").await;

    let reminders = sdk
        .reminder
        .get_by_caretaker(caretaker.id.clone())
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, reminder.id);

    let all = sdk
        .reminder
        .get_all()
        .await
        .expect("Expected to list reminders")
        .reminders;
    assert!(all.iter().any(|r| r.id == reminder.id));
}

#[actix_web::main]
#[test]
async fn test_delete_reminder() {
    let (_, sdk, _) = spawn_app().await;
    let patient = create_user(&sdk, Role::Patient, "Ann").await;
    let reminder = create_reminder(&sdk, &patient, "Pills").await;

    let res = sdk
        .reminder
        .delete(reminder.id.clone())
        .await
        .expect("Expected to delete reminder");
    assert!(res.deleted);

    // Deleting again is not an error
    let res = sdk
        .reminder
        .delete(reminder.id.clone())
        .await
        .expect("Expected to delete reminder");
    assert!(!res.deleted);

    let res = sdk.reminder.get(reminder.id.clone()).await;
    assert_eq!(res.unwrap_err().variant, APIErrorVariant::NotFound);
}
