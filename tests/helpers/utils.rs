use care_reminders_sdk::{CareSDK, CreateUserInput, Role, User};
use chrono::{Duration, Utc};

/// Timestamp in millis the given amount of minutes from now
pub fn minutes_from_now(minutes: i64) -> i64 {
    (Utc::now() + Duration::minutes(minutes)).timestamp_millis()
}

pub async fn create_user(sdk: &CareSDK, role: Role, name: &str) -> User {
    sdk.user
        .create(CreateUserInput {
            role,
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
        })
        .await
        .expect("Expected to create user")
        .user
}

pub fn assert_equal_user_lists(users1: &[User], users2: &[User]) {
    assert_eq!(users1.len(), users2.len());
    let mut ids1 = users1.iter().map(|u| u.id.to_string()).collect::<Vec<_>>();
    ids1.sort();
    let mut ids2 = users2.iter().map(|u| u.id.to_string()).collect::<Vec<_>>();
    ids2.sort();
    assert_eq!(ids1, ids2);
}
