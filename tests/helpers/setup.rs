use care_reminders_api::Application;
use care_reminders_infra::{setup_context, Config};
use care_reminders_sdk::CareSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, CareSDK, String) {
    let mut ctx = setup_context().await.expect("Failed to setup context");
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = CareSDK::new(address.clone());
    (app, sdk, address)
}
