use lambda_runtime::{service_fn, Error, LambdaEvent};
use mailbridge_cloud::S3ObjectStore;
use mailbridge_core::StorageEvent;
use mailbridge_delivery::WebhookDelivery;
use mailbridge_lambda::{BridgeConfig, MailBridge};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    let config = BridgeConfig::from_env()?;

    let client = mailbridge_cloud::create_client(config.s3_endpoint_url.as_deref()).await;
    let store = S3ObjectStore::new(client);
    let notifier = WebhookDelivery::new(config.webhook_url.clone())?;
    let bridge = MailBridge::new(store, notifier, config.mail_bucket.clone());
    let bridge = &bridge;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<StorageEvent>| async move {
        let status = bridge.handle(&event.payload).await?;
        Ok::<_, Error>(status)
    }))
    .await
}
