use portfolio::{config, startup::App, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env file is not an error
    dotenvy::dotenv().ok();

    // telemetry
    let subscriber = telemetry::get_subscriber("portfolio", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber);

    // config
    let config = config::get().map_err(|e| anyhow::anyhow!("Failed to read configuration: {e}"))?;

    App::build(&config)?.run_until_stopped().await
}
