use service_center::{
    commands::run_custom_commands,
    configuration::get_configuration,
    constants::SERVICE_NAME,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber(SERVICE_NAME.into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        return run_custom_commands(args).await;
    }

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}
