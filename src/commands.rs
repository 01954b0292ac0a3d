use crate::configuration::get_configuration;
use crate::database::configure_database_using_sqlx;

#[tracing::instrument(name = "Run custom command")]
pub async fn run_custom_commands(args: Vec<String>) -> Result<(), anyhow::Error> {
    if args.len() < 2 {
        tracing::error!("Invalid command. Please provide a valid command.");
        return Ok(());
    }
    let command = args[1].as_str();

    match command {
        "migrate" => {
            let configuration = get_configuration()?;
            configure_database_using_sqlx(&configuration.database).await?;
            tracing::info!("Migrations applied to {}", configuration.database.name);
        }
        _ => {
            tracing::error!("Unknown command: {}. Please use a valid command.", command);
        }
    }

    Ok(())
}
