use crate::configuration::DatabaseSettings;
use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, Connection, Executor, PgConnection, PgPool};

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(
            configuration.acquire_timeout,
        ))
        .max_connections(configuration.max_connections)
        .min_connections(configuration.min_connections)
        .connect_lazy_with(configuration.with_db())
}

#[tracing::instrument(name = "Create Database", skip(config), fields(database = %config.name))]
pub async fn create_database(config: &DatabaseSettings) -> Result<(), anyhow::Error> {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .context("Failed to connect to Postgres")?;

    let db_count: Option<i64> =
        sqlx::query_scalar::<_, i64>("SELECT count(*) FROM pg_database WHERE datname = $1")
            .bind(&config.name)
            .fetch_optional(&mut connection)
            .await
            .context("Failed to check for an existing database")?;

    if db_count.unwrap_or(0) > 0 {
        tracing::info!("Database {} already exists.", &config.name);
    } else {
        connection
            .execute(format!(r#"CREATE DATABASE "{}";"#, config.name).as_str())
            .await
            .context("Failed to create database.")?;
        tracing::info!("Database {} created.", &config.name);
    }
    Ok(())
}

#[tracing::instrument(name = "Migrate using Sqlx", skip(config))]
pub async fn configure_database_using_sqlx(
    config: &DatabaseSettings,
) -> Result<PgPool, anyhow::Error> {
    create_database(config).await?;
    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .context("Failed to connect to Postgres.")?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .context("Failed to migrate the database")?;
    Ok(connection_pool)
}
